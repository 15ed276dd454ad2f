use alloy_primitives::U256;
use alloy_primitives::utils::format_units;

use crate::config::BALANCE_DISPLAY_DECIMALS;

/// Native balance of an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub value: U256,
    pub decimals: u8,
    pub symbol: String,
    /// `value` scaled by `decimals`, full precision.
    pub formatted: String,
}

impl Balance {
    pub fn new(value: U256, decimals: u8, symbol: impl Into<String>) -> Self {
        let formatted = format_units(value, decimals).unwrap_or_else(|_| value.to_string());
        Self {
            value,
            decimals,
            symbol: symbol.into(),
            formatted,
        }
    }

    /// Amount and symbol as shown in the account panel, e.g. `1.2346 ETH`.
    pub fn display(&self) -> String {
        format_balance(&self.formatted, &self.symbol)
    }
}

/// Render a formatted amount to [`BALANCE_DISPLAY_DECIMALS`] places with its
/// symbol. Unparseable amounts are shown as-is.
pub fn format_balance(formatted: &str, symbol: &str) -> String {
    let amount = to_fixed(formatted, BALANCE_DISPLAY_DECIMALS)
        .unwrap_or_else(|| formatted.to_string());
    format!("{} {}", amount, symbol)
}

/// Round a non-negative decimal string to exactly `places` fraction digits,
/// half-up.
///
/// Works on the digits directly so large balances keep their precision.
/// Returns `None` for anything that is not `digits[.digits]`.
pub fn to_fixed(amount: &str, places: usize) -> Option<String> {
    let (int, frac) = amount.split_once('.').unwrap_or((amount, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let int = if int.is_empty() { "0" } else { int };
    let mut digits: Vec<u8> = int
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    if frac.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - places;
    let int_digits = &digits[..split];
    let first_nonzero = int_digits
        .iter()
        .position(|d| *d != 0)
        .unwrap_or(int_digits.len().saturating_sub(1));

    let mut out: String = int_digits[first_nonzero..]
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect();
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance("1.23456", "ETH"), "1.2346 ETH");
        assert_eq!(format_balance("0", "ETH"), "0.0000 ETH");
        assert_eq!(format_balance("garbage", "ETH"), "garbage ETH");
    }

    #[test]
    fn test_to_fixed_rounding() {
        assert_eq!(to_fixed("1.23454", 4).as_deref(), Some("1.2345"));
        assert_eq!(to_fixed("1.23455", 4).as_deref(), Some("1.2346"));
        assert_eq!(to_fixed("9.99995", 4).as_deref(), Some("10.0000"));
        assert_eq!(to_fixed("0.00004", 4).as_deref(), Some("0.0000"));
        assert_eq!(to_fixed(".5", 0).as_deref(), Some("1"));
    }

    #[test]
    fn test_to_fixed_padding() {
        assert_eq!(to_fixed("2", 4).as_deref(), Some("2.0000"));
        assert_eq!(to_fixed("2.1", 4).as_deref(), Some("2.1000"));
        assert_eq!(to_fixed("007.5", 4).as_deref(), Some("7.5000"));
    }

    #[test]
    fn test_to_fixed_rejects_invalid() {
        assert_eq!(to_fixed("", 4), None);
        assert_eq!(to_fixed("-1.0", 4), None);
        assert_eq!(to_fixed("1e18", 4), None);
    }

    #[test]
    fn test_balance_from_wei() {
        let wei = U256::from(1_234_560_000_000_000_000u64);
        let balance = Balance::new(wei, 18, "ETH");
        assert!(balance.formatted.starts_with("1.23456"));
        assert_eq!(balance.display(), "1.2346 ETH");
    }

    #[test]
    fn test_large_balance_keeps_precision() {
        let wei = U256::from(123_456_789_012_345_678_901_234_567u128);
        let balance = Balance::new(wei, 18, "ETH");
        assert_eq!(balance.display(), "123456789.0123 ETH");
    }
}
