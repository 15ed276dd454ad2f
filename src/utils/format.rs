//! Formatting utilities for display values.

use alloy_primitives::Address;

/// EIP-55 checksummed address shortened to `0xAbCd...1234`.
pub fn short_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    // "0x" + 40 hex digits, always ASCII.
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}
