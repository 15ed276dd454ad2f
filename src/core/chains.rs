//! Supported networks.
//!
//! The registry is a fixed, compiled-in list. Chains reported by the wallet
//! that are not listed here are still displayed, see [`network_label`].

use serde::Serialize;

/// Native currency of a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Static description of a supported chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub currency: NativeCurrency,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

pub const MAINNET: Chain = Chain {
    id: 1,
    name: "Ethereum",
    currency: ETHER,
    rpc_url: "https://eth.merkle.io",
    explorer_url: "https://etherscan.io",
};

pub const SEPOLIA: Chain = Chain {
    id: 11155111,
    name: "Sepolia",
    currency: NativeCurrency {
        name: "Sepolia Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_url: "https://sepolia.drpc.org",
    explorer_url: "https://sepolia.etherscan.io",
};

/// Networks the UI can switch between, in display order.
pub const SUPPORTED_CHAINS: &[Chain] = &[MAINNET, SEPOLIA];

/// Chain selected before any wallet reports one.
pub const DEFAULT_CHAIN: Chain = MAINNET;

/// Look up a supported chain by id.
pub fn find(chain_id: u64) -> Option<&'static Chain> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.id == chain_id)
}

/// Native currency for a chain id, falling back to ether for unknown chains.
pub fn native_currency(chain_id: u64) -> NativeCurrency {
    find(chain_id).map(|chain| chain.currency).unwrap_or(ETHER)
}

/// `0x`-prefixed hex quantity as used by EIP-1193 chain parameters.
pub fn chain_id_hex(chain_id: u64) -> String {
    format!("{:#x}", chain_id)
}

/// Display label for the active network badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkLabel {
    pub text: String,
    /// `false` for chains outside the registry; rendered as a destructive badge.
    pub known: bool,
}

/// Label for a chain id, `Unknown (<id>)` when it is not in the registry.
pub fn network_label(chain_id: u64) -> NetworkLabel {
    match find(chain_id) {
        Some(chain) => NetworkLabel {
            text: chain.name.to_string(),
            known: true,
        },
        None => NetworkLabel {
            text: format!("Unknown ({})", chain_id),
            known: false,
        },
    }
}

// =============================================================================
// EIP-3085
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddChainCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Parameters for `wallet_addEthereumChain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: AddChainCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl Chain {
    /// Hex chain id (`0x1`, `0xaa36a7`).
    pub fn hex_id(&self) -> String {
        chain_id_hex(self.id)
    }

    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.hex_id(),
            chain_name: self.name.to_string(),
            native_currency: AddChainCurrency {
                name: self.currency.name.to_string(),
                symbol: self.currency.symbol.to_string(),
                decimals: self.currency.decimals,
            },
            rpc_urls: vec![self.rpc_url.to_string()],
            block_explorer_urls: vec![self.explorer_url.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        assert_eq!(SUPPORTED_CHAINS.len(), 2);
        assert_eq!(find(1), Some(&MAINNET));
        assert_eq!(find(11155111), Some(&SEPOLIA));
        assert_eq!(find(137), None);
    }

    #[test]
    fn test_network_label_known() {
        let label = network_label(11155111);
        assert_eq!(label.text, "Sepolia");
        assert!(label.known);
    }

    #[test]
    fn test_network_label_unknown() {
        let label = network_label(137);
        assert_eq!(label.text, "Unknown (137)");
        assert!(!label.known);
    }

    #[test]
    fn test_hex_id() {
        assert_eq!(MAINNET.hex_id(), "0x1");
        assert_eq!(SEPOLIA.hex_id(), "0xaa36a7");
    }

    #[test]
    fn test_native_currency_fallback() {
        assert_eq!(native_currency(1).symbol, "ETH");
        assert_eq!(native_currency(424242).decimals, 18);
    }

    #[test]
    fn test_add_chain_params_json() {
        let json = serde_json::to_value(SEPOLIA.add_chain_params()).unwrap();
        assert_eq!(json["chainId"], "0xaa36a7");
        assert_eq!(json["chainName"], "Sepolia");
        assert_eq!(json["nativeCurrency"]["symbol"], "ETH");
        assert_eq!(json["rpcUrls"][0], "https://sepolia.drpc.org");
        assert_eq!(json["blockExplorerUrls"][0], "https://sepolia.etherscan.io");
    }
}
