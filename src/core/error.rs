//! Custom error types for the application.
//!
//! - [`WalletError`] - EIP-1193 provider, connector and request errors
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests

use thiserror::Error;

/// EIP-1193 error code for a request the user rejected.
pub const USER_REJECTED_CODE: i64 = 4001;

/// EIP-1193 error code returned by `wallet_switchEthereumChain` for an
/// unknown chain.
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// Wallet-related errors for EIP-1193 providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// No injected provider for the requested connector
    #[error("Wallet not installed. Please install MetaMask or another injected wallet.")]
    NotInstalled,
    /// Failed to build or dispatch the request
    #[error("Failed to create wallet request")]
    RequestCreationFailed,
    /// Provider rejected the request
    #[error("Wallet request failed ({code}): {message}")]
    Rpc { code: i64, message: String },
    /// No account returned from wallet
    #[error("No account returned from wallet")]
    NoAccount,
    /// Provider answered with something we could not decode
    #[error("Unexpected wallet response: {0}")]
    InvalidResponse(String),
    /// Connector is not in the list of available connectors
    #[error("Connector '{0}' is not available")]
    ConnectorUnavailable(String),
    /// Chain is not in the network registry
    #[error("Chain {0} is not supported")]
    UnsupportedChain(u64),
    /// Request did not settle in time
    #[error("Wallet request timed out")]
    Timeout,
}

impl WalletError {
    /// EIP-1193 error code, if the provider supplied one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the user dismissed the wallet prompt.
    pub fn is_user_rejection(&self) -> bool {
        self.code() == Some(USER_REJECTED_CODE)
    }
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection() {
        let err = WalletError::Rpc {
            code: USER_REJECTED_CODE,
            message: "User rejected the request.".to_string(),
        };
        assert!(err.is_user_rejection());
        assert_eq!(err.code(), Some(4001));
        assert!(!WalletError::NoAccount.is_user_rejection());
    }

    #[test]
    fn test_display() {
        let err = WalletError::Rpc {
            code: 4902,
            message: "Unrecognized chain".to_string(),
        };
        assert_eq!(err.to_string(), "Wallet request failed (4902): Unrecognized chain");
        assert_eq!(
            WalletError::ConnectorUnavailable("io.metamask".to_string()).to_string(),
            "Connector 'io.metamask' is not available"
        );
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
    }
}
