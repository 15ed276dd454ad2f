//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The supported networks live in [`crate::core::chains`].

// =============================================================================
// Application Metadata
// =============================================================================

/// Page title, also used as the document `<title>` by the prerenderer.
pub const APP_TITLE: &str = "Leptos + EIP-1193 SSR Wallet Example";

/// Short description shown under the page title.
pub const APP_DESCRIPTION: &str = "A complete example of connecting MetaMask and other injected \
     wallets from Rust and WebAssembly, with Leptos components and full SSR support.";

/// Technology badges shown in the page header.
pub const APP_BADGES: &[&str] = &["Leptos 0.8", "EIP-1193", "EIP-6963", "SSR Ready"];

/// Footer caption.
pub const APP_FOOTER: &str = "Built with Leptos, wasm-bindgen, and alloy";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Reverse ENS resolution endpoint. The address is appended to this URL.
pub const ENS_API_URL: &str = "https://api.ensideas.com/ens/resolve/";

// =============================================================================
// Wallet Configuration
// =============================================================================

/// localStorage key holding the id of the most recently connected connector.
pub const WALLET_SESSION_KEY: &str = "ethdeck.recentConnectorId";

/// Timeout for silent account queries (session restore) in milliseconds.
pub const WALLET_TIMEOUT_MS: i32 = 2000;

/// Connector id used for the legacy `window.ethereum` provider.
pub const INJECTED_CONNECTOR_ID: &str = "injected";

/// Display name used for the legacy `window.ethereum` provider.
pub const INJECTED_CONNECTOR_NAME: &str = "Injected";

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key prefix for resolved ENS names.
    pub const ENS_KEY_PREFIX: &str = "ens_cache:";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Number of decimal places used when displaying balances.
pub const BALANCE_DISPLAY_DECIMALS: usize = 4;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
