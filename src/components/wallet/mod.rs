//! Wallet panels: connect button, network switcher, account info.

mod connect;
mod info;
mod network;

pub use connect::WalletConnectButton;
pub use info::WalletInfo;
pub use network::NetworkSwitcher;
