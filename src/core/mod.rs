//! Wallet and network logic.
//!
//! This module provides:
//! - [`chains`] - the supported network registry
//! - [`ConnectionController`] and [`NetworkController`] - connect, disconnect
//!   and switch operations over any [`Connector`]
//! - [`discovery`] and [`provider`] - injected EIP-1193 wallets
//! - [`account`] - balance and ENS reads for the account panel

pub mod account;
pub mod chains;
pub mod connection;
pub mod connector;
pub mod discovery;
pub mod error;
pub mod network;
pub mod pending;
pub mod provider;
pub mod session;
pub mod state;

pub use connection::ConnectionController;
pub use connector::{Connector, InjectedConnector};
pub use network::NetworkController;
pub use session::LocalSession;
