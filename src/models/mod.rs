//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AccountState`], [`Connection`], [`ConnectionStatus`] - Wallet connection state
//! - [`ConnectorInfo`], [`ConnectorList`] - Available wallet connectors
//! - [`Balance`], [`QueryState`], [`SummaryRequest`] - Account panel reads
//! - [`Theme`] - Colour theme preference

mod account;
mod balance;
mod connector;
mod query;
mod summary;
mod theme;

pub use account::{AccountState, Connection, ConnectionStatus};
pub use balance::{Balance, format_balance, to_fixed};
pub use connector::{ConnectorInfo, ConnectorList};
pub use query::QueryState;
pub use summary::{BalanceLine, SummaryRequest, ens_badge};
pub use theme::Theme;
