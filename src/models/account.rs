use alloy_primitives::Address;

/// Result of a successful wallet handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    pub address: Address,
    pub chain_id: u64,
}

/// Account state as last reported by the wallet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    #[default]
    Disconnected,
    Connected { address: Address, chain_id: u64 },
}

impl From<Connection> for AccountState {
    fn from(connection: Connection) -> Self {
        AccountState::Connected {
            address: connection.address,
            chain_id: connection.chain_id,
        }
    }
}

impl AccountState {
    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, AccountState::Connected { .. })
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            AccountState::Connected { address, .. } => Some(*address),
            AccountState::Disconnected => None,
        }
    }

    /// Get chain ID if connected
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            AccountState::Connected { chain_id, .. } => Some(*chain_id),
            AccountState::Disconnected => None,
        }
    }

    /// Apply an `accountsChanged` event.
    ///
    /// A new first account replaces the address and keeps the chain; an empty
    /// account list means the wallet revoked access. Events that arrive while
    /// disconnected are ignored, connecting is always an explicit request.
    pub fn with_accounts(self, account: Option<Address>) -> Self {
        match (self, account) {
            (AccountState::Connected { chain_id, .. }, Some(address)) => {
                AccountState::Connected { address, chain_id }
            }
            (AccountState::Connected { .. }, None) => AccountState::Disconnected,
            (AccountState::Disconnected, _) => AccountState::Disconnected,
        }
    }

    /// Apply a `chainChanged` event.
    pub fn with_chain(self, new_chain_id: u64) -> Self {
        match self {
            AccountState::Connected { address, .. } => AccountState::Connected {
                address,
                chain_id: new_chain_id,
            },
            AccountState::Disconnected => AccountState::Disconnected,
        }
    }
}

/// Observable connection status, combining account state and the pending
/// connector marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Pending(String),
    Connected(Address),
}

impl ConnectionStatus {
    pub fn derive(account: &AccountState, pending: Option<String>) -> Self {
        match (account, pending) {
            (AccountState::Connected { address, .. }, _) => ConnectionStatus::Connected(*address),
            (AccountState::Disconnected, Some(id)) => ConnectionStatus::Pending(id),
            (AccountState::Disconnected, None) => ConnectionStatus::Disconnected,
        }
    }
}
