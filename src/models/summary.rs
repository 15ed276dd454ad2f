//! Display-ready account summary derived from the connected account.

use alloy_primitives::Address;

use super::{AccountState, Balance, QueryState};
use crate::config::{ENS_API_URL, cache};
use crate::core::chains::{self, NativeCurrency};

/// Reads to issue for a connected account.
///
/// Only exists while an address is known, so nothing is requested for a
/// disconnected wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryRequest {
    pub address: Address,
    pub chain_id: u64,
}

impl SummaryRequest {
    pub fn for_account(account: &AccountState) -> Option<Self> {
        match account {
            AccountState::Connected { address, chain_id } => Some(Self {
                address: *address,
                chain_id: *chain_id,
            }),
            AccountState::Disconnected => None,
        }
    }

    /// Full checksummed address as shown in the panel.
    pub fn address_text(&self) -> String {
        self.address.to_checksum(None)
    }

    /// Currency the balance is reported in.
    pub fn currency(&self) -> NativeCurrency {
        chains::native_currency(self.chain_id)
    }

    pub fn ens_url(&self) -> String {
        format!("{}{:#x}", ENS_API_URL, self.address)
    }

    pub fn ens_cache_key(&self) -> String {
        format!("{}{:#x}", cache::ENS_KEY_PREFIX, self.address)
    }
}

/// ENS badge text: only a resolved, non-empty name produces a badge.
pub fn ens_badge(state: &QueryState<Option<String>>) -> Option<String> {
    state
        .data()
        .and_then(|name| name.as_deref())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Balance row of the account panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BalanceLine {
    Loading,
    Error,
    Amount(String),
}

impl BalanceLine {
    pub fn from_query(state: &QueryState<Balance>) -> Self {
        match state {
            QueryState::Loading => BalanceLine::Loading,
            QueryState::Error(_) => BalanceLine::Error,
            QueryState::Ready(balance) => BalanceLine::Amount(balance.display()),
        }
    }

    pub fn text(&self) -> String {
        match self {
            BalanceLine::Loading => "Loading...".to_string(),
            BalanceLine::Error => "Error loading balance".to_string(),
            BalanceLine::Amount(amount) => amount.clone(),
        }
    }
}
