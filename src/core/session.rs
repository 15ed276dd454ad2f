//! Remembers which connector the user last connected with.

use super::state::StateCell;
use crate::config::WALLET_SESSION_KEY;
use crate::utils::dom;

/// localStorage-backed recent connector id.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSession;

impl StateCell<Option<String>> for LocalSession {
    fn load(&self) -> Option<String> {
        dom::load_item(WALLET_SESSION_KEY).filter(|id| !id.is_empty())
    }

    fn store(&self, value: Option<String>) {
        match value {
            Some(id) => dom::store_item(WALLET_SESSION_KEY, &id),
            None => dom::remove_item(WALLET_SESSION_KEY),
        }
    }
}
