//! Per-tab cache of JSON lookups in sessionStorage.
//!
//! Used for reverse ENS lookups: a name, or the absence of one, is fetched
//! once per tab and address.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("sessionStorage unavailable")]
    Unavailable,
    #[error("cannot encode entry: {0}")]
    Encode(String),
    #[error("entry rejected by storage")]
    Rejected,
}

/// Read an entry. Missing and undecodable entries are both misses.
pub fn read<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = dom::session_storage()?.get_item(key).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Write an entry, replacing any previous value.
pub fn write<T: Serialize>(key: &str, value: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::Unavailable)?;
    let raw = serde_json::to_string(value).map_err(|e| CacheError::Encode(e.to_string()))?;
    storage.set_item(key, &raw).map_err(|_| CacheError::Rejected)
}
