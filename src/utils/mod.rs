//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window, storage and document access
//! - [`fetch_json`], [`fetch_json_cached`] - Network fetching with timeout
//! - [`race_with_timeout`] - Promise racing
//! - [`format`] - Display formatting

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;

pub use fetch::{RaceResult, fetch_json, fetch_json_cached, race_with_timeout};
