//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Outside the browser (prerendering, native tests) every accessor returns
//! `None`, so callers degrade to their no-wallet behaviour.

use web_sys::{Element, Storage, Window};

/// Get the browser window object.
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the browser window object.
#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn window() -> Option<Window> {
    None
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Get the `<html>` element.
pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Read a localStorage item.
pub fn load_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a localStorage item. Failures (private mode, quota) are ignored.
pub fn store_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Remove a localStorage item.
pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(root) = document_element() {
        let _ = root.class_list().toggle_with_force(class, enabled);
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
