//! Connector discovery.
//!
//! Finds injected wallets through EIP-6963 (`eip6963:announceProvider`
//! events) and the legacy `window.ethereum` global. Provider objects stay in
//! a thread-local registry keyed by connector id so that only plain
//! [`ConnectorInfo`] values travel through reactive state.

use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::Reflect;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{CustomEvent, Event};

use super::error::WalletError;
use super::provider::Eip1193Provider;
use crate::config::{INJECTED_CONNECTOR_ID, INJECTED_CONNECTOR_NAME};
use crate::models::ConnectorInfo;
use crate::utils::dom;

const ANNOUNCE_EVENT: &str = "eip6963:announceProvider";
const REQUEST_EVENT: &str = "eip6963:requestProvider";

thread_local! {
    static PROVIDERS: RefCell<HashMap<String, Eip1193Provider>> = RefCell::new(HashMap::new());
}

/// Provider registered for a connector id.
pub fn provider(id: &str) -> Option<Eip1193Provider> {
    PROVIDERS.with(|providers| providers.borrow().get(id).cloned())
}

fn register(id: &str, provider: Eip1193Provider) {
    PROVIDERS.with(|providers| {
        providers.borrow_mut().insert(id.to_string(), provider);
    });
}

/// `info` object of an EIP-6963 announcement.
#[derive(Debug, Deserialize)]
struct AnnouncedInfo {
    name: String,
    icon: String,
    rdns: String,
}

impl From<AnnouncedInfo> for ConnectorInfo {
    fn from(info: AnnouncedInfo) -> Self {
        ConnectorInfo {
            id: info.rdns,
            name: info.name,
            icon: Some(info.icon),
        }
    }
}

fn parse_announcement(detail: &wasm_bindgen::JsValue) -> Option<(ConnectorInfo, Eip1193Provider)> {
    let info = Reflect::get(detail, &"info".into()).ok()?;
    let info: AnnouncedInfo = serde_wasm_bindgen::from_value(info).ok()?;
    let provider = Reflect::get(detail, &"provider".into())
        .ok()
        .and_then(Eip1193Provider::from_value)?;
    Some((info.into(), provider))
}

/// Metadata of the legacy `window.ethereum` connector.
pub fn injected_info() -> ConnectorInfo {
    ConnectorInfo {
        id: INJECTED_CONNECTOR_ID.to_string(),
        name: INJECTED_CONNECTOR_NAME.to_string(),
        icon: None,
    }
}

/// Enumerate injected wallets.
///
/// `on_found` is called once for `window.ethereum` (when present) and then
/// for every EIP-6963 announcement, including wallets that load after this
/// call. Announcements for an id seen before replace its provider.
pub fn discover(on_found: impl Fn(ConnectorInfo) + 'static) -> Result<(), WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;

    if let Ok(provider) = Eip1193Provider::injected() {
        let info = injected_info();
        register(&info.id, provider);
        on_found(info);
    }

    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Ok(event) = event.dyn_into::<CustomEvent>() else {
            return;
        };
        match parse_announcement(&event.detail()) {
            Some((info, provider)) => {
                log::debug!("discovered wallet {} ({})", info.name, info.id);
                register(&info.id, provider);
                on_found(info);
            }
            None => log::warn!("ignoring malformed {} event", ANNOUNCE_EVENT),
        }
    }) as Box<dyn Fn(Event)>);

    window
        .add_event_listener_with_callback(ANNOUNCE_EVENT, closure.as_ref().unchecked_ref())
        .map_err(|_| WalletError::RequestCreationFailed)?;
    closure.forget();

    let request = Event::new(REQUEST_EVENT).map_err(|_| WalletError::RequestCreationFailed)?;
    window
        .dispatch_event(&request)
        .map_err(|_| WalletError::RequestCreationFailed)?;

    Ok(())
}
