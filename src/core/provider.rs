//! EIP-1193 provider bridge.
//!
//! Wraps an injected JavaScript provider object and calls
//! `provider.request({ method, params })` / `provider.on(event, fn)` through
//! the Reflect API.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use super::chains::Chain;
use super::error::WalletError;
use crate::config::WALLET_TIMEOUT_MS;
use crate::utils::{RaceResult, dom, race_with_timeout};

/// An injected EIP-1193 provider.
#[derive(Clone, Debug)]
pub struct Eip1193Provider {
    inner: Object,
}

impl Eip1193Provider {
    /// Wrap a provider object, rejecting values without a `request` method.
    pub fn from_value(value: JsValue) -> Option<Self> {
        let inner = value.dyn_into::<Object>().ok()?;
        let request = Reflect::get(&inner, &"request".into()).ok()?;
        request.is_function().then_some(Self { inner })
    }

    /// The legacy `window.ethereum` provider.
    pub fn injected() -> Result<Self, WalletError> {
        let window = dom::window().ok_or(WalletError::NoWindow)?;
        Reflect::get(&window, &"ethereum".into())
            .ok()
            .and_then(Self::from_value)
            .ok_or(WalletError::NotInstalled)
    }

    fn request_promise(&self, method: &str, params: Option<JsValue>) -> Result<Promise, WalletError> {
        let args = Object::new();
        Reflect::set(&args, &"method".into(), &method.into())
            .map_err(|_| WalletError::RequestCreationFailed)?;
        if let Some(params) = params {
            Reflect::set(&args, &"params".into(), &params)
                .map_err(|_| WalletError::RequestCreationFailed)?;
        }

        let request = Reflect::get(&self.inner, &"request".into())
            .map_err(|_| WalletError::RequestCreationFailed)?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::RequestCreationFailed)?;

        request
            .call1(&self.inner, &args)
            .map_err(|e| decode_rpc_error(&e))?
            .dyn_into::<Promise>()
            .map_err(|_| WalletError::RequestCreationFailed)
    }

    /// `request({ method })`
    pub async fn request(&self, method: &str) -> Result<JsValue, WalletError> {
        let promise = self.request_promise(method, None)?;
        JsFuture::from(promise).await.map_err(|e| decode_rpc_error(&e))
    }

    /// `request({ method, params })` with params serialized as plain JSON.
    pub async fn request_with<P: Serialize>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<JsValue, WalletError> {
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|_| WalletError::RequestCreationFailed)?;
        let promise = self.request_promise(method, Some(params))?;
        JsFuture::from(promise).await.map_err(|e| decode_rpc_error(&e))
    }

    /// Prompt for account access (`eth_requestAccounts`).
    pub async fn request_accounts(&self) -> Result<Address, WalletError> {
        let result = self.request("eth_requestAccounts").await?;
        first_account(&result)?.ok_or(WalletError::NoAccount)
    }

    /// Accounts already authorised for this site (`eth_accounts`), without
    /// a popup. Gives up after `WALLET_TIMEOUT_MS`; some wallets never
    /// answer while locked.
    pub async fn authorized_account(&self) -> Result<Option<Address>, WalletError> {
        let promise = self.request_promise("eth_accounts", None)?;
        match race_with_timeout(promise, WALLET_TIMEOUT_MS).await {
            RaceResult::Completed(result) => first_account(&result),
            RaceResult::TimedOut => Err(WalletError::Timeout),
            RaceResult::Error(e) => Err(decode_rpc_error(&e)),
        }
    }

    pub async fn chain_id(&self) -> Result<u64, WalletError> {
        let result = self.request("eth_chainId").await?;
        chain_id_from_value(&result)
    }

    pub async fn balance(&self, address: Address) -> Result<U256, WalletError> {
        let params = (format!("{:#x}", address), "latest");
        let result = self.request_with("eth_getBalance", &params).await?;
        let hex = result
            .as_string()
            .ok_or_else(|| WalletError::InvalidResponse(format!("{:?}", result)))?;
        parse_u256(&hex).ok_or(WalletError::InvalidResponse(hex))
    }

    pub async fn switch_chain(&self, chain: &Chain) -> Result<(), WalletError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SwitchParams {
            chain_id: String,
        }

        let params = [SwitchParams {
            chain_id: chain.hex_id(),
        }];
        self.request_with("wallet_switchEthereumChain", &params)
            .await
            .map(|_| ())
    }

    pub async fn add_chain(&self, chain: &Chain) -> Result<(), WalletError> {
        let params = [chain.add_chain_params()];
        self.request_with("wallet_addEthereumChain", &params)
            .await
            .map(|_| ())
    }

    /// Drop this site's `eth_accounts` permission (EIP-2255).
    ///
    /// Gives up after `WALLET_TIMEOUT_MS`. A wallet resolving with
    /// `undefined` is reported as [`WalletError::Timeout`] as well.
    pub async fn revoke_permissions(&self) -> Result<(), WalletError> {
        let params = [serde_json::json!({ "eth_accounts": {} })];
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|_| WalletError::RequestCreationFailed)?;
        let promise = self.request_promise("wallet_revokePermissions", Some(params))?;
        match race_with_timeout(promise, WALLET_TIMEOUT_MS).await {
            RaceResult::Completed(_) => Ok(()),
            RaceResult::TimedOut => Err(WalletError::Timeout),
            RaceResult::Error(e) => Err(decode_rpc_error(&e)),
        }
    }

    /// Register an event listener (`provider.on(event, callback)`).
    ///
    /// The closure is leaked with `forget()`: listeners live as long as the
    /// page.
    pub fn on(&self, event: &str, callback: impl Fn(JsValue) + 'static) -> Result<(), WalletError> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn(JsValue)>);

        let on_fn = Reflect::get(&self.inner, &"on".into())
            .map_err(|_| WalletError::RequestCreationFailed)?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::RequestCreationFailed)?;

        on_fn
            .call2(&self.inner, &event.into(), closure.as_ref())
            .map_err(|_| WalletError::RequestCreationFailed)?;

        closure.forget();
        Ok(())
    }

    /// Listen for `accountsChanged`; the callback receives the first account.
    pub fn on_accounts_changed(
        &self,
        callback: impl Fn(Option<Address>) + 'static,
    ) -> Result<(), WalletError> {
        self.on("accountsChanged", move |accounts| {
            callback(first_account(&accounts).ok().flatten());
        })
    }

    /// Listen for `chainChanged`; malformed chain ids are dropped.
    pub fn on_chain_changed(&self, callback: impl Fn(u64) + 'static) -> Result<(), WalletError> {
        self.on("chainChanged", move |chain_id| {
            if let Ok(id) = chain_id_from_value(&chain_id) {
                callback(id);
            }
        })
    }
}

// =============================================================================
// Response decoding
// =============================================================================

/// Decode a rejected request into [`WalletError::Rpc`].
///
/// Providers reject with `{ code, message }`; anything else is reported with
/// code 0 and its debug representation.
pub fn decode_rpc_error(value: &JsValue) -> WalletError {
    let code = Reflect::get(value, &"code".into())
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));

    WalletError::Rpc {
        code: code.unwrap_or(0),
        message,
    }
}

fn first_account(value: &JsValue) -> Result<Option<Address>, WalletError> {
    if !Array::is_array(value) {
        return Err(WalletError::InvalidResponse(format!("{:?}", value)));
    }
    match Array::from(value).get(0).as_string() {
        Some(account) => parse_address(&account).map(Some),
        None => Ok(None),
    }
}

fn chain_id_from_value(value: &JsValue) -> Result<u64, WalletError> {
    if let Some(hex) = value.as_string() {
        return parse_quantity(&hex).ok_or(WalletError::InvalidResponse(hex));
    }
    // A few wallets report chainChanged as a number.
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 0.0)
        .map(|n| n as u64)
        .ok_or_else(|| WalletError::InvalidResponse(format!("{:?}", value)))
}

/// Parse an account string as returned by the wallet.
pub fn parse_address(account: &str) -> Result<Address, WalletError> {
    Address::from_str(account).map_err(|_| WalletError::InvalidResponse(account.to_string()))
}

/// Parse a `0x`-prefixed hex quantity (`"0xaa36a7"`).
pub fn parse_quantity(hex: &str) -> Option<u64> {
    let digits = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Parse a `0x`-prefixed 256-bit hex quantity (balances).
pub fn parse_u256(hex: &str) -> Option<U256> {
    let digits = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    U256::from_str_radix(digits, 16).ok()
}
