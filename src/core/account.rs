//! Account summary reads: native balance and ENS name.
//!
//! Both reads are independent; each is keyed on a [`SummaryRequest`] and
//! reports its own failure.

use serde::{Deserialize, Serialize};

use super::connector::InjectedConnector;
use super::error::{FetchError, WalletError};
use crate::models::{Balance, SummaryRequest};
use crate::utils::fetch_json_cached;

/// ENS API response structure
#[derive(Deserialize, Serialize)]
struct EnsResponse {
    name: Option<String>,
}

/// Reverse-resolve the primary ENS name of the requested address.
///
/// Results, including "no name", are cached for the browser session.
pub async fn resolve_ens(request: &SummaryRequest) -> Result<Option<String>, FetchError> {
    let response =
        fetch_json_cached::<EnsResponse>(&request.ens_url(), &request.ens_cache_key()).await?;
    Ok(response.name.filter(|name| !name.is_empty()))
}

/// Native balance of the requested address, read through the wallet.
pub async fn fetch_balance(
    connector: &InjectedConnector,
    request: &SummaryRequest,
) -> Result<Balance, WalletError> {
    let provider = connector.provider()?;
    let value = provider.balance(request.address).await?;
    let currency = request.currency();
    Ok(Balance::new(value, currency.decimals, currency.symbol))
}
