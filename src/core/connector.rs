//! Wallet connectors.
//!
//! A [`Connector`] is one way of reaching a wallet. The set of connectors is
//! only known at runtime (see [`super::discovery`]); the controllers are
//! generic over the trait so they can be driven by mocks in tests.

use super::chains::Chain;
use super::discovery;
use super::error::{UNRECOGNIZED_CHAIN_CODE, WalletError};
use super::provider::Eip1193Provider;
use crate::models::{Connection, ConnectorInfo};

#[allow(async_fn_in_trait)]
pub trait Connector {
    fn id(&self) -> &str;

    /// Human-readable name for the connect button.
    fn name(&self) -> &str;

    /// Start the wallet handshake. May show a wallet prompt.
    async fn connect(&self) -> Result<Connection, WalletError>;

    /// Release the wallet session, if the wallet supports it.
    async fn disconnect(&self) -> Result<(), WalletError> {
        Ok(())
    }

    /// Re-establish an earlier session without prompting.
    /// `Ok(None)` when the wallet no longer authorises this site.
    async fn reconnect(&self) -> Result<Option<Connection>, WalletError> {
        Ok(None)
    }

    async fn switch_chain(&self, chain: &Chain) -> Result<(), WalletError>;
}

/// Connector backed by an injected EIP-1193 provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InjectedConnector {
    pub info: ConnectorInfo,
}

impl InjectedConnector {
    pub fn new(info: ConnectorInfo) -> Self {
        Self { info }
    }

    pub fn provider(&self) -> Result<Eip1193Provider, WalletError> {
        discovery::provider(&self.info.id).ok_or(WalletError::NotInstalled)
    }
}

impl Connector for InjectedConnector {
    fn id(&self) -> &str {
        &self.info.id
    }

    fn name(&self) -> &str {
        &self.info.name
    }

    async fn connect(&self) -> Result<Connection, WalletError> {
        let provider = self.provider()?;
        let address = provider.request_accounts().await?;
        let chain_id = provider.chain_id().await?;
        Ok(Connection { address, chain_id })
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        let provider = self.provider()?;
        match provider.revoke_permissions().await {
            // Wallets without EIP-2255 support reject the method; the local
            // session is dropped either way.
            Err(WalletError::Rpc { code, .. }) if code == -32601 || code == 4200 => Ok(()),
            other => other,
        }
    }

    async fn reconnect(&self) -> Result<Option<Connection>, WalletError> {
        let provider = self.provider()?;
        let Some(address) = provider.authorized_account().await? else {
            return Ok(None);
        };
        let chain_id = provider.chain_id().await?;
        Ok(Some(Connection { address, chain_id }))
    }

    async fn switch_chain(&self, chain: &Chain) -> Result<(), WalletError> {
        let provider = self.provider()?;
        switch_or_add(
            async || provider.switch_chain(chain).await,
            async || provider.add_chain(chain).await,
        )
        .await
    }
}

/// Switch networks, registering the chain first if the wallet does not
/// know it (EIP-1193 code 4902), then retrying the switch once.
pub async fn switch_or_add<S, A>(switch: S, add: A) -> Result<(), WalletError>
where
    S: AsyncFn() -> Result<(), WalletError>,
    A: AsyncFnOnce() -> Result<(), WalletError>,
{
    match switch().await {
        Err(e) if e.code() == Some(UNRECOGNIZED_CHAIN_CODE) => {
            log::info!("wallet does not know the chain, adding it");
            add().await?;
            switch().await
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn rpc(code: i64) -> WalletError {
        WalletError::Rpc {
            code,
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn test_switch_without_add() {
        let switches = Cell::new(0);
        let adds = Cell::new(0);
        let result = switch_or_add(
            async || {
                switches.set(switches.get() + 1);
                Ok(())
            },
            async || {
                adds.set(adds.get() + 1);
                Ok(())
            },
        )
        .await;
        assert_eq!(result, Ok(()));
        assert_eq!((switches.get(), adds.get()), (1, 0));
    }

    #[tokio::test]
    async fn test_unknown_chain_is_added_then_switched() {
        let switches = Cell::new(0);
        let adds = Cell::new(0);
        let result = switch_or_add(
            async || {
                switches.set(switches.get() + 1);
                if adds.get() == 0 { Err(rpc(4902)) } else { Ok(()) }
            },
            async || {
                adds.set(adds.get() + 1);
                Ok(())
            },
        )
        .await;
        assert_eq!(result, Ok(()));
        assert_eq!((switches.get(), adds.get()), (2, 1));
    }

    #[tokio::test]
    async fn test_rejection_is_not_retried() {
        let switches = Cell::new(0);
        let result = switch_or_add(
            async || {
                switches.set(switches.get() + 1);
                Err(rpc(4001))
            },
            async || Ok(()),
        )
        .await;
        assert!(result.unwrap_err().is_user_rejection());
        assert_eq!(switches.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_add_stops() {
        let result = switch_or_add(async || Err(rpc(4902)), async || Err(rpc(4001))).await;
        assert_eq!(result.unwrap_err().code(), Some(4001));
    }
}
