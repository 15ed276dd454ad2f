//! Connection lifecycle.
//!
//! [`ConnectionController`] turns user actions into connector calls and
//! records the outcome. The wallet owns the real state; the controller only
//! mirrors what the wallet reports.

use alloy_primitives::Address;

use super::connector::Connector;
use super::error::WalletError;
use super::pending::{self, PendingSlot};
use super::state::StateCell;
use crate::models::{AccountState, Connection, ConnectionStatus, ConnectorList};

/// Connection state plus the operations that change it.
///
/// - `pending`: id of the connector with an attempt in flight
/// - `account`: account as last reported by the wallet
/// - `session`: id of the connector to restore on the next page load
#[derive(Clone, Copy, Debug)]
pub struct ConnectionController<P, A, S> {
    pub pending: P,
    pub account: A,
    pub session: S,
}

impl<P, A, S> ConnectionController<P, A, S>
where
    P: PendingSlot<String>,
    A: StateCell<AccountState>,
    S: StateCell<Option<String>>,
{
    pub fn new(pending: P, account: A, session: S) -> Self {
        Self {
            pending,
            account,
            session,
        }
    }

    pub fn pending_connector(&self) -> Option<String> {
        self.pending.current()
    }

    pub fn is_connected(&self) -> bool {
        self.account.load().is_connected()
    }

    pub fn address(&self) -> Option<Address> {
        self.account.load().address()
    }

    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus::derive(&self.account.load(), self.pending.current())
    }

    /// Connect with one of the `available` connectors.
    ///
    /// The connector is marked pending for the duration of the handshake and
    /// unmarked when it settles, whatever the outcome.
    pub async fn connect<C: Connector>(
        &self,
        available: &ConnectorList,
        connector: &C,
    ) -> Result<Connection, WalletError> {
        let id = connector.id();
        if !available.contains(id) {
            return Err(WalletError::ConnectorUnavailable(id.to_string()));
        }

        let result = pending::track(&self.pending, id.to_string(), connector.connect()).await;

        match &result {
            Ok(connection) => {
                log::info!("connected {} via {}", connection.address, connector.name());
                self.account.store((*connection).into());
                self.session.store(Some(id.to_string()));
            }
            Err(e) if e.is_user_rejection() => {
                log::info!("connection to {} rejected by user", connector.name())
            }
            Err(e) => log::warn!("connection to {} failed: {}", connector.name(), e),
        }
        result
    }

    /// Disconnect. Local state is cleared before the connector is asked to
    /// release the session, so a wallet that never answers cannot keep the
    /// account connected. Connector errors are only logged.
    pub async fn disconnect<C: Connector>(&self, connector: Option<&C>) {
        self.session.store(None);
        self.account.store(AccountState::Disconnected);
        log::info!("disconnected");

        if let Some(connector) = connector
            && let Err(e) = connector.disconnect().await
        {
            log::warn!("{} did not release the session: {}", connector.name(), e);
        }
    }

    /// Restore the remembered session if `connector` is the one it names.
    ///
    /// Returns `true` when the account was restored. A session the wallet no
    /// longer honours is forgotten.
    pub async fn reconnect<C: Connector>(&self, available: &ConnectorList, connector: &C) -> bool {
        let id = connector.id();
        if self.session.load().as_deref() != Some(id) || !available.contains(id) {
            return false;
        }
        if self.is_connected() {
            return true;
        }

        match connector.reconnect().await {
            Ok(Some(connection)) => {
                log::info!("restored session with {}", connector.name());
                self.account.store(connection.into());
                true
            }
            Ok(None) => {
                self.session.store(None);
                false
            }
            Err(e) => {
                log::warn!("could not restore session with {}: {}", connector.name(), e);
                self.session.store(None);
                false
            }
        }
    }

    /// Apply an `accountsChanged` event from the active connector.
    pub fn accounts_changed(&self, account: Option<Address>) {
        let before = self.account.load();
        let after = before.with_accounts(account);
        if before.is_connected() && !after.is_connected() {
            log::info!("wallet revoked access");
            self.session.store(None);
        }
        self.account.store(after);
    }

    /// Apply a `chainChanged` event from the active connector.
    pub fn chain_changed(&self, chain_id: u64) {
        self.account.update_with(|account| account.with_chain(chain_id));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use alloy_primitives::address;

    use super::*;
    use crate::core::chains::Chain;
    use crate::models::ConnectorInfo;

    pub(crate) const ALICE: Address = address!("0x1234567890123456789012345678901234567890");

    pub(crate) type Slot = Rc<RefCell<Option<String>>>;

    /// Connector whose handshake outcome is fixed up front. Records the
    /// pending marker it observed while connecting.
    pub(crate) struct MockConnector {
        pub id: String,
        pub outcome: Result<Connection, WalletError>,
        pub restore: Result<Option<Connection>, WalletError>,
        pub disconnect_error: Option<WalletError>,
        /// `disconnect()` never settles, like a wallet ignoring the request.
        pub disconnect_hangs: bool,
        pub slot: Slot,
        pub observed: RefCell<Vec<Option<String>>>,
    }

    impl MockConnector {
        pub(crate) fn new(id: &str, slot: &Slot) -> Self {
            Self {
                id: id.to_string(),
                outcome: Ok(Connection {
                    address: ALICE,
                    chain_id: 1,
                }),
                restore: Ok(None),
                disconnect_error: None,
                disconnect_hangs: false,
                slot: slot.clone(),
                observed: RefCell::new(Vec::new()),
            }
        }
    }

    impl Connector for MockConnector {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.id
        }

        async fn connect(&self) -> Result<Connection, WalletError> {
            self.observed.borrow_mut().push(self.slot.current());
            self.outcome.clone()
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            if self.disconnect_hangs {
                std::future::pending::<()>().await;
            }
            self.disconnect_error.clone().map_or(Ok(()), Err)
        }

        async fn reconnect(&self) -> Result<Option<Connection>, WalletError> {
            self.restore.clone()
        }

        async fn switch_chain(&self, _chain: &Chain) -> Result<(), WalletError> {
            Ok(())
        }
    }

    type Controller = ConnectionController<
        Slot,
        Rc<RefCell<AccountState>>,
        Rc<RefCell<Option<String>>>,
    >;

    fn controller(slot: &Slot) -> Controller {
        ConnectionController::new(
            slot.clone(),
            Rc::new(RefCell::new(AccountState::Disconnected)),
            Rc::new(RefCell::new(None)),
        )
    }

    fn available(ids: &[&str]) -> ConnectorList {
        let mut list = ConnectorList::new();
        for id in ids {
            list.upsert(ConnectorInfo {
                id: id.to_string(),
                name: id.to_string(),
                icon: None,
            });
        }
        list
    }

    fn rejected() -> WalletError {
        WalletError::Rpc {
            code: 4001,
            message: "User rejected the request.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_marks_pending_then_clears() {
        let slot = Slot::default();
        let controller = controller(&slot);
        let list = available(&["io.metamask", "injected"]);

        for id in ["io.metamask", "injected"] {
            let connector = MockConnector::new(id, &slot);
            controller.connect(&list, &connector).await.unwrap();
            assert_eq!(*connector.observed.borrow(), vec![Some(id.to_string())]);
            assert_eq!(controller.pending_connector(), None);
        }
    }

    #[tokio::test]
    async fn test_connect_success() {
        let slot = Slot::default();
        let controller = controller(&slot);
        let connector = MockConnector::new("io.metamask", &slot);

        let connection = controller
            .connect(&available(&["io.metamask"]), &connector)
            .await
            .unwrap();

        assert_eq!(connection.address, ALICE);
        assert!(controller.is_connected());
        assert_eq!(controller.address(), Some(ALICE));
        assert_eq!(controller.status(), ConnectionStatus::Connected(ALICE));
        assert_eq!(controller.session.load().as_deref(), Some("io.metamask"));
    }

    #[tokio::test]
    async fn test_connect_failure_clears_pending() {
        let slot = Slot::default();
        let controller = controller(&slot);
        let mut connector = MockConnector::new("injected", &slot);
        connector.outcome = Err(rejected());

        let result = controller.connect(&available(&["injected"]), &connector).await;

        assert!(result.unwrap_err().is_user_rejection());
        assert_eq!(*connector.observed.borrow(), vec![Some("injected".to_string())]);
        assert_eq!(controller.pending_connector(), None);
        assert!(!controller.is_connected());
        assert_eq!(controller.status(), ConnectionStatus::Disconnected);
        assert_eq!(controller.session.load(), None);
    }

    #[tokio::test]
    async fn test_connect_requires_available_connector() {
        let slot = Slot::default();
        let controller = controller(&slot);
        let connector = MockConnector::new("io.rabby", &slot);

        let result = controller.connect(&available(&["injected"]), &connector).await;

        assert_eq!(
            result,
            Err(WalletError::ConnectorUnavailable("io.rabby".to_string()))
        );
        assert!(connector.observed.borrow().is_empty());
        assert_eq!(controller.pending_connector(), None);
    }

    #[tokio::test]
    async fn test_disconnect_always_disconnects() {
        let slot = Slot::default();
        let controller = controller(&slot);
        let mut connector = MockConnector::new("injected", &slot);
        connector.disconnect_error = Some(WalletError::NotInstalled);

        controller
            .connect(&available(&["injected"]), &connector)
            .await
            .unwrap();
        controller.disconnect(Some(&connector)).await;

        assert!(!controller.is_connected());
        assert_eq!(controller.session.load(), None);

        // Also without a connector to talk to.
        controller.disconnect(None::<&MockConnector>).await;
        assert!(!controller.is_connected());
    }

    #[tokio::test]
    async fn test_disconnect_does_not_wait_for_wallet() {
        let slot = Slot::default();
        let controller = controller(&slot);
        let mut connector = MockConnector::new("injected", &slot);
        connector.disconnect_hangs = true;
        controller
            .connect(&available(&["injected"]), &connector)
            .await
            .unwrap();

        // The wallet never answers; the local state must already be cleared
        // while the request is still outstanding.
        tokio::select! {
            biased;
            _ = controller.disconnect(Some(&connector)) => unreachable!("wallet never answers"),
            _ = async {} => {}
        }

        assert!(!controller.is_connected());
        assert_eq!(controller.session.load(), None);
    }

    #[tokio::test]
    async fn test_reconnect_restores_remembered_connector() {
        let slot = Slot::default();
        let controller = controller(&slot);
        controller.session.store(Some("io.metamask".to_string()));
        let mut connector = MockConnector::new("io.metamask", &slot);
        connector.restore = Ok(Some(Connection {
            address: ALICE,
            chain_id: 11155111,
        }));

        let restored = controller
            .reconnect(&available(&["io.metamask"]), &connector)
            .await;

        assert!(restored);
        assert_eq!(controller.account.load().chain_id(), Some(11155111));
        assert!(connector.observed.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reconnect_ignores_other_connectors() {
        let slot = Slot::default();
        let controller = controller(&slot);
        controller.session.store(Some("io.metamask".to_string()));
        let mut connector = MockConnector::new("injected", &slot);
        connector.restore = Ok(Some(Connection {
            address: ALICE,
            chain_id: 1,
        }));

        let restored = controller
            .reconnect(&available(&["injected", "io.metamask"]), &connector)
            .await;

        assert!(!restored);
        assert!(!controller.is_connected());
        assert_eq!(controller.session.load().as_deref(), Some("io.metamask"));
    }

    #[tokio::test]
    async fn test_reconnect_forgets_stale_session() {
        let slot = Slot::default();
        let controller = controller(&slot);
        controller.session.store(Some("injected".to_string()));
        let connector = MockConnector::new("injected", &slot);

        let restored = controller
            .reconnect(&available(&["injected"]), &connector)
            .await;

        assert!(!restored);
        assert_eq!(controller.session.load(), None);
    }

    #[tokio::test]
    async fn test_wallet_events() {
        let slot = Slot::default();
        let controller = controller(&slot);
        let connector = MockConnector::new("injected", &slot);
        controller
            .connect(&available(&["injected"]), &connector)
            .await
            .unwrap();

        controller.chain_changed(11155111);
        assert_eq!(controller.account.load().chain_id(), Some(11155111));

        controller.accounts_changed(None);
        assert!(!controller.is_connected());
        assert_eq!(controller.session.load(), None);
    }
}
