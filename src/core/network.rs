//! Network switching.

use super::chains::{self, Chain, SUPPORTED_CHAINS};
use super::connector::Connector;
use super::error::WalletError;
use super::pending::{self, PendingSlot};
use super::state::StateCell;
use crate::models::AccountState;

/// Active chain tracking and the switch operation.
///
/// While connected the active chain is whatever the wallet reports. While
/// disconnected it is the locally `selected` chain, which also remembers the
/// last chain seen from the wallet.
#[derive(Clone, Copy, Debug)]
pub struct NetworkController<P, A, L> {
    /// Target chain id of the switch in flight.
    pub pending: P,
    pub account: A,
    pub selected: L,
}

impl<P, A, L> NetworkController<P, A, L>
where
    P: PendingSlot<u64>,
    A: StateCell<AccountState>,
    L: StateCell<u64>,
{
    pub fn new(pending: P, account: A, selected: L) -> Self {
        Self {
            pending,
            account,
            selected,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn active_chain(&self) -> u64 {
        self.account
            .load()
            .chain_id()
            .unwrap_or_else(|| self.selected.load())
    }

    /// Record a chain reported by the wallet.
    pub fn follow(&self, chain_id: u64) {
        self.selected.store(chain_id);
    }

    /// Switch to `target`, through `connector` when a wallet is connected.
    ///
    /// A failed or rejected switch leaves the active chain untouched.
    pub async fn switch_chain<C: Connector>(
        &self,
        connector: Option<&C>,
        target: &Chain,
    ) -> Result<(), WalletError> {
        if chains::find(target.id).is_none() {
            log::warn!("{} ({}) is not a supported network", target.name, target.id);
            return Err(WalletError::UnsupportedChain(target.id));
        }

        let connector = match connector {
            Some(connector) if self.account.load().is_connected() => connector,
            _ => {
                self.follow(target.id);
                return Ok(());
            }
        };

        let result = pending::track(&self.pending, target.id, connector.switch_chain(target)).await;
        match &result {
            Ok(()) => {
                log::info!("switched to {}", target.name);
                self.account
                    .update_with(|account| account.with_chain(target.id));
                self.follow(target.id);
            }
            Err(e) if e.is_user_rejection() => log::info!("switch to {} rejected", target.name),
            Err(e) => log::warn!("switch to {} failed: {}", target.name, e),
        }
        result
    }
}

/// One network button of the switcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchButton {
    pub chain: Chain,
    /// Target is the active chain; rendered with the primary variant.
    pub active: bool,
    pub disabled: bool,
}

/// Buttons for every supported chain.
pub fn switch_buttons(active_chain: u64, is_pending: bool) -> Vec<SwitchButton> {
    SUPPORTED_CHAINS
        .iter()
        .map(|chain| {
            let active = chain.id == active_chain;
            SwitchButton {
                chain: *chain,
                active,
                disabled: is_pending || active,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    use super::*;
    use crate::core::chains::{MAINNET, SEPOLIA};
    use crate::core::connection::tests::{ALICE, MockConnector, Slot};

    type Controller =
        NetworkController<Rc<RefCell<Option<u64>>>, Rc<RefCell<AccountState>>, Rc<RefCell<u64>>>;

    fn controller(account: AccountState) -> Controller {
        NetworkController::new(
            Rc::new(RefCell::new(None)),
            Rc::new(RefCell::new(account)),
            Rc::new(RefCell::new(MAINNET.id)),
        )
    }

    fn connected(chain_id: u64) -> AccountState {
        AccountState::Connected {
            address: ALICE,
            chain_id,
        }
    }

    /// Connector that records the pending target and answers with a fixed
    /// result.
    struct SwitchingConnector {
        inner: MockConnector,
        pending: Rc<RefCell<Option<u64>>>,
        result: Result<(), WalletError>,
        observed: RefCell<Option<u64>>,
    }

    impl Connector for SwitchingConnector {
        fn id(&self) -> &str {
            self.inner.id()
        }

        fn name(&self) -> &str {
            self.inner.name()
        }

        async fn connect(&self) -> Result<crate::models::Connection, WalletError> {
            self.inner.connect().await
        }

        async fn switch_chain(&self, _chain: &Chain) -> Result<(), WalletError> {
            *self.observed.borrow_mut() = self.pending.current();
            self.result.clone()
        }
    }

    fn switching(controller: &Controller, result: Result<(), WalletError>) -> SwitchingConnector {
        SwitchingConnector {
            inner: MockConnector::new("injected", &Slot::default()),
            pending: controller.pending.clone(),
            result,
            observed: RefCell::new(None),
        }
    }

    #[test]
    fn test_switch_buttons() {
        let buttons = switch_buttons(SEPOLIA.id, false);
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].chain, MAINNET);
        assert!(!buttons[0].active && !buttons[0].disabled);
        assert!(buttons[1].active && buttons[1].disabled);
    }

    #[test]
    fn test_switch_buttons_while_pending() {
        assert!(switch_buttons(MAINNET.id, true).iter().all(|b| b.disabled));
    }

    #[test]
    fn test_switch_buttons_on_unknown_chain() {
        let buttons = switch_buttons(137, false);
        assert!(buttons.iter().all(|b| !b.active && !b.disabled));
    }

    #[test]
    fn test_active_chain() {
        assert_eq!(controller(AccountState::Disconnected).active_chain(), MAINNET.id);
        assert_eq!(controller(connected(137)).active_chain(), 137);
    }

    #[tokio::test]
    async fn test_switch_while_disconnected_is_local() {
        let controller = controller(AccountState::Disconnected);
        controller
            .switch_chain(None::<&MockConnector>, &SEPOLIA)
            .await
            .unwrap();
        assert_eq!(controller.active_chain(), SEPOLIA.id);
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_switch_through_wallet() {
        let controller = controller(connected(MAINNET.id));
        let connector = switching(&controller, Ok(()));

        controller
            .switch_chain(Some(&connector), &SEPOLIA)
            .await
            .unwrap();

        assert_eq!(*connector.observed.borrow(), Some(SEPOLIA.id));
        assert!(!controller.is_pending());
        assert_eq!(controller.active_chain(), SEPOLIA.id);
    }

    #[tokio::test]
    async fn test_rejected_switch_keeps_chain() {
        let controller = controller(connected(MAINNET.id));
        let connector = switching(
            &controller,
            Err(WalletError::Rpc {
                code: 4001,
                message: "rejected".to_string(),
            }),
        );

        let result = controller.switch_chain(Some(&connector), &SEPOLIA).await;

        assert!(result.is_err());
        assert!(!controller.is_pending());
        assert_eq!(controller.active_chain(), MAINNET.id);
    }

    #[tokio::test]
    async fn test_unsupported_chain() {
        let controller = controller(AccountState::Disconnected);
        let polygon = Chain {
            id: 137,
            name: "Polygon",
            ..MAINNET
        };
        let result = controller
            .switch_chain(None::<&MockConnector>, &polygon)
            .await;
        assert_eq!(result, Err(WalletError::UnsupportedChain(137)));
        assert_eq!(controller.active_chain(), MAINNET.id);
    }

    /// Collects log lines so tests can check that a failure was reported.
    struct CaptureLog;

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    impl log::Log for CaptureLog {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = CAPTURED.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    #[tokio::test]
    async fn test_unsupported_chain_is_logged() {
        static LOGGER: CaptureLog = CaptureLog;
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Info);

        let slot = Slot::default();
        let controller = controller(AccountState::Connected {
            address: ALICE,
            chain_id: MAINNET.id,
        });
        let base = Chain {
            id: 8453,
            name: "Base",
            ..MAINNET
        };
        let result = controller
            .switch_chain(Some(&MockConnector::new("injected", &slot)), &base)
            .await;

        assert_eq!(result, Err(WalletError::UnsupportedChain(8453)));
        assert!(!controller.is_pending());
        let lines = CAPTURED.lock().unwrap();
        assert!(
            lines
                .iter()
                .any(|line| line == "Base (8453) is not a supported network")
        );
    }
}
