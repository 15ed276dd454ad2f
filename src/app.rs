//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] definition with its
//! wallet and theme state, and application-level setup.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::use_media_query;

use crate::components::Home;
use crate::config::THEME_STORAGE_KEY;
use crate::core::chains::{Chain, DEFAULT_CHAIN};
use crate::core::state::StateCell;
use crate::core::{
    ConnectionController, InjectedConnector, LocalSession, NetworkController, discovery,
};
use crate::models::{AccountState, ConnectionStatus, ConnectorInfo, ConnectorList, Theme};
use crate::utils::dom;

/// Connection controller as wired into the app.
pub type AppConnection =
    ConnectionController<RwSignal<Option<String>>, RwSignal<AccountState>, LocalSession>;

/// Network controller as wired into the app.
pub type AppNetwork = NetworkController<RwSignal<Option<u64>>, RwSignal<AccountState>, RwSignal<u64>>;

// ============================================================================
// WalletState
// ============================================================================

/// Wallet state managed with Leptos signals.
///
/// Mirrors what the injected wallets report. JavaScript provider objects are
/// not stored here (see [`discovery`]); connectors are referenced by
/// [`ConnectorInfo`].
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct WalletState {
    /// Connectors found so far, in discovery order.
    pub connectors: RwSignal<ConnectorList>,
    /// Account as last reported by the active connector.
    pub account: RwSignal<AccountState>,
    /// Connector with a connection attempt in flight.
    pub pending_connector: RwSignal<Option<String>>,
    /// Target of the network switch in flight.
    pub pending_chain: RwSignal<Option<u64>>,
    /// Chain shown while no wallet is connected.
    pub selected_chain: RwSignal<u64>,
    /// Connector the current account came from.
    pub active_connector: RwSignal<Option<ConnectorInfo>>,
    /// Connector ids whose provider events are already subscribed.
    watched: StoredValue<Vec<String>>,
}

impl WalletState {
    pub fn new() -> Self {
        Self {
            connectors: RwSignal::new(ConnectorList::new()),
            account: RwSignal::new(AccountState::default()),
            pending_connector: RwSignal::new(None),
            pending_chain: RwSignal::new(None),
            selected_chain: RwSignal::new(DEFAULT_CHAIN.id),
            active_connector: RwSignal::new(None),
            watched: StoredValue::new(Vec::new()),
        }
    }

    pub fn connection(&self) -> AppConnection {
        ConnectionController::new(self.pending_connector, self.account, LocalSession)
    }

    pub fn network(&self) -> AppNetwork {
        NetworkController::new(self.pending_chain, self.account, self.selected_chain)
    }

    /// Active chain id (tracked).
    pub fn chain_id(&self) -> u64 {
        self.account
            .with(|a| a.chain_id())
            .unwrap_or_else(|| self.selected_chain.get())
    }

    /// Connection status (tracked).
    pub fn status(&self) -> ConnectionStatus {
        let pending = self.pending_connector.get();
        self.account
            .with(|account| ConnectionStatus::derive(account, pending))
    }

    fn active(&self) -> Option<InjectedConnector> {
        self.active_connector
            .get_untracked()
            .map(InjectedConnector::new)
    }

    fn is_active(&self, id: &str) -> bool {
        self.active_connector
            .with_untracked(|c| c.as_ref().is_some_and(|c| c.id == id))
    }

    /// Discover injected wallets and restore the previous session.
    ///
    /// Must run on the client, after hydration.
    pub fn start(&self) {
        let state = *self;
        let result = discovery::discover(move |info| {
            let is_new = state
                .connectors
                .try_update(|list| list.upsert(info.clone()))
                .unwrap_or(false);
            if is_new && LocalSession.load().as_deref() == Some(info.id.as_str()) {
                state.restore(info);
            }
        });
        if let Err(e) = result {
            log::debug!("wallet discovery unavailable: {}", e);
        }
    }

    fn restore(&self, info: ConnectorInfo) {
        let state = *self;
        let connector = InjectedConnector::new(info);
        spawn_local(async move {
            let available = state.connectors.get_untracked();
            if state.connection().reconnect(&available, &connector).await {
                state.activate(&connector);
            }
        });
    }

    /// Connect with the given connector.
    pub fn connect(&self, info: ConnectorInfo) {
        let state = *self;
        let connector = InjectedConnector::new(info);
        spawn_local(async move {
            let available = state.connectors.get_untracked();
            let connection = state.connection();
            // Failures are logged by the controller and surface only as the
            // account staying disconnected.
            if connection.connect(&available, &connector).await.is_ok() {
                state.activate(&connector);
            }
        });
    }

    pub fn disconnect(&self) {
        let state = *self;
        let connector = self.active();
        self.active_connector.set(None);
        spawn_local(async move {
            state.connection().disconnect(connector.as_ref()).await;
        });
    }

    pub fn switch_chain(&self, chain: Chain) {
        let state = *self;
        let connector = self.active();
        spawn_local(async move {
            // Every failure, including an unsupported target, is logged by
            // the controller; the active chain simply stays unchanged.
            let _ = state.network().switch_chain(connector.as_ref(), &chain).await;
        });
    }

    fn activate(&self, connector: &InjectedConnector) {
        self.active_connector.set(Some(connector.info.clone()));
        if let Some(chain_id) = self.account.get_untracked().chain_id() {
            self.network().follow(chain_id);
        }
        self.watch(connector);
    }

    /// Subscribe to account and chain events of a connector's provider.
    fn watch(&self, connector: &InjectedConnector) {
        let id = connector.info.id.clone();
        if self.watched.with_value(|w| w.contains(&id)) {
            return;
        }
        let provider = match connector.provider() {
            Ok(provider) => provider,
            Err(e) => {
                log::warn!("cannot watch {}: {}", id, e);
                return;
            }
        };

        let state = *self;
        let accounts_id = id.clone();
        let accounts = provider.on_accounts_changed(move |account| {
            if state.is_active(&accounts_id) {
                state.connection().accounts_changed(account);
                if account.is_none() {
                    state.active_connector.set(None);
                }
            }
        });

        let chain_id = id.clone();
        let chain = provider.on_chain_changed(move |new_chain| {
            if state.is_active(&chain_id) {
                state.connection().chain_changed(new_chain);
                state.network().follow(new_chain);
            }
        });

        match accounts.and(chain) {
            Ok(()) => self.watched.update_value(|w| w.push(id)),
            Err(e) => log::warn!("cannot watch {}: {}", id, e),
        }
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ThemeState
// ============================================================================

/// Theme preference plus the OS colour-scheme query.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub preference: RwSignal<Theme>,
    pub prefers_dark: Signal<bool>,
}

impl ThemeState {
    /// Must be created inside a component (media query listener).
    pub fn new() -> Self {
        let stored = dom::load_item(THEME_STORAGE_KEY);
        Self {
            preference: RwSignal::new(Theme::from_storage(stored.as_deref())),
            prefers_dark: use_media_query("(prefers-color-scheme: dark)"),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.preference.get().is_dark(self.prefers_dark.get())
    }

    pub fn toggle(&self) {
        let next = self
            .preference
            .get_untracked()
            .toggled(self.prefers_dark.get_untracked());
        self.preference.set(next);
        dom::store_item(THEME_STORAGE_KEY, next.as_str());
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub wallet: WalletState,
    pub theme: ThemeState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            wallet: WalletState::new(),
            theme: ThemeState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts wallet discovery and applies the theme once mounted
/// - Wraps the page in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| ctx.wallet.start());
    Effect::new(move |_| dom::set_root_class("dark", ctx.theme.is_dark()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    text-align: center;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #64748b; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem; text-align: left;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| dom::reload()
                        style="
                            background: #0f172a;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 0.375rem;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Home />
        </ErrorBoundary>
    }
}
