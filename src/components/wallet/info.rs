//! Account information panel.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::ui::{Alert, Badge, BadgeVariant, Card};
use crate::core::InjectedConnector;
use crate::core::account::{fetch_balance, resolve_ens};
use crate::core::error::WalletError;
use crate::models::{BalanceLine, QueryState, SummaryRequest, ens_badge};

stylance::import_crate_style!(css, "src/components/wallet/wallet.module.css");

/// Address, ENS name, chain id and balance of the connected account.
///
/// Nothing is requested while disconnected; a notice is shown instead.
#[component]
pub fn WalletInfo() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let account = ctx.wallet.account;

    let request = Memo::new(move |_| account.with(SummaryRequest::for_account));

    move || match request.get() {
        Some(request) => view! { <AccountSummary request=request /> }.into_any(),
        None => view! {
            <Alert>
                "No wallet connected. Please connect your wallet to view account information."
            </Alert>
        }
        .into_any(),
    }
}

#[component]
fn AccountSummary(request: SummaryRequest) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let wallet = ctx.wallet;

    let ens = LocalResource::new(move || async move { resolve_ens(&request).await });
    let balance = LocalResource::new(move || {
        let connector = wallet.active_connector.get().map(InjectedConnector::new);
        async move {
            let connector = connector.ok_or(WalletError::NoAccount)?;
            fetch_balance(&connector, &request).await
        }
    });

    let ens_name = move || ens_badge(&QueryState::from_resource(ens.get()));
    let balance_line = move || {
        let line = BalanceLine::from_query(&QueryState::from_resource(balance.get()));
        let class = match line {
            BalanceLine::Error => css::error,
            _ => css::value,
        };
        view! { <p class=class>{line.text()}</p> }
    };

    view! {
        <Card
            title="Wallet Information"
            description="Connected wallet details and balance"
            icon=ic::WALLET
        >
            <div class=css::fields>
                <div>
                    <label class=css::label>"Address"</label>
                    <p class=css::address>{request.address_text()}</p>
                    {move || {
                        ens_name()
                            .map(|name| {
                                view! { <Badge variant=BadgeVariant::Secondary>{name}</Badge> }
                            })
                    }}
                </div>
                <div>
                    <label class=css::label>"Chain ID"</label>
                    <p class=css::value>{request.chain_id}</p>
                </div>
                <div>
                    <label class=css::label>"Balance"</label>
                    {balance_line}
                </div>
            </div>
        </Card>
    }
}
