//! Connect / disconnect panel.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::ui::{Badge, BadgeVariant, ButtonStyle, ButtonVariant, SPIN_CLASS};
use crate::models::{ConnectionStatus, ConnectorInfo};
use crate::utils::format::short_address;

stylance::import_crate_style!(css, "src/components/wallet/wallet.module.css");

/// Shows the connected account with a disconnect button, or one connect
/// button per discovered connector.
#[component]
pub fn WalletConnectButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let wallet = ctx.wallet;

    let connected = Memo::new(move |_| match wallet.status() {
        ConnectionStatus::Connected(address) => Some(short_address(&address)),
        _ => None,
    });

    let disconnect_style = ButtonStyle {
        variant: ButtonVariant::Outline,
        small: true,
        ..Default::default()
    };

    move || match connected.get() {
        Some(short) => view! {
            <div class=css::connected>
                <Badge variant=BadgeVariant::Secondary>{short}</Badge>
                <button class=disconnect_style.class() on:click=move |_| wallet.disconnect()>
                    "Disconnect"
                </button>
            </div>
        }
        .into_any(),
        None => view! {
            <div class=css::connectors>
                <For
                    each=move || wallet.connectors.with(|list| list.iter().cloned().collect::<Vec<_>>())
                    key=|info| info.id.clone()
                    children=|info| view! { <ConnectorButton info=info /> }
                />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ConnectorButton(info: ConnectorInfo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let wallet = ctx.wallet;
    let status = Memo::new(move |_| wallet.status());

    let id = info.id.clone();
    let is_connecting = Memo::new(move |_| {
        status.with(|s| matches!(s, ConnectionStatus::Pending(pending) if *pending == id))
    });

    let style = ButtonStyle {
        variant: ButtonVariant::Outline,
        block: true,
        ..Default::default()
    };
    let name = info.name.clone();
    let logo = info.icon.clone();

    view! {
        <button
            class=style.class()
            disabled=move || status.with(|s| matches!(s, ConnectionStatus::Pending(_)))
            on:click=move |_| wallet.connect(info.clone())
        >
            {move || {
                if is_connecting.get() {
                    view! { <span class=SPIN_CLASS><Icon icon=ic::LOADER /></span> }.into_any()
                } else if let Some(src) = logo.clone() {
                    view! { <img class=css::connectorIcon src=src alt="" /> }.into_any()
                } else {
                    view! { <Icon icon=ic::WALLET /> }.into_any()
                }
            }}
            {name}
        </button>
    }
}
