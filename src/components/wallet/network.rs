//! Network switcher panel.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::ui::{Badge, BadgeVariant, ButtonStyle, ButtonVariant};
use crate::core::chains::network_label;
use crate::core::network::{SwitchButton, switch_buttons};

stylance::import_crate_style!(css, "src/components/wallet/wallet.module.css");

/// Current network badge plus one switch button per supported chain.
///
/// Unknown chains reported by the wallet show as `Unknown (<id>)` with the
/// destructive badge.
#[component]
pub fn NetworkSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let wallet = ctx.wallet;

    let chain_id = Memo::new(move |_| wallet.chain_id());
    let label = Memo::new(move |_| network_label(chain_id.get()));
    let badge_variant = Signal::derive(move || label.with(BadgeVariant::for_network));

    let buttons = Memo::new(move |_| {
        switch_buttons(chain_id.get(), wallet.pending_chain.with(Option::is_some))
    });

    view! {
        <div class=css::network>
            <div class=css::networkRow>
                <Icon icon=ic::NETWORK />
                <span>"Current Network:"</span>
                <Badge variant=badge_variant>{move || label.with(|l| l.text.clone())}</Badge>
            </div>
            <div class=css::switchRow>
                {move || {
                    buttons
                        .get()
                        .into_iter()
                        .map(|button| view! { <SwitchChainButton button=button /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn SwitchChainButton(button: SwitchButton) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let style = ButtonStyle {
        variant: if button.active {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Outline
        },
        small: true,
        ..Default::default()
    };
    let chain = button.chain;

    view! {
        <button
            class=style.class()
            disabled=button.disabled
            on:click=move |_| ctx.wallet.switch_chain(chain)
        >
            {chain.name}
        </button>
    }
}
