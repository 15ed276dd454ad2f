//! Landing page: header, wallet panels, feature list and footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::theme::ThemeToggle;
use crate::components::ui::{Badge, BadgeVariant, Card};
use crate::components::wallet::{NetworkSwitcher, WalletConnectButton, WalletInfo};
use crate::config::{APP_BADGES, APP_DESCRIPTION, APP_FOOTER, APP_TITLE};

stylance::import_crate_style!(css, "src/components/home.module.css");

/// (title, description) of each demonstrated feature.
const FEATURES: &[(&str, &str)] = &[
    (
        "Wallet Connection",
        "Connect and disconnect MetaMask and other injected wallets",
    ),
    (
        "Account Information",
        "Display wallet address, ENS name, and ETH balance",
    ),
    (
        "Network Switching",
        "Switch between Mainnet and Sepolia testnet",
    ),
    (
        "SSR Support",
        "Prerendered markup with client-side hydration",
    ),
    (
        "Type Safety",
        "Typed EIP-1193 requests, errors and addresses in Rust",
    ),
    (
        "Modern UI",
        "Leptos components styled with scoped CSS modules",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class=css::page>
            <div class=css::container>
                <div class=css::toolbar>
                    <ThemeToggle />
                </div>

                <header class=css::header>
                    <h1 class=css::title>{APP_TITLE}</h1>
                    <p class=css::description>{APP_DESCRIPTION}</p>
                    <div class=css::badges>
                        {APP_BADGES
                            .iter()
                            .map(|badge| {
                                view! { <Badge variant=BadgeVariant::Secondary>{*badge}</Badge> }
                            })
                            .collect_view()}
                    </div>
                </header>

                <div class=css::grid>
                    <Card
                        title="Wallet Connection"
                        description="Connect your MetaMask or other injected wallet to get started"
                    >
                        <WalletConnectButton />
                    </Card>
                    <Card
                        title="Network Switching"
                        description="Switch between supported Ethereum networks"
                    >
                        <NetworkSwitcher />
                    </Card>
                </div>

                <div class=css::section>
                    <WalletInfo />
                </div>

                <FeatureList />

                <footer class=css::footer>
                    <Icon icon=ic::GITHUB />
                    {APP_FOOTER}
                    <Icon icon=ic::EXTERNAL_LINK />
                </footer>
            </div>
        </div>
    }
}

#[component]
fn FeatureList() -> impl IntoView {
    view! {
        <Card
            title="Features Demonstrated"
            description="This example showcases the following Web3 integration features"
        >
            <div class=css::features>
                {FEATURES
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <div>
                                <h4 class=css::featureTitle>
                                    <Icon icon=ic::CHECK />
                                    {*title}
                                </h4>
                                <p class=css::featureText>{*text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}
