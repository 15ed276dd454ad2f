//! Light/dark theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::hydration::ClientOnly;
use crate::components::icons as ic;
use crate::components::ui::{ButtonStyle, ButtonVariant};

/// Icon button switching between light and dark.
///
/// The icon depends on the stored preference and the OS scheme, neither of
/// which is known while prerendering, so it is only drawn after mount.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let theme = ctx.theme;

    let style = ButtonStyle {
        variant: ButtonVariant::Ghost,
        ..Default::default()
    };

    view! {
        <button
            class=style.class()
            on:click=move |_| theme.toggle()
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            <ClientOnly>
                {move || {
                    if theme.is_dark() {
                        view! { <Icon icon=ic::SUN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MOON /> }.into_any()
                    }
                }}
            </ClientOnly>
        </button>
    }
}
