//! Client-only rendering.

use leptos::prelude::*;

/// Signal that turns `true` once the component tree is mounted in the
/// browser. Stays `false` during prerendering and the hydration pass.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted
}

/// Renders `fallback` on the server and during hydration, `children` after
/// mount. Keeps markup that depends on browser state (stored theme, wallet
/// connection) out of the hydrated tree.
#[component]
pub fn ClientOnly(
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let mounted = use_mounted();
    view! {
        <Show when=move || mounted.get() fallback=fallback>
            {children()}
        </Show>
    }
}
