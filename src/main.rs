use ethdeck::app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    ethdeck::init_logging();

    let Some(root) = document().get_element_by_id("app") else {
        log::error!("#app element not found, mounting to <body>");
        mount_to_body(App);
        return;
    };

    // Prerendered markup belongs to the hydrate build; csr renders from scratch.
    root.set_inner_html("");
    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
