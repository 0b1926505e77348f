use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use linktree_core::{PageConfig, ThemeStore};

use linktree_ui::{LinkTreePage, LocalStorage};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ThemeStore::initialize(LocalStorage)));
    let config = use_hook(PageConfig::builtin);

    rsx! {
        LinkTreePage { config }
    }
}
