#![allow(non_snake_case)]

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

mod consent;
mod consent_state;
pub mod utils;

pub use consent::*;
pub use consent_state::*;
pub use utils::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    launch(App);
}

/// Mounts the terms dialog over the page and hides it once accepted.
fn App() -> Element {
    let mut visible = use_signal(|| true);

    rsx! {
        ConsentDialog {
            visible: visible(),
            onaccept: move |_| {
                log_to_console("closing terms dialog");
                visible.set(false);
            }
        }
    }
}
