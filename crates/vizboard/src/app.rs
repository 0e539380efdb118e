//! Main application component and layout

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{use_app_state, AppState};

/// Stylesheet asset
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root application component
#[component]
pub fn App() -> Element {
    // Initialize application state
    let _app_state = use_context_provider(|| Signal::new(AppState::load()));
    let app_state = use_app_state();

    let theme_class = app_state.read().config.theme.css_class().unwrap_or("");
    let root_class = format!("app-root {theme_class}");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "{root_class}",
            Router::<Route> {}
        }
    }
}
