//! Route table and the layout shared by every page

use dioxus::prelude::*;

use crate::components::ThemePicker;
use crate::navigation::{NavigatorHandle, RouterNavigator};
use crate::pages::{Chat, Dashboard};

/// Entry point of the dataset upload flow
pub const UPLOAD_ROUTE: &str = "/chat";

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/chat")]
        Chat {},
}

/// Layout wrapping all pages
///
/// Installs the router-backed navigation capability for everything below it.
#[component]
fn Shell() -> Element {
    use_context_provider(|| NavigatorHandle::new(RouterNavigator::current()));

    rsx! {
        header {
            class: "app-header",
            ThemePicker {}
        }

        div {
            class: "content-panel",
            Outlet::<Route> {}
        }
    }
}
