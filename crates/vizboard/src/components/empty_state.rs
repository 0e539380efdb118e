//! Empty state component shown when no visualization exists yet

use dioxus::prelude::*;

use crate::icons::{Icon, IconColor, IconName, IconSize};
use crate::navigation::{use_navigator_handle, Navigate};
use crate::routes::UPLOAD_ROUTE;

/// Heading shown by [`EmptyState`]
pub const EMPTY_STATE_TITLE: &str = "No visualizations yet";

/// Label of the call-to-action button
pub const UPLOAD_BUTTON_LABEL: &str = "Upload a dataset";

/// Action behind the "Upload a dataset" button
pub fn request_upload(navigator: &dyn Navigate) {
    navigator.navigate_to(UPLOAD_ROUTE);
}

/// Component displayed when the dashboard has nothing to show
#[component]
pub fn EmptyState() -> Element {
    let navigator = use_navigator_handle();

    rsx! {
        div {
            class: "empty-state",

            span {
                class: "empty-state-icon",
                Icon {
                    name: IconName::PresentationChart,
                    size: IconSize(48),
                    color: IconColor::Secondary,
                }
            }

            h2 {
                class: "empty-state-title",
                "{EMPTY_STATE_TITLE}"
            }

            p {
                class: "empty-state-description",
                "Upload a dataset and describe what you want to see. Your visualizations will show up here."
            }

            button {
                class: "btn-primary",
                onclick: move |_| request_upload(&navigator),
                span {
                    class: "icon-container",
                    Icon { name: IconName::ArrowUpTray, size: IconSize(16) }
                }
                span { "{UPLOAD_BUTTON_LABEL}" }
            }
        }
    }
}
