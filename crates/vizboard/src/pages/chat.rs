//! Landing page of the dataset upload flow

use dioxus::prelude::*;

use crate::icons::{Icon, IconColor, IconName, IconSize};
use crate::routes::Route;

#[component]
pub fn Chat() -> Element {
    rsx! {
        div {
            class: "chat-page",

            Link {
                class: "btn-ghost btn-sm",
                to: Route::Dashboard {},
                span {
                    class: "icon-container",
                    Icon { name: IconName::ArrowLeft, size: IconSize(14) }
                }
                span { "Back to dashboard" }
            }

            div {
                class: "chat-intro",
                Icon { name: IconName::ChatBubble, size: IconSize(32), color: IconColor::Secondary }
                h1 {
                    class: "page-title",
                    "Upload a dataset"
                }
                p {
                    class: "chat-description",
                    "Attach a CSV or spreadsheet and ask a question about it to generate your first visualization."
                }
            }
        }
    }
}
