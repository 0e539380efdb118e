//! Card displaying a single visualization on the dashboard

use dioxus::prelude::*;

use crate::icons::{Icon, IconColor, IconName, IconSize};
use crate::state::Visualization;

/// A card showing a visualization's title, chart kind, and creation date
#[component]
pub fn VisualizationCard(visualization: Visualization) -> Element {
    let created = visualization.created_at.format("%b %-d, %Y").to_string();
    let kind = visualization.kind.display_name();

    rsx! {
        div {
            class: "visualization-card",

            div {
                class: "visualization-icon",
                Icon { name: IconName::ChartBar, size: IconSize(20), color: IconColor::Accent }
            }

            div {
                class: "flex-1 min-w-0",

                p {
                    class: "visualization-title truncate",
                    "{visualization.title}"
                }

                p {
                    class: "visualization-meta",
                    "{kind} · {created}"
                }
            }
        }
    }
}
