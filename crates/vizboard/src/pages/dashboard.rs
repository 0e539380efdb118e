//! Dashboard page listing generated visualizations

use dioxus::prelude::*;

use crate::components::{EmptyState, VisualizationCard};
use crate::state::use_app_state;

#[component]
pub fn Dashboard() -> Element {
    let app_state = use_app_state();
    let state = app_state.read();

    if state.visualizations.is_empty() {
        return rsx! { EmptyState {} };
    }

    rsx! {
        div {
            class: "dashboard",

            h1 {
                class: "page-title",
                "Visualizations"
            }

            div {
                class: "visualization-grid",
                for visualization in state.visualizations.iter() {
                    VisualizationCard {
                        key: "{visualization.id}",
                        visualization: visualization.clone(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::testing::RecordingNavigator;
    use crate::navigation::NavigatorHandle;
    use crate::state::{AppState, ChartKind, Visualization};

    #[component]
    fn Harness(state: AppState) -> Element {
        use_context_provider(|| Signal::new(state.clone()));
        rsx! { Dashboard {} }
    }

    fn render(state: AppState) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state })
            .with_root_context(NavigatorHandle::new(RecordingNavigator::default()));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_empty_store_shows_empty_state() {
        let html = render(AppState::default());
        assert!(html.contains("No visualizations yet"));
        assert!(!html.contains("visualization-grid"));
    }

    #[test]
    fn test_visualizations_are_listed() {
        let mut state = AppState::default();
        state
            .visualizations
            .add(Visualization::new("Revenue by region", ChartKind::Bar))
            .unwrap();
        state
            .visualizations
            .add(Visualization::new("Churn over time", ChartKind::Line))
            .unwrap();

        let html = render(state);

        assert!(!html.contains("No visualizations yet"));
        assert_eq!(html.matches("visualization-card").count(), 2);
        assert!(html.contains("Revenue by region"));
        assert!(html.contains("Line chart"));
    }
}
