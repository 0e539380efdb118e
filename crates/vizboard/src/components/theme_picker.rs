//! Theme selector shown in the page header

use dioxus::prelude::*;

use crate::state::{use_app_state, ThemePreference};

/// Row of buttons, one per theme; the choice is saved immediately
#[component]
pub fn ThemePicker() -> Element {
    let mut app_state = use_app_state();
    let current = app_state.read().config.theme;

    rsx! {
        div {
            class: "theme-picker",

            for theme in ThemePreference::all() {
                {
                    let button_class = if current == *theme {
                        "btn-ghost btn-sm theme-option theme-option-selected"
                    } else {
                        "btn-ghost btn-sm theme-option"
                    };
                    rsx! {
                        button {
                            key: "{theme.display_name()}",
                            class: "{button_class}",
                            onclick: move |_| {
                                app_state.write().config.theme = *theme;
                                if let Err(e) = app_state.read().save() {
                                    tracing::error!("Failed to save config: {}", e);
                                }
                            },
                            "{theme.display_name()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[component]
    fn Harness(state: AppState) -> Element {
        use_context_provider(|| Signal::new(state.clone()));
        rsx! { ThemePicker {} }
    }

    #[test]
    fn test_one_button_per_theme_with_current_selected() {
        let mut state = AppState::default();
        state.config.theme = ThemePreference::Dark;

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("<button").count(), 3);
        assert_eq!(html.matches("theme-option-selected").count(), 1);
        let selected = html.find("theme-option-selected").unwrap();
        assert!(html[selected..].starts_with("theme-option-selected\">Dark"));
    }
}
