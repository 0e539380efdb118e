//! Icon system built on inline Heroicons SVGs

pub mod heroicons;
pub mod types;

pub use types::{IconColor, IconName, IconSize};

use dioxus::prelude::*;

/// Icon component rendering an inline SVG
///
/// # Example
///
/// ```ignore
/// Icon { name: IconName::ChartBar, size: 24.into() }
/// Icon { name: IconName::ArrowUpTray, size: 16.into(), color: IconColor::Secondary }
/// ```
#[component]
pub fn Icon(
    /// The icon to display
    name: IconName,
    /// Size in pixels (default: 16)
    #[props(default)]
    size: IconSize,
    /// Color (default: inherit text color)
    #[props(default)]
    color: IconColor,
    /// Additional CSS classes
    #[props(default)]
    class: String,
) -> Element {
    let svg = heroicons::render_heroicon_svg(name, size.0, color.css_color());
    rsx! {
        span {
            class: "icon icon-svg {class}",
            dangerous_inner_html: "{svg}",
        }
    }
}
