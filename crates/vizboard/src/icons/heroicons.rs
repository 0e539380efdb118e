//! Inline Heroicons SVG rendering (outline set, 24x24 viewBox)

use super::types::IconName;

/// SVG path data for an icon
fn path_data(name: IconName) -> &'static str {
    match name {
        IconName::ChartBar => {
            "M3 13.125C3 12.504 3.504 12 4.125 12h2.25c.621 0 1.125.504 1.125 1.125v6.75C7.5 20.496 6.996 21 6.375 21h-2.25A1.125 1.125 0 0 1 3 19.875v-6.75ZM9.75 8.625c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125v11.25c0 .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 0 1-1.125-1.125V8.625ZM16.5 4.125c0-.621.504-1.125 1.125-1.125h2.25C20.496 3 21 3.504 21 4.125v15.75c0 .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 0 1-1.125-1.125V4.125Z"
        }
        IconName::PresentationChart => {
            "M3.75 3v11.25A2.25 2.25 0 0 0 6 16.5h2.25M3.75 3h-1.5m1.5 0h16.5m0 0h1.5m-1.5 0v11.25A2.25 2.25 0 0 1 18 16.5h-2.25m-7.5 0h7.5m-7.5 0-1 3m8.5-3 1 3m0 0 .5 1.5m-.5-1.5h-9.5m0 0-.5 1.5M9 11.25v1.5M12 9v3.75m3-6v6.75"
        }
        IconName::ArrowUpTray => {
            "M3 16.5v2.25A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V16.5m-13.5-9L12 3m0 0 4.5 4.5M12 3v13.5"
        }
        IconName::ChatBubble => {
            "M20.25 8.511c.884.284 1.5 1.128 1.5 2.097v4.286c0 1.136-.847 2.1-1.98 2.193-.34.027-.68.052-1.02.072v3.091l-3-3c-1.354 0-2.694-.055-4.02-.163a2.115 2.115 0 0 1-.825-.242m9.345-8.334a2.126 2.126 0 0 0-.476-.095 48.64 48.64 0 0 0-8.048 0c-1.131.094-1.976 1.057-1.976 2.192v4.286c0 .837.46 1.58 1.155 1.951m9.345-8.334V6.637c0-1.621-1.152-3.026-2.76-3.235A48.455 48.455 0 0 0 11.25 3c-2.115 0-4.198.137-6.24.402-1.608.209-2.76 1.614-2.76 3.235v6.226c0 1.621 1.152 3.026 2.76 3.235.577.075 1.157.14 1.74.194V21l4.155-4.155"
        }
        IconName::ArrowLeft => "M10.5 19.5 3 12m0 0 7.5-7.5M3 12h18",
    }
}

/// Render an icon as an inline SVG string
pub fn render_heroicon_svg(name: IconName, size: u32, color: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="{color}" width="{size}" height="{size}" aria-hidden="true" data-icon="{}"><path stroke-linecap="round" stroke-linejoin="round" d="{}"/></svg>"#,
        name.heroicon(),
        path_data(name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sets_size_and_color() {
        let svg = render_heroicon_svg(IconName::ArrowUpTray, 20, "currentColor");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="20""#));
        assert!(svg.contains(r#"height="20""#));
        assert!(svg.contains(r#"stroke="currentColor""#));
        assert!(svg.contains(r#"data-icon="arrow-up-tray""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_every_icon_has_path_data() {
        for name in [
            IconName::ChartBar,
            IconName::PresentationChart,
            IconName::ArrowUpTray,
            IconName::ChatBubble,
            IconName::ArrowLeft,
        ] {
            assert!(path_data(name).starts_with('M'), "{name:?} has no path");
        }
    }
}
