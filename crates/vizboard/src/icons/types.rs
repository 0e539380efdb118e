//! Icon types
//!
//! Maps icon names to Heroicons (outline set).

/// Icon names used across the dashboard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    /// Bar chart - chart-bar
    ChartBar,
    /// Presentation board with a chart - presentation-chart-bar
    PresentationChart,
    /// Upload - arrow-up-tray
    ArrowUpTray,
    /// Chat - chat-bubble-left-right
    ChatBubble,
    /// Back navigation - arrow-left
    ArrowLeft,
}

impl IconName {
    /// Heroicon name
    pub fn heroicon(self) -> &'static str {
        match self {
            Self::ChartBar => "chart-bar",
            Self::PresentationChart => "presentation-chart-bar",
            Self::ArrowUpTray => "arrow-up-tray",
            Self::ChatBubble => "chat-bubble-left-right",
            Self::ArrowLeft => "arrow-left",
        }
    }
}

/// Icon size in pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IconSize(pub u32);

impl Default for IconSize {
    fn default() -> Self {
        Self(16)
    }
}

impl From<u32> for IconSize {
    fn from(size: u32) -> Self {
        Self(size)
    }
}

/// Icon color - supports common semantic colors
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IconColor {
    /// Inherit the text color
    #[default]
    Primary,
    /// Muted/secondary color
    Secondary,
    /// Accent/brand color (blue)
    Accent,
}

impl IconColor {
    /// CSS color value
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Primary => "currentColor",
            Self::Secondary => "rgb(107, 114, 128)", // gray-500
            Self::Accent => "rgb(59, 130, 246)",     // blue-500
        }
    }
}
