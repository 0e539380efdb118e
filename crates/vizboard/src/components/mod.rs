//! UI components for the dashboard

mod empty_state;
mod theme_picker;
mod visualization_card;

pub use empty_state::EmptyState;
pub use theme_picker::ThemePicker;
pub use visualization_card::VisualizationCard;
