//! Application state shared through the Dioxus context

pub mod config;
pub mod visualizations;

use dioxus::prelude::*;

pub use config::{AppConfig, ConfigError, ConfigLoadStatus, ThemePreference};
pub use visualizations::{ChartKind, StoreError, Visualization, VisualizationStore};

/// Everything the dashboard renders from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Persistent configuration
    pub config: AppConfig,
    /// Visualizations generated so far
    pub visualizations: VisualizationStore,
}

impl AppState {
    /// Load configuration and saved visualizations from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let (config, status) = AppConfig::load_with_status();
        if let Some(warning) = status.warning_message() {
            tracing::warn!("Config load issue: {}", warning);
        }

        let visualizations = match config.visualizations_path() {
            Ok(path) => VisualizationStore::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Could not load visualizations from {}: {}", path.display(), e);
                VisualizationStore::default()
            }),
            Err(e) => {
                tracing::warn!("Could not locate visualizations: {}", e);
                VisualizationStore::default()
            }
        };

        Self { config, visualizations }
    }

    /// The browser build has no local storage for state
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

impl AppState {
    /// Persist the configuration part of the state
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), ConfigError> {
        self.config.save()
    }

    /// Nothing to persist to in the browser
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Get the application state installed by `App`
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}
