//! Configuration persistence for dashboard settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User preference for application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow system preference (default)
    #[default]
    System,
    /// Always use light theme
    Light,
    /// Always use dark theme
    Dark,
}

impl ThemePreference {
    /// Get all available theme preferences
    pub fn all() -> &'static [ThemePreference] {
        &[
            ThemePreference::System,
            ThemePreference::Light,
            ThemePreference::Dark,
        ]
    }

    /// Get a user-friendly display name
    pub fn display_name(self) -> &'static str {
        match self {
            ThemePreference::System => "System",
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }

    /// Get the CSS class to apply to the root element
    /// Returns None for System (let the browser handle it)
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            ThemePreference::System => None,
            ThemePreference::Light => Some("theme-light"),
            ThemePreference::Dark => Some("theme-dark"),
        }
    }
}

/// Errors that can occur during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to find config directory")]
    NoConfigDir,
}

/// Status of config load operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadStatus {
    /// Config loaded successfully from disk
    Loaded,
    /// No config file existed, using fresh defaults
    Fresh,
    /// Config file was corrupted, using defaults (backup created)
    Corrupted {
        /// Path to the backup of the corrupted config
        backup_path: PathBuf,
        /// Error message describing the corruption
        error: String,
    },
    /// Config file couldn't be read, using defaults
    ReadError {
        /// Error message
        error: String,
    },
}

impl ConfigLoadStatus {
    /// Get a user-friendly warning message, if applicable
    pub fn warning_message(&self) -> Option<String> {
        match self {
            ConfigLoadStatus::Corrupted { backup_path, error } => Some(format!(
                "Your configuration file was corrupted and could not be loaded. \
                 A backup has been saved to {}. Error: {}",
                backup_path.display(),
                error
            )),
            ConfigLoadStatus::ReadError { error } => {
                Some(format!("Could not read your configuration file: {error}"))
            }
            ConfigLoadStatus::Loaded | ConfigLoadStatus::Fresh => None,
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Theme preference (system, light, or dark)
    #[serde(default)]
    pub theme: ThemePreference,
    /// Override for the visualizations file location
    #[serde(default)]
    pub visualizations_path: Option<PathBuf>,
}

impl AppConfig {
    fn project_dirs() -> Result<directories::ProjectDirs, ConfigError> {
        directories::ProjectDirs::from("com", "vizboard", "dashboard").ok_or(ConfigError::NoConfigDir)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::project_dirs()?.config_dir().join("config.json"))
    }

    /// Where saved visualizations live, honouring the override
    pub fn visualizations_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.visualizations_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::project_dirs()?.data_dir().join("visualizations.json")),
        }
    }

    /// Load configuration from disk, or return default if not found
    pub fn load() -> Self {
        Self::load_with_status().0
    }

    /// Load configuration from the default location with status information.
    pub fn load_with_status() -> (Self, ConfigLoadStatus) {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("Could not determine config path: {}", e);
                (
                    Self::default(),
                    ConfigLoadStatus::ReadError {
                        error: e.to_string(),
                    },
                )
            }
        }
    }

    /// Load configuration from `config_path`.
    ///
    /// If the file is corrupted, a backup is created before returning
    /// defaults.
    pub fn load_from(config_path: &Path) -> (Self, ConfigLoadStatus) {
        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            return (Self::default(), ConfigLoadStatus::Fresh);
        }

        match std::fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    (config, ConfigLoadStatus::Loaded)
                }
                Err(e) => {
                    tracing::error!("Failed to parse config: {}", e);
                    let backup_path = Self::backup_corrupted_config(config_path, &contents);
                    (
                        Self::default(),
                        ConfigLoadStatus::Corrupted {
                            backup_path,
                            error: e.to_string(),
                        },
                    )
                }
            },
            Err(e) => {
                tracing::error!("Failed to read config: {}", e);
                (
                    Self::default(),
                    ConfigLoadStatus::ReadError {
                        error: e.to_string(),
                    },
                )
            }
        }
    }

    /// Create a backup of a corrupted config file.
    ///
    /// Returns the path to the backup file.
    fn backup_corrupted_config(config_path: &Path, contents: &str) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let backup_path = config_path.with_file_name(format!("config.corrupted.{timestamp}.json"));

        // Return the intended path even if the write fails
        if let Err(e) = std::fs::write(&backup_path, contents) {
            tracing::error!(
                "Failed to create backup of corrupted config at {}: {}",
                backup_path.display(),
                e
            );
        } else {
            tracing::info!(
                "Created backup of corrupted config at {}",
                backup_path.display()
            );
        }

        backup_path
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `config_path`
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, contents)?;
        tracing::info!("Saved config to {}", config_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let (config, status) = AppConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(status, ConfigLoadStatus::Fresh);
        assert!(status.warning_message().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            theme: ThemePreference::Dark,
            visualizations_path: Some(PathBuf::from("/tmp/viz.json")),
        };

        config.save_to(&path).unwrap();
        let (loaded, status) = AppConfig::load_from(&path);

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(loaded, config);
        assert_eq!(loaded.visualizations_path().unwrap(), PathBuf::from("/tmp/viz.json"));
    }

    #[test]
    fn test_corrupted_config_is_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let (config, status) = AppConfig::load_from(&path);

        assert_eq!(config, AppConfig::default());
        let ConfigLoadStatus::Corrupted { backup_path, .. } = &status else {
            panic!("expected corrupted status, got {status:?}");
        };
        assert_eq!(std::fs::read_to_string(backup_path).unwrap(), "{ not json");
        assert!(status.warning_message().is_some());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.theme, ThemePreference::System);
        assert!(config.visualizations_path.is_none());
    }

    #[test]
    fn test_theme_css_class() {
        assert_eq!(ThemePreference::System.css_class(), None);
        assert_eq!(ThemePreference::Dark.css_class(), Some("theme-dark"));
        let theme: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, ThemePreference::Light);
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<_> = ThemePreference::all().iter().map(|t| t.display_name()).collect();
        assert_eq!(names, ["System", "Light", "Dark"]);
    }
}
