//! Saved visualizations shown on the dashboard

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of chart a visualization renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    Table,
}

impl ChartKind {
    /// Get a user-friendly display name
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar chart",
            ChartKind::Line => "Line chart",
            ChartKind::Pie => "Pie chart",
            ChartKind::Scatter => "Scatter plot",
            ChartKind::Table => "Table",
        }
    }
}

/// A single generated visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualization {
    /// Unique identifier
    pub id: String,
    /// Title shown on the card
    pub title: String,
    /// Chart type
    pub kind: ChartKind,
    /// When the visualization was generated
    pub created_at: DateTime<Utc>,
}

impl Visualization {
    /// Create a new visualization with auto-generated ID
    pub fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Errors that can occur while managing visualizations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Visualization {0} already exists")]
    DuplicateId(String),
    #[error("Failed to read visualizations file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse visualizations file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered collection of visualizations, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualizationStore {
    items: Vec<Visualization>,
}

impl VisualizationStore {
    /// Load the store from a JSON file. A missing file yields an empty store.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&contents)?;
        tracing::info!("Loaded {} visualizations from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Visualization> {
        self.items.iter()
    }

    /// Find a visualization by ID
    pub fn get(&self, id: &str) -> Option<&Visualization> {
        self.items.iter().find(|v| v.id == id)
    }

    /// Append a visualization, rejecting duplicate IDs
    pub fn add(&mut self, visualization: Visualization) -> Result<(), StoreError> {
        if self.get(&visualization.id).is_some() {
            return Err(StoreError::DuplicateId(visualization.id));
        }
        self.items.push(visualization);
        Ok(())
    }

    /// Remove a visualization by ID
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|v| v.id != id);
        self.items.len() != initial_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_get_remove() {
        let mut store = VisualizationStore::default();
        assert!(store.is_empty());

        let viz = Visualization::new("Revenue by month", ChartKind::Bar);
        let id = viz.id.clone();
        store.add(viz).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().title, "Revenue by month");
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = VisualizationStore::default();
        let viz = Visualization::new("Signups", ChartKind::Line);
        store.add(viz.clone()).unwrap();

        let err = store.add(viz).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = VisualizationStore::load_from(&dir.path().join("none.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visualizations.json");
        let json = r#"[
            {"id": "a", "title": "Sales", "kind": "pie", "created_at": "2024-05-01T12:00:00Z"},
            {"id": "b", "title": "Traffic", "kind": "scatter", "created_at": "2024-05-02T08:30:00Z"}
        ]"#;
        std::fs::write(&path, json).unwrap();

        let store = VisualizationStore::load_from(&path).unwrap();
        let titles: Vec<_> = store.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["Sales", "Traffic"]);
        assert_eq!(store.get("a").unwrap().kind, ChartKind::Pie);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visualizations.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            VisualizationStore::load_from(&path),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn test_chart_kind_display() {
        assert_eq!(ChartKind::Scatter.display_name(), "Scatter plot");
    }
}
