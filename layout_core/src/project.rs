//! # Layout Project Data Structures
//!
//! The `LayoutProject` struct is the root container for one roof
//! layout. Projects serialize to `.spl` (solar panel layout) files as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! LayoutProject
//! ├── meta: ProjectMetadata (version, site, job info, timestamps)
//! ├── settings: LayoutConfig (limits and default panel size)
//! └── panels: Vec<PanelRecord> (top-left positions)
//! ```
//!
//! Panel records carry only a position; width and height come from the
//! project settings when the records are materialized into [`Panel`]s.
//!
//! ## Example
//!
//! ```rust
//! use layout_core::project::LayoutProject;
//!
//! let mut project = LayoutProject::new("North Roof", "25-014");
//! project.add_panel(0.0, 0.0);
//! project.add_panel(45.05, 0.0);
//!
//! let panels = project.panels();
//! assert_eq!(panels.len(), 2);
//! assert_eq!(panels[0].width, 44.7);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::geometry::{Panel, Point};

/// Current schema version for .spl files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Input record for one panel: a bare top-left position.
///
/// This is the shape the input loader consumes; sizes are applied from
/// the project settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    pub x: f64,
    pub y: f64,
}

/// Root project container, serialized to `.spl` files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutProject {
    /// Project metadata (version, site, job info)
    pub meta: ProjectMetadata,

    /// Limits and default panel size for this layout
    pub settings: LayoutConfig,

    /// Panel positions, in input order
    pub panels: Vec<PanelRecord>,
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version of the file format
    pub version: String,
    /// Site or roof label (e.g., "North Roof")
    pub site: String,
    /// Job/project number (e.g., "25-001")
    pub job_id: String,
    /// When the project was created
    pub created: DateTime<Utc>,
    /// Last modification time
    pub modified: DateTime<Utc>,
}

impl LayoutProject {
    /// Create a new empty project with default settings.
    pub fn new(site: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        LayoutProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                site: site.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            settings: LayoutConfig::default(),
            panels: Vec::new(),
        }
    }

    /// Add a panel position and bump the modification timestamp.
    pub fn add_panel(&mut self, x: f64, y: f64) {
        self.panels.push(PanelRecord { x, y });
        self.meta.modified = Utc::now();
    }

    /// Materialize the panel records into [`Panel`]s using the
    /// project's default size.
    pub fn panels(&self) -> Vec<Panel> {
        self.panels
            .iter()
            .map(|record| {
                Panel::with_default_size(Point::new(record.x, record.y), &self.settings)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_defaults() {
        let project = LayoutProject::new("Roof A", "25-001");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.meta.site, "Roof A");
        assert_eq!(project.settings, LayoutConfig::default());
        assert!(project.panels.is_empty());
    }

    #[test]
    fn test_add_panel_updates_modified() {
        let mut project = LayoutProject::new("Roof A", "25-001");
        let created = project.meta.modified;
        project.add_panel(0.0, 0.0);
        assert_eq!(project.panels.len(), 1);
        assert!(project.meta.modified >= created);
    }

    #[test]
    fn test_panels_use_project_settings() {
        let mut project = LayoutProject::new("Roof A", "25-001");
        project.settings.panel_width = 40.0;
        project.add_panel(10.0, 5.0);

        let panels = project.panels();
        assert_eq!(panels[0].left(), 10.0);
        assert_eq!(panels[0].width, 40.0);
        assert_eq!(panels[0].height, 71.1);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut project = LayoutProject::new("Roof A", "25-001");
        project.add_panel(0.0, 0.0);
        project.add_panel(45.05, 0.0);

        let json = serde_json::to_string_pretty(&project).unwrap();
        let roundtrip: LayoutProject = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.panels, project.panels);
        assert_eq!(roundtrip.meta.job_id, "25-001");
    }

    #[test]
    fn test_record_shape() {
        let record: PanelRecord = serde_json::from_str(r#"{"x": 45.05, "y": 0}"#).unwrap();
        assert_eq!(record, PanelRecord { x: 45.05, y: 0.0 });
    }
}
