//! # PanelPlan CLI Application
//!
//! Runs a mounting layout calculation from the command line and prints
//! the result as JSON.
//!
//! ## Usage
//!
//! ```text
//! layout_cli                  # run the built-in demo layout
//! layout_cli roof.spl         # load a .spl project file
//! layout_cli positions.json   # load a bare JSON array of {x, y} records
//! ```

use std::path::Path;
use std::process::ExitCode;

use layout_core::calculator::LayoutCalculator;
use layout_core::config::LayoutConfig;
use layout_core::errors::LayoutError;
use layout_core::file_io::load_project;
use layout_core::geometry::{Panel, Point};
use layout_core::project::PanelRecord;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let (panels, config) = match args.get(1) {
        Some(path) => match load_panels(Path::new(path)) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
                return ExitCode::FAILURE;
            }
        },
        None => {
            eprintln!("No input file given, running built-in demo layout.");
            demo_layout()
        }
    };

    let report = LayoutCalculator::new(config).calculate(&panels);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to serialize result: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load panels from either a `.spl` project file or a bare JSON array
/// of `{x, y}` records (which gets the default config).
fn load_panels(path: &Path) -> Result<(Vec<Panel>, LayoutConfig), LayoutError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| LayoutError::file_error("read", path.display().to_string(), e.to_string()))?;

    if contents.trim_start().starts_with('[') {
        let records: Vec<PanelRecord> =
            serde_json::from_str(&contents).map_err(|e| LayoutError::SerializationError {
                reason: format!("Invalid JSON in {}: {}", path.display(), e),
            })?;

        let config = LayoutConfig::default();
        let panels = records
            .iter()
            .map(|r| Panel::with_default_size(Point::new(r.x, r.y), &config))
            .collect();
        return Ok((panels, config));
    }

    let project = load_project(path)?;
    Ok((project.panels(), project.settings))
}

/// Four-panel, two-row demo layout (default panel size).
fn demo_layout() -> (Vec<Panel>, LayoutConfig) {
    let config = LayoutConfig::default();
    let positions = [(0.0, 0.0), (45.05, 0.0), (0.0, 71.6), (45.05, 71.6)];

    let panels = positions
        .iter()
        .map(|&(x, y)| Panel::with_default_size(Point::new(x, y), &config))
        .collect();

    (panels, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_layout_succeeds() {
        let (panels, config) = demo_layout();
        let report = LayoutCalculator::new(config).calculate(&panels);
        assert!(report.is_success());
    }

    #[test]
    fn test_bare_record_array_is_accepted() {
        let dir = std::env::temp_dir();
        let path = dir.join("panelplan_cli_records.json");
        std::fs::write(&path, r#"[{"x": 0.0, "y": 0.0}, {"x": 45.05, "y": 0.0}]"#).unwrap();

        let (panels, config) = load_panels(&path).unwrap();
        assert_eq!(panels.len(), 2);
        assert_eq!(config, LayoutConfig::default());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_reports_file_error() {
        let err = load_panels(Path::new("/nonexistent/roof.spl")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
