//! # Layout Calculator
//!
//! Orchestrates the full pipeline: rafter grid, segment grouping,
//! structural validation, mount aggregation and joint computation.
//! Validator failures never escape this module; they surface as a
//! structured [`LayoutReport::Error`] carrying a category tag and the
//! offending numeric values.
//!
//! ## Example
//!
//! ```rust
//! use layout_core::calculator::{LayoutCalculator, LayoutReport};
//! use layout_core::config::LayoutConfig;
//! use layout_core::geometry::{Panel, Point};
//!
//! let config = LayoutConfig::default();
//! let panels = vec![
//!     Panel::with_default_size(Point::new(0.0, 0.0), &config),
//!     Panel::with_default_size(Point::new(45.05, 0.0), &config),
//! ];
//!
//! let report = LayoutCalculator::new(config).calculate(&panels);
//! match report {
//!     LayoutReport::Success(plan) => {
//!         assert!(!plan.mounts.is_empty());
//!     }
//!     LayoutReport::Error(failure) => panic!("{}", failure.message),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::errors::LayoutError;
use crate::geometry::{Joint, Mount, Panel};
use crate::grouping::group_segments;
use crate::joints::JointCalculator;
use crate::mounts::{CollectMode, MountPlanner, SkippedPanel};
use crate::rafters::RafterGrid;
use crate::validators::{CantileverValidator, SpanLimitValidator};

/// Category tag for structured failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureCategory {
    CantileverViolation,
    SpanViolation,
    Unexpected,
}

/// Successful calculation payload.
///
/// Mount and joint coordinates are rounded to two decimals, sorted by
/// (x, y). `skipped_panels` lists panels that could not be mounted and
/// were left out of the aggregation (it is empty for layouts where
/// every panel has support).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub mounts: Vec<Mount>,
    pub joints: Vec<Joint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_panels: Vec<SkippedPanel>,
}

/// Structured failure payload.
///
/// ## JSON Example
///
/// ```json
/// {
///   "status": "ERROR",
///   "category": "span-violation",
///   "message": "Span Limit violated: Span limit exceeded: 64.01 - 16 > 48",
///   "details": "The distance between two consecutive supports exceeds 48 units."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFailure {
    /// Always `"ERROR"`
    pub status: String,
    pub category: FailureCategory,
    pub message: String,
    pub details: String,
}

/// Outcome of one layout calculation.
///
/// Serializes untagged: success as `{"mounts": [...], "joints": [...]}`
/// and failure as `{"status": "ERROR", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutReport {
    Success(LayoutPlan),
    Error(LayoutFailure),
}

impl LayoutReport {
    pub fn is_success(&self) -> bool {
        matches!(self, LayoutReport::Success(_))
    }
}

/// Sequences the full mount/joint pipeline for one panel layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutCalculator {
    config: LayoutConfig,
}

impl LayoutCalculator {
    pub fn new(config: LayoutConfig) -> Self {
        LayoutCalculator { config }
    }

    /// Compute mounts and joints for the given panels.
    ///
    /// Empty input yields a success report with empty collections.
    /// Structural violations short-circuit the computation: no partial
    /// results are returned alongside an error.
    pub fn calculate(&self, panels: &[Panel]) -> LayoutReport {
        if panels.is_empty() {
            return LayoutReport::Success(LayoutPlan {
                mounts: Vec::new(),
                joints: Vec::new(),
                skipped_panels: Vec::new(),
            });
        }

        match self.run_pipeline(panels) {
            Ok(plan) => LayoutReport::Success(plan),
            Err(err) => LayoutReport::Error(self.failure_for(err)),
        }
    }

    fn run_pipeline(&self, panels: &[Panel]) -> Result<LayoutPlan, LayoutError> {
        self.config.validate()?;

        let rafters = RafterGrid::from_config(&self.config).generate(panels);
        let planner = MountPlanner::new(rafters, self.config);

        let cantilever = CantileverValidator::from_config(&self.config);
        let span = SpanLimitValidator::from_config(&self.config);

        for segment in group_segments(panels, &self.config) {
            let segment_xs = planner.mounts_for_segment(&segment);
            cantilever.validate(&segment, &segment_xs)?;

            for panel in &segment.panels {
                // Span is checked per panel on its own candidate set;
                // an unsupported panel has no pair to violate here.
                span.validate(&planner.candidate_xs(panel))?;
            }
        }

        let collection = planner.collect_all(panels, CollectMode::BestEffort)?;
        let joints = JointCalculator::new(self.config).calculate(panels);

        Ok(LayoutPlan {
            mounts: collection.mounts,
            joints,
            skipped_panels: collection.skipped,
        })
    }

    fn failure_for(&self, err: LayoutError) -> LayoutFailure {
        let (category, message, details) = match &err {
            LayoutError::CantileverExceeded { .. } | LayoutError::UnsupportedSegment { .. } => (
                FailureCategory::CantileverViolation,
                format!("Cantilever Limit violated: {err}"),
                format!(
                    "The distance from the segment edge to the first/last support exceeds {} units.",
                    self.config.cantilever_limit
                ),
            ),
            LayoutError::SpanExceeded { .. } => (
                FailureCategory::SpanViolation,
                format!("Span Limit violated: {err}"),
                format!(
                    "The distance between two consecutive supports exceeds {} units.",
                    self.config.span_limit
                ),
            ),
            _ => (
                FailureCategory::Unexpected,
                "An unexpected error occurred during calculation.".to_string(),
                err.to_string(),
            ),
        };

        LayoutFailure {
            status: "ERROR".to_string(),
            category,
            message,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn panel_at(x: f64, y: f64) -> Panel {
        Panel::with_default_size(Point::new(x, y), &LayoutConfig::default())
    }

    fn calculate(panels: &[Panel]) -> LayoutReport {
        LayoutCalculator::new(LayoutConfig::default()).calculate(panels)
    }

    fn expect_plan(report: LayoutReport) -> LayoutPlan {
        match report {
            LayoutReport::Success(plan) => plan,
            LayoutReport::Error(failure) => panic!("unexpected failure: {}", failure.message),
        }
    }

    #[test]
    fn test_empty_input_gives_empty_plan() {
        let plan = expect_plan(calculate(&[]));
        assert!(plan.mounts.is_empty());
        assert!(plan.joints.is_empty());
        assert!(plan.skipped_panels.is_empty());
    }

    #[test]
    fn test_minimal_two_row_layout() {
        let panels = vec![
            panel_at(0.0, 0.0),
            panel_at(45.05, 0.0),
            panel_at(0.0, 71.6),
            panel_at(45.05, 71.6),
        ];
        let plan = expect_plan(calculate(&panels));

        // Row 1 mounts on both panel edges
        for expected in [
            Mount::new(16.0, 0.0),
            Mount::new(16.0, 71.1),
            Mount::new(32.0, 0.0),
            Mount::new(32.0, 71.1),
            Mount::new(64.0, 0.0),
            Mount::new(64.0, 71.1),
            Mount::new(80.0, 0.0),
            Mount::new(80.0, 71.1),
        ] {
            assert!(plan.mounts.contains(&expected), "missing {expected:?}");
        }

        // Horizontal joint between the row-1 panels, both edges
        assert!(plan.joints.contains(&Joint::new(44.88, 0.0)));
        assert!(plan.joints.contains(&Joint::new(44.88, 71.1)));

        // Shared joint from the 0.5 vertical gap between the rows
        assert!(plan.joints.contains(&Joint::new(44.88, 71.35)));

        // Nothing was skipped
        assert!(plan.skipped_panels.is_empty());
    }

    #[test]
    fn test_mounts_sorted_and_unique() {
        let panels = vec![panel_at(0.0, 0.0), panel_at(45.05, 0.0)];
        let plan = expect_plan(calculate(&panels));

        for pair in plan.mounts.windows(2) {
            assert!(pair[0].key() < pair[1].key());
        }
    }

    #[test]
    fn test_cantilever_violation_reported() {
        // A single 80-wide panel over a sparse custom check is hard to
        // trigger with the default grid, but a panel whose left edge
        // sits far before the first usable rafter is not: panel at
        // x = -30 spans -30..14.7, usable range [-28, 12.7], rafter
        // 0.0 is the only candidate and the left overhang is 30 > 16.
        let panel = Panel::new(Point::new(-30.0, 0.0), 44.7, 71.1);
        let report = calculate(&[panel]);

        match report {
            LayoutReport::Error(failure) => {
                assert_eq!(failure.status, "ERROR");
                assert_eq!(failure.category, FailureCategory::CantileverViolation);
                assert!(failure.message.contains("Cantilever Limit violated"));
                assert!(failure.message.contains("30"));
                assert!(failure.details.contains("16"));
            }
            LayoutReport::Success(_) => panic!("expected cantilever failure"),
        }
    }

    #[test]
    fn test_span_violation_reported() {
        // Rafters every 64 units: panel -2..130 gets candidates at
        // 0, 64 and 128, both overhangs are 2, but the 64-unit gap
        // between consecutive mounts exceeds the 48 span limit.
        let config = LayoutConfig {
            rafter_spacing: 64.0,
            ..LayoutConfig::default()
        };
        let panel = Panel::new(Point::new(-2.0, 0.0), 132.0, 71.1);
        let report = LayoutCalculator::new(config).calculate(&[panel]);

        match report {
            LayoutReport::Error(failure) => {
                assert_eq!(failure.status, "ERROR");
                assert_eq!(failure.category, FailureCategory::SpanViolation);
                assert!(failure.message.contains("Span Limit violated"));
                assert!(failure.message.contains("64"));
                assert!(failure.message.contains("0"));
                assert!(failure.details.contains("48"));

                let json = serde_json::to_value(&LayoutReport::Error(failure)).unwrap();
                assert_eq!(json["category"], "span-violation");
            }
            LayoutReport::Success(_) => panic!("expected span failure"),
        }
    }

    #[test]
    fn test_unsupported_wide_segment_is_cantilever_violation() {
        // Panel a spans 33..43 (usable 35..41, between rafters 32 and
        // 48); panel b spans 43.8..49.9 with the rafter at 48 inside
        // its right clearance (usable 45.8..47.9). The contiguous
        // segment is 16.9 wide with no candidate mount anywhere.
        let a = Panel::new(Point::new(33.0, 0.0), 10.0, 71.1);
        let b = Panel::new(Point::new(43.8, 0.0), 6.1, 71.1);
        let report = calculate(&[a, b]);

        match report {
            LayoutReport::Error(failure) => {
                assert_eq!(failure.category, FailureCategory::CantileverViolation);
                assert!(failure.message.contains("Unsupported segment"));
            }
            LayoutReport::Success(_) => panic!("expected unsupported-segment failure"),
        }
    }

    #[test]
    fn test_narrow_unsupported_panel_is_skipped_not_fatal() {
        // One well-supported panel plus a 10-wide panel between
        // rafters: the narrow one is self-supporting for cantilever
        // purposes and gets skipped during aggregation.
        let good = panel_at(0.0, 0.0);
        let narrow = Panel::new(Point::new(33.0, 100.0), 10.0, 71.1);
        let plan = expect_plan(calculate(&[good, narrow]));

        assert_eq!(plan.skipped_panels.len(), 1);
        assert_eq!(plan.skipped_panels[0].panel_top_left, Point::new(33.0, 100.0));
        assert!(!plan.mounts.is_empty());
    }

    #[test]
    fn test_invalid_config_reported_not_hung() {
        // A non-positive rafter spacing must surface as a structured
        // report, never reach grid generation.
        let config = LayoutConfig {
            rafter_spacing: -16.0,
            ..LayoutConfig::default()
        };
        let report = LayoutCalculator::new(config).calculate(&[panel_at(0.0, 0.0)]);

        match report {
            LayoutReport::Error(failure) => {
                assert_eq!(failure.category, FailureCategory::Unexpected);
                assert!(failure.details.contains("rafter_spacing"));
            }
            LayoutReport::Success(_) => panic!("expected invalid-config failure"),
        }
    }

    #[test]
    fn test_success_report_json_shape() {
        let panels = vec![panel_at(0.0, 0.0)];
        let report = calculate(&panels);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("mounts").is_some());
        assert!(json.get("joints").is_some());
        assert!(json.get("status").is_none());
        // No skips: the diagnostics field stays out of the payload
        assert!(json.get("skipped_panels").is_none());

        assert_eq!(
            json["mounts"][0],
            serde_json::json!({ "x": 16.0, "y": 0.0 })
        );
    }

    #[test]
    fn test_failure_report_json_shape() {
        let panel = Panel::new(Point::new(-30.0, 0.0), 44.7, 71.1);
        let report = calculate(&[panel]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "ERROR");
        assert_eq!(json["category"], "cantilever-violation");
        assert!(json["message"].as_str().unwrap().contains("Cantilever"));
        assert!(json["details"].as_str().unwrap().contains("units"));
    }

    #[test]
    fn test_report_roundtrip() {
        let panels = vec![panel_at(0.0, 0.0), panel_at(45.05, 0.0)];
        let report = calculate(&panels);

        let json = serde_json::to_string(&report).unwrap();
        let roundtrip: LayoutReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
