//! # Layout Configuration
//!
//! All numeric limits and defaults for a layout calculation live in
//! [`LayoutConfig`]. The config is passed explicitly to every component
//! constructor; there is no process-wide mutable state.
//!
//! Values are in consistent engineering units (the same unit for every
//! length field). Defaults match common residential rafter framing.
//!
//! ## Example
//!
//! ```rust
//! use layout_core::config::LayoutConfig;
//!
//! let config = LayoutConfig::default();
//! assert_eq!(config.rafter_spacing, 16.0);
//! assert_eq!(config.span_limit, 48.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{LayoutError, LayoutResult};

/// Numeric limits and defaults for one layout calculation.
///
/// Every field can be overridden per project; `Default` gives the
/// standard values.
///
/// ## JSON Example
///
/// ```json
/// {
///   "panel_width": 44.7,
///   "panel_height": 71.1,
///   "rafter_spacing": 16.0,
///   "edge_clearance": 2.0,
///   "cantilever_limit": 16.0,
///   "span_limit": 48.0,
///   "joint_gap_threshold": 1.0,
///   "continuous_gap": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Default panel width when input records carry only a position
    pub panel_width: f64,

    /// Default panel height when input records carry only a position
    pub panel_height: f64,

    /// Distance between rafters (candidate support lines)
    pub rafter_spacing: f64,

    /// Minimum distance from a panel's left/right edge to a mount
    pub edge_clearance: f64,

    /// Maximum unsupported overhang from a segment edge to its
    /// outermost mount
    pub cantilever_limit: f64,

    /// Maximum distance between two consecutive mounts on one panel
    pub span_limit: f64,

    /// Maximum horizontal/vertical gap between panels for which a
    /// joint is still required
    pub joint_gap_threshold: f64,

    /// Maximum horizontal gap between panels that still counts as one
    /// contiguous segment
    pub continuous_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            panel_width: 44.7,
            panel_height: 71.1,
            rafter_spacing: 16.0,
            edge_clearance: 2.0,
            cantilever_limit: 16.0,
            span_limit: 48.0,
            joint_gap_threshold: 1.0,
            continuous_gap: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Validate that every field is a finite, positive number.
    ///
    /// Loaded project files may carry arbitrary overrides; reject
    /// anything that would make the geometry meaningless.
    pub fn validate(&self) -> LayoutResult<()> {
        let fields = [
            ("panel_width", self.panel_width),
            ("panel_height", self.panel_height),
            ("rafter_spacing", self.rafter_spacing),
            ("edge_clearance", self.edge_clearance),
            ("cantilever_limit", self.cantilever_limit),
            ("span_limit", self.span_limit),
            ("joint_gap_threshold", self.joint_gap_threshold),
            ("continuous_gap", self.continuous_gap),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::invalid_input(
                    name,
                    value.to_string(),
                    "Must be a finite positive number",
                ));
            }
        }

        Ok(())
    }
}
