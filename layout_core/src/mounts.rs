//! # Mount Placement and Aggregation
//!
//! Intersects the global rafter grid with each panel's usable X range
//! (edge clearance applied) and expands the result into top/bottom
//! mount points. Aggregation over the whole layout deduplicates by the
//! crate-wide rounded-coordinate key and sorts by (x, y).
//!
//! ## Example
//!
//! ```rust
//! use layout_core::config::LayoutConfig;
//! use layout_core::geometry::{Panel, Point};
//! use layout_core::mounts::MountPlanner;
//! use layout_core::rafters::RafterGrid;
//!
//! let config = LayoutConfig::default();
//! let panels = vec![Panel::with_default_size(Point::new(0.0, 0.0), &config)];
//!
//! let rafters = RafterGrid::from_config(&config).generate(&panels);
//! let planner = MountPlanner::new(rafters, config);
//!
//! // Rafters 0.0 and 44.7 fall inside the 2.0 edge clearance
//! assert_eq!(planner.mounts_for_panel(&panels[0]).unwrap(), vec![16.0, 32.0]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::errors::{LayoutError, LayoutResult};
use crate::geometry::{Mount, Panel, Point};
use crate::grouping::Segment;

/// How full-layout aggregation reacts to an unsupportable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectMode {
    /// Propagate the first `NoSupport` error, aborting the aggregation
    Strict,
    /// Skip the panel and record a diagnostic, continue with the rest
    BestEffort,
}

/// Diagnostic for a panel skipped during best-effort aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPanel {
    /// Top-left corner identifying the skipped panel
    pub panel_top_left: Point,
    /// Human-readable reason (the underlying error message)
    pub reason: String,
}

/// Mounts for a whole layout plus any skip diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountCollection {
    pub mounts: Vec<Mount>,
    pub skipped: Vec<SkippedPanel>,
}

/// Places mounts by intersecting panels with the rafter grid.
#[derive(Debug, Clone)]
pub struct MountPlanner {
    rafter_xs: Vec<f64>,
    config: LayoutConfig,
}

impl MountPlanner {
    /// Create a planner over the given rafter X coordinates.
    ///
    /// Coordinates are sorted on entry so callers may pass them in any
    /// order; [`RafterGrid`](crate::rafters::RafterGrid) output is
    /// already ascending.
    pub fn new(mut rafter_xs: Vec<f64>, config: LayoutConfig) -> Self {
        rafter_xs.sort_by(|a, b| a.total_cmp(b));
        MountPlanner { rafter_xs, config }
    }

    /// Rafter X coordinates inside the panel's usable range.
    ///
    /// The range is `[left + clearance, right - clearance]`, inclusive
    /// on both ends: a rafter exactly at the clearance boundary is
    /// valid. May be empty; validation paths use this directly.
    pub fn candidate_xs(&self, panel: &Panel) -> Vec<f64> {
        let min_allowed = panel.left() + self.config.edge_clearance;
        let max_allowed = panel.right() - self.config.edge_clearance;

        self.rafter_xs
            .iter()
            .copied()
            .filter(|x| *x >= min_allowed && *x <= max_allowed)
            .collect()
    }

    /// Mount X coordinates for one panel.
    ///
    /// Fails with [`LayoutError::NoSupport`] when no rafter falls
    /// inside the panel's usable range.
    pub fn mounts_for_panel(&self, panel: &Panel) -> LayoutResult<Vec<f64>> {
        let xs = self.candidate_xs(panel);
        if xs.is_empty() {
            return Err(LayoutError::no_support(panel.left(), panel.top()));
        }
        Ok(xs)
    }

    /// Deduplicated, sorted union of candidate mount X coordinates
    /// across all panels of a segment.
    ///
    /// Used for cantilever validation at segment granularity; panels
    /// without candidates contribute nothing here.
    pub fn mounts_for_segment(&self, segment: &Segment) -> Vec<f64> {
        let mut xs: Vec<f64> = Vec::new();
        for panel in &segment.panels {
            xs.extend(self.candidate_xs(panel));
        }
        xs.sort_by(|a, b| a.total_cmp(b));
        xs.dedup();
        xs
    }

    /// Expand mount X coordinates into top and bottom edge mounts for
    /// one panel.
    pub fn expand_mounts(panel: &Panel, xs: &[f64]) -> Vec<Mount> {
        let mut mounts = Vec::with_capacity(xs.len() * 2);
        for &x in xs {
            mounts.push(Mount::new(x, panel.top()));
            mounts.push(Mount::new(x, panel.bottom()));
        }
        mounts
    }

    /// Collect mounts for all panels: deduplicated by the rounded
    /// (x, y) key and sorted ascending by (x, y).
    ///
    /// In [`CollectMode::BestEffort`], panels without support are
    /// skipped and reported in the returned diagnostics; in
    /// [`CollectMode::Strict`] the first error aborts the aggregation.
    pub fn collect_all(
        &self,
        panels: &[Panel],
        mode: CollectMode,
    ) -> LayoutResult<MountCollection> {
        let mut all_mounts: Vec<Mount> = Vec::new();
        let mut skipped: Vec<SkippedPanel> = Vec::new();

        for panel in panels {
            match self.mounts_for_panel(panel) {
                Ok(xs) => all_mounts.extend(Self::expand_mounts(panel, &xs)),
                Err(err) if err.is_recoverable() && mode == CollectMode::BestEffort => {
                    skipped.push(SkippedPanel {
                        panel_top_left: panel.top_left,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(MountCollection {
            mounts: dedup_mounts(all_mounts),
            skipped,
        })
    }
}

/// Deduplicate mounts by rounded coordinates, first occurrence wins.
///
/// Result coordinates use the rounded key values, sorted by (x, y).
pub fn dedup_mounts(mounts: Vec<Mount>) -> Vec<Mount> {
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    let mut unique: Vec<Mount> = Vec::new();

    for mount in mounts {
        if seen.insert(mount.key()) {
            unique.push(Mount {
                position: mount.position.rounded(),
            });
        }
    }

    unique.sort_by(|a, b| a.key().cmp(&b.key()));
    unique
}
