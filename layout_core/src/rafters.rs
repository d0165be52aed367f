//! # Rafter Grid
//!
//! Generates the fixed-spacing set of candidate support-line X
//! coordinates spanning all panels. Rafters are global to one
//! calculation: one grid covers the whole roof, panels then intersect
//! it individually during mount placement.
//!
//! ## Example
//!
//! ```rust
//! use layout_core::config::LayoutConfig;
//! use layout_core::geometry::{Panel, Point};
//! use layout_core::rafters::RafterGrid;
//!
//! let config = LayoutConfig::default();
//! let panels = vec![Panel::with_default_size(Point::new(0.0, 0.0), &config)];
//!
//! let grid = RafterGrid::from_config(&config);
//! assert_eq!(grid.generate(&panels), vec![0.0, 16.0, 32.0]);
//! ```

use crate::config::LayoutConfig;
use crate::geometry::Panel;

/// Generator for the global rafter grid.
#[derive(Debug, Clone, Copy)]
pub struct RafterGrid {
    /// X coordinate of the first rafter in the framing grid
    pub first_rafter: f64,
    /// Distance between consecutive rafters
    pub spacing: f64,
}

impl RafterGrid {
    pub fn new(first_rafter: f64, spacing: f64) -> Self {
        RafterGrid {
            first_rafter,
            spacing,
        }
    }

    /// Grid starting at X = 0.0 with the configured rafter spacing.
    pub fn from_config(config: &LayoutConfig) -> Self {
        RafterGrid::new(0.0, config.rafter_spacing)
    }

    /// X coordinates of all rafters under the given panels.
    ///
    /// Returns an ascending, duplicate-free list covering the panels'
    /// full horizontal extent; empty input gives an empty list. The
    /// first emitted rafter is the last grid line at or before the
    /// leftmost panel edge, so an offset grid never overshoots the
    /// span start. A spacing that is not a positive finite number
    /// cannot advance the grid and yields an empty list.
    pub fn generate(&self, panels: &[Panel]) -> Vec<f64> {
        if !(self.spacing > 0.0) || !self.spacing.is_finite() {
            return Vec::new();
        }

        let first = match panels.first() {
            Some(panel) => panel,
            None => return Vec::new(),
        };

        let mut min_x = first.left();
        let mut max_x = first.right();

        for panel in panels {
            if panel.left() < min_x {
                min_x = panel.left();
            }
            if panel.right() > max_x {
                max_x = panel.right();
            }
        }

        let mut x = self.first_rafter;

        // Seek the last grid line at or before the panel span begins.
        while x + self.spacing < min_x {
            x += self.spacing;
        }

        let mut rafters = Vec::new();
        while x <= max_x {
            rafters.push(x);
            x += self.spacing;
        }

        rafters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn panel_at(x: f64, y: f64) -> Panel {
        Panel::with_default_size(Point::new(x, y), &LayoutConfig::default())
    }

    #[test]
    fn test_empty_input_gives_empty_grid() {
        let grid = RafterGrid::from_config(&LayoutConfig::default());
        assert!(grid.generate(&[]).is_empty());
    }

    #[test]
    fn test_basic_generation() {
        // Two panels spanning X = 0 .. 89.75
        let grid = RafterGrid::from_config(&LayoutConfig::default());
        let panels = vec![panel_at(0.0, 0.0), panel_at(45.05, 0.0)];

        assert_eq!(
            grid.generate(&panels),
            vec![0.0, 16.0, 32.0, 48.0, 64.0, 80.0]
        );
    }

    #[test]
    fn test_offset_panel_keeps_preceding_grid_line() {
        // Panel at X=5.0 spans to 49.7; the grid line at 0.0 is the
        // last one at or before the span start and must be kept.
        let grid = RafterGrid::from_config(&LayoutConfig::default());
        let panels = vec![panel_at(5.0, 0.0)];

        assert_eq!(grid.generate(&panels), vec![0.0, 16.0, 32.0, 48.0]);
    }

    #[test]
    fn test_far_offset_panel_skips_leading_lines() {
        // Panel at X=100: lines 0..80 are before the span, 96 is the
        // last one at or before 100.
        let grid = RafterGrid::from_config(&LayoutConfig::default());
        let panels = vec![panel_at(100.0, 0.0)];

        assert_eq!(grid.generate(&panels), vec![96.0, 112.0, 128.0, 144.0]);
    }

    #[test]
    fn test_output_is_ascending_and_unique() {
        let grid = RafterGrid::from_config(&LayoutConfig::default());
        let panels = vec![panel_at(0.0, 0.0), panel_at(45.05, 0.0), panel_at(0.0, 71.6)];
        let rafters = grid.generate(&panels);

        for pair in rafters.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_boundary_rafter_at_max_is_included() {
        // Panel spanning exactly 0..48: the rafter at 48.0 satisfies
        // x <= max_x and is emitted.
        let grid = RafterGrid::from_config(&LayoutConfig::default());
        let panels = vec![Panel::new(Point::new(0.0, 0.0), 48.0, 71.1)];

        assert_eq!(grid.generate(&panels), vec![0.0, 16.0, 32.0, 48.0]);
    }

    #[test]
    fn test_non_positive_spacing_gives_empty_grid() {
        let panels = vec![panel_at(0.0, 0.0)];

        assert!(RafterGrid::new(0.0, 0.0).generate(&panels).is_empty());
        assert!(RafterGrid::new(0.0, -16.0).generate(&panels).is_empty());
        assert!(RafterGrid::new(0.0, f64::NAN).generate(&panels).is_empty());
    }

    #[test]
    fn test_custom_first_rafter() {
        let grid = RafterGrid::new(8.0, 16.0);
        let panels = vec![Panel::new(Point::new(0.0, 0.0), 44.7, 71.1)];

        assert_eq!(grid.generate(&panels), vec![8.0, 24.0, 40.0]);
    }
}
