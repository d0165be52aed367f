//! # Row and Segment Grouping
//!
//! Partitions panels into horizontal rows by Y-proximity, and rows into
//! contiguous segments by X-gap. Rows are the unit of joint
//! computation; segments are the unit of cantilever validation.
//! Segments never cross rows.
//!
//! ## Example
//!
//! ```rust
//! use layout_core::config::LayoutConfig;
//! use layout_core::geometry::{Panel, Point};
//! use layout_core::grouping::group_rows;
//!
//! let config = LayoutConfig::default();
//! let panels = vec![
//!     Panel::with_default_size(Point::new(45.05, 0.0), &config),
//!     Panel::with_default_size(Point::new(0.0, 71.6), &config),
//!     Panel::with_default_size(Point::new(0.0, 0.0), &config),
//! ];
//!
//! let rows = group_rows(&panels, &config);
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].panels[0].left(), 0.0); // sorted left-to-right
//! ```

use crate::config::LayoutConfig;
use crate::geometry::Panel;

/// Panels sharing (approximately) the same top Y, sorted left-to-right.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub panels: Vec<Panel>,
}

/// A horizontally contiguous run of panels within one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub panels: Vec<Panel>,
}

impl Segment {
    /// Left edge of the segment (left edge of its first panel).
    pub fn left_start(&self) -> f64 {
        self.panels[0].left()
    }

    /// Right edge of the segment (right edge of its last panel).
    pub fn right_end(&self) -> f64 {
        self.panels[self.panels.len() - 1].right()
    }
}

/// Group panels into rows by top-Y proximity.
///
/// Panels are sorted by `top`; a panel joins the current row when its
/// top differs from the row anchor's top (the row's first panel) by at
/// most `joint_gap_threshold`. Rows come out top-to-bottom, each sorted
/// left-to-right.
pub fn group_rows(panels: &[Panel], config: &LayoutConfig) -> Vec<Row> {
    if panels.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<Panel> = panels.to_vec();
    sorted.sort_by(|a, b| a.top().total_cmp(&b.top()));

    let mut rows: Vec<Row> = Vec::new();
    let mut current: Vec<Panel> = vec![sorted[0]];

    for panel in &sorted[1..] {
        let anchor_top = current[0].top();
        if (panel.top() - anchor_top).abs() <= config.joint_gap_threshold {
            current.push(*panel);
        } else {
            current.sort_by(|a, b| a.left().total_cmp(&b.left()));
            rows.push(Row { panels: current });
            current = vec![*panel];
        }
    }

    current.sort_by(|a, b| a.left().total_cmp(&b.left()));
    rows.push(Row { panels: current });

    rows
}

/// Divide rows into segments of horizontally contiguous panels.
///
/// Within each row, a consecutive pair stays in one segment when
/// `|next.left - current.right| < continuous_gap`; otherwise the
/// segment closes and a new one starts. An isolated panel is its own
/// one-element segment.
pub fn group_segments(panels: &[Panel], config: &LayoutConfig) -> Vec<Segment> {
    let rows = group_rows(panels, config);

    let mut segments: Vec<Segment> = Vec::new();

    for row in rows {
        let mut current: Vec<Panel> = vec![row.panels[0]];

        for pair in row.panels.windows(2) {
            let gap = pair[1].left() - pair[0].right();

            if gap.abs() < config.continuous_gap {
                current.push(pair[1]);
            } else {
                segments.push(Segment { panels: current });
                current = vec![pair[1]];
            }
        }

        segments.push(Segment { panels: current });
    }

    segments
}
