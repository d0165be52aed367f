//! # Geometry Primitives
//!
//! Points, panels, mounts and joints. All coordinates are plain `f64`
//! pairs in consistent engineering units.
//!
//! ## Coordinate identity
//!
//! Rafter positions are produced by repeated addition of the spacing, so
//! two mounts that are "the same" physically can differ in the last bits
//! of their floats. The crate therefore has exactly one identity rule for
//! mounts and joints: coordinates rounded to **two decimal places**. This
//! is a load-bearing contract - serialization, deduplication and joint
//! pairing all go through [`round2`] / [`Point::key`], never through raw
//! float equality.
//!
//! ## Example
//!
//! ```rust
//! use layout_core::geometry::{Panel, Point};
//!
//! let panel = Panel::new(Point::new(0.0, 0.0), 44.7, 71.1);
//! assert_eq!(panel.left(), 0.0);
//! assert_eq!(panel.right(), 44.7);
//! assert_eq!(panel.bottom(), 71.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Round a coordinate to the crate-wide two-decimal precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// An immutable (x, y) coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Integer centi-unit key used for dedup and equality of mounts
    /// and joints.
    pub fn key(&self) -> (i64, i64) {
        ((self.x * 100.0).round() as i64, (self.y * 100.0).round() as i64)
    }

    /// The same point with both coordinates rounded to two decimals.
    pub fn rounded(&self) -> Point {
        Point::new(round2(self.x), round2(self.y))
    }
}

/// A rectangular solar panel, positioned by its top-left corner.
///
/// Panels are inputs to the calculation and are never mutated. The Y
/// axis points down: `top` is the smaller coordinate, `bottom = top +
/// height`.
///
/// ## JSON Example
///
/// ```json
/// { "top_left": { "x": 0.0, "y": 0.0 }, "width": 44.7, "height": 71.1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Top-left corner of the panel
    pub top_left: Point,

    /// Panel width (must be positive)
    pub width: f64,

    /// Panel height (must be positive)
    pub height: f64,
}

impl Panel {
    pub fn new(top_left: Point, width: f64, height: f64) -> Self {
        Panel {
            top_left,
            width,
            height,
        }
    }

    /// Panel with the default size from `config`, positioned at `top_left`.
    pub fn with_default_size(top_left: Point, config: &LayoutConfig) -> Self {
        Panel::new(top_left, config.panel_width, config.panel_height)
    }

    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn right(&self) -> f64 {
        self.top_left.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn bottom(&self) -> f64 {
        self.top_left.y + self.height
    }
}

/// A support point where a panel attaches to a rafter.
///
/// Always placed on a panel's top or bottom edge at a rafter-aligned X.
/// Identity is the rounded coordinate pair (see module docs).
///
/// Serializes flat as `{"x": ..., "y": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mount {
    pub position: Point,
}

impl Mount {
    pub fn new(x: f64, y: f64) -> Self {
        Mount {
            position: Point::new(x, y),
        }
    }

    pub fn key(&self) -> (i64, i64) {
        self.position.key()
    }
}

/// A connector point where two adjacent panels are linked to each other
/// (not to a rafter).
///
/// Serializes flat as `{"x": ..., "y": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Joint {
    pub position: Point,
}

impl Joint {
    pub fn new(x: f64, y: f64) -> Self {
        Joint {
            position: Point::new(x, y),
        }
    }

    pub fn key(&self) -> (i64, i64) {
        self.position.key()
    }
}
