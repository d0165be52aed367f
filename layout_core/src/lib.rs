//! # layout_core - Solar Panel Mounting Layout Engine
//!
//! `layout_core` computes the structural mounting layout for a grid of
//! rectangular solar panels: it derives rafter-aligned support points
//! ("mounts") and inter-panel connector points ("joints") from panel
//! positions, and validates the layout against two structural limits
//! (cantilever overhang, span between supports).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable inputs; configuration
//!   is passed explicitly, never held in globals
//! - **JSON-First**: All inputs, results and errors implement
//!   Serialize/Deserialize
//! - **Rich Errors**: Structured error types carrying the offending
//!   numeric values, not just strings
//! - **Fixed-precision identity**: Mount and joint equality is defined
//!   by coordinates rounded to two decimals, everywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use layout_core::calculator::LayoutCalculator;
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
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! println!("{json}");
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Numeric limits and defaults, threaded explicitly
//! - [`geometry`] - Points, panels, mounts, joints, rounding contract
//! - [`rafters`] - Fixed-spacing candidate support-line grid
//! - [`grouping`] - Row and segment partitioning
//! - [`mounts`] - Mount placement and full-layout aggregation
//! - [`joints`] - Horizontal and shared joint computation
//! - [`validators`] - Cantilever and span limit checks
//! - [`calculator`] - Pipeline orchestration and result payloads
//! - [`errors`] - Structured error types
//! - [`project`] - Layout file container and metadata
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculator;
pub mod config;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod grouping;
pub mod joints;
pub mod mounts;
pub mod project;
pub mod rafters;
pub mod validators;

// Re-export commonly used types at crate root for convenience
pub use calculator::{LayoutCalculator, LayoutFailure, LayoutPlan, LayoutReport};
pub use config::LayoutConfig;
pub use errors::{LayoutError, LayoutResult};
pub use file_io::{load_project, save_project, FileLock};
pub use geometry::{Joint, Mount, Panel, Point};
pub use project::{LayoutProject, PanelRecord, ProjectMetadata};
