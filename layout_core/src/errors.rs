//! # Error Types
//!
//! Structured error types for layout_core. Every structural violation
//! carries the offending numeric values so messages can be asserted in
//! regression tests and understood without re-running the calculation.
//!
//! ## Example
//!
//! ```rust
//! use layout_core::errors::{LayoutError, LayoutResult};
//!
//! fn validate_gap(prev: f64, next: f64, limit: f64) -> LayoutResult<()> {
//!     if next - prev > limit {
//!         return Err(LayoutError::SpanExceeded { prev, next, limit });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for layout_core operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Structured error type for layout operations.
///
/// Each variant provides specific context about what went wrong. The
/// structural variants (`NoSupport`, `CantileverExceeded`,
/// `UnsupportedSegment`, `SpanExceeded`) always include the numeric
/// operands of the violated check.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LayoutError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A panel has no usable rafter intersection inside its edge
    /// clearance
    #[error("No rafters available for panel at ({panel_x}, {panel_y})")]
    NoSupport { panel_x: f64, panel_y: f64 },

    /// A segment overhangs its outermost mount beyond the limit
    #[error("Cantilever exceeded on the {side} side of segment: {outer} - {inner} > {limit}")]
    CantileverExceeded {
        /// "left" or "right"
        side: String,
        /// Minuend of the overhang: first mount (left) or segment end (right)
        outer: f64,
        /// Subtrahend of the overhang: segment start (left) or last mount (right)
        inner: f64,
        limit: f64,
    },

    /// A segment with no mounts at all is wider than the cantilever
    /// limit, so it cannot be self-supporting
    #[error("Unsupported segment wider than cantilever limit: {extent} > {limit}")]
    UnsupportedSegment { extent: f64, limit: f64 },

    /// Two consecutive mounts are farther apart than the span limit
    #[error("Span limit exceeded: {next} - {prev} > {limit}")]
    SpanExceeded { prev: f64, next: f64, limit: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LayoutError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LayoutError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoSupport error for the panel at the given top-left point
    pub fn no_support(panel_x: f64, panel_y: f64) -> Self {
        LayoutError::NoSupport { panel_x, panel_y }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LayoutError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        LayoutError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this error is locally recoverable during best-effort
    /// aggregation (the affected panel can be skipped).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LayoutError::NoSupport { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LayoutError::InvalidInput { .. } => "INVALID_INPUT",
            LayoutError::NoSupport { .. } => "NO_SUPPORT",
            LayoutError::CantileverExceeded { .. } => "CANTILEVER_EXCEEDED",
            LayoutError::UnsupportedSegment { .. } => "UNSUPPORTED_SEGMENT",
            LayoutError::SpanExceeded { .. } => "SPAN_EXCEEDED",
            LayoutError::FileError { .. } => "FILE_ERROR",
            LayoutError::FileLocked { .. } => "FILE_LOCKED",
            LayoutError::SerializationError { .. } => "SERIALIZATION_ERROR",
            LayoutError::VersionMismatch { .. } => "VERSION_MISMATCH",
            LayoutError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
