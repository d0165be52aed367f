//! # Structural Validators
//!
//! Pure checks of placed mounts against the two structural limits:
//! cantilever overhang (per segment) and span between supports (per
//! panel). Both are deterministic, mutate nothing, and fail fast on the
//! first violation in left-to-right scan order.
//!
//! Boundary rule for both limits: exactly at the limit passes, any
//! excess fails.

use crate::config::LayoutConfig;
use crate::errors::{LayoutError, LayoutResult};
use crate::grouping::Segment;

/// Checks the unsupported overhang at both ends of a segment.
#[derive(Debug, Clone, Copy)]
pub struct CantileverValidator {
    pub limit: f64,
}

impl CantileverValidator {
    pub fn new(limit: f64) -> Self {
        CantileverValidator { limit }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        CantileverValidator::new(config.cantilever_limit)
    }

    /// Validate a segment against its (sorted) mount X coordinates.
    ///
    /// An empty segment passes trivially. A segment with no mounts at
    /// all fails only when it is wider than the limit; a narrower
    /// unsupported segment is treated as self-supporting. Otherwise
    /// the left and right overhangs are checked against the limit.
    pub fn validate(&self, segment: &Segment, mount_xs: &[f64]) -> LayoutResult<()> {
        if segment.panels.is_empty() {
            return Ok(());
        }

        let start = segment.left_start();
        let end = segment.right_end();

        let (first_mount, last_mount) = match (mount_xs.first(), mount_xs.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                let extent = end - start;
                if extent > self.limit {
                    return Err(LayoutError::UnsupportedSegment {
                        extent,
                        limit: self.limit,
                    });
                }
                return Ok(());
            }
        };

        if first_mount - start > self.limit {
            return Err(LayoutError::CantileverExceeded {
                side: "left".to_string(),
                outer: first_mount,
                inner: start,
                limit: self.limit,
            });
        }

        if end - last_mount > self.limit {
            return Err(LayoutError::CantileverExceeded {
                side: "right".to_string(),
                outer: end,
                inner: last_mount,
                limit: self.limit,
            });
        }

        Ok(())
    }
}

/// Checks the distance between consecutive mounts.
#[derive(Debug, Clone, Copy)]
pub struct SpanLimitValidator {
    pub limit: f64,
}

impl SpanLimitValidator {
    pub fn new(limit: f64) -> Self {
        SpanLimitValidator { limit }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        SpanLimitValidator::new(config.span_limit)
    }

    /// Validate gaps between consecutive mounts in a sorted sequence.
    ///
    /// Zero or one mount never fails (there is no pair to check).
    pub fn validate(&self, mount_xs: &[f64]) -> LayoutResult<()> {
        for pair in mount_xs.windows(2) {
            if pair[1] - pair[0] > self.limit {
                return Err(LayoutError::SpanExceeded {
                    prev: pair[0],
                    next: pair[1],
                    limit: self.limit,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Panel, Point};

    fn segment(start_x: f64, end_x: f64) -> Segment {
        Segment {
            panels: vec![Panel::new(Point::new(start_x, 0.0), end_x - start_x, 10.0)],
        }
    }

    #[test]
    fn test_cantilever_at_exact_limit_is_valid() {
        // 26.0 - 10.0 = 16.0 on the left, 60.0 - 44.0 = 16.0 on the right
        let validator = CantileverValidator::new(16.0);
        assert!(validator.validate(&segment(10.0, 60.0), &[26.0, 44.0]).is_ok());
    }

    #[test]
    fn test_small_cantilever_is_valid() {
        let validator = CantileverValidator::new(16.0);
        assert!(validator.validate(&segment(0.0, 50.0), &[2.0, 48.0]).is_ok());
    }

    #[test]
    fn test_left_cantilever_just_over_limit_fails() {
        let validator = CantileverValidator::new(16.0);
        let err = validator
            .validate(&segment(0.0, 50.0), &[16.01, 33.0])
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("left side"));
        assert!(message.contains("16.01"));
        assert!(message.contains("0"));
    }

    #[test]
    fn test_right_cantilever_just_over_limit_fails() {
        let validator = CantileverValidator::new(16.0);
        let err = validator
            .validate(&segment(0.0, 50.0), &[16.0, 33.99])
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("right side"));
        assert!(message.contains("33.99"));
        assert!(message.contains("50"));
    }

    #[test]
    fn test_empty_segment_is_noop() {
        let validator = CantileverValidator::new(16.0);
        let empty = Segment { panels: vec![] };
        assert!(validator.validate(&empty, &[]).is_ok());
        assert!(validator.validate(&empty, &[5.0]).is_ok());
    }

    #[test]
    fn test_unsupported_narrow_segment_is_tolerated() {
        // 10 units wide, no mounts: self-supporting.
        let validator = CantileverValidator::new(16.0);
        assert!(validator.validate(&segment(0.0, 10.0), &[]).is_ok());
    }

    #[test]
    fn test_unsupported_wide_segment_fails() {
        let validator = CantileverValidator::new(16.0);
        let err = validator.validate(&segment(0.0, 50.0), &[]).unwrap_err();

        assert_eq!(err.error_code(), "UNSUPPORTED_SEGMENT");
        assert!(err.to_string().contains("50"));
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_span_at_exact_limit_is_valid() {
        let validator = SpanLimitValidator::new(48.0);
        assert!(validator.validate(&[0.0, 48.0]).is_ok());
    }

    #[test]
    fn test_span_just_over_limit_fails() {
        let validator = SpanLimitValidator::new(48.0);
        let err = validator.validate(&[0.0, 48.01]).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("48.01"));
        assert!(message.contains("0"));
        assert!(message.contains("48"));
    }

    #[test]
    fn test_span_fails_on_first_violation() {
        let validator = SpanLimitValidator::new(48.0);
        let err = validator.validate(&[0.0, 50.0, 150.0]).unwrap_err();

        // Left-to-right scan reports the first offending pair.
        match err {
            LayoutError::SpanExceeded { prev, next, .. } => {
                assert_eq!(prev, 0.0);
                assert_eq!(next, 50.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_or_one_mount_never_fails_span() {
        let validator = SpanLimitValidator::new(48.0);
        assert!(validator.validate(&[]).is_ok());
        assert!(validator.validate(&[100.0]).is_ok());
    }
}
