//! Error types for the curve engine.
//!
//! Most operations in this crate follow the source material's convention of
//! signaling failure through a sentinel value, a boolean, or `NaN` rather
//! than a `Result` (see [`crate::ProjectionResult`] and
//! [`crate::bezier::Roots`]). A `Result` is reserved for the few
//! constructors whose precondition violation is a programming error rather
//! than a geometry edge case.

use serde::{Deserialize, Serialize};

/// Errors raised by the handful of operations that have a genuine
/// precondition instead of a defined degenerate behavior.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CurveError {
    /// `AffineTransform1D::inverted()` was called on a transform with
    /// `scale == 0`, which has no inverse.
    #[error("affine transform with scale == 0 has no inverse")]
    SingularTransform,

    /// `MonotonicLinearCurve::new()` was given knots that are not
    /// non-decreasing (or non-increasing) in input.
    #[error("knots are not monotonic in input")]
    NonMonotonicKnots,

    /// `ContinuousInterval::from_start_duration` was given a negative
    /// duration.
    #[error("interval duration must be non-negative, got {duration}")]
    NegativeDuration { duration: f64 },
}

/// Result type for the fallible corner of the curve engine's API.
pub type Result<T> = core::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_transform_message() {
        let err = CurveError::SingularTransform;
        assert_eq!(err.to_string(), "affine transform with scale == 0 has no inverse");
    }

    #[test]
    fn negative_duration_carries_value() {
        let err = CurveError::NegativeDuration { duration: -2.5 };
        assert!(matches!(err, CurveError::NegativeDuration { duration } if duration == -2.5));
    }

    #[test]
    fn clone_and_eq() {
        let err = CurveError::NonMonotonicKnots;
        assert_eq!(err.clone(), err);
    }
}
