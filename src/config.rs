//! Numerical constants that are part of the crate's public contract.
//!
//! Every operation in this crate is a pure function of its inputs at fixed
//! tolerances, so these are plain constants rather than a settings struct
//! threaded through every call.

/// Approximate-equality / split-point-rejection epsilon shared by
/// [`crate::Ordinate::eql_approx`] and [`crate::bezier::BezierSegment::split_at`].
pub const EPSILON: f64 = 1e-4;

/// `find_u` bracket convergence tolerance: twice double-precision machine
/// epsilon.
pub const FIND_U_TOLERANCE: f64 = 2.0 * f64::EPSILON;

/// `find_u` iteration cap.
pub const FIND_U_MAX_ITERATIONS: usize = 45;

/// Linear-coefficient fallback threshold in the quadratic hodograph root
/// solve.
pub const BEZIER_ROOTS_LINEAR_EPSILON: f64 = 1e-4;

/// Coefficient-magnitude threshold in `actual_order`.
pub const ACTUAL_ORDER_EPSILON: f64 = 1e-6;

/// Recursion safety belt for segment linearization.
pub const LINEARIZE_MAX_RECURSION_DEPTH: usize = 32;
