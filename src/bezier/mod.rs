//! Cubic Bezier segments and curves over the `(input, output)` plane.

mod curve;
mod hodograph;
mod linearize;
mod math;
mod segment;

pub use curve::BezierCurve;
pub use hodograph::{
    align_bezier, bezier_roots, compute_hodograph, from_hodograph, inflection_points,
    split_on_critical_points, Hodograph, Roots,
};
pub use linearize::{is_approximately_linear, linearize};
pub use math::{
    actual_order, evaluate_bezier0, evaluate_bezier0_dual, evaluate_cubic, find_u, invlerp, lerp,
};
pub use segment::{BezierSegment, TrimSide};
