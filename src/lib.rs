//! Continuous-time coordinate and curve engine.
//!
//! Ordinates, right-open intervals, affine 1D transforms, cubic-Bezier
//! time warps (with hodograph-based critical-point splitting and
//! linearization), and the treecode/binary-tree indexing structure used
//! to address them hierarchically.

pub mod affine;
pub mod bezier;
pub mod config;
pub mod control_point;
pub mod dual;
pub mod error;
pub mod interval;
pub mod linear_curve;
pub mod ordinate;
pub mod projection;
pub mod rational;
pub mod tree;
pub mod treecode;

pub use affine::AffineTransform1D;
pub use bezier::{BezierCurve, BezierSegment};
pub use control_point::{ControlPoint, DualControlPoint};
pub use dual::DualOrdinate;
pub use error::{CurveError, Result};
pub use interval::ContinuousInterval;
pub use linear_curve::{LinearCurve, MonotonicLinearCurve};
pub use ordinate::Ordinate;
pub use projection::ProjectionResult;
pub use rational::Rational32;
pub use tree::BinaryTree;
pub use treecode::Treecode;
