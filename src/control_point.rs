//! A point on a 1D->1D remap: independent `input` ordinate, dependent
//! `output` ordinate.

use crate::dual::DualOrdinate;
use crate::ordinate::Ordinate;
use serde::{Deserialize, Serialize};

/// A control point `(input, output)`.
///
/// The source material calls these fields `in`/`out`; `in` is a reserved
/// word in Rust, so they are spelled out here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub input: Ordinate,
    pub output: Ordinate,
}

impl ControlPoint {
    #[inline]
    pub fn new(input: Ordinate, output: Ordinate) -> Self {
        Self { input, output }
    }
}

impl From<(f64, f64)> for ControlPoint {
    #[inline]
    fn from((input, output): (f64, f64)) -> Self {
        Self { input: Ordinate::new(input), output: Ordinate::new(output) }
    }
}

/// A control point carried through forward-mode AD: both coordinates
/// become dual ordinates so derivatives w.r.t. the curve parameter can be
/// read off directly from an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DualControlPoint {
    pub input: DualOrdinate,
    pub output: DualOrdinate,
}

impl DualControlPoint {
    #[inline]
    pub fn new(input: DualOrdinate, output: DualOrdinate) -> Self {
        Self { input, output }
    }

    #[inline]
    pub fn from_control_point(cp: ControlPoint) -> Self {
        Self {
            input: DualOrdinate::constant(cp.input),
            output: DualOrdinate::constant(cp.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        let cp: ControlPoint = (1.0, 2.0).into();
        assert_eq!(cp.input.as_f64(), 1.0);
        assert_eq!(cp.output.as_f64(), 2.0);
    }

    #[test]
    fn dual_from_control_point_has_zero_derivative() {
        let cp = ControlPoint::new(Ordinate::new(1.0), Ordinate::new(2.0));
        let dcp = DualControlPoint::from_control_point(cp);
        assert_eq!(dcp.input.i, Ordinate::ZERO);
        assert_eq!(dcp.output.i, Ordinate::ZERO);
    }
}
