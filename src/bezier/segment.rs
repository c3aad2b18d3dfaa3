//! A single cubic Bezier segment: four control points, `input` strictly
//! monotonic from `p0` to `p3`.

use super::math;
use crate::affine::AffineTransform1D;
use crate::config;
use crate::control_point::{ControlPoint, DualControlPoint};
use crate::dual::DualOrdinate;
use crate::ordinate::Ordinate;
use serde::{Deserialize, Serialize};

/// Which side of a split/trim point to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSide {
    /// Cut away everything before the ordinate, keeping `[ordinate, p3]`.
    Before,
    /// Cut away everything after the ordinate, keeping `[p0, ordinate]`.
    After,
}

/// A cubic Bezier segment over one monotone `input` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub p0: ControlPoint,
    pub p1: ControlPoint,
    pub p2: ControlPoint,
    pub p3: ControlPoint,
}

impl BezierSegment {
    #[inline]
    pub fn new(p0: ControlPoint, p1: ControlPoint, p2: ControlPoint, p3: ControlPoint) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// The identity segment over `[0, 1]`, with the interior control
    /// points placed at the thirds so the curve is a straight diagonal.
    pub fn init_identity() -> Self {
        Self::init_from_start_end(
            ControlPoint::new(Ordinate::ZERO, Ordinate::ZERO),
            ControlPoint::new(Ordinate::ONE, Ordinate::ONE),
        )
    }

    /// A straight segment between `start` and `end`, with the interior
    /// control points placed at the thirds.
    pub fn init_from_start_end(start: ControlPoint, end: ControlPoint) -> Self {
        let p1 = ControlPoint::new(
            math::lerp(1.0 / 3.0, start.input, end.input),
            math::lerp(1.0 / 3.0, start.output, end.output),
        );
        let p2 = ControlPoint::new(
            math::lerp(2.0 / 3.0, start.input, end.input),
            math::lerp(2.0 / 3.0, start.output, end.output),
        );
        Self { p0: start, p1, p2, p3: end }
    }

    #[inline]
    pub fn control_points(&self) -> [ControlPoint; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Evaluate both axes at parameter `u`.
    pub fn eval_at(&self, u: f64) -> ControlPoint {
        ControlPoint::new(
            math::evaluate_cubic(u, self.p0.input, self.p1.input, self.p2.input, self.p3.input),
            math::evaluate_cubic(u, self.p0.output, self.p1.output, self.p2.output, self.p3.output),
        )
    }

    /// Evaluate both axes at parameter `u`, carrying derivatives w.r.t.
    /// `u` through the evaluation.
    pub fn eval_at_dual(&self, u: DualOrdinate) -> DualControlPoint {
        let dp0 = DualControlPoint::from_control_point(self.p0);
        let dp1 = DualControlPoint::from_control_point(self.p1);
        let dp2 = DualControlPoint::from_control_point(self.p2);
        let dp3 = DualControlPoint::from_control_point(self.p3);
        DualControlPoint::new(
            math::evaluate_cubic_dual(u, dp0.input, dp1.input, dp2.input, dp3.input),
            math::evaluate_cubic_dual(u, dp0.output, dp1.output, dp2.output, dp3.output),
        )
    }

    /// `u` such that `eval_at(u).input == target`, clamped to `[0, 1]` at
    /// the segment boundary.
    #[inline]
    pub fn find_u_input(&self, target: Ordinate) -> f64 {
        math::find_u(target, self.p0.input, self.p1.input, self.p2.input, self.p3.input)
    }

    /// `u` such that `eval_at(u).output == target`, clamped to `[0, 1]` at
    /// the segment boundary.
    #[inline]
    pub fn find_u_output(&self, target: Ordinate) -> f64 {
        math::find_u(target, self.p0.output, self.p1.output, self.p2.output, self.p3.output)
    }

    /// The output at a given input ordinate, found by solving for `u` on
    /// the input axis and evaluating the output axis there.
    #[inline]
    pub fn output_at_input(&self, target_input: Ordinate) -> Ordinate {
        let u = self.find_u_input(target_input);
        math::evaluate_cubic(u, self.p0.output, self.p1.output, self.p2.output, self.p3.output)
    }

    /// Conservative input/output bounds from the endpoints alone (control
    /// points `p1`/`p2` may overshoot but are not consulted).
    pub fn extents(&self) -> (ControlPoint, ControlPoint) {
        let lo = ControlPoint::new(
            self.p0.input.min(self.p3.input),
            self.p0.output.min(self.p3.output),
        );
        let hi = ControlPoint::new(
            self.p0.input.max(self.p3.input),
            self.p0.output.max(self.p3.output),
        );
        (lo, hi)
    }

    /// True iff `other`'s output range falls entirely within this
    /// segment's input range, so `self` can be evaluated at every output
    /// value `other` produces.
    pub fn can_project(&self, other: &BezierSegment) -> bool {
        let (self_lo, self_hi) = self.extents();
        let (other_lo, other_hi) = other.extents();
        other_lo.output.as_f64() >= self_lo.input.as_f64()
            && other_hi.output.as_f64() <= self_hi.input.as_f64()
    }

    /// Compose `self` after `other`: the result keeps `other`'s `input`
    /// values and replaces each control point's `output` with `self`
    /// evaluated at that output value. This is an approximation (the true
    /// composition of two cubics is not generally a cubic), accurate
    /// enough that sampling the result agrees with `self.output_at_input
    /// (other.output_at_input(u))` to within the caller's tolerance.
    pub fn project_segment(&self, other: &BezierSegment) -> BezierSegment {
        BezierSegment {
            p0: ControlPoint::new(other.p0.input, self.output_at_input(other.p0.output)),
            p1: ControlPoint::new(other.p1.input, self.output_at_input(other.p1.output)),
            p2: ControlPoint::new(other.p2.input, self.output_at_input(other.p2.output)),
            p3: ControlPoint::new(other.p3.input, self.output_at_input(other.p3.output)),
        }
    }

    /// Apply an affine transform to the input axis only, shifting/scaling
    /// the segment's input coordinate system while leaving its output
    /// values untouched.
    pub fn project_affine(&self, xform: AffineTransform1D) -> BezierSegment {
        BezierSegment {
            p0: ControlPoint::new(xform.applied_to_ordinate(self.p0.input), self.p0.output),
            p1: ControlPoint::new(xform.applied_to_ordinate(self.p1.input), self.p1.output),
            p2: ControlPoint::new(xform.applied_to_ordinate(self.p2.input), self.p2.output),
            p3: ControlPoint::new(xform.applied_to_ordinate(self.p3.input), self.p3.output),
        }
    }

    /// Split at parameter `u` via de Casteljau's algorithm. `None` when
    /// `u` is outside `(EPSILON, 1)` (splitting too close to `p0` produces
    /// a near-degenerate left segment, and splitting at or past `p3` is
    /// not a useful split).
    pub fn split_at(&self, u: f64) -> Option<(BezierSegment, BezierSegment)> {
        if u <= config::EPSILON || u >= 1.0 {
            return None;
        }

        let split_axis = |p0: Ordinate, p1: Ordinate, p2: Ordinate, p3: Ordinate| {
            let (q0, q1, q2) = math::reduce4(u, p0, p1, p2, p3);
            let r0 = math::lerp(u, q0, q1);
            let r1 = math::lerp(u, q1, q2);
            let s = math::lerp(u, r0, r1);
            (q0, r0, s, r1, q2)
        };

        let (iq0, ir0, is, ir1, iq2) =
            split_axis(self.p0.input, self.p1.input, self.p2.input, self.p3.input);
        let (oq0, or0, os, or1, oq2) =
            split_axis(self.p0.output, self.p1.output, self.p2.output, self.p3.output);

        let split_point = ControlPoint::new(is, os);
        let left = BezierSegment::new(
            self.p0,
            ControlPoint::new(iq0, oq0),
            ControlPoint::new(ir0, or0),
            split_point,
        );
        let right = BezierSegment::new(
            split_point,
            ControlPoint::new(ir1, or1),
            ControlPoint::new(iq2, oq2),
            self.p3,
        );
        Some((left, right))
    }

    /// Split at a given input ordinate. `None` if the ordinate is not in
    /// the segment's open input range.
    pub fn split_at_input_ordinate(
        &self,
        input: Ordinate,
    ) -> Option<(BezierSegment, BezierSegment)> {
        if input.as_f64() <= self.p0.input.as_f64() || input.as_f64() >= self.p3.input.as_f64() {
            return None;
        }
        self.split_at(self.find_u_input(input))
    }

    /// Keep only the part of the segment before or after `input`.
    pub fn trimmed_from_input_ordinate(&self, input: Ordinate, side: TrimSide) -> Option<Self> {
        let (left, right) = self.split_at_input_ordinate(input)?;
        Some(match side {
            TrimSide::Before => right,
            TrimSide::After => left,
        })
    }

    /// The derivative curve (hodograph), one degree lower.
    #[inline]
    pub fn to_hodograph(&self) -> super::hodograph::Hodograph {
        super::hodograph::compute_hodograph(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cp(input: f64, output: f64) -> ControlPoint {
        ControlPoint::new(Ordinate::new(input), Ordinate::new(output))
    }

    #[test]
    fn identity_places_interior_points_at_thirds() {
        let seg = BezierSegment::init_identity();
        assert_relative_eq!(seg.p1.input.as_f64(), 1.0 / 3.0);
        assert_relative_eq!(seg.p2.input.as_f64(), 2.0 / 3.0);
    }

    #[test]
    fn eval_at_boundaries_hits_endpoints() {
        let seg = BezierSegment::init_identity();
        assert_eq!(seg.eval_at(0.0), seg.p0);
        assert_eq!(seg.eval_at(1.0), seg.p3);
    }

    #[test]
    fn eval_at_dual_matches_primal_value() {
        let seg = BezierSegment::init_identity();
        let d = seg.eval_at_dual(DualOrdinate::variable(Ordinate::new(0.5)));
        let p = seg.eval_at(0.5);
        assert_relative_eq!(d.input.r.as_f64(), p.input.as_f64(), epsilon = 1e-12);
        assert_relative_eq!(d.output.r.as_f64(), p.output.as_f64(), epsilon = 1e-12);
    }

    #[test]
    fn find_u_round_trips_through_eval() {
        let seg = BezierSegment::new(cp(0.0, 0.0), cp(0.0, 0.0), cp(1.0, 1.0), cp(1.0, 1.0));
        for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let u = seg.find_u_input(Ordinate::new(x));
            let evaluated = seg.eval_at(u).input.as_f64();
            assert_relative_eq!(evaluated, x, epsilon = 1e-6);
        }
    }

    #[test]
    fn split_at_rejects_out_of_range_u() {
        let seg = BezierSegment::init_identity();
        assert!(seg.split_at(0.0).is_none());
        assert!(seg.split_at(config::EPSILON).is_none());
        assert!(seg.split_at(1.0).is_none());
        assert!(seg.split_at(0.25).is_some());
    }

    #[test]
    fn split_at_shares_the_split_point() {
        let seg = BezierSegment::init_identity();
        let (left, right) = seg.split_at(0.25).unwrap();
        assert_eq!(left.p3, right.p0);
        assert_eq!(left.p0, seg.p0);
        assert_eq!(right.p3, seg.p3);
    }

    #[test]
    fn extents_use_endpoints_only() {
        let seg = BezierSegment::init_identity();
        let (lo, hi) = seg.extents();
        assert_eq!(lo, seg.p0);
        assert_eq!(hi, seg.p3);
    }

    #[test]
    fn can_project_checks_output_range_containment() {
        let half = BezierSegment::init_from_start_end(cp(-0.5, -0.25), cp(0.5, 0.25));
        let double = BezierSegment::init_from_start_end(cp(-0.5, -1.0), cp(0.5, 1.0));
        assert!(double.can_project(&half));
        assert!(!half.can_project(&double));
    }

    #[test]
    fn project_segment_composes_approximately() {
        let half = BezierSegment::init_from_start_end(cp(-0.5, -0.25), cp(0.5, 0.25));
        let double = BezierSegment::init_from_start_end(cp(-0.5, -1.0), cp(0.5, 1.0));
        let projected = double.project_segment(&half);

        for i in 0..=100 {
            let u = i as f64 / 100.0;
            let got = projected.output_at_input(projected.p0.input + (projected.p3.input - projected.p0.input) * Ordinate::new(u)).as_f64();
            let expected = u - 0.5;
            assert!((got - expected).abs() < 0.01, "u={u} got={got} expected={expected}");
        }
    }

    #[test]
    fn project_affine_scales_and_offsets_input() {
        let seg = BezierSegment::init_identity();
        let scaled = seg.project_affine(AffineTransform1D::new(Ordinate::ZERO, Ordinate::new(2.0)));
        assert_eq!(scaled.p3.input, Ordinate::new(2.0));
        assert_eq!(scaled.p0.output, seg.p0.output);

        let offset = seg.project_affine(AffineTransform1D::new(Ordinate::new(10.0), Ordinate::ONE));
        assert_eq!(offset.p0.input, Ordinate::new(10.0));
        assert_eq!(offset.p3.input, Ordinate::new(11.0));
    }

    #[test]
    fn trimmed_from_input_ordinate_keeps_requested_side() {
        let seg = BezierSegment::init_identity();
        let mid = Ordinate::new(0.5);
        let before = seg.trimmed_from_input_ordinate(mid, TrimSide::Before).unwrap();
        let after = seg.trimmed_from_input_ordinate(mid, TrimSide::After).unwrap();
        assert_relative_eq!(before.p0.input.as_f64(), 0.5, epsilon = 1e-9);
        assert_relative_eq!(after.p3.input.as_f64(), 0.5, epsilon = 1e-9);
    }
}
