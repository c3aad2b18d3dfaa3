//! Scalar Bezier math shared by both curve axes: de Casteljau reduction,
//! evaluation, degree detection, and the root solve used by `find_u`.
//!
//! Every function here takes bare per-axis values (an `input` or `output`
//! coordinate of a [`crate::control_point::ControlPoint`]), not whole
//! control points, so the same code serves both axes.

use crate::config;
use crate::dual::DualOrdinate;
use crate::ordinate::Ordinate;

#[inline]
pub fn lerp(u: f64, a: Ordinate, b: Ordinate) -> Ordinate {
    a + (b - a) * Ordinate::new(u)
}

#[inline]
pub fn invlerp(y: Ordinate, a: Ordinate, b: Ordinate) -> f64 {
    ((y - a) / (b - a)).as_f64()
}

/// One level of de Casteljau reduction: four points collapse to three.
#[inline]
pub fn reduce4(
    u: f64,
    p0: Ordinate,
    p1: Ordinate,
    p2: Ordinate,
    p3: Ordinate,
) -> (Ordinate, Ordinate, Ordinate) {
    (lerp(u, p0, p1), lerp(u, p1, p2), lerp(u, p2, p3))
}

/// Full de Casteljau evaluation of a cubic at `u`.
pub fn evaluate_cubic(u: f64, p0: Ordinate, p1: Ordinate, p2: Ordinate, p3: Ordinate) -> Ordinate {
    let (q0, q1, q2) = reduce4(u, p0, p1, p2, p3);
    let r0 = lerp(u, q0, q1);
    let r1 = lerp(u, q1, q2);
    lerp(u, r0, r1)
}

/// Evaluate a cubic whose `p0` is fixed at zero — the common case for a
/// segment-local hodograph or derivative curve.
#[inline]
pub fn evaluate_bezier0(u: f64, p1: Ordinate, p2: Ordinate, p3: Ordinate) -> Ordinate {
    evaluate_cubic(u, Ordinate::ZERO, p1, p2, p3)
}

#[inline]
pub fn lerp_dual(u: DualOrdinate, a: DualOrdinate, b: DualOrdinate) -> DualOrdinate {
    a + (b - a) * u
}

pub fn reduce4_dual(
    u: DualOrdinate,
    p0: DualOrdinate,
    p1: DualOrdinate,
    p2: DualOrdinate,
    p3: DualOrdinate,
) -> (DualOrdinate, DualOrdinate, DualOrdinate) {
    (lerp_dual(u, p0, p1), lerp_dual(u, p1, p2), lerp_dual(u, p2, p3))
}

pub fn evaluate_cubic_dual(
    u: DualOrdinate,
    p0: DualOrdinate,
    p1: DualOrdinate,
    p2: DualOrdinate,
    p3: DualOrdinate,
) -> DualOrdinate {
    let (q0, q1, q2) = reduce4_dual(u, p0, p1, p2, p3);
    let r0 = lerp_dual(u, q0, q1);
    let r1 = lerp_dual(u, q1, q2);
    lerp_dual(u, r0, r1)
}

#[inline]
pub fn evaluate_bezier0_dual(
    u: DualOrdinate,
    p1: DualOrdinate,
    p2: DualOrdinate,
    p3: DualOrdinate,
) -> DualOrdinate {
    evaluate_cubic_dual(u, DualOrdinate::constant(Ordinate::ZERO), p1, p2, p3)
}

/// Degree actually spanned by the cubic's power-basis coefficients: `3`,
/// `2`, `1`, or `0`, the last meaning the curve is constant along this
/// axis. Coefficients smaller than [`config::ACTUAL_ORDER_EPSILON`] are
/// treated as zero.
pub fn actual_order(p0: Ordinate, p1: Ordinate, p2: Ordinate, p3: Ordinate) -> u8 {
    let a3 = -p0 + p1 * Ordinate::new(3.0) - p2 * Ordinate::new(3.0) + p3;
    if a3.abs().as_f64() > config::ACTUAL_ORDER_EPSILON {
        return 3;
    }
    let a2 = (p0 - p1 * Ordinate::new(2.0) + p2) * Ordinate::new(3.0);
    if a2.abs().as_f64() > config::ACTUAL_ORDER_EPSILON {
        return 2;
    }
    let a1 = (p1 - p0) * Ordinate::new(3.0);
    if a1.abs().as_f64() > config::ACTUAL_ORDER_EPSILON {
        return 1;
    }
    0
}

/// Solve `evaluate_cubic(u, p0, p1, p2, p3) == target` for `u`, by the
/// Illinois variant of regula falsi. Clamped to the segment boundary when
/// `target` lands at or outside `p0`/`p3`.
pub fn find_u(target: Ordinate, p0: Ordinate, p1: Ordinate, p2: Ordinate, p3: Ordinate) -> f64 {
    if target.as_f64() <= p0.as_f64() {
        return 0.0;
    }
    if target.as_f64() >= p3.as_f64() {
        return 1.0;
    }

    let mut lower_u = 0.0f64;
    let mut upper_u = 1.0f64;
    let mut lower_val = (p0 - target).as_f64();
    let mut upper_val = (p3 - target).as_f64();

    for _ in 0..config::FIND_U_MAX_ITERATIONS {
        let u = lower_u + (upper_u - lower_u) * (-lower_val) / (upper_val - lower_val);
        let val = (evaluate_cubic(u, p0, p1, p2, p3) - target).as_f64();

        if val.abs() < config::FIND_U_TOLERANCE || (upper_u - lower_u).abs() < config::FIND_U_TOLERANCE {
            return u;
        }

        if val.signum() == lower_val.signum() {
            lower_u = u;
            lower_val = val;
            upper_val *= 0.5;
        } else {
            upper_u = u;
            upper_val = val;
            lower_val *= 0.5;
        }
    }

    log::warn!(
        "find_u hit the {}-iteration cap without reaching tolerance {}; returning the closer bound",
        config::FIND_U_MAX_ITERATIONS,
        config::FIND_U_TOLERANCE
    );
    if lower_val.abs() < upper_val.abs() {
        lower_u
    } else {
        upper_u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ord(v: f64) -> Ordinate {
        Ordinate::new(v)
    }

    #[test]
    fn lerp_and_invlerp_are_inverses() {
        let (a, b) = (ord(10.0), ord(20.0));
        assert_eq!(lerp(0.5, a, b), ord(15.0));
        assert_relative_eq!(invlerp(ord(15.0), a, b), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn reduce4_first_level_is_pairwise_lerp() {
        let (p0, p1, p2, p3) = (ord(0.0), ord(1.0), ord(2.0), ord(3.0));
        let (q0, _q1, _q2) = reduce4(0.5, p0, p1, p2, p3);
        assert_eq!(q0, lerp(0.5, p0, p1));
        assert_eq!(q0, ord(0.5));
    }

    #[test]
    fn bezier0_matches_cubic_power() {
        let b = evaluate_bezier0(0.5, ord(0.0), ord(0.0), ord(1.0));
        assert_relative_eq!(b.as_f64(), 0.125, epsilon = 1e-12);
    }

    #[test]
    fn bezier0_dual_matches_primal_and_derivative() {
        use crate::dual::DualOrdinate;
        let u = DualOrdinate::variable(ord(0.5));
        let (p1, p2, p3) = (
            DualOrdinate::constant(ord(0.0)),
            DualOrdinate::constant(ord(0.0)),
            DualOrdinate::constant(ord(1.0)),
        );
        let b = evaluate_bezier0_dual(u, p1, p2, p3);
        assert_relative_eq!(b.r.as_f64(), 0.125, epsilon = 1e-12);
        assert_relative_eq!(b.i.as_f64(), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn actual_order_detects_linear() {
        let (p0, p1, p2, p3) = (ord(0.0), ord(1.0), ord(2.0), ord(3.0));
        assert_eq!(actual_order(p0, p1, p2, p3), 1);
    }

    #[test]
    fn actual_order_detects_cubic_s_curve() {
        let (p0, p1, p2, p3) = (ord(0.0), ord(0.0), ord(1.0), ord(1.0));
        assert_eq!(actual_order(p0, p1, p2, p3), 3);
    }

    #[test]
    fn find_u_clamps_at_boundaries() {
        let (p0, p1, p2, p3) = (ord(0.0), ord(0.0), ord(0.0), ord(1.0));
        assert_eq!(find_u(ord(0.0), p0, p1, p2, p3), 0.0);
        assert_eq!(find_u(ord(1.0), p0, p1, p2, p3), 1.0);
    }

    #[test]
    fn find_u_solves_cubic_power() {
        let (p0, p1, p2, p3) = (ord(0.0), ord(0.0), ord(0.0), ord(1.0));
        let u = find_u(ord(0.125), p0, p1, p2, p3);
        assert_relative_eq!(u, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn dual_evaluation_derivative_matches_power_rule() {
        let u = DualOrdinate::variable(ord(0.5));
        let (p0, p1, p2, p3) = (
            DualOrdinate::constant(ord(0.0)),
            DualOrdinate::constant(ord(0.0)),
            DualOrdinate::constant(ord(0.0)),
            DualOrdinate::constant(ord(1.0)),
        );
        let b = evaluate_cubic_dual(u, p0, p1, p2, p3);
        assert_relative_eq!(b.r.as_f64(), 0.125, epsilon = 1e-12);
        assert_relative_eq!(b.i.as_f64(), 0.75, epsilon = 1e-12);
    }
}
