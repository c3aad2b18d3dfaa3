//! Hodographs (derivative curves), extrema, and inflection points.
//!
//! A [`BezierSegment`] is a parametric curve in the `(input, output)`
//! plane, so its control points double as 2D vectors here: "y" below
//! always means `.output`, "x" always means `.input`.

use super::segment::BezierSegment;
use crate::config;
use crate::control_point::ControlPoint;
use crate::ordinate::Ordinate;

/// The quadratic derivative curve of a cubic segment, still parameterized
/// by the same `u in [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hodograph {
    pub p0: ControlPoint,
    pub p1: ControlPoint,
    pub p2: ControlPoint,
}

/// Up to two roots in `(0, 1)`, replacing the source material's `-1.0`
/// sentinel for "no root" with an explicit count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Roots {
    values: [f64; 2],
    count: u8,
}

impl Roots {
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn one(v: f64) -> Self {
        Self { values: [v, 0.0], count: 1 }
    }

    #[inline]
    pub fn two(a: f64, b: f64) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self { values: [lo, hi], count: 2 }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.count as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Forward-difference derivative: `H_i = 3 (P_{i+1} - P_i)`.
pub fn compute_hodograph(seg: &BezierSegment) -> Hodograph {
    let diff = |a: ControlPoint, b: ControlPoint| {
        ControlPoint::new((b.input - a.input) * Ordinate::new(3.0), (b.output - a.output) * Ordinate::new(3.0))
    };
    Hodograph {
        p0: diff(seg.p0, seg.p1),
        p1: diff(seg.p1, seg.p2),
        p2: diff(seg.p2, seg.p3),
    }
}

/// Reconstruct the cubic that has this hodograph as its derivative,
/// anchored at `p0` (integration loses the constant of integration, which
/// the derivative alone cannot recover).
pub fn from_hodograph(h: &Hodograph, p0: ControlPoint) -> BezierSegment {
    let third = Ordinate::new(1.0 / 3.0);
    let p1 = ControlPoint::new(p0.input + h.p0.input * third, p0.output + h.p0.output * third);
    let p2 = ControlPoint::new(p1.input + h.p1.input * third, p1.output + h.p1.output * third);
    let p3 = ControlPoint::new(p2.input + h.p2.input * third, p2.output + h.p2.output * third);
    BezierSegment::new(p0, p1, p2, p3)
}

fn clamp_open_unit(roots: &[f64]) -> Vec<f64> {
    roots.iter().copied().filter(|r| *r > 0.0 && *r < 1.0).collect()
}

/// Parameter values where the segment's output stops increasing or
/// decreasing (extrema of the `output` axis as a function of `u`).
pub fn bezier_roots(h: &Hodograph) -> Roots {
    let a = (h.p0.output - h.p1.output * Ordinate::new(2.0) + h.p2.output).as_f64();
    let b = 2.0 * (h.p1.output - h.p0.output).as_f64();
    let c = h.p0.output.as_f64();

    if a.abs() <= config::BEZIER_ROOTS_LINEAR_EPSILON {
        log::debug!("bezier_roots: quadratic term negligible, falling back to the linear root");
        if b.abs() <= config::BEZIER_ROOTS_LINEAR_EPSILON {
            return Roots::none();
        }
        let kept = clamp_open_unit(&[-c / b]);
        return kept.first().map(|&v| Roots::one(v)).unwrap_or_else(Roots::none);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Roots::none();
    }
    let sqrt_d = discriminant.sqrt();
    let r1 = (-b + sqrt_d) / (2.0 * a);
    let r2 = (-b - sqrt_d) / (2.0 * a);
    let kept = clamp_open_unit(&[r1, r2]);
    match kept.len() {
        0 => Roots::none(),
        1 => Roots::one(kept[0]),
        _ => Roots::two(kept[0], kept[1]),
    }
}

/// Translate `p0` to the origin and rotate so `p3` lands on the positive
/// x-axis. `u`-parameterized roots are invariant under this transform, so
/// it's a convenience for the inflection-point formula below, not a
/// general-purpose segment transform.
pub fn align_bezier(seg: &BezierSegment) -> BezierSegment {
    let x0 = seg.p0.input.as_f64();
    let y0 = seg.p0.output.as_f64();

    let translated = |p: ControlPoint| (p.input.as_f64() - x0, p.output.as_f64() - y0);
    let (p1x, p1y) = translated(seg.p1);
    let (p2x, p2y) = translated(seg.p2);
    let (p3x, p3y) = translated(seg.p3);

    let angle = p3y.atan2(p3x);
    let (sin_a, cos_a) = (-angle).sin_cos();
    let rotate = |x: f64, y: f64| (x * cos_a - y * sin_a, x * sin_a + y * cos_a);

    let (rp1x, rp1y) = rotate(p1x, p1y);
    let (rp2x, rp2y) = rotate(p2x, p2y);
    let (rp3x, rp3y) = rotate(p3x, p3y);

    BezierSegment::new(
        ControlPoint::new(Ordinate::ZERO, Ordinate::ZERO),
        ControlPoint::new(Ordinate::new(rp1x), Ordinate::new(rp1y)),
        ControlPoint::new(Ordinate::new(rp2x), Ordinate::new(rp2y)),
        ControlPoint::new(Ordinate::new(rp3x), Ordinate::new(rp3y)),
    )
}

/// Inflection points of a cubic segment (where curvature changes sign).
/// Quadratic segments have no well-defined inflection and are out of
/// scope here, matching the source material.
pub fn inflection_points(seg: &BezierSegment) -> Roots {
    let aligned = align_bezier(seg);
    let (p1x, p1y) = (aligned.p1.input.as_f64(), aligned.p1.output.as_f64());
    let (p2x, p2y) = (aligned.p2.input.as_f64(), aligned.p2.output.as_f64());
    let (p3x, _p3y) = (aligned.p3.input.as_f64(), aligned.p3.output.as_f64());

    let a = p2x * p1y;
    let b = p3x * p1y;
    let c = p1x * p2y;
    let d = p3x * p2y;

    let x = -3.0 * a + 2.0 * b + 3.0 * c - d;
    let y = 3.0 * a - b - 3.0 * c;
    let z = c - a;

    if x.abs() < 1e-6 {
        log::debug!("inflection_points: cubic term negligible, solving the linear fallback");
        if y.abs() > 1e-6 {
            let kept = clamp_open_unit(&[-z / y]);
            return kept.first().map(|&v| Roots::one(v)).unwrap_or_else(Roots::none);
        }
        return Roots::none();
    }

    let discriminant = y * y - 4.0 * x * z;
    if discriminant < 0.0 {
        return Roots::none();
    }
    let sqrt_d = discriminant.sqrt();
    let r1 = (-y + sqrt_d) / (2.0 * x);
    let r2 = (-y - sqrt_d) / (2.0 * x);
    let kept = clamp_open_unit(&[r1, r2]);
    match kept.len() {
        0 => Roots::none(),
        1 => Roots::one(kept[0]),
        _ => Roots::two(kept[0], kept[1]),
    }
}

/// Split a segment at every extremum and inflection point, yielding
/// monotone, inflection-free sub-segments that together reconstruct the
/// original curve.
pub fn split_on_critical_points(seg: &BezierSegment) -> Vec<BezierSegment> {
    let hodograph = compute_hodograph(seg);
    let mut candidates: Vec<f64> = Vec::new();
    candidates.extend_from_slice(bezier_roots(&hodograph).as_slice());
    candidates.extend_from_slice(inflection_points(seg).as_slice());
    candidates.sort_by(|a, b| a.partial_cmp(b).unwrap());
    candidates.dedup_by(|a, b| (*a - *b).abs() < config::EPSILON);

    if candidates.is_empty() {
        log::debug!("split_on_critical_points: no critical points, segment is already monotone");
        return vec![*seg];
    }

    let mut out = Vec::with_capacity(candidates.len() + 1);
    let mut remainder = *seg;
    let mut prev_u = 0.0f64;
    for &u_global in &candidates {
        let local_u = (u_global - prev_u) / (1.0 - prev_u);
        if local_u <= 0.0 || local_u >= 1.0 {
            continue;
        }
        if let Some((left, right)) = remainder.split_at(local_u) {
            out.push(left);
            remainder = right;
            prev_u = u_global;
        }
    }
    out.push(remainder);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordinate::Ordinate;

    fn cp(input: f64, output: f64) -> ControlPoint {
        ControlPoint::new(Ordinate::new(input), Ordinate::new(output))
    }

    #[test]
    fn hodograph_of_a_line_is_constant() {
        let seg = BezierSegment::init_identity();
        let h = compute_hodograph(&seg);
        assert_eq!(h.p0, h.p1);
        assert_eq!(h.p1, h.p2);
    }

    #[test]
    fn from_hodograph_reconstructs_the_segment() {
        use approx::assert_relative_eq;
        let seg = BezierSegment::new(cp(0.0, 0.0), cp(0.3, 0.7), cp(0.6, 0.1), cp(1.0, 1.0));
        let h = compute_hodograph(&seg);
        let rebuilt = from_hodograph(&h, seg.p0);
        for (a, b) in seg.control_points().iter().zip(rebuilt.control_points().iter()) {
            assert_relative_eq!(a.input.as_f64(), b.input.as_f64(), epsilon = 1e-9);
            assert_relative_eq!(a.output.as_f64(), b.output.as_f64(), epsilon = 1e-9);
        }
    }

    #[test]
    fn linear_segment_has_no_critical_points() {
        let seg = BezierSegment::init_identity();
        assert_eq!(split_on_critical_points(&seg).len(), 1);
    }

    #[test]
    fn s_curve_splits_at_its_extremum() {
        // Overshooting S-curve: output dips below p0 and above p3 before
        // settling, giving the hodograph a root strictly inside (0, 1).
        let seg = BezierSegment::new(cp(0.0, 0.0), cp(0.33, 1.0), cp(0.66, -1.0), cp(1.0, 0.0));
        let pieces = split_on_critical_points(&seg);
        assert!(pieces.len() > 1);
        for w in pieces.windows(2) {
            assert_eq!(w[0].p3, w[1].p0);
        }
        assert_eq!(pieces.first().unwrap().p0, seg.p0);
        assert_eq!(pieces.last().unwrap().p3, seg.p3);
    }

    #[test]
    fn bezier_roots_finds_the_upside_down_u_extremum() {
        let seg = BezierSegment::new(cp(0.0, 0.0), cp(0.5, 1.0), cp(0.5, 1.0), cp(1.0, 0.0));
        let h = compute_hodograph(&seg);
        let roots = bezier_roots(&h);
        assert!(!roots.is_empty());
        for &r in roots.as_slice() {
            assert!(r > 0.0 && r < 1.0);
        }
    }
}
