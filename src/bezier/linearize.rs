//! Flattening a Bezier segment/curve into a polyline within a tolerance.

use super::hodograph::split_on_critical_points;
use super::segment::BezierSegment;
use crate::config;
use crate::control_point::ControlPoint;

/// Flatness test: true when the deviation of the control points from the
/// chord `p0`-`p3` is within `tolerance` (spec's literal `<= tolerance`
/// criterion on `max(ux^2, vx^2) + max(uy^2, vy^2)`, not a scaled bound).
pub fn is_approximately_linear(seg: &BezierSegment, tolerance: f64) -> bool {
    let ux = (3.0 * seg.p1.input.as_f64() - 2.0 * seg.p0.input.as_f64() - seg.p3.input.as_f64()).powi(2);
    let uy = (3.0 * seg.p1.output.as_f64() - 2.0 * seg.p0.output.as_f64() - seg.p3.output.as_f64()).powi(2);
    let vx = (3.0 * seg.p2.input.as_f64() - seg.p0.input.as_f64() - 2.0 * seg.p3.input.as_f64()).powi(2);
    let vy = (3.0 * seg.p2.output.as_f64() - seg.p0.output.as_f64() - 2.0 * seg.p3.output.as_f64()).powi(2);

    let x = ux.max(vx);
    let y = uy.max(vy);
    x + y <= tolerance
}

/// Flatten a single segment (already assumed monotone/inflection-free) to
/// a polyline within `tolerance`, by recursive subdivision at `u = 0.5`.
/// Recursion is capped at [`config::LINEARIZE_MAX_RECURSION_DEPTH`] as a
/// safety belt against runaway subdivision on pathological input.
pub fn linearize_segment(seg: &BezierSegment, tolerance: f64) -> Vec<ControlPoint> {
    let mut out = vec![seg.p0];
    linearize_recursive(seg, tolerance, config::LINEARIZE_MAX_RECURSION_DEPTH, &mut out);
    out
}

fn linearize_recursive(seg: &BezierSegment, tolerance: f64, depth: usize, out: &mut Vec<ControlPoint>) {
    if depth == 0 || is_approximately_linear(seg, tolerance) {
        out.push(seg.p3);
        return;
    }
    let (left, right) = seg
        .split_at(0.5)
        .expect("0.5 is strictly interior to every non-degenerate segment");
    linearize_recursive(&left, tolerance, depth - 1, out);
    linearize_recursive(&right, tolerance, depth - 1, out);
}

/// Flatten a segment to a polyline, first splitting it into monotone,
/// inflection-free pieces so the recursive subdivision below never has to
/// approximate across a critical point.
pub fn linearize(seg: &BezierSegment, tolerance: f64) -> Vec<ControlPoint> {
    let pieces = split_on_critical_points(seg);
    let mut out: Vec<ControlPoint> = Vec::new();
    for piece in pieces {
        let mut pts = linearize_segment(&piece, tolerance);
        if let (Some(last), Some(first)) = (out.last(), pts.first()) {
            if last == first {
                pts.remove(0);
            }
        }
        out.extend(pts);
    }
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
    fn identity_segment_is_linear_even_at_tight_tolerance() {
        let seg = BezierSegment::init_identity();
        assert!(is_approximately_linear(&seg, 1e-9));
    }

    #[test]
    fn s_curve_is_not_linear_even_at_loose_tolerance() {
        let seg = BezierSegment::new(cp(0.0, 0.0), cp(0.0, 1.0), cp(1.0, -1.0), cp(1.0, 0.0));
        assert!(!is_approximately_linear(&seg, 0.1));
    }

    #[test]
    fn linearize_identity_segment_is_two_points() {
        let seg = BezierSegment::init_identity();
        let pts = linearize(&seg, 1e-3);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], seg.p0);
        assert_eq!(*pts.last().unwrap(), seg.p3);
    }

    #[test]
    fn finer_tolerance_never_yields_fewer_points() {
        let seg = BezierSegment::new(cp(0.0, 0.0), cp(0.0, 1.0), cp(1.0, -1.0), cp(1.0, 0.0));
        let coarse = linearize_segment(&seg, 0.1);
        let fine = linearize_segment(&seg, 1e-5);
        assert!(fine.len() >= coarse.len());
    }

    #[test]
    fn linearize_endpoints_match_segment_endpoints() {
        let seg = BezierSegment::new(cp(0.0, 0.0), cp(0.0, 1.0), cp(1.0, -1.0), cp(1.0, 0.0));
        let pts = linearize(&seg, 1e-4);
        assert_eq!(*pts.first().unwrap(), seg.p0);
        assert_eq!(*pts.last().unwrap(), seg.p3);
    }
}
