//! A chain of [`BezierSegment`]s forming one piecewise curve, monotone in
//! `input` end-to-end.

use super::linearize;
use super::segment::{BezierSegment, TrimSide};
use crate::affine::AffineTransform1D;
use crate::control_point::ControlPoint;
use crate::ordinate::Ordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    pub segments: Vec<BezierSegment>,
}

impl BezierCurve {
    #[inline]
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    #[inline]
    pub fn from_segments(segments: Vec<BezierSegment>) -> Self {
        Self { segments }
    }

    /// Index of the segment whose `input` range contains `input`, with
    /// ties at a seam resolved to the earlier segment. `None` if `input`
    /// is outside the curve's domain or the curve is empty.
    pub fn find_segment_index(&self, input: Ordinate) -> Option<usize> {
        let x = input.as_f64();
        for (i, seg) in self.segments.iter().enumerate() {
            let a = seg.p0.input.as_f64();
            let b = seg.p3.input.as_f64();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            if x >= lo && x <= hi {
                return Some(i);
            }
        }
        None
    }

    /// The output at a given input ordinate, or `None` outside the
    /// curve's domain.
    pub fn output_at_input(&self, input: Ordinate) -> Option<Ordinate> {
        let idx = self.find_segment_index(input)?;
        Some(self.segments[idx].output_at_input(input))
    }

    /// Conservative `(input, output)` bounds spanning every segment's
    /// endpoints.
    pub fn extents(&self) -> Option<(ControlPoint, ControlPoint)> {
        let mut iter = self.segments.iter();
        let first = iter.next()?;
        let (mut lo, mut hi) = first.extents();
        for seg in iter {
            let (seg_lo, seg_hi) = seg.extents();
            lo = ControlPoint::new(lo.input.min(seg_lo.input), lo.output.min(seg_lo.output));
            hi = ControlPoint::new(hi.input.max(seg_hi.input), hi.output.max(seg_hi.output));
        }
        Some((lo, hi))
    }

    #[inline]
    pub fn extents_input(&self) -> Option<(Ordinate, Ordinate)> {
        self.extents().map(|(lo, hi)| (lo.input, hi.input))
    }

    #[inline]
    pub fn extents_output(&self) -> Option<(Ordinate, Ordinate)> {
        self.extents().map(|(lo, hi)| (lo.output, hi.output))
    }

    /// Apply an affine transform to the input axis of every segment,
    /// shifting/scaling the curve's input coordinate system.
    pub fn project_affine(&self, xform: AffineTransform1D) -> BezierCurve {
        BezierCurve {
            segments: self.segments.iter().map(|s| s.project_affine(xform)).collect(),
        }
    }

    /// Split the curve into two curves at a global input ordinate. `None`
    /// if the ordinate is outside the curve's domain.
    pub fn split_at_input_ordinate(&self, input: Ordinate) -> Option<(BezierCurve, BezierCurve)> {
        let idx = self.find_segment_index(input)?;
        let seg = &self.segments[idx];

        if input.as_f64() == seg.p0.input.as_f64() {
            let left = BezierCurve::from_segments(self.segments[..idx].to_vec());
            let right = BezierCurve::from_segments(self.segments[idx..].to_vec());
            return Some((left, right));
        }
        if input.as_f64() == seg.p3.input.as_f64() {
            let left = BezierCurve::from_segments(self.segments[..=idx].to_vec());
            let right = BezierCurve::from_segments(self.segments[idx + 1..].to_vec());
            return Some((left, right));
        }

        let (left_seg, right_seg) = seg.split_at_input_ordinate(input)?;
        let mut left_segments = self.segments[..idx].to_vec();
        left_segments.push(left_seg);
        let mut right_segments = vec![right_seg];
        right_segments.extend_from_slice(&self.segments[idx + 1..]);
        Some((BezierCurve::from_segments(left_segments), BezierCurve::from_segments(right_segments)))
    }

    /// Split at every ordinate in `inputs`, in any order, producing a
    /// curve with one extra seam per ordinate that actually falls inside
    /// an existing segment.
    pub fn split_at_each_input_ordinate(&self, inputs: &[Ordinate]) -> BezierCurve {
        let mut sorted: Vec<f64> = inputs.iter().map(|o| o.as_f64()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut curve = self.clone();
        for x in sorted {
            if let Some((left, right)) = curve.split_at_input_ordinate(Ordinate::new(x)) {
                let mut segments = left.segments;
                segments.extend(right.segments);
                curve = BezierCurve::from_segments(segments);
            }
        }
        curve
    }

    /// Keep only the part of the curve before/after `input`.
    pub fn trimmed_from_input_ordinate(&self, input: Ordinate, side: TrimSide) -> Option<BezierCurve> {
        let (left, right) = self.split_at_input_ordinate(input)?;
        Some(match side {
            TrimSide::Before => right,
            TrimSide::After => left,
        })
    }

    /// Keep only the part of the curve within `[start, end]`.
    pub fn trimmed_in_input_space(&self, start: Ordinate, end: Ordinate) -> Option<BezierCurve> {
        let after_start = self.trimmed_from_input_ordinate(start, TrimSide::Before).unwrap_or_else(|| self.clone());
        after_start.trimmed_from_input_ordinate(end, TrimSide::After).or(Some(after_start))
    }

    /// Flatten the whole curve into one polyline, splitting each segment
    /// at its critical points first and dropping duplicate seams between
    /// segments.
    pub fn linearize(&self, tolerance: f64) -> Vec<ControlPoint> {
        let mut out: Vec<ControlPoint> = Vec::new();
        for seg in &self.segments {
            let mut pts = linearize::linearize(seg, tolerance);
            if let (Some(last), Some(first)) = (out.last(), pts.first()) {
                if last == first {
                    pts.remove(0);
                }
            }
            out.extend(pts);
        }
        out
    }
}
