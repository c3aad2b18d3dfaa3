//! A knot-based polyline over the `(input, output)` plane: the piecewise
//! linear counterpart of [`crate::bezier::BezierCurve`], and the shape
//! produced by flattening one.

use crate::control_point::ControlPoint;
use crate::error::{CurveError, Result};
use crate::ordinate::Ordinate;
use serde::{Deserialize, Serialize};

/// A polyline defined by its knots, in ascending `input` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearCurve {
    pub knots: Vec<ControlPoint>,
}

impl LinearCurve {
    #[inline]
    pub fn new(knots: Vec<ControlPoint>) -> Self {
        Self { knots }
    }

    fn segment_containing(&self, input: Ordinate) -> Option<usize> {
        let x = input.as_f64();
        if self.knots.len() < 2 {
            return None;
        }
        for i in 0..self.knots.len() - 1 {
            let a = self.knots[i].input.as_f64();
            let b = self.knots[i + 1].input.as_f64();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            if x >= lo && x <= hi {
                return Some(i);
            }
        }
        None
    }

    /// Linear interpolation between the bracketing knots. `None` outside
    /// the curve's domain, or on a curve with fewer than two knots.
    pub fn output_at_input(&self, input: Ordinate) -> Option<Ordinate> {
        let i = self.segment_containing(input)?;
        let (a, b) = (self.knots[i], self.knots[i + 1]);
        if a.input.eql(b.input) {
            return Some(a.output);
        }
        let u = (input - a.input).as_f64() / (b.input - a.input).as_f64();
        Some(a.output + (b.output - a.output) * Ordinate::new(u))
    }

    /// Inverse linear interpolation: the input at a given output, valid
    /// when the curve is monotonic in output over the bracketing segment.
    pub fn input_at_output(&self, output: Ordinate) -> Option<Ordinate> {
        if self.knots.len() < 2 {
            return None;
        }
        let y = output.as_f64();
        for w in self.knots.windows(2) {
            let (a, b) = (w[0], w[1]);
            let (lo, hi) = (a.output.as_f64().min(b.output.as_f64()), a.output.as_f64().max(b.output.as_f64()));
            if y < lo || y > hi {
                continue;
            }
            if a.output.eql(b.output) {
                return Some(a.input);
            }
            let u = (output - a.output).as_f64() / (b.output - a.output).as_f64();
            return Some(a.input + (b.input - a.input) * Ordinate::new(u));
        }
        None
    }

    pub fn extents_input(&self) -> Option<(Ordinate, Ordinate)> {
        let first = self.knots.first()?;
        let last = self.knots.last()?;
        Some((first.input, last.input))
    }

    pub fn extents_output(&self) -> Option<(Ordinate, Ordinate)> {
        let mut iter = self.knots.iter();
        let first = iter.next()?;
        let (mut lo, mut hi) = (first.output, first.output);
        for k in iter {
            lo = lo.min(k.output);
            hi = hi.max(k.output);
        }
        Some((lo, hi))
    }
}

/// A [`LinearCurve`] whose knots are strictly increasing in both `input`
/// and `output`, so `output_at_input`/`input_at_output` are true inverses
/// of each other everywhere on the curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonotonicLinearCurve {
    inner: LinearCurve,
}

impl MonotonicLinearCurve {
    pub fn new(knots: Vec<ControlPoint>) -> Result<Self> {
        for w in knots.windows(2) {
            if w[1].input.as_f64() <= w[0].input.as_f64() || w[1].output.as_f64() <= w[0].output.as_f64()
            {
                return Err(CurveError::NonMonotonicKnots);
            }
        }
        Ok(Self { inner: LinearCurve::new(knots) })
    }

    #[inline]
    pub fn knots(&self) -> &[ControlPoint] {
        &self.inner.knots
    }

    #[inline]
    pub fn output_at_input(&self, input: Ordinate) -> Option<Ordinate> {
        self.inner.output_at_input(input)
    }

    #[inline]
    pub fn input_at_output(&self, output: Ordinate) -> Option<Ordinate> {
        self.inner.input_at_output(output)
    }

    #[inline]
    pub fn extents_input(&self) -> Option<(Ordinate, Ordinate)> {
        self.inner.extents_input()
    }

    #[inline]
    pub fn extents_output(&self) -> Option<(Ordinate, Ordinate)> {
        self.inner.extents_output()
    }
}
