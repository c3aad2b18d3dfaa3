//! A right-open `[start, end)` interval of ordinates.

use crate::error::{CurveError, Result};
use crate::ordinate::Ordinate;
use serde::{Deserialize, Serialize};

/// Right-open interval `[start, end)` in a continuous metric space.
///
/// Equal endpoints form an *instant*, which overlaps only the point equal
/// to `start`. Infinite endpoints are allowed; the duration of any interval
/// with an infinite endpoint is `+inf`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousInterval {
    pub start: Ordinate,
    pub end: Ordinate,
}

impl ContinuousInterval {
    #[inline]
    pub fn new(start: Ordinate, end: Ordinate) -> Self {
        Self { start, end }
    }

    /// `[0, +inf)`.
    #[inline]
    pub fn zero_to_inf_pos() -> Self {
        Self { start: Ordinate::ZERO, end: Ordinate::infinity() }
    }

    /// `[-inf, +inf)`.
    #[inline]
    pub fn inf_neg_to_pos() -> Self {
        Self { start: Ordinate::neg_infinity(), end: Ordinate::infinity() }
    }

    /// Construct from a start ordinate and a non-negative duration.
    pub fn from_start_duration(start: Ordinate, duration: Ordinate) -> Result<Self> {
        if duration.as_f64() < 0.0 {
            return Err(CurveError::NegativeDuration { duration: duration.as_f64() });
        }
        Ok(Self { start, end: start + duration })
    }

    /// `+inf` if either endpoint is infinite, else `end - start`.
    #[inline]
    pub fn duration(&self) -> Ordinate {
        if self.start.is_inf() || self.end.is_inf() {
            return Ordinate::infinity();
        }
        self.end - self.start
    }

    /// True iff `ord` lies in `[start, end)`, with the instant special case.
    #[inline]
    pub fn overlaps(&self, ord: Ordinate) -> bool {
        let is_instant = self.start.eql(self.end);
        if is_instant && self.start.eql(ord) {
            return true;
        }
        ord >= self.start && ord < self.end
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.start.is_inf() || self.end.is_inf()
    }

    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start.eql(self.end)
    }

    /// `[min(starts), max(ends))`.
    #[inline]
    pub fn extend(&self, other: ContinuousInterval) -> ContinuousInterval {
        ContinuousInterval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// True iff the two intervals share any point, with instants handled on
    /// either side.
    pub fn any_overlap(&self, other: ContinuousInterval) -> bool {
        let self_is_instant = self.is_instant();
        let other_is_instant = other.is_instant();

        if self_is_instant && self.start >= other.start && self.start < other.end {
            return true;
        }
        if other_is_instant && other.start >= self.start && other.start < self.end {
            return true;
        }
        if self_is_instant && other_is_instant && self.start.eql(other.start) {
            return true;
        }

        self.start < other.end && self.end > other.start
    }

    /// `Some([max(starts), min(ends)))` iff the intervals overlap.
    pub fn intersect(&self, other: ContinuousInterval) -> Option<ContinuousInterval> {
        if !self.any_overlap(other) {
            return None;
        }
        Some(ContinuousInterval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}
