//! Tagged result of projecting a coordinate through a curve.

use crate::interval::ContinuousInterval;
use crate::ordinate::Ordinate;

/// The outcome of projecting an ordinate or interval through a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionResult {
    SuccessOrdinate(Ordinate),
    SuccessInterval(ContinuousInterval),
    OutOfBounds,
}

impl ProjectionResult {
    #[inline]
    pub fn success_ordinate(ord: Ordinate) -> Self {
        ProjectionResult::SuccessOrdinate(ord)
    }

    #[inline]
    pub fn success_interval(interval: ContinuousInterval) -> Self {
        ProjectionResult::SuccessInterval(interval)
    }

    #[inline]
    pub fn out_of_bounds() -> Self {
        ProjectionResult::OutOfBounds
    }

    /// `Some(ordinate)` iff this is a `SuccessOrdinate`.
    #[inline]
    pub fn as_ordinate(&self) -> Option<Ordinate> {
        match self {
            ProjectionResult::SuccessOrdinate(o) => Some(*o),
            _ => None,
        }
    }

    /// `Some(interval)` iff this is a `SuccessInterval`.
    #[inline]
    pub fn as_interval(&self) -> Option<ContinuousInterval> {
        match self {
            ProjectionResult::SuccessInterval(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ProjectionResult::OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let o = ProjectionResult::success_ordinate(Ordinate::new(1.0));
        assert_eq!(o.as_ordinate(), Some(Ordinate::new(1.0)));
        assert_eq!(o.as_interval(), None);
        assert!(!o.is_out_of_bounds());

        let oob = ProjectionResult::out_of_bounds();
        assert!(oob.is_out_of_bounds());
        assert_eq!(oob.as_ordinate(), None);
    }
}
