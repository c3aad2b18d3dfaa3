//! Affine 1D transform: `y = x * scale + offset`.

use crate::error::{CurveError, Result};
use crate::interval::ContinuousInterval;
use crate::ordinate::Ordinate;
use serde::{Deserialize, Serialize};

/// Homogeneous 1D affine transform, applied as `y = x * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform1D {
    pub offset: Ordinate,
    pub scale: Ordinate,
}

impl AffineTransform1D {
    pub const IDENTITY: AffineTransform1D = AffineTransform1D {
        offset: Ordinate::ZERO,
        scale: Ordinate::ONE,
    };

    #[inline]
    pub fn new(offset: Ordinate, scale: Ordinate) -> Self {
        Self { offset, scale }
    }

    #[inline]
    pub fn applied_to_ordinate(&self, ord: Ordinate) -> Ordinate {
        ord * self.scale + self.offset
    }

    #[inline]
    pub fn applied_to_interval(&self, cint: ContinuousInterval) -> ContinuousInterval {
        ContinuousInterval {
            start: self.applied_to_ordinate(cint.start),
            end: self.applied_to_ordinate(cint.end),
        }
    }

    /// Transform bounds, swapping endpoints when `scale < 0` so that
    /// `start < end` holds in the result.
    #[inline]
    pub fn applied_to_bounds(&self, bounds: ContinuousInterval) -> ContinuousInterval {
        if self.scale.as_f64() < 0.0 {
            return ContinuousInterval {
                start: self.applied_to_ordinate(bounds.end),
                end: self.applied_to_ordinate(bounds.start),
            };
        }
        self.applied_to_interval(bounds)
    }

    /// Composition: `self ∘ rhs`, i.e. apply `rhs` then `self`.
    #[inline]
    pub fn applied_to_transform(&self, rhs: AffineTransform1D) -> AffineTransform1D {
        AffineTransform1D {
            offset: self.applied_to_ordinate(rhs.offset),
            scale: rhs.scale * self.scale,
        }
    }

    /// Inverse transform. Requires `scale != 0`.
    pub fn inverted(&self) -> Result<AffineTransform1D> {
        if self.scale.eql(Ordinate::ZERO) {
            return Err(CurveError::SingularTransform);
        }
        Ok(AffineTransform1D {
            offset: -self.offset / self.scale,
            scale: Ordinate::ONE / self.scale,
        })
    }
}

impl Default for AffineTransform1D {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
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
    fn identity_is_a_no_op() {
        let t = AffineTransform1D::IDENTITY;
        assert_eq!(t.applied_to_ordinate(ord(3.0)), ord(3.0));
    }

    #[test]
    fn applied_to_bounds_swaps_on_negative_scale() {
        let t = AffineTransform1D::new(ord(0.0), ord(-1.0));
        let b = ContinuousInterval::new(ord(0.0), ord(1.0));
        let out = t.applied_to_bounds(b);
        assert!(out.start < out.end);
        assert_eq!(out.start, ord(-1.0));
        assert_eq!(out.end, ord(0.0));
    }

    #[test]
    fn inverted_composes_to_identity() {
        let t = AffineTransform1D::new(ord(2.0), ord(3.0));
        let inv = t.inverted().unwrap();
        let composed = t.applied_to_transform(inv);
        assert_relative_eq!(composed.offset.as_f64(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(composed.scale.as_f64(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn inverted_round_trips_a_point() {
        let t = AffineTransform1D::new(ord(1.0), ord(2.0));
        let inv = t.inverted().unwrap();
        let x = ord(7.0);
        let y = t.applied_to_ordinate(x);
        assert_relative_eq!(inv.applied_to_ordinate(y).as_f64(), x.as_f64(), epsilon = 1e-9);
    }

    #[test]
    fn singular_transform_rejected() {
        let t = AffineTransform1D::new(ord(1.0), ord(0.0));
        assert_eq!(t.inverted(), Err(CurveError::SingularTransform));
    }
}
