//! Forward-mode automatic differentiation via dual numbers.

use crate::ordinate::Ordinate;
use serde::{Deserialize, Serialize};

/// A dual ordinate: `r` is the value, `i` is the derivative (infinitesimal
/// part) carried alongside it.
///
/// Arithmetic on `DualOrdinate` propagates the derivative through the
/// expression by standard dual-number rules, discarding higher-order
/// infinitesimals (`i^2 == 0`). Comparison considers `r` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DualOrdinate {
    pub r: Ordinate,
    pub i: Ordinate,
}

impl DualOrdinate {
    /// A constant: value `r`, derivative zero.
    #[inline]
    pub fn constant(r: Ordinate) -> Self {
        Self { r, i: Ordinate::ZERO }
    }

    /// The variable of differentiation: value `r`, derivative one.
    #[inline]
    pub fn variable(r: Ordinate) -> Self {
        Self { r, i: Ordinate::ONE }
    }

    #[inline]
    pub fn new(r: Ordinate, i: Ordinate) -> Self {
        Self { r, i }
    }

    #[inline]
    pub fn neg(&self) -> Self {
        Self { r: -self.r, i: -self.i }
    }

    /// `d/du sqrt(r) = i / (2 sqrt(r))`.
    #[inline]
    pub fn sqrt(&self) -> Self {
        let sqrt_r = self.r.sqrt();
        Self {
            r: sqrt_r,
            i: self.i / (sqrt_r * Ordinate::new(2.0)),
        }
    }

    /// `d/du cos(r) = -i sin(r)`.
    #[inline]
    pub fn cos(&self) -> Self {
        Self {
            r: Ordinate::new(self.r.as_f64().cos()),
            i: -self.i * Ordinate::new(self.r.as_f64().sin()),
        }
    }

    /// `d/du acos(r) = -i / sqrt(1 - r^2)`.
    #[inline]
    pub fn acos(&self) -> Self {
        let r_sq = self.r * self.r;
        Self {
            r: Ordinate::new(self.r.as_f64().acos()),
            i: -self.i / Ordinate::new((Ordinate::ONE - r_sq).as_f64().sqrt()),
        }
    }

    /// `d/du r^y = i * y * r^(y-1)` (power rule).
    #[inline]
    pub fn pow(&self, y: f64) -> Self {
        Self {
            r: self.r.pow(y),
            i: self.i * Ordinate::new(y) * self.r.pow(y - 1.0),
        }
    }

    #[inline]
    pub fn add(&self, rhs: DualOrdinate) -> Self {
        Self { r: self.r + rhs.r, i: self.i + rhs.i }
    }

    #[inline]
    pub fn add_ord(&self, rhs: Ordinate) -> Self {
        Self { r: self.r + rhs, i: self.i }
    }

    #[inline]
    pub fn sub(&self, rhs: DualOrdinate) -> Self {
        Self { r: self.r - rhs.r, i: self.i - rhs.i }
    }

    #[inline]
    pub fn sub_ord(&self, rhs: Ordinate) -> Self {
        Self { r: self.r - rhs, i: self.i }
    }

    /// `(a + bi)(c + di) = ac + (ad + bc)i`.
    #[inline]
    pub fn mul(&self, rhs: DualOrdinate) -> Self {
        Self {
            r: self.r * rhs.r,
            i: self.r * rhs.i + self.i * rhs.r,
        }
    }

    #[inline]
    pub fn mul_ord(&self, rhs: Ordinate) -> Self {
        Self { r: self.r * rhs, i: self.i * rhs }
    }

    #[inline]
    pub fn div(&self, rhs: DualOrdinate) -> Self {
        let r_sq = rhs.r * rhs.r;
        Self {
            r: self.r / rhs.r,
            i: (rhs.r * self.i - self.r * rhs.i) / r_sq,
        }
    }

    #[inline]
    pub fn div_ord(&self, rhs: Ordinate) -> Self {
        Self { r: self.r / rhs, i: self.i / rhs }
    }

    #[inline]
    pub fn lt(&self, rhs: DualOrdinate) -> bool {
        self.r < rhs.r
    }

    #[inline]
    pub fn gt(&self, rhs: DualOrdinate) -> bool {
        self.r > rhs.r
    }
}

impl std::ops::Neg for DualOrdinate {
    type Output = DualOrdinate;
    #[inline]
    fn neg(self) -> DualOrdinate {
        DualOrdinate::neg(&self)
    }
}

impl std::ops::Add for DualOrdinate {
    type Output = DualOrdinate;
    #[inline]
    fn add(self, rhs: DualOrdinate) -> DualOrdinate {
        DualOrdinate::add(&self, rhs)
    }
}

impl std::ops::Sub for DualOrdinate {
    type Output = DualOrdinate;
    #[inline]
    fn sub(self, rhs: DualOrdinate) -> DualOrdinate {
        DualOrdinate::sub(&self, rhs)
    }
}

impl std::ops::Mul for DualOrdinate {
    type Output = DualOrdinate;
    #[inline]
    fn mul(self, rhs: DualOrdinate) -> DualOrdinate {
        DualOrdinate::mul(&self, rhs)
    }
}

impl std::ops::Div for DualOrdinate {
    type Output = DualOrdinate;
    #[inline]
    fn div(self, rhs: DualOrdinate) -> DualOrdinate {
        DualOrdinate::div(&self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn multiplication_discards_second_order_infinitesimals() {
        let a = DualOrdinate::new(Ordinate::new(2.0), Ordinate::new(3.0));
        let b = DualOrdinate::new(Ordinate::new(4.0), Ordinate::new(5.0));
        let p = a * b;
        assert_relative_eq!(p.r.as_f64(), 8.0);
        // ad + bc = 2*5 + 3*4 = 22
        assert_relative_eq!(p.i.as_f64(), 22.0);
    }

    #[test]
    fn derivative_of_square_matches_power_rule() {
        let x = DualOrdinate::variable(Ordinate::new(3.0));
        let squared = x * x;
        assert_relative_eq!(squared.r.as_f64(), 9.0);
        assert_relative_eq!(squared.i.as_f64(), 6.0);
    }

    #[test]
    fn comparison_uses_real_part_only() {
        let a = DualOrdinate::new(Ordinate::new(1.0), Ordinate::new(100.0));
        let b = DualOrdinate::new(Ordinate::new(2.0), Ordinate::new(-100.0));
        assert!(a.lt(b));
        assert!(b.gt(a));
    }

    #[test]
    fn sqrt_derivative() {
        let x = DualOrdinate::variable(Ordinate::new(4.0));
        let s = x.sqrt();
        assert_relative_eq!(s.r.as_f64(), 2.0);
        assert_relative_eq!(s.i.as_f64(), 0.25);
    }
}
