//! Arbitrary precision rational numbers.
//!
//! Exact arithmetic; the only inexact operation is [`Rational::sqrt`], which
//! is an integer square root over a scaled radicand and is exact whenever the
//! input is the square of a rational.

use dashu::base::{Abs, BitTest, Inverse, Signed, SquareRoot, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;

use crate::Integer;

/// Minimum bit length of the scaled radicand in [`Rational::sqrt`].
const SQRT_BITS: usize = 128;

/// An arbitrary precision rational, kept in lowest terms with a positive
/// denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

forward_binop!(Rational, Add, add);
forward_binop!(Rational, Sub, sub);
forward_binop!(Rational, Mul, mul);
forward_binop!(Rational, Div, div);
forward_neg!(Rational);

impl Rational {
    /// `numerator / denominator`, normalized.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "rational with zero denominator");
        let flip = denominator.is_negative();
        let value = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        Self(if flip { -value } else { value })
    }

    /// `numerator / denominator` from machine integers.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Exact value of a finite `f64`; `None` for NaN and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        RBig::try_from(value).ok().map(Self)
    }

    /// The reduced numerator, carrying the sign.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// The reduced, positive denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// True for values below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        Signed::is_negative(&self.0)
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics on zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Square root, truncated toward zero.
    ///
    /// For `p/q` in lowest terms the root is `isqrt(p * q * 4^s) / (q * 2^s)`,
    /// with `s` chosen so the radicand carries at least 128 bits. Squares of
    /// rationals come back exact and positive input never yields zero, however
    /// large or small. Zero and negative input yield zero.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        if self.is_negative() || self.is_zero() {
            return Self::zero();
        }
        let denominator = self.0.denominator().clone();
        let product = self.0.numerator().clone().unsigned_abs() * &denominator;
        let shift = SQRT_BITS.saturating_sub(product.bit_len()) / 2 + 1;
        let root = SquareRoot::sqrt(&(product << (2 * shift)));
        Self(RBig::from_parts(IBig::from(root), denominator << shift))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let denominator = self.denominator();
        if denominator.is_one() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{denominator}", self.numerator())
        }
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Self(RBig::from(value.into_inner()))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self(RBig::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let r = Rational::from_i64(4, -6);
        assert!(r.is_negative());
        assert_eq!(r.numerator().to_i64(), Some(-2));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_field_ops() {
        let half = Rational::from_i64(1, 2);
        let third = Rational::from_i64(1, 3);
        assert_eq!(half.clone() + &third, Rational::from_i64(5, 6));
        assert_eq!(half.clone() - third.clone(), Rational::from_i64(1, 6));
        assert_eq!(half.clone() / third, Rational::from_i64(3, 2));
        assert_eq!(half.recip(), Rational::from(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from(3).to_string(), "3");
        assert_eq!(Rational::from_i64(-2, 3).to_string(), "-2/3");
        assert_eq!(format!("{:?}", Rational::from_i64(1, 4)), "Rational(1/4)");
    }

    #[test]
    fn test_f64_conversion_is_exact() {
        let r = Rational::from_f64(0.375).unwrap();
        assert_eq!(r, Rational::from_i64(3, 8));
        assert_eq!(r.to_f64(), 0.375);
        assert!(Rational::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Rational::from(49).sqrt(), Rational::from(7));
        assert_eq!(Rational::from_i64(9, 16).sqrt(), Rational::from_i64(3, 4));
        assert!(Rational::from(-4).sqrt().is_zero());
        let root2 = Rational::from(2).sqrt();
        assert!((root2.to_f64() - std::f64::consts::SQRT_2).abs() <= f64::EPSILON);
        assert!(root2.clone() * root2 <= Rational::from(2));
    }

    #[test]
    fn test_sqrt_beyond_f64_range() {
        let huge: Integer = format!("1{}", "0".repeat(400)).parse().unwrap();
        let root: Integer = format!("1{}", "0".repeat(200)).parse().unwrap();
        let value = Rational::from(huge.clone());
        assert!(value.to_f64().is_infinite());
        assert_eq!(value.sqrt(), Rational::from(root.clone()));

        let tiny = Rational::new(Integer::new(1), huge);
        assert_eq!(tiny.to_f64(), 0.0);
        assert_eq!(tiny.sqrt(), Rational::new(Integer::new(1), root));

        let odd = Rational::new(Integer::new(3), format!("7{}", "0".repeat(350)).parse().unwrap());
        assert!(!odd.sqrt().is_zero());
    }
}
