//! Arbitrary precision decimal floating point.
//!
//! Every `Decimal` carries [`Decimal::PRECISION`] significant decimal digits
//! (the width of IEEE 754 decimal128), so division and square root are always
//! defined and rounded half away from zero.

use dashu::base::SquareRoot;
use dashu::float::DBig;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::Integer;

/// A decimal number with a fixed number of significant digits.
#[derive(Clone, PartialEq, PartialOrd)]
pub struct Decimal(DBig);

impl Decimal {
    /// Significant decimal digits kept by every value.
    pub const PRECISION: usize = 34;

    fn rounded(value: DBig) -> Self {
        Self(value.with_precision(Self::PRECISION).value())
    }

    /// Creates a decimal from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::rounded(DBig::from(IBig::from(value)))
    }

    /// Creates a decimal from an arbitrary precision integer, rounding to
    /// [`Decimal::PRECISION`] digits.
    #[must_use]
    pub fn from_integer(value: Integer) -> Self {
        Self::rounded(DBig::from(value.into_inner()))
    }

    /// Unit in the last place at [`Decimal::PRECISION`] digits, relative to one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn epsilon() -> f64 {
        10f64.powi(-(Self::PRECISION as i32))
    }

    /// Returns true if this value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < DBig::ZERO
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Square root at [`Decimal::PRECISION`] digits. Negative input yields zero.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        if self.is_negative() || self.is_zero() {
            return Self::zero();
        }
        Self::rounded(self.0.sqrt())
    }

    /// Nearest `f64` to this decimal.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns a reference to the inner `dashu::DBig`.
    #[must_use]
    pub fn as_inner(&self) -> &DBig {
        &self.0
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self::rounded(DBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == DBig::ZERO
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self::rounded(DBig::ONE)
    }
}

impl FromStr for Decimal {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DBig::from_str(s).map(Self::rounded)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::rounded(self.0 + rhs.0)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::rounded(self.0 - rhs.0)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::rounded(self.0 * rhs.0)
    }
}

impl Div for Decimal {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on division by zero.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "decimal division by zero");
        Self::rounded(self.0 / rhs.0)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Decimal {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Decimal::new(7);
        let b = Decimal::new(2);

        assert_eq!(a.clone() + b.clone(), Decimal::new(9));
        assert_eq!(a.clone() - b.clone(), Decimal::new(5));
        assert_eq!(a.clone() * b.clone(), Decimal::new(14));
        assert_eq!(a / b, "3.5".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_division_keeps_precision() {
        let third = Decimal::one() / Decimal::new(3);
        let back = third * Decimal::new(3);
        assert!((back.to_f64() - 1.0).abs() < 1e-30);
        assert!((Decimal::one() - back).abs().to_f64() < 1e-32);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Decimal::new(144).sqrt(), Decimal::new(12));
        let root2 = Decimal::new(2).sqrt();
        assert!((root2.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-15);
        assert!(Decimal::new(-1).sqrt().is_zero());
    }

    #[test]
    fn test_sign() {
        assert!(Decimal::new(-3).is_negative());
        assert_eq!(Decimal::new(-3).abs(), Decimal::new(3));
        assert!(!Decimal::zero().is_negative());
    }
}
