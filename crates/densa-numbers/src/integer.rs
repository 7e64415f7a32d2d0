//! Arbitrary precision integers.
//!
//! `Integer` only carries numerators and denominators into
//! [`crate::Rational`] and exact values into [`crate::Decimal`]; it is not a
//! matrix scalar domain of its own.

use dashu::base::Signed;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

/// An arbitrary precision integer backed by `dashu::IBig`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

forward_binop!(Integer, Add, add);
forward_binop!(Integer, Sub, sub);
forward_binop!(Integer, Mul, mul);
forward_neg!(Integer);

impl Integer {
    /// Creates an integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// True for values below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        Signed::is_negative(&self.0)
    }

    /// The value as an i64, if it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.0.clone()).ok()
    }

    /// Nearest `f64`; saturates to infinity for huge magnitudes.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Unwraps the `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IBig::from_str(s).map(Self)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Integer::new(10);
        let b = Integer::new(-3);
        assert_eq!((a.clone() + &b).to_i64(), Some(7));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(13));
        assert_eq!((a * b).to_i64(), Some(-30));
        assert!((-Integer::new(4)).is_negative());
    }

    #[test]
    fn test_wide_values() {
        let a: Integer = "123456789012345678901234567890".parse().unwrap();
        let b: Integer = "987654321098765432109876543210".parse().unwrap();
        let sum = a + b;
        assert_eq!(sum.to_string(), "1111111110111111111011111111100");
        assert!(sum.to_i64().is_none());
        assert!((sum.to_f64() / 1.111_111_110_111_111_1e30 - 1.0).abs() < 1e-15);
    }
}
