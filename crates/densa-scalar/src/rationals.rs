//! The rational domain Q and the decimal domain.

use densa_numbers::{Decimal, Rational};
use num_traits::{One, Zero};

use crate::traits::Scalar;

impl Scalar for Rational {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn from_i64(value: i64) -> Self {
        Self::from(value)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn sqrt(&self) -> Self {
        Rational::sqrt(self)
    }

    fn norm(&self) -> f64 {
        self.abs().to_f64()
    }

    fn to_f64(&self) -> f64 {
        Rational::to_f64(self)
    }

    // Rank decisions compare f64 images of the diagonal.
    fn epsilon() -> f64 {
        f64::EPSILON
    }
}

impl Scalar for Decimal {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn from_i64(value: i64) -> Self {
        Self::new(value)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn sqrt(&self) -> Self {
        Decimal::sqrt(self)
    }

    fn norm(&self) -> f64 {
        self.abs().to_f64()
    }

    fn to_f64(&self) -> f64 {
        Decimal::to_f64(self)
    }

    fn epsilon() -> f64 {
        Decimal::epsilon()
    }
}
