//! The scalar domain trait.
//!
//! Every numeric kind a matrix can hold implements [`Scalar`]. The trait is a
//! pure value algebra: arithmetic through the operator traits, identities,
//! square root, conjugation and a real-valued projection used for diagonal
//! comparisons and conditioning checks.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric domain usable as a matrix element.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()` (not necessarily
///   commutative; quaternions are a domain)
/// - `a / b == a * b⁻¹` for non-zero `b`
/// - `conjugate` is an involution and the identity on real domains
/// - `to_f64` is exact on the real axis up to the domain's own rounding
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Embeds an integer.
    fn from_i64(value: i64) -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Principal square root.
    fn sqrt(&self) -> Self;

    /// Complex/quaternion conjugate; the identity on real domains.
    fn conjugate(&self) -> Self {
        self.clone()
    }

    /// Magnitude as an `f64`.
    fn norm(&self) -> f64;

    /// Real projection as an `f64`.
    fn to_f64(&self) -> f64;

    /// Machine epsilon of the domain.
    fn epsilon() -> f64;

    /// Tests whether this value is negligible relative to `compared_to`.
    ///
    /// With a zero reference the test is absolute against [`Scalar::epsilon`].
    fn is_small(&self, compared_to: f64) -> bool {
        let reference = compared_to.abs();
        if reference == 0.0 {
            self.norm() <= Self::epsilon()
        } else {
            self.norm() <= Self::epsilon() * reference
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_small_relative_and_absolute() {
        assert!(1e-20_f64.is_small(1.0));
        assert!(!1e-10_f64.is_small(1.0));
        assert!(1e-10_f64.is_small(1e8));
        assert!(0.0_f64.is_small(0.0));
        assert!(!1e-10_f64.is_small(0.0));
    }

    #[test]
    fn test_default_conjugate_is_identity() {
        assert_eq!(Scalar::conjugate(&-2.5_f64), -2.5);
    }
}
