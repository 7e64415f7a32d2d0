//! Quaternions over `f64`.
//!
//! Multiplication is the Hamilton product and is not commutative; division is
//! right division, `a / b == a * b⁻¹`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::Scalar;

/// A quaternion `w + x·i + y·j + z·k`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion {
    /// Real part.
    pub w: f64,
    /// `i` component.
    pub x: f64,
    /// `j` component.
    pub y: f64,
    /// `k` component.
    pub z: f64,
}

impl Quaternion {
    /// The additive identity.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The multiplicative identity.
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The imaginary unit `i`.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The imaginary unit `j`.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// The imaginary unit `k`.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its four components.
    #[must_use]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Embeds a real number.
    #[must_use]
    pub const fn from_real(w: f64) -> Self {
        Self::new(w, 0.0, 0.0, 0.0)
    }

    /// Returns `w - x·i - y·j - z·k`.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Squared Euclidean norm of the four components.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm of the four components.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Norm of the vector (imaginary) part.
    #[must_use]
    pub fn vector_norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Multiplies every component by a real factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.w * factor, self.x * factor, self.y * factor, self.z * factor)
    }

    /// Multiplicative inverse `conj(q) / |q|²`.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        let n2 = self.norm_sqr();
        if n2 == 0.0 {
            None
        } else {
            Some(self.conj().scale(1.0 / n2))
        }
    }

    /// Principal square root.
    ///
    /// For a negative real input the root is taken along `i`.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let n = self.norm();
        let v = self.vector_norm();
        if v == 0.0 {
            return if self.w >= 0.0 {
                Self::from_real(self.w.sqrt())
            } else {
                Self::new(0.0, (-self.w).sqrt(), 0.0, 0.0)
            };
        }
        let real = ((n + self.w) / 2.0).sqrt();
        let imag = ((n - self.w) / 2.0).sqrt() / v;
        Self::new(real, self.x * imag, self.y * imag, self.z * imag)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

impl Div for Quaternion {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        // Division by zero follows f64 and yields non-finite components.
        let n2 = rhs.norm_sqr();
        self * rhs.conj().scale(1.0 / n2)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl From<f64> for Quaternion {
    fn from(value: f64) -> Self {
        Self::from_real(value)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.w, self.x, self.y, self.z)
    }
}

impl Scalar for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(value: i64) -> Self {
        Self::from_real(value as f64)
    }

    fn is_zero(&self) -> bool {
        self.norm_sqr() == 0.0
    }

    fn sqrt(&self) -> Self {
        Quaternion::sqrt(self)
    }

    fn conjugate(&self) -> Self {
        self.conj()
    }

    fn norm(&self) -> f64 {
        Quaternion::norm(self)
    }

    fn to_f64(&self) -> f64 {
        self.w
    }

    fn epsilon() -> f64 {
        f64::EPSILON
    }
}
