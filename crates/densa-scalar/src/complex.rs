//! The complex domain over `f64`.

use num_complex::Complex64;

use crate::traits::Scalar;

impl Scalar for Complex64 {
    #[inline]
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    #[inline]
    fn one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(value: i64) -> Self {
        Complex64::new(value as f64, 0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    #[inline]
    fn sqrt(&self) -> Self {
        Complex64::sqrt(*self)
    }

    #[inline]
    fn conjugate(&self) -> Self {
        self.conj()
    }

    #[inline]
    fn norm(&self) -> f64 {
        Complex64::norm(*self)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        self.re
    }

    #[inline]
    fn epsilon() -> f64 {
        f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conjugate_and_projection() {
        let z = Complex64::new(3.0, -4.0);
        assert_eq!(Scalar::conjugate(&z), Complex64::new(3.0, 4.0));
        assert_eq!(Scalar::norm(&z), 5.0);
        assert_eq!(Scalar::to_f64(&z), 3.0);
    }

    #[test]
    fn test_sqrt_principal_branch() {
        let root = Scalar::sqrt(&Complex64::new(-4.0, 0.0));
        assert!((root - Complex64::new(0.0, 2.0)).norm() < 1e-15);

        let z = Complex64::new(3.0, 4.0);
        let r = Scalar::sqrt(&z);
        assert!((r * r - z).norm() < 1e-14);
    }

    #[test]
    fn test_hermitian_product_is_real() {
        let z = Complex64::new(1.5, -2.0);
        let p = z * Scalar::conjugate(&z);
        assert_eq!(p.im, 0.0);
        assert_eq!(Scalar::to_f64(&p), 6.25);
    }
}
