//! Property-based tests for the scalar domains.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Complex64, Quaternion, Rational, Scalar};

    fn component() -> impl Strategy<Value = f64> {
        -10.0f64..10.0f64
    }

    fn quaternion() -> impl Strategy<Value = Quaternion> {
        (component(), component(), component(), component())
            .prop_map(|(w, x, y, z)| Quaternion::new(w, x, y, z))
    }

    fn complex() -> impl Strategy<Value = Complex64> {
        (component(), component()).prop_map(|(re, im)| Complex64::new(re, im))
    }

    proptest! {
        #[test]
        fn quaternion_mul_associative(a in quaternion(), b in quaternion(), c in quaternion()) {
            let left = (a * b) * c;
            let right = a * (b * c);
            prop_assert!((left - right).norm() <= 1e-9 * (1.0 + left.norm()));
        }

        #[test]
        fn quaternion_conjugate_reverses_products(a in quaternion(), b in quaternion()) {
            let lhs = Scalar::conjugate(&(a * b));
            let rhs = Scalar::conjugate(&b) * Scalar::conjugate(&a);
            prop_assert!((lhs - rhs).norm() <= 1e-9 * (1.0 + lhs.norm()));
        }

        #[test]
        fn quaternion_sqrt_squares_back(a in quaternion()) {
            let r = Scalar::sqrt(&a);
            prop_assert!((r * r - a).norm() <= 1e-9 * (1.0 + a.norm()));
        }

        #[test]
        fn complex_times_conjugate_projects_to_norm_squared(z in complex()) {
            let p = z * Scalar::conjugate(&z);
            let n = Scalar::norm(&z);
            prop_assert!((Scalar::to_f64(&p) - n * n).abs() <= 1e-9 * (1.0 + n * n));
        }

        #[test]
        fn real_domains_have_identity_conjugate(n in -1000i64..1000i64) {
            let r = <Rational as Scalar>::from_i64(n);
            prop_assert_eq!(Scalar::conjugate(&r), r.clone());
            prop_assert_eq!(Scalar::to_f64(&r), n as f64);
            let x = <f64 as Scalar>::from_i64(n);
            prop_assert_eq!(Scalar::conjugate(&x), x);
        }
    }
}
