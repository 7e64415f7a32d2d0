//! Property-based tests for the exact and fixed-precision number types.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Decimal, Integer, Rational};

    fn small() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn nonzero() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small(), nonzero()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn nonzero_rational() -> impl Strategy<Value = Rational> {
        (nonzero(), nonzero()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn integer_matches_machine_arithmetic(a in small(), b in small()) {
            let x = Integer::new(a);
            let y = Integer::new(b);
            prop_assert_eq!((x.clone() * y.clone() - y).to_i64(), Some(a * b - b));
            prop_assert_eq!(x + (-Integer::new(a)), Integer::zero());
        }

        #[test]
        fn rational_is_always_reduced(n in small(), d in nonzero()) {
            let r = Rational::from_i64(n, d);
            let den = r.denominator().to_i64().unwrap();
            prop_assert!(den > 0);
            // cross-multiplication recovers the input ratio
            prop_assert_eq!(r.numerator().to_i64().unwrap() * d, n * den);
        }

        #[test]
        fn rational_distributes(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + &c),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_division_inverts_multiplication(a in rational(), b in nonzero_rational()) {
            prop_assert!((b.clone() * b.recip()).is_one());
            prop_assert_eq!((a.clone() * b.clone()) / b, a);
        }

        #[test]
        fn rational_sqrt_is_exact_on_dyadic_squares(n in 0i64..10_000i64, k in 0u32..6) {
            let root = Rational::from_i64(n, 1i64 << k);
            prop_assert_eq!((root.clone() * root.clone()).sqrt(), root);
        }

        #[test]
        fn decimal_integers_are_exact(a in small(), b in small()) {
            let x = Decimal::new(a);
            let y = Decimal::new(b);
            prop_assert_eq!(x.clone() + y.clone(), Decimal::new(a + b));
            prop_assert_eq!(x * y, Decimal::new(a * b));
        }

        #[test]
        fn decimal_division_keeps_34_digits(a in small(), b in nonzero()) {
            let x = Decimal::new(a);
            let y = Decimal::new(b);
            let back = (x.clone() / y.clone()) * y;
            let error = (back - x).abs().to_f64();
            prop_assert!(error <= 1e-28 * f64::from(i32::try_from(a.abs().max(1)).unwrap()));
        }
    }
}
