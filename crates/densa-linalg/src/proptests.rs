//! Property-based tests for the multiplication kernels and Cholesky.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::cholesky::Cholesky;
    use crate::dense_matrix::DenseMatrix;
    use crate::multiply::{multiply, GenericMultiply, MultiplyConfig, PrimitiveMultiply};

    // Small integers keep every product exact in f64
    fn entry() -> impl Strategy<Value = f64> {
        (-20i32..=20i32).prop_map(f64::from)
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = DenseMatrix<f64>> {
        prop::collection::vec(entry(), rows * cols)
            .prop_map(move |data| DenseMatrix::from_column_major(rows, cols, data))
    }

    // (left, right) with agreeing inner dimension, sized to reach every kernel
    fn operands() -> impl Strategy<Value = (DenseMatrix<f64>, DenseMatrix<f64>)> {
        (1usize..=40, 1usize..=8, 1usize..=12)
            .prop_flat_map(|(rows, inner, cols)| (matrix(rows, inner), matrix(inner, cols)))
    }

    fn square(max: usize) -> impl Strategy<Value = DenseMatrix<f64>> {
        (1usize..=max).prop_flat_map(|n| matrix(n, n))
    }

    fn max_difference(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>) -> f64 {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    proptest! {
        #[test]
        fn primitive_kernels_agree_with_generic((left, right) in operands()) {
            let config = MultiplyConfig { threshold: 8 };
            let rows = left.num_rows();
            let cols = right.num_cols();
            let inner = left.num_cols();

            let mut fast = vec![0.0; rows * cols];
            PrimitiveMultiply::<f64>::new(rows, cols, &config)
                .invoke(&mut fast, &left, inner, right.as_slice());

            let mut slow = vec![0.0; rows * cols];
            GenericMultiply::<f64>::new(rows, cols, &config)
                .invoke(&mut slow, &left, inner, right.as_slice());

            prop_assert_eq!(fast, slow);
        }

        #[test]
        fn triangular_view_multiplies_like_its_copy(
            (left, right) in square(9).prop_flat_map(|a| {
                let n = a.num_rows();
                (Just(a), matrix(n, 3))
            }),
            lower in any::<bool>(),
            unit in any::<bool>(),
        ) {
            let config = MultiplyConfig::default();
            let view = left.triangular(lower, unit);
            let dense = DenseMatrix::copy_of(&view);

            let through_view = multiply(&view, &right, &config).unwrap();
            let through_copy = multiply(&dense, &right, &config).unwrap();
            prop_assert_eq!(through_view, through_copy);
        }

        #[test]
        fn cholesky_reconstructs_shifted_gram(b in square(12)) {
            let n = b.num_rows();
            let mut a = b.transpose().multiply(&b).unwrap();
            let shift = f64::from(u32::try_from(n).unwrap());
            a.modify_diagonal(0, 0, |d| d + shift);

            let mut chol = Cholesky::<f64>::new();
            prop_assert!(chol.decompose(&a));
            prop_assert!(chol.is_solvable());

            let l = DenseMatrix::copy_of(&chol.l());
            let rebuilt = l.multiply(&l.transpose()).unwrap();
            let scale = a.as_slice().iter().fold(1.0, |m: f64, x| m.max(x.abs()));
            prop_assert!(max_difference(&rebuilt, &a) <= 1e-10 * scale);
        }

        #[test]
        fn cholesky_inverse_is_an_inverse(b in square(8)) {
            let n = b.num_rows();
            let mut a = b.transpose().multiply(&b).unwrap();
            let shift = f64::from(u32::try_from(n).unwrap());
            a.modify_diagonal(0, 0, |d| d + shift);

            let mut chol = Cholesky::<f64>::new();
            let inverse = chol.invert(&a).unwrap();
            let product = a.multiply(&inverse).unwrap();
            prop_assert!(max_difference(&product, &DenseMatrix::identity(n)) < 1e-8);
        }
    }
}
