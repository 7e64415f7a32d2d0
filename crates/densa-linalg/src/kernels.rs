//! Multiplication kernels.
//!
//! Every kernel computes `product = left × right` where `product` is `M×N`
//! and `right` is `K×N`, both column-major, and `left` is any `M×K`
//! [`Access2D`]. `K` is called the complexity of the product.
//!
//! The fixed kernels ([`row`], [`square`], [`panel`]) overwrite every product
//! element. [`accumulate`] adds into a product that the caller has already
//! zero-filled, and works on any contiguous range of product columns so the
//! parallel driver can hand out disjoint column blocks.

use std::ops::AddAssign;

use densa_scalar::Scalar;

use crate::structure::Access2D;

/// Native floating point types with the register-blocked fast path.
pub trait Primitive: Scalar + Copy + AddAssign {}

impl Primitive for f64 {}

impl Primitive for f32 {}

/// `1×N` product: one accumulator per output column.
pub(crate) fn row<T, A>(product: &mut [T], left: &A, complexity: usize, right: &[T])
where
    T: Primitive,
    A: Access2D<T> + ?Sized,
{
    for (j, target) in product.iter_mut().enumerate() {
        let mut acc = T::zero();
        for c in 0..complexity {
            acc += left.at(0, c) * right[c + j * complexity];
        }
        *target = acc;
    }
}

/// `M×M` product with the whole output tile held in accumulators.
pub(crate) fn square<T, A, const M: usize>(
    product: &mut [T],
    left: &A,
    complexity: usize,
    right: &[T],
) where
    T: Primitive,
    A: Access2D<T> + ?Sized,
{
    // tile[j][i] accumulates product (i, j)
    let mut tile = [[T::zero(); M]; M];
    let mut left_column = [T::zero(); M];
    for c in 0..complexity {
        for (i, slot) in left_column.iter_mut().enumerate() {
            *slot = left.at(i, c);
        }
        for (j, tile_column) in tile.iter_mut().enumerate() {
            let right_cj = right[c + j * complexity];
            for (acc, &l) in tile_column.iter_mut().zip(&left_column) {
                *acc += l * right_cj;
            }
        }
    }
    for (target, tile_column) in product.chunks_exact_mut(M).zip(&tile) {
        target.copy_from_slice(tile_column);
    }
}

/// `M×N` product for a fixed `M`: one accumulator per output row, one output
/// column at a time.
pub(crate) fn panel<T, A, const M: usize>(
    product: &mut [T],
    left: &A,
    complexity: usize,
    right: &[T],
) where
    T: Primitive,
    A: Access2D<T> + ?Sized,
{
    for (j, target) in product.chunks_exact_mut(M).enumerate() {
        let mut acc = [T::zero(); M];
        for c in 0..complexity {
            let right_cj = right[c + j * complexity];
            for (i, a) in acc.iter_mut().enumerate() {
                *a += left.at(i, c) * right_cj;
            }
        }
        target.copy_from_slice(&acc);
    }
}

/// `y[i] = y[i] + x[i] * a`.
///
/// The scalar multiplies from the right, which matters for quaternions.
pub(crate) fn axpy<N: Scalar>(y: &mut [N], a: &N, x: &[N]) {
    for (yi, xi) in y.iter_mut().zip(x) {
        *yi = yi.clone() + xi.clone() * a.clone();
    }
}

/// `y[i] += x[i] * a` for native floats.
pub(crate) fn axpy_primitive<T: Primitive>(y: &mut [T], a: &T, x: &[T]) {
    let a = *a;
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += xi * a;
    }
}

/// Adds `left × right[:, first_column..]` into `product`, which holds the
/// output columns starting at `first_column`.
///
/// Each left column is copied once, restricted to its structural band, and
/// then applied to every output column with `axpy`.
pub(crate) fn accumulate<N, A>(
    product: &mut [N],
    first_column: usize,
    left: &A,
    complexity: usize,
    right: &[N],
    axpy: fn(&mut [N], &N, &[N]),
) where
    N: Scalar,
    A: Access2D<N> + ?Sized,
{
    let rows = left.count_rows();
    if rows == 0 {
        return;
    }
    let mut left_column = vec![N::zero(); rows];
    for c in 0..complexity {
        let first = left.first_in_column(c);
        let limit = left.limit_of_column(c).min(rows);
        if first >= limit {
            continue;
        }
        for (i, slot) in left_column[first..limit].iter_mut().enumerate() {
            *slot = left.at(first + i, c);
        }
        for (offset, target) in product.chunks_exact_mut(rows).enumerate() {
            let j = first_column + offset;
            axpy(
                &mut target[first..limit],
                &right[c + j * complexity],
                &left_column[first..limit],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense_matrix::DenseMatrix;
    use densa_scalar::Quaternion;

    fn reference(left: &DenseMatrix<f64>, right: &DenseMatrix<f64>) -> Vec<f64> {
        let (m, k, n) = (left.num_rows(), left.num_cols(), right.num_cols());
        let mut out = vec![0.0; m * n];
        for j in 0..n {
            for i in 0..m {
                for c in 0..k {
                    out[i + j * m] += left[(i, c)] * right[(c, j)];
                }
            }
        }
        out
    }

    fn sequence(rows: usize, cols: usize, offset: f64) -> DenseMatrix<f64> {
        let data = (0..rows * cols)
            .map(|i| ((i as f64) * 0.37 + offset).sin())
            .collect();
        DenseMatrix::from_column_major(rows, cols, data)
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{a} != {e}");
        }
    }

    #[test]
    fn test_row_kernel() {
        let left = sequence(1, 4, 0.1);
        let right = sequence(4, 3, 0.2);
        let mut product = vec![f64::NAN; 3];
        row(&mut product, &left, 4, right.as_slice());
        assert_close(&product, &reference(&left, &right));
    }

    #[test]
    fn test_square_kernels() {
        fn check<const M: usize>() {
            let left = sequence(M, 7, 0.3);
            let right = sequence(7, M, 0.4);
            let mut product = vec![f64::NAN; M * M];
            square::<f64, _, M>(&mut product, &left, 7, right.as_slice());
            assert_close(&product, &reference(&left, &right));
        }
        check::<2>();
        check::<3>();
        check::<4>();
        check::<5>();
    }

    #[test]
    fn test_panel_kernels() {
        fn check<const M: usize>() {
            let left = sequence(M, 3, 0.5);
            let right = sequence(3, 11, 0.6);
            let mut product = vec![f64::NAN; M * 11];
            panel::<f64, _, M>(&mut product, &left, 3, right.as_slice());
            assert_close(&product, &reference(&left, &right));
        }
        check::<6>();
        check::<7>();
        check::<8>();
        check::<9>();
        check::<10>();
    }

    #[test]
    fn test_accumulate_on_column_block() {
        let left = sequence(5, 4, 0.7);
        let right = sequence(4, 6, 0.8);
        let expected = reference(&left, &right);

        let mut block = vec![0.0; 5 * 3];
        accumulate(&mut block, 2, &left, 4, right.as_slice(), axpy_primitive);
        assert_close(&block, &expected[5 * 2..5 * 5]);
    }

    #[test]
    fn test_accumulate_skips_outside_band() {
        let base = sequence(4, 4, 0.9);
        let lower = base.triangular(true, false);
        let right = sequence(4, 2, 1.0);
        let dense_lower = DenseMatrix::copy_of(&lower);

        let mut product = vec![0.0; 8];
        accumulate(&mut product, 0, &lower, 4, right.as_slice(), axpy);
        assert_close(&product, &reference(&dense_lower, &right));
    }

    #[test]
    fn test_axpy_multiplies_on_the_right() {
        let mut y = vec![Quaternion::ZERO];
        axpy(&mut y, &Quaternion::J, &[Quaternion::I]);
        assert_eq!(y[0], Quaternion::K);
    }

    #[test]
    fn test_zero_complexity() {
        let left: DenseMatrix<f64> = DenseMatrix::zeros(3, 0);
        let mut product = vec![f64::NAN; 9];
        square::<f64, _, 3>(&mut product, &left, 0, &[]);
        assert!(product.iter().all(|x| *x == 0.0));
    }
}
