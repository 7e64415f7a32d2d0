//! Triangular substitution against a Cholesky factor.
//!
//! `body` holds the factor `L` in its lower triangle (the upper triangle is
//! never read). `data` holds one or more right-hand-side columns, column-major,
//! and is overwritten with the solution.

use densa_scalar::Scalar;

use crate::dense_matrix::DenseMatrix;
use crate::parallel::for_each_column;

/// Solves `L·Y = B` in place.
///
/// With `identity` the right-hand side is known to be the identity, so the
/// leading zeros of column `j` stay zero and the sweep starts at row `j`.
pub(crate) fn substitute_forwards<N: Scalar>(
    data: &mut [N],
    body: &DenseMatrix<N>,
    identity: bool,
    threshold: usize,
) {
    let n = body.num_rows();
    for_each_column(data, n, 0, threshold, |j, column| {
        let start = if identity { j.min(n) } else { 0 };
        for i in start..n {
            let mut sum = column[i].clone();
            for k in start..i {
                sum = sum - body[(i, k)].clone() * column[k].clone();
            }
            column[i] = sum / body[(i, i)].clone();
        }
    });
}

/// Solves `Lᴴ·X = Y` in place.
///
/// With `hermitian` the solution is known to be Hermitian and only rows
/// `j..` of column `j` are computed; the rest is left for a Hermitian view
/// to mirror.
pub(crate) fn substitute_backwards<N: Scalar>(
    data: &mut [N],
    body: &DenseMatrix<N>,
    hermitian: bool,
    threshold: usize,
) {
    let n = body.num_rows();
    for_each_column(data, n, 0, threshold, |j, column| {
        let stop = if hermitian { j.min(n) } else { 0 };
        for i in (stop..n).rev() {
            let mut sum = column[i].clone();
            for k in i + 1..n {
                sum = sum - body[(k, i)].conjugate() * column[k].clone();
            }
            column[i] = sum / body[(i, i)].conjugate();
        }
    });
}
