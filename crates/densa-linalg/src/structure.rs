//! Read access to 2-D operands and zero-copy logical views.
//!
//! [`Access2D`] is what the multiplication kernels and the Cholesky engine
//! read from. Besides element access it exposes the structural nonzero band of
//! every column, which lets the kernels skip the known-zero part of
//! triangular operands.

use densa_scalar::Scalar;

use crate::dense_matrix::DenseMatrix;

/// Column-major read access to a 2-D operand.
pub trait Access2D<N> {
    /// Number of rows.
    fn count_rows(&self) -> usize;

    /// Number of columns.
    fn count_columns(&self) -> usize;

    /// Returns the element at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> N;

    /// Total number of elements.
    fn count(&self) -> usize {
        self.count_rows() * self.count_columns()
    }

    /// First row of column `col` that may be nonzero.
    fn first_in_column(&self, _col: usize) -> usize {
        0
    }

    /// One past the last row of column `col` that may be nonzero.
    fn limit_of_column(&self, _col: usize) -> usize {
        self.count_rows()
    }
}

impl<N: Clone> Access2D<N> for DenseMatrix<N> {
    #[inline]
    fn count_rows(&self) -> usize {
        self.num_rows()
    }

    #[inline]
    fn count_columns(&self) -> usize {
        self.num_cols()
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> N {
        self[(row, col)].clone()
    }
}

impl<N, A: Access2D<N> + ?Sized> Access2D<N> for &A {
    fn count_rows(&self) -> usize {
        (**self).count_rows()
    }

    fn count_columns(&self) -> usize {
        (**self).count_columns()
    }

    fn at(&self, row: usize, col: usize) -> N {
        (**self).at(row, col)
    }

    fn first_in_column(&self, col: usize) -> usize {
        (**self).first_in_column(col)
    }

    fn limit_of_column(&self, col: usize) -> usize {
        (**self).limit_of_column(col)
    }
}

/// A triangular projection of a matrix; elements outside the triangle read
/// as zero.
#[derive(Debug)]
pub struct Triangular<'a, N> {
    base: &'a DenseMatrix<N>,
    lower: bool,
    unit_diagonal: bool,
}

impl<N> Clone for Triangular<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Triangular<'_, N> {}

impl<'a, N> Triangular<'a, N> {
    /// Creates a view of the lower (`lower == true`) or upper triangle.
    ///
    /// With `unit_diagonal` the diagonal reads as one.
    #[must_use]
    pub fn new(base: &'a DenseMatrix<N>, lower: bool, unit_diagonal: bool) -> Self {
        Self {
            base,
            lower,
            unit_diagonal,
        }
    }

    /// Returns true for a lower triangular view.
    #[must_use]
    pub fn is_lower(&self) -> bool {
        self.lower
    }

    /// The matrix behind this view.
    #[must_use]
    pub fn base(&self) -> &'a DenseMatrix<N> {
        self.base
    }
}

impl<N: Scalar> Access2D<N> for Triangular<'_, N> {
    fn count_rows(&self) -> usize {
        self.base.num_rows()
    }

    fn count_columns(&self) -> usize {
        self.base.num_cols()
    }

    fn at(&self, row: usize, col: usize) -> N {
        if (self.lower && row < col) || (!self.lower && row > col) {
            N::zero()
        } else if self.unit_diagonal && row == col {
            N::one()
        } else {
            self.base[(row, col)].clone()
        }
    }

    fn first_in_column(&self, col: usize) -> usize {
        if self.lower {
            col.min(self.base.num_rows())
        } else {
            0
        }
    }

    fn limit_of_column(&self, col: usize) -> usize {
        if self.lower {
            self.base.num_rows()
        } else {
            (col + 1).min(self.base.num_rows())
        }
    }
}

/// A Hermitian view that reads the lower triangle of a square matrix and
/// mirrors it, conjugated, into the upper triangle.
#[derive(Debug)]
pub struct Hermitian<'a, N> {
    base: &'a DenseMatrix<N>,
}

impl<N> Clone for Hermitian<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Hermitian<'_, N> {}

impl<'a, N> Hermitian<'a, N> {
    /// Creates the view. Only the lower triangle of `base` is ever read.
    #[must_use]
    pub fn new(base: &'a DenseMatrix<N>) -> Self {
        Self { base }
    }

    /// The matrix behind this view.
    #[must_use]
    pub fn base(&self) -> &'a DenseMatrix<N> {
        self.base
    }
}

impl<N: Scalar> Access2D<N> for Hermitian<'_, N> {
    fn count_rows(&self) -> usize {
        self.base.num_rows()
    }

    fn count_columns(&self) -> usize {
        self.base.num_cols()
    }

    fn at(&self, row: usize, col: usize) -> N {
        if row >= col {
            self.base[(row, col)].clone()
        } else {
            self.base[(col, row)].conjugate()
        }
    }
}
