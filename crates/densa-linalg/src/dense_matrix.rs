//! Column-major dense matrix.
//!
//! Element `(row, col)` lives at flat index `row + col * num_rows`. Every
//! strided operation is expressed as a `(first, limit, step)` walk over the
//! flat storage:
//!
//! ```text
//! column (row, col)    first = (row, col)   limit = (0, col + 1)   step = 1
//! row (row, col)       first = (row, col)   limit = len            step = num_rows
//! diagonal (row, col)  first = (row, col)   limit = past the edge  step = num_rows + 1
//! ```

use std::ops::{Add, Index, IndexMut, Sub};

use densa_scalar::Scalar;

use crate::aggregator::Aggregator;
use crate::slice::{Slice, SliceMut};
use crate::structure::{Access2D, Hermitian, Triangular};

/// Dense matrix stored in column-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<N> {
    /// Matrix entries in column-major order.
    data: Vec<N>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<N> DenseMatrix<N> {
    /// Creates a matrix from column-major storage.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != num_rows * num_cols`.
    #[must_use]
    pub fn from_column_major(num_rows: usize, num_cols: usize, data: Vec<N>) -> Self {
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a list of columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns have different lengths.
    #[must_use]
    pub fn from_columns(columns: Vec<Vec<N>>) -> Self {
        let num_cols = columns.len();
        let num_rows = columns.first().map_or(0, Vec::len);
        assert!(columns.iter().all(|c| c.len() == num_rows));
        let data: Vec<N> = columns.into_iter().flatten().collect();
        Self::from_column_major(num_rows, num_cols, data)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Flat storage index of `(row, col)`.
    #[inline]
    #[must_use]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row + col * self.num_rows
    }

    /// Column-major storage.
    #[must_use]
    pub fn as_slice(&self) -> &[N] {
        &self.data
    }

    /// Column-major storage, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [N] {
        &mut self.data
    }

    /// Consumes the matrix, returning its column-major storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<N> {
        self.data
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&N> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[self.flat_index(row, col)])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the entry at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut N> {
        if row < self.num_rows && col < self.num_cols {
            let index = self.flat_index(row, col);
            Some(&mut self.data[index])
        } else {
            None
        }
    }

    /// Returns the entry at a flat index.
    #[must_use]
    pub fn get_flat(&self, index: usize) -> Option<&N> {
        self.data.get(index)
    }

    /// Overwrites the entry at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: N) {
        self[(row, col)] = value;
    }

    /// Overwrites the entry at a flat index.
    pub fn set_flat(&mut self, index: usize, value: N) {
        self.data[index] = value;
    }

    /// Column `col` as a contiguous slice.
    #[must_use]
    pub fn column(&self, col: usize) -> &[N] {
        let start = col * self.num_rows;
        &self.data[start..start + self.num_rows]
    }

    /// Column `col` as a contiguous mutable slice.
    pub fn column_mut(&mut self, col: usize) -> &mut [N] {
        let start = col * self.num_rows;
        &mut self.data[start..start + self.num_rows]
    }

    /// Swaps two rows in-place.
    pub fn exchange_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for col in 0..self.num_cols {
            let base = col * self.num_rows;
            self.data.swap(base + i, base + j);
        }
    }

    /// Swaps two columns in-place.
    pub fn exchange_columns(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (low, high) = (i.min(j), i.max(j));
        let rows = self.num_rows;
        let (head, tail) = self.data.split_at_mut(high * rows);
        head[low * rows..(low + 1) * rows].swap_with_slice(&mut tail[..rows]);
    }

    fn row_walk(&self, row: usize, col: usize) -> (usize, usize, usize) {
        let limit = self.data.len();
        let step = self.num_rows.max(1);
        // a row past the end would otherwise wrap into the next column
        if row >= self.num_rows {
            return (limit, limit, step);
        }
        (self.flat_index(row, col), limit, step)
    }

    fn column_walk(&self, row: usize, col: usize) -> (usize, usize, usize) {
        (self.flat_index(row, col), (col + 1) * self.num_rows, 1)
    }

    fn diagonal_walk(&self, row: usize, col: usize) -> (usize, usize, usize) {
        let first = self.flat_index(row, col);
        let count = self
            .num_rows
            .saturating_sub(row)
            .min(self.num_cols.saturating_sub(col));
        let step = self.num_rows + 1;
        let limit = if count == 0 {
            first
        } else {
            first + (count - 1) * step + 1
        };
        (first, limit, step)
    }

    /// Read-only view of the flat range `first..limit`.
    #[must_use]
    pub fn slice_range(&self, first: usize, limit: usize) -> Slice<'_, N> {
        Slice::new(&self.data, first, limit, 1)
    }

    /// Read-only view of row `row`, starting at column `col`.
    #[must_use]
    pub fn slice_row(&self, row: usize, col: usize) -> Slice<'_, N> {
        let (first, limit, step) = self.row_walk(row, col);
        Slice::new(&self.data, first, limit, step)
    }

    /// Read-only view of column `col`, starting at row `row`.
    #[must_use]
    pub fn slice_column(&self, row: usize, col: usize) -> Slice<'_, N> {
        let (first, limit, step) = self.column_walk(row, col);
        Slice::new(&self.data, first, limit, step)
    }

    /// Read-only view of the diagonal starting at `(row, col)`.
    #[must_use]
    pub fn slice_diagonal(&self, row: usize, col: usize) -> Slice<'_, N> {
        let (first, limit, step) = self.diagonal_walk(row, col);
        Slice::new(&self.data, first, limit, step)
    }

    /// Mutable view of the flat range `first..limit`.
    pub fn slice_range_mut(&mut self, first: usize, limit: usize) -> SliceMut<'_, N> {
        SliceMut::new(&mut self.data, first, limit, 1)
    }

    /// Mutable view of row `row`, starting at column `col`.
    pub fn slice_row_mut(&mut self, row: usize, col: usize) -> SliceMut<'_, N> {
        let (first, limit, step) = self.row_walk(row, col);
        SliceMut::new(&mut self.data, first, limit, step)
    }

    /// Mutable view of column `col`, starting at row `row`.
    pub fn slice_column_mut(&mut self, row: usize, col: usize) -> SliceMut<'_, N> {
        let (first, limit, step) = self.column_walk(row, col);
        SliceMut::new(&mut self.data, first, limit, step)
    }

    /// Mutable view of the diagonal starting at `(row, col)`.
    pub fn slice_diagonal_mut(&mut self, row: usize, col: usize) -> SliceMut<'_, N> {
        let (first, limit, step) = self.diagonal_walk(row, col);
        SliceMut::new(&mut self.data, first, limit, step)
    }

    /// Calls `visitor` on every element of a strided range.
    pub fn visit_range(&self, first: usize, limit: usize, step: usize, visitor: impl FnMut(&N)) {
        Slice::new(&self.data, first, limit, step).iter().for_each(visitor);
    }

    /// Calls `visitor` along row `row` from column `col`.
    pub fn visit_row(&self, row: usize, col: usize, visitor: impl FnMut(&N)) {
        self.slice_row(row, col).iter().for_each(visitor);
    }

    /// Calls `visitor` down column `col` from row `row`.
    pub fn visit_column(&self, row: usize, col: usize, visitor: impl FnMut(&N)) {
        self.slice_column(row, col).iter().for_each(visitor);
    }

    /// Calls `visitor` along the diagonal from `(row, col)`.
    pub fn visit_diagonal(&self, row: usize, col: usize, visitor: impl FnMut(&N)) {
        self.slice_diagonal(row, col).iter().for_each(visitor);
    }

    /// Replaces every element `x` of a strided range with `f(x)`.
    pub fn modify_range(&mut self, first: usize, limit: usize, step: usize, f: impl FnMut(&N) -> N) {
        SliceMut::new(&mut self.data, first, limit, step).modify(f);
    }

    /// Replaces every element `x` of row `row` from column `col` with `f(x)`.
    pub fn modify_row(&mut self, row: usize, col: usize, f: impl FnMut(&N) -> N) {
        self.slice_row_mut(row, col).modify(f);
    }

    /// Replaces every element `x` of column `col` from row `row` with `f(x)`.
    pub fn modify_column(&mut self, row: usize, col: usize, f: impl FnMut(&N) -> N) {
        self.slice_column_mut(row, col).modify(f);
    }

    /// Replaces every element `x` of the diagonal from `(row, col)` with `f(x)`.
    pub fn modify_diagonal(&mut self, row: usize, col: usize, f: impl FnMut(&N) -> N) {
        self.slice_diagonal_mut(row, col).modify(f);
    }

    /// Replaces every element `x` with `f(x)`.
    pub fn modify_all(&mut self, mut f: impl FnMut(&N) -> N) {
        for slot in &mut self.data {
            *slot = f(slot);
        }
    }

    /// Replaces the element at `(row, col)` with `f` of itself.
    pub fn modify_one(&mut self, row: usize, col: usize, f: impl FnOnce(&N) -> N) {
        let index = self.flat_index(row, col);
        self.data[index] = f(&self.data[index]);
    }
}

impl<N: Clone> DenseMatrix<N> {
    /// Creates a matrix with every element equal to `value`.
    #[must_use]
    pub fn filled(num_rows: usize, num_cols: usize, value: N) -> Self {
        Self {
            data: vec![value; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<N>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|r| r.len() == num_cols));
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for col in 0..num_cols {
            data.extend(rows.iter().map(|r| r[col].clone()));
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Copies any 2-D operand into a new dense matrix.
    #[must_use]
    pub fn copy_of<A: Access2D<N> + ?Sized>(source: &A) -> Self {
        let num_rows = source.count_rows();
        let num_cols = source.count_columns();
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for col in 0..num_cols {
            data.extend((0..num_rows).map(|row| source.at(row, col)));
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Overwrites every element of a strided range with `value`.
    pub fn fill_range(&mut self, first: usize, limit: usize, step: usize, value: &N) {
        SliceMut::new(&mut self.data, first, limit, step).fill(value);
    }

    /// Overwrites row `row` from column `col` with `value`.
    pub fn fill_row(&mut self, row: usize, col: usize, value: &N) {
        self.slice_row_mut(row, col).fill(value);
    }

    /// Overwrites column `col` from row `row` with `value`.
    pub fn fill_column(&mut self, row: usize, col: usize, value: &N) {
        self.slice_column_mut(row, col).fill(value);
    }

    /// Overwrites the diagonal from `(row, col)` with `value`.
    pub fn fill_diagonal(&mut self, row: usize, col: usize, value: &N) {
        self.slice_diagonal_mut(row, col).fill(value);
    }

    /// Overwrites every element with `value`.
    pub fn fill_all(&mut self, value: &N) {
        for slot in &mut self.data {
            slot.clone_from(value);
        }
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for row in 0..self.num_rows {
            data.extend((0..self.num_cols).map(|col| self[(row, col)].clone()));
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }
}

impl<N: Scalar> DenseMatrix<N> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self::filled(num_rows, num_cols, N::zero())
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        m.fill_diagonal(0, 0, &N::one());
        m
    }

    /// Returns the conjugate transpose.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for row in 0..self.num_rows {
            data.extend((0..self.num_cols).map(|col| self[(row, col)].conjugate()));
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Checks `A == Aᴴ` up to the domain's epsilon, relative to the larger of
    /// each mirrored pair.
    #[must_use]
    pub fn is_hermitian(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for col in 0..self.num_cols {
            for row in col..self.num_rows {
                let lower = &self[(row, col)];
                let upper = self[(col, row)].conjugate();
                let scale = lower.norm().max(upper.norm());
                if !(lower.clone() - upper).is_small(scale) {
                    return false;
                }
            }
        }
        true
    }

    /// A triangular view of this matrix.
    #[must_use]
    pub fn triangular(&self, lower: bool, unit_diagonal: bool) -> Triangular<'_, N> {
        Triangular::new(self, lower, unit_diagonal)
    }

    /// A Hermitian view reading only the lower triangle.
    #[must_use]
    pub fn hermitian(&self) -> Hermitian<'_, N> {
        Hermitian::new(self)
    }

    /// Reduces the flat range `first..limit`.
    #[must_use]
    pub fn aggregate_range(&self, first: usize, limit: usize, aggregator: Aggregator) -> N {
        self.slice_range(first, limit).aggregate(aggregator)
    }

    /// Reduces row `row` from column `col`.
    #[must_use]
    pub fn aggregate_row(&self, row: usize, col: usize, aggregator: Aggregator) -> N {
        self.slice_row(row, col).aggregate(aggregator)
    }

    /// Reduces column `col` from row `row`.
    #[must_use]
    pub fn aggregate_column(&self, row: usize, col: usize, aggregator: Aggregator) -> N {
        self.slice_column(row, col).aggregate(aggregator)
    }

    /// Reduces the diagonal from `(row, col)`.
    #[must_use]
    pub fn aggregate_diagonal(&self, row: usize, col: usize, aggregator: Aggregator) -> N {
        self.slice_diagonal(row, col).aggregate(aggregator)
    }

    /// Reduces every element.
    #[must_use]
    pub fn aggregate_all(&self, aggregator: Aggregator) -> N {
        aggregator.aggregate(&self.data)
    }

    /// One reduced value per row.
    #[must_use]
    pub fn reduce_rows(&self, aggregator: Aggregator) -> Vec<N> {
        (0..self.num_rows)
            .map(|row| self.aggregate_row(row, 0, aggregator))
            .collect()
    }

    /// One reduced value per column.
    #[must_use]
    pub fn reduce_columns(&self, aggregator: Aggregator) -> Vec<N> {
        (0..self.num_cols)
            .map(|col| self.aggregate_column(0, col, aggregator))
            .collect()
    }

    /// One value per row, folded left to right with `combiner`.
    pub fn reduce_rows_with(&self, init: &N, mut combiner: impl FnMut(N, &N) -> N) -> Vec<N> {
        (0..self.num_rows)
            .map(|row| {
                self.slice_row(row, 0)
                    .iter()
                    .fold(init.clone(), &mut combiner)
            })
            .collect()
    }

    /// One value per column, folded top to bottom with `combiner`.
    pub fn reduce_columns_with(&self, init: &N, mut combiner: impl FnMut(N, &N) -> N) -> Vec<N> {
        (0..self.num_cols)
            .map(|col| self.column(col).iter().fold(init.clone(), &mut combiner))
            .collect()
    }

    /// Flat index of the element with the largest norm; ties keep the first.
    #[must_use]
    pub fn index_of_largest(&self) -> Option<usize> {
        self.index_of_largest_in_range(0, self.data.len())
    }

    /// Flat index of the largest element in `first..limit`.
    #[must_use]
    pub fn index_of_largest_in_range(&self, first: usize, limit: usize) -> Option<usize> {
        let slice = self.slice_range(first, limit);
        slice.index_of_largest().map(|i| slice.parent_index(i))
    }

    /// Column of the largest element in row `row` from column `col`.
    #[must_use]
    pub fn index_of_largest_in_row(&self, row: usize, col: usize) -> Option<usize> {
        self.slice_row(row, col).index_of_largest().map(|i| col + i)
    }

    /// Row of the largest element in column `col` from row `row`.
    #[must_use]
    pub fn index_of_largest_in_column(&self, row: usize, col: usize) -> Option<usize> {
        self.slice_column(row, col)
            .index_of_largest()
            .map(|i| row + i)
    }

    /// Row of the largest element on the diagonal from `(row, col)`.
    #[must_use]
    pub fn index_of_largest_on_diagonal(&self, row: usize, col: usize) -> Option<usize> {
        self.slice_diagonal(row, col)
            .index_of_largest()
            .map(|i| row + i)
    }

    /// Tests the element at `(row, col)` with [`Scalar::is_small`].
    #[must_use]
    pub fn is_small(&self, row: usize, col: usize, compared_to: f64) -> bool {
        self[(row, col)].is_small(compared_to)
    }

    /// Tests every element with [`Scalar::is_small`].
    #[must_use]
    pub fn is_all_small(&self, compared_to: f64) -> bool {
        self.data.iter().all(|v| v.is_small(compared_to))
    }

    /// Tests column `col` from row `row`.
    #[must_use]
    pub fn is_column_small(&self, row: usize, col: usize, compared_to: f64) -> bool {
        self.slice_column(row, col).is_all_small(compared_to)
    }

    /// Tests row `row` from column `col`.
    #[must_use]
    pub fn is_row_small(&self, row: usize, col: usize, compared_to: f64) -> bool {
        self.slice_row(row, col).is_all_small(compared_to)
    }
}

impl<N> Index<(usize, usize)> for DenseMatrix<N> {
    type Output = N;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.num_rows && col < self.num_cols);
        &self.data[row + col * self.num_rows]
    }
}

impl<N> IndexMut<(usize, usize)> for DenseMatrix<N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.num_rows && col < self.num_cols);
        &mut self.data[row + col * self.num_rows]
    }
}

impl<N: Scalar> Add for &DenseMatrix<N> {
    type Output = DenseMatrix<N>;

    fn add(self, other: Self) -> DenseMatrix<N> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<N: Scalar> Sub for &DenseMatrix<N> {
    type Output = DenseMatrix<N>;

    fn sub(self, other: Self) -> DenseMatrix<N> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}
