//! In-place Cholesky decomposition `A = L·Lᴴ`.
//!
//! The engine copies its input into a working matrix and overwrites the lower
//! triangle (diagonal included) with `L`. The upper triangle is never read
//! again. Every `decompose` starts from scratch.
//!
//! ```text
//! Uninitialized ──decompose──▶ Solvable | Unsolvable ──decompose──▶ ...
//! ```
//!
//! A non-square, non-positive-definite or numerically rank deficient input
//! is not an error at decomposition time; it is recorded and surfaces as
//! [`LinalgError::NotSolvable`] or [`LinalgError::NotInvertible`] from the
//! solving methods.

use densa_scalar::Scalar;

use crate::aggregator::Aggregator;
use crate::dense_matrix::DenseMatrix;
use crate::error::{check_dimension, LinalgError, Result};
use crate::parallel::for_each_column;
use crate::structure::{Access2D, Hermitian, Triangular};
use crate::substitute::{substitute_backwards, substitute_forwards};

/// Configuration for the Cholesky engine.
#[derive(Clone, Debug)]
pub struct CholeskyConfig {
    /// Column operations touching more columns than this run in parallel.
    pub parallel_threshold: usize,
    /// Verify that the input is Hermitian before factoring.
    pub check_hermitian: bool,
}

impl Default for CholeskyConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 32,
            check_hermitian: false,
        }
    }
}

/// Lifecycle of a decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Nothing decomposed yet, or reset.
    Uninitialized,
    /// The last input was positive definite and well conditioned.
    Solvable,
    /// The last input could not be factored, or is numerically singular.
    Unsolvable,
}

/// Cholesky decomposition engine.
#[derive(Clone, Debug)]
pub struct Cholesky<N> {
    config: CholeskyConfig,
    in_place: DenseMatrix<N>,
    max_diagonal: f64,
    min_diagonal: f64,
    positive_definite: bool,
    state: State,
}

impl<N: Scalar> Default for Cholesky<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Scalar> Cholesky<N> {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CholeskyConfig::default())
    }

    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn with_config(config: CholeskyConfig) -> Self {
        Self {
            config,
            in_place: DenseMatrix::zeros(0, 0),
            max_diagonal: f64::MIN_POSITIVE,
            min_diagonal: f64::MAX,
            positive_definite: false,
            state: State::Uninitialized,
        }
    }

    /// The configuration of this engine.
    #[must_use]
    pub fn config(&self) -> &CholeskyConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Factors `matrix`, returning [`Cholesky::is_solvable`].
    ///
    /// Only the lower triangle of `matrix` is read, unless the configuration
    /// asks for a Hermitian check.
    pub fn decompose<A: Access2D<N> + ?Sized>(&mut self, matrix: &A) -> bool {
        let check = self.config.check_hermitian;
        self.compute(matrix, check)
    }

    /// Like [`Cholesky::decompose`], but a non-Hermitian input is recorded as
    /// unsolvable.
    pub fn check_and_decompose<A: Access2D<N> + ?Sized>(&mut self, matrix: &A) -> bool {
        self.compute(matrix, true)
    }

    fn compute<A: Access2D<N> + ?Sized>(&mut self, matrix: &A, check_hermitian: bool) -> bool {
        self.reset();
        self.in_place = DenseMatrix::copy_of(matrix);

        let rows = self.in_place.num_rows();
        let cols = self.in_place.num_cols();
        let mut positive_definite = rows == cols;

        if positive_definite && check_hermitian && !self.in_place.is_hermitian() {
            log::debug!("cholesky input {rows}x{cols} is not hermitian");
            positive_definite = false;
        }

        let mut multipliers = vec![N::zero(); rows];
        let threshold = self.config.parallel_threshold;

        for ij in 0..rows.min(cols) {
            if !positive_definite {
                break;
            }
            let value = self.in_place[(ij, ij)].to_f64();
            self.max_diagonal = self.max_diagonal.max(value);
            self.min_diagonal = self.min_diagonal.min(value);
            if value > 0.0 {
                self.in_place.modify_one(ij, ij, Scalar::sqrt);
                self.divide_and_copy_column(ij, &mut multipliers);
                let trailing = &mut self.in_place.as_mut_slice()[(ij + 1) * rows..];
                apply_rank_one_update(trailing, rows, ij + 1, &multipliers, threshold);
            } else {
                log::debug!("cholesky pivot {ij} is {value}; input is not positive definite");
                positive_definite = false;
            }
        }

        self.positive_definite = positive_definite;
        self.state = if positive_definite && self.min_diagonal > self.rank_threshold() {
            State::Solvable
        } else {
            if positive_definite {
                log::debug!(
                    "cholesky min diagonal {} within rank threshold {}",
                    self.min_diagonal,
                    self.rank_threshold()
                );
            }
            State::Unsolvable
        };
        self.is_solvable()
    }

    /// Divides column `ij` below the diagonal by the (already rooted)
    /// diagonal and copies the result into `multipliers[ij + 1..]`.
    fn divide_and_copy_column(&mut self, ij: usize, multipliers: &mut [N]) {
        let diagonal = self.in_place[(ij, ij)].clone();
        let column = self.in_place.column_mut(ij);
        for (value, multiplier) in column[ij + 1..]
            .iter_mut()
            .zip(&mut multipliers[ij + 1..])
        {
            *value = value.clone() / diagonal.clone();
            multiplier.clone_from(value);
        }
    }

    /// Factors `matrix` and returns its [`Cholesky::determinant`].
    pub fn calculate_determinant<A: Access2D<N> + ?Sized>(&mut self, matrix: &A) -> N {
        self.decompose(matrix);
        self.determinant()
    }

    /// Product of the diagonal of `L`.
    ///
    /// For a completed factorization this is `sqrt(det(A))`; see
    /// [`Cholesky::matrix_determinant`] for `det(A)` itself.
    #[must_use]
    pub fn determinant(&self) -> N {
        self.in_place.aggregate_diagonal(0, 0, Aggregator::Product)
    }

    /// Product of the squared diagonal of `L`, `det(A)` for a completed
    /// factorization.
    #[must_use]
    pub fn matrix_determinant(&self) -> N {
        self.in_place.aggregate_diagonal(0, 0, Aggregator::Product2)
    }

    /// `10 × max_diagonal × epsilon`, the smallest diagonal of `A` that
    /// counts as nonzero.
    #[must_use]
    pub fn rank_threshold(&self) -> f64 {
        10.0 * self.max_diagonal * N::epsilon()
    }

    /// True if the last input was positive definite and its smallest
    /// diagonal exceeds [`Cholesky::rank_threshold`].
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.state == State::Solvable
    }

    /// True if the last input was square and positive definite.
    #[must_use]
    pub fn is_spd(&self) -> bool {
        self.positive_definite
    }

    /// True once `decompose` has run.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.state != State::Uninitialized
    }

    /// Number of diagonal entries of `L` greater than `sqrt(threshold)`.
    #[must_use]
    pub fn count_significant(&self, threshold: f64) -> usize {
        let minimum = threshold.sqrt();
        self.in_place
            .slice_diagonal(0, 0)
            .iter()
            .filter(|d| d.to_f64() > minimum)
            .count()
    }

    /// Lower triangular view of the factor.
    #[must_use]
    pub fn l(&self) -> Triangular<'_, N> {
        self.in_place.triangular(true, false)
    }

    /// A zero matrix shaped for the solution of `rhs`.
    #[must_use]
    pub fn preallocate<A: Access2D<N> + ?Sized>(&self, rhs: &A) -> DenseMatrix<N> {
        DenseMatrix::zeros(self.in_place.num_rows(), rhs.count_columns())
    }

    fn check_rhs<A: Access2D<N> + ?Sized>(&self, rhs: &A) -> Result<()> {
        check_dimension("solve", self.in_place.num_rows(), rhs.count_rows())
    }

    /// Solves `A·X = rhs` with the current factorization.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSolvable`] if the factorization is not solvable,
    /// [`LinalgError::DimensionMismatch`] if `rhs` has the wrong row count.
    pub fn solution<A: Access2D<N> + ?Sized>(&self, rhs: &A) -> Result<DenseMatrix<N>> {
        let mut preallocated = self.preallocate(rhs);
        self.solution_into(rhs, &mut preallocated)?;
        Ok(preallocated)
    }

    /// Solves `A·X = rhs` into `preallocated`.
    ///
    /// # Errors
    ///
    /// As [`Cholesky::solution`]; also [`LinalgError::DimensionMismatch`] if
    /// `preallocated` is not shaped like `rhs`.
    pub fn solution_into<'o, A: Access2D<N> + ?Sized>(
        &self,
        rhs: &A,
        preallocated: &'o mut DenseMatrix<N>,
    ) -> Result<&'o DenseMatrix<N>> {
        if !self.is_solvable() {
            return Err(LinalgError::NotSolvable);
        }
        self.check_rhs(rhs)?;
        check_dimension("solve", rhs.count_rows(), preallocated.num_rows())?;
        check_dimension("solve", rhs.count_columns(), preallocated.num_cols())?;

        for col in 0..rhs.count_columns() {
            for (row, slot) in preallocated.column_mut(col).iter_mut().enumerate() {
                *slot = rhs.at(row, col);
            }
        }
        let threshold = self.config.parallel_threshold;
        substitute_forwards(preallocated.as_mut_slice(), &self.in_place, false, threshold);
        substitute_backwards(preallocated.as_mut_slice(), &self.in_place, false, threshold);
        Ok(preallocated)
    }

    /// The inverse of the factored matrix.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotInvertible`] if the factorization is not solvable.
    pub fn inverse(&self) -> Result<DenseMatrix<N>> {
        let n = self.in_place.num_rows();
        let mut preallocated = DenseMatrix::zeros(n, n);
        let view = self.inverse_into(&mut preallocated)?;
        Ok(DenseMatrix::copy_of(&view))
    }

    /// Writes the inverse into `preallocated` and returns a Hermitian view of
    /// it. Only the lower triangle of `preallocated` is meaningful.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotInvertible`] if the factorization is not solvable,
    /// [`LinalgError::DimensionMismatch`] if `preallocated` is not `n×n`.
    pub fn inverse_into<'o>(&self, preallocated: &'o mut DenseMatrix<N>) -> Result<Hermitian<'o, N>> {
        if !self.is_solvable() {
            return Err(LinalgError::NotInvertible);
        }
        let n = self.in_place.num_rows();
        check_dimension("invert", n, preallocated.num_rows())?;
        check_dimension("invert", n, preallocated.num_cols())?;

        preallocated.fill_all(&N::zero());
        preallocated.fill_diagonal(0, 0, &N::one());
        let threshold = self.config.parallel_threshold;
        substitute_forwards(preallocated.as_mut_slice(), &self.in_place, true, threshold);
        substitute_backwards(preallocated.as_mut_slice(), &self.in_place, true, threshold);
        Ok(preallocated.hermitian())
    }

    /// Factors `body` and solves `body·X = rhs`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSolvable`] if `body` can not be factored,
    /// [`LinalgError::DimensionMismatch`] on shape disagreement.
    pub fn solve<B, A>(&mut self, body: &B, rhs: &A) -> Result<DenseMatrix<N>>
    where
        B: Access2D<N> + ?Sized,
        A: Access2D<N> + ?Sized,
    {
        self.decompose(body);
        self.solution(rhs)
    }

    /// Factors `body` and solves `body·X = rhs` into `preallocated`.
    ///
    /// # Errors
    ///
    /// As [`Cholesky::solve`].
    pub fn solve_into<'o, B, A>(
        &mut self,
        body: &B,
        rhs: &A,
        preallocated: &'o mut DenseMatrix<N>,
    ) -> Result<&'o DenseMatrix<N>>
    where
        B: Access2D<N> + ?Sized,
        A: Access2D<N> + ?Sized,
    {
        self.decompose(body);
        self.solution_into(rhs, preallocated)
    }

    /// Factors `original` and returns its inverse.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotInvertible`] if `original` can not be factored.
    pub fn invert<A: Access2D<N> + ?Sized>(&mut self, original: &A) -> Result<DenseMatrix<N>> {
        self.decompose(original);
        self.inverse()
    }

    /// Factors `original` and writes its inverse into `preallocated`.
    ///
    /// # Errors
    ///
    /// As [`Cholesky::invert`].
    pub fn invert_into<'o, A: Access2D<N> + ?Sized>(
        &mut self,
        original: &A,
        preallocated: &'o mut DenseMatrix<N>,
    ) -> Result<Hermitian<'o, N>> {
        self.decompose(original);
        self.inverse_into(preallocated)
    }

    /// Forgets the last factorization.
    pub fn reset(&mut self) {
        self.in_place = DenseMatrix::zeros(0, 0);
        self.max_diagonal = f64::MIN_POSITIVE;
        self.min_diagonal = f64::MAX;
        self.positive_definite = false;
        self.state = State::Uninitialized;
    }
}

/// `A[i, k] -= m[i] · conj(m[k])` for every trailing column `k` and `i >= k`.
///
/// `trailing` holds whole columns starting at column `first_column`.
fn apply_rank_one_update<N: Scalar>(
    trailing: &mut [N],
    rows: usize,
    first_column: usize,
    multipliers: &[N],
    threshold: usize,
) {
    for_each_column(trailing, rows, first_column, threshold, |k, column| {
        let mk = multipliers[k].conjugate();
        for (value, mi) in column[k..].iter_mut().zip(&multipliers[k..]) {
            *value = value.clone() - mi.clone() * mk.clone();
        }
    });
}
