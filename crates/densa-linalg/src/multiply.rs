//! Matrix multiplication dispatcher.
//!
//! A multiplier is built once for a product shape and picks its kernel at
//! construction:
//!
//! | Condition (in order)        | Kernel            |
//! |-----------------------------|-------------------|
//! | `rows > threshold`          | `Parallel`        |
//! | `rows` in `6..=10`          | `Panel(rows)`     |
//! | `rows == columns` in `2..=5`| `Square(rows)`    |
//! | `rows == 1`                 | `Row`             |
//! | otherwise                   | `Generic`         |
//!
//! Only native floats ([`PrimitiveMultiply`]) have the fixed-size kernels.
//! Any other scalar ([`GenericMultiply`]) runs `Generic` or `Parallel`.

use std::marker::PhantomData;

use densa_scalar::Scalar;

use crate::dense_matrix::DenseMatrix;
use crate::error::{check_dimension, Result};
use crate::kernels::{self, Primitive};
use crate::parallel::divide_and_conquer;
use crate::structure::Access2D;

/// Configuration for the multiplication dispatcher.
#[derive(Clone, Debug)]
pub struct MultiplyConfig {
    /// Products with more rows than this run in parallel; also the number of
    /// columns below which a parallel block is not split further.
    pub threshold: usize,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self { threshold: 32 }
    }
}

/// The kernel chosen for a product shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
    /// `1×N`, one accumulator per output column.
    Row,
    /// `M×M` for `M` in `2..=5`, fully unrolled tile.
    Square(usize),
    /// `M×N` for `M` in `6..=10`, one accumulator per output row.
    Panel(usize),
    /// Zero-fill followed by column AXPY updates.
    Generic,
    /// `Generic` spread over column blocks on the rayon pool.
    Parallel,
}

impl Kernel {
    /// Kernel for a native-float product of the given shape.
    #[must_use]
    pub fn select_primitive(rows: usize, columns: usize, config: &MultiplyConfig) -> Self {
        if rows > config.threshold {
            Kernel::Parallel
        } else if (6..=10).contains(&rows) {
            Kernel::Panel(rows)
        } else if rows == columns && (2..=5).contains(&rows) {
            Kernel::Square(rows)
        } else if rows == 1 {
            Kernel::Row
        } else {
            Kernel::Generic
        }
    }

    /// Kernel for a product over any other scalar domain.
    #[must_use]
    pub fn select_generic(rows: usize, config: &MultiplyConfig) -> Self {
        if rows > config.threshold {
            Kernel::Parallel
        } else {
            Kernel::Generic
        }
    }
}

fn assert_shapes<N, A: Access2D<N> + ?Sized>(
    rows: usize,
    columns: usize,
    product: &[N],
    left: &A,
    complexity: usize,
    right: &[N],
) {
    assert_eq!(product.len(), rows * columns, "product length");
    assert_eq!(right.len(), complexity * columns, "right length");
    assert_eq!(left.count_rows(), rows, "left rows");
    assert_eq!(left.count_columns(), complexity, "left columns");
}

/// Multiplier for native floats.
#[derive(Clone, Debug)]
pub struct PrimitiveMultiply<T> {
    rows: usize,
    columns: usize,
    threshold: usize,
    kernel: Kernel,
    _marker: PhantomData<T>,
}

impl<T: Primitive> PrimitiveMultiply<T> {
    /// Selects the kernel for a `rows × columns` product.
    #[must_use]
    pub fn new(rows: usize, columns: usize, config: &MultiplyConfig) -> Self {
        let kernel = Kernel::select_primitive(rows, columns, config);
        log::trace!("primitive multiply {rows}x{columns} uses {kernel:?}");
        Self {
            rows,
            columns,
            threshold: config.threshold,
            kernel,
            _marker: PhantomData,
        }
    }

    /// The selected kernel.
    #[must_use]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Writes `left × right` into `product`.
    ///
    /// `product` (`rows × columns`) and `right` (`complexity × columns`) are
    /// column-major.
    ///
    /// # Panics
    ///
    /// Panics if any buffer or operand disagrees with the shape this
    /// multiplier was built for.
    pub fn invoke<A>(&self, product: &mut [T], left: &A, complexity: usize, right: &[T])
    where
        A: Access2D<T> + Sync + ?Sized,
    {
        assert_shapes(self.rows, self.columns, product, left, complexity, right);
        match self.kernel {
            Kernel::Row => kernels::row(product, left, complexity, right),
            Kernel::Square(2) => kernels::square::<T, A, 2>(product, left, complexity, right),
            Kernel::Square(3) => kernels::square::<T, A, 3>(product, left, complexity, right),
            Kernel::Square(4) => kernels::square::<T, A, 4>(product, left, complexity, right),
            Kernel::Square(5) => kernels::square::<T, A, 5>(product, left, complexity, right),
            Kernel::Panel(6) => kernels::panel::<T, A, 6>(product, left, complexity, right),
            Kernel::Panel(7) => kernels::panel::<T, A, 7>(product, left, complexity, right),
            Kernel::Panel(8) => kernels::panel::<T, A, 8>(product, left, complexity, right),
            Kernel::Panel(9) => kernels::panel::<T, A, 9>(product, left, complexity, right),
            Kernel::Panel(10) => kernels::panel::<T, A, 10>(product, left, complexity, right),
            Kernel::Parallel => {
                product.fill(T::zero());
                divide_and_conquer(product, self.rows, 0, self.threshold, &|block: &mut [T], first| {
                    kernels::accumulate(
                        block,
                        first,
                        left,
                        complexity,
                        right,
                        kernels::axpy_primitive,
                    );
                });
            }
            Kernel::Generic | Kernel::Square(_) | Kernel::Panel(_) => {
                product.fill(T::zero());
                kernels::accumulate(product, 0, left, complexity, right, kernels::axpy_primitive);
            }
        }
    }
}

/// Multiplier for any scalar domain.
#[derive(Clone, Debug)]
pub struct GenericMultiply<N> {
    rows: usize,
    columns: usize,
    threshold: usize,
    kernel: Kernel,
    _marker: PhantomData<N>,
}

impl<N: Scalar> GenericMultiply<N> {
    /// Selects the kernel for a `rows × columns` product.
    #[must_use]
    pub fn new(rows: usize, columns: usize, config: &MultiplyConfig) -> Self {
        let kernel = Kernel::select_generic(rows, config);
        log::trace!("generic multiply {rows}x{columns} uses {kernel:?}");
        Self {
            rows,
            columns,
            threshold: config.threshold,
            kernel,
            _marker: PhantomData,
        }
    }

    /// The selected kernel.
    #[must_use]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Writes `left × right` into `product`.
    ///
    /// # Panics
    ///
    /// Panics if any buffer or operand disagrees with the shape this
    /// multiplier was built for.
    pub fn invoke<A>(&self, product: &mut [N], left: &A, complexity: usize, right: &[N])
    where
        A: Access2D<N> + Sync + ?Sized,
    {
        assert_shapes(self.rows, self.columns, product, left, complexity, right);
        product.fill(N::zero());
        if self.kernel == Kernel::Parallel {
            divide_and_conquer(product, self.rows, 0, self.threshold, &|block: &mut [N], first| {
                kernels::accumulate(block, first, left, complexity, right, kernels::axpy);
            });
        } else {
            kernels::accumulate(product, 0, left, complexity, right, kernels::axpy);
        }
    }
}

fn check_inner<N, A: Access2D<N> + ?Sized>(left: &A, right: &DenseMatrix<N>) -> Result<()> {
    check_dimension("multiply", left.count_columns(), right.num_rows())
}

/// Computes `left × right` over any scalar domain.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`](crate::LinalgError) if the
/// inner dimensions disagree.
pub fn multiply<N, A>(left: &A, right: &DenseMatrix<N>, config: &MultiplyConfig) -> Result<DenseMatrix<N>>
where
    N: Scalar,
    A: Access2D<N> + Sync + ?Sized,
{
    check_inner(left, right)?;
    let (rows, columns) = (left.count_rows(), right.num_cols());
    let mut product = DenseMatrix::zeros(rows, columns);
    GenericMultiply::new(rows, columns, config).invoke(
        product.as_mut_slice(),
        left,
        right.num_rows(),
        right.as_slice(),
    );
    Ok(product)
}

/// Computes `left × right` with the native-float kernels.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`](crate::LinalgError) if the
/// inner dimensions disagree.
pub fn multiply_primitive<T, A>(
    left: &A,
    right: &DenseMatrix<T>,
    config: &MultiplyConfig,
) -> Result<DenseMatrix<T>>
where
    T: Primitive,
    A: Access2D<T> + Sync + ?Sized,
{
    check_inner(left, right)?;
    let (rows, columns) = (left.count_rows(), right.num_cols());
    let mut product = DenseMatrix::zeros(rows, columns);
    PrimitiveMultiply::new(rows, columns, config).invoke(
        product.as_mut_slice(),
        left,
        right.num_rows(),
        right.as_slice(),
    );
    Ok(product)
}

impl<N: Scalar> DenseMatrix<N> {
    /// Matrix-matrix multiply with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`](crate::LinalgError) if
    /// `self.num_cols() != right.num_rows()`.
    pub fn multiply(&self, right: &Self) -> Result<Self> {
        multiply(self, right, &MultiplyConfig::default())
    }
}
