//! # Densa
//!
//! Generic dense linear algebra over real, exact and hypercomplex scalars.
//!
//! Densa stores matrices column-major in one flat buffer and exposes strided
//! row, column and diagonal slices over it. On top of that sit a matrix
//! multiplication dispatcher and an in-place Cholesky decomposition, both
//! written once against the [`Scalar`](densa_scalar::Scalar) trait.
//!
//! ## Features
//!
//! - **Scalar Domains**: `f64`, `f32`, exact rationals, fixed-scale decimals,
//!   complex numbers and quaternions
//! - **Multiplication**: unrolled kernels for native floats, AXPY updates for
//!   everything else, rayon fan-out for tall products
//! - **Cholesky**: factor, determinant, rank estimate, solve and invert
//!
//! ## Quick Start
//!
//! ```rust
//! use densa::prelude::*;
//!
//! let a = DenseMatrix::from_rows(vec![
//!     vec![4.0, 12.0, -16.0],
//!     vec![12.0, 37.0, -43.0],
//!     vec![-16.0, -43.0, 98.0],
//! ]);
//!
//! let mut chol = Cholesky::<f64>::new();
//! assert!(chol.decompose(&a));
//! assert!((chol.determinant() - 6.0).abs() < 1e-12);
//!
//! let b = DenseMatrix::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]]);
//! let x = chol.solution(&b).unwrap();
//! assert!((x[(2, 0)] - 4.0 / 3.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use densa_linalg as linalg;
pub use densa_numbers as numbers;
pub use densa_scalar as scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use densa_linalg::{
        Access2D, Aggregator, Cholesky, CholeskyConfig, DenseMatrix, LinalgError, MultiplyConfig,
        State,
    };
    pub use densa_numbers::{Decimal, Integer, Rational};
    pub use densa_scalar::{Complex64, Quaternion, Scalar};
}
