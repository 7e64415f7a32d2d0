//! # densa-linalg
//!
//! Dense linear algebra kernels for densa.
//!
//! This crate provides:
//! - Column-major dense matrices with strided row, column and diagonal views
//! - Triangular and Hermitian zero-copy views
//! - A matrix multiplication dispatcher with fixed-size kernels for native
//!   floats and a parallel divide-and-conquer path via rayon
//! - An in-place Cholesky decomposition with determinant, solve and invert
//!
//! ## Kernel Selection
//!
//! The multiplier picks a kernel once per product shape:
//! - Many rows (> threshold): column blocks on the rayon pool
//! - 6 to 10 rows: one accumulator per output row
//! - 2×2 to 5×5: fully unrolled tile
//! - Single row: one accumulator per output column
//! - Everything else, and every non-native scalar: column AXPY updates

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod cholesky;
pub mod dense_matrix;
pub mod error;
pub mod multiply;
pub mod slice;
pub mod structure;

mod kernels;
mod parallel;
mod substitute;

pub use aggregator::Aggregator;
pub use cholesky::{Cholesky, CholeskyConfig, State};
pub use dense_matrix::DenseMatrix;
pub use error::{LinalgError, Result};
pub use kernels::Primitive;
pub use multiply::{
    multiply, multiply_primitive, GenericMultiply, Kernel, MultiplyConfig, PrimitiveMultiply,
};
pub use slice::{Slice, SliceMut};
pub use structure::{Access2D, Hermitian, Triangular};

#[cfg(test)]
mod proptests;
