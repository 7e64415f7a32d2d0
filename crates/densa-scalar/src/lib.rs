//! # densa-scalar
//!
//! Scalar domains for densa matrices.
//!
//! This crate provides:
//! - The `Scalar` trait: identities, arithmetic, square root, conjugate,
//!   magnitude, real projection and machine epsilon
//! - Implementations for `f64`, `f32`, `Rational`, `Decimal`, `Complex64`
//! - A `Quaternion` type
//!
//! ## Domains
//!
//! ```text
//! Scalar
//!  ├── real:      f64, f32, Rational, Decimal
//!  └── non-real:  Complex64, Quaternion   (conjugate != identity)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod primitive;
pub mod quaternion;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use densa_numbers::{Decimal, Rational};
pub use num_complex::Complex64;
pub use quaternion::Quaternion;
pub use traits::Scalar;
