//! # densa-numbers
//!
//! Arbitrary precision numbers for the densa scalar domains.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals (`Rational`)
//! - Fixed-precision decimals (`Decimal`, 34 significant digits)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Rational arithmetic normalizes after every operation; expect growth of
//!   numerators and denominators in long elimination sequences

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod decimal;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use decimal::Decimal;
pub use integer::Integer;
pub use rational::Rational;
