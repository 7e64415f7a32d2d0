//! Errors raised by the checked entry points.

use thiserror::Error;

/// Errors that can occur in multiplication, solving and inversion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes do not conform.
    #[error("dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The entry point that rejected its operands.
        operation: &'static str,
        /// The extent the operation required.
        expected: usize,
        /// The extent it was given.
        found: usize,
    },

    /// The last decomposition is not usable for an inverse.
    #[error("matrix not invertible")]
    NotInvertible,

    /// The last decomposition is not usable for a solve.
    #[error("equation system not solvable")]
    NotSolvable,
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Fails with [`LinalgError::DimensionMismatch`] unless `expected == found`.
pub(crate) fn check_dimension(operation: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            operation,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = LinalgError::DimensionMismatch {
            operation: "multiply",
            expected: 3,
            found: 2,
        };
        assert_eq!(
            e.to_string(),
            "dimension mismatch in multiply: expected 3, found 2"
        );
        assert_eq!(LinalgError::NotInvertible.to_string(), "matrix not invertible");
        assert_eq!(
            LinalgError::NotSolvable.to_string(),
            "equation system not solvable"
        );
    }

    #[test]
    fn test_check_dimension() {
        assert!(check_dimension("solve", 4, 4).is_ok());
        assert!(matches!(
            check_dimension("solve", 4, 5),
            Err(LinalgError::DimensionMismatch { expected: 4, found: 5, .. })
        ));
    }
}
