//! Error types for interpolation.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while evaluating a Lagrange interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// A Lagrange term does not divide evenly.
    #[error("non-exact division: {numerator} is not a multiple of {denominator}")]
    NonExactDivision {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// Two points in the basis share the same x-coordinate.
    #[error("duplicate x-coordinate {x} in interpolation basis")]
    DuplicateAbscissa { x: BigInt },

    /// Interpolation requires at least one point.
    #[error("cannot interpolate an empty point set")]
    EmptyPointSet,
}
