/*
    Errors
*/

use thiserror::Error;

use crate::Shape;

/// Recoverable failures reported by intervals and bounds matrices.
///
/// Numerically degenerate results (division by an interval containing zero,
/// disjoint intersections, `sqrt` of a negative interval) are *not* errors;
/// they produce documented `Interval` values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Two matrices taking part in a binary operation differ in shape.
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: Shape, found: Shape },

    /// Operation requires a square matrix.
    #[error("matrix of shape {0} is not square")]
    NotSquare(Shape),

    /// Operation is only provided for a fixed set of sizes.
    #[error("operation not supported for a matrix of shape {0}")]
    UnsupportedSize(Shape),

    /// Coefficient storage does not match the requested shape.
    #[error("expected {expected} coefficients, received {found}")]
    DataLength { expected: usize, found: usize },

    /// Lower bound greater than the upper bound.
    #[error("invalid interval, lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    /// Exactly one of the two bounds is NaN.
    #[error("malformed interval [{lower}, {upper}], only one bound is NaN")]
    MalformedBounds { lower: f64, upper: f64 },
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
