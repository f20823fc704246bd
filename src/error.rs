//! Error types for matr

use thiserror::Error;

/// Result type alias using matr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Element-wise operation on differently shaped matrices, or a
    /// non-square input where a square one is required
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        got: (usize, usize),
    },

    /// Inner dimensions do not agree for multiplication
    #[error("incompatible dimensions for multiplication: lhs is {lhs:?}, rhs is {rhs:?}")]
    IncompatibleDimensions {
        /// Left operand (rows, cols)
        lhs: (usize, usize),
        /// Right operand (rows, cols)
        rhs: (usize, usize),
    },

    /// A pivot magnitude fell below the singularity tolerance during
    /// decomposition
    #[error("singular matrix: null pivot at index {pivot}")]
    SingularMatrix {
        /// Index of the failing pivot column
        pivot: usize,
    },

    /// A sequence length does not match the required dimension
    #[error("dimension mismatch: expected {expected} elements, got {got}")]
    DimensionMismatch {
        /// Required length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// I/O failure while loading or saving
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed numeric value in a matrix or vector file
    #[error("parse error: {0}")]
    Parse(#[from] std::num::ParseFloatError),

    /// Malformed size header in a matrix or vector file
    #[error("invalid size header: {0}")]
    ParseSize(#[from] std::num::ParseIntError),

    /// File ended before all declared values were read
    #[error("insufficient data: expected {expected} values, got {got}")]
    InsufficientData {
        /// Number of values the header declared
        expected: usize,
        /// Number of values actually present
        got: usize,
    },
}
