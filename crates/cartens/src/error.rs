//! Error types for cartens.

use thiserror::Error;

/// Errors that can occur in tensor construction and conversion.
///
/// Shape and bounds violations on the hot path (structured indexing,
/// kernel calls) are debug-checked preconditions rather than errors; this
/// enum covers the operations that are fallible by design: construction
/// from external data, checked narrowing conversions, and `try_inv`.
#[derive(Debug, Error)]
pub enum TensorError {
    /// Data length does not match the storage size implied by the shape.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A rank-2 container was given a non-square shape.
    #[error("matrix must be square: got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Index out of bounds.
    #[error("index out of bounds: index {index} is out of range for dimension {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// A dense source claimed to be symmetric is not.
    #[error("dense source is not symmetric: A[{i},{j}] != A[{j},{i}]")]
    NotSymmetric { i: usize, j: usize },

    /// A dense source claimed to be diagonal has a non-zero off-diagonal entry.
    #[error("dense source is not diagonal: A[{i},{j}] != 0")]
    NotDiagonal { i: usize, j: usize },

    /// The matrix is singular and cannot be inverted.
    #[error("matrix is singular")]
    Singular,

    /// Closed-form determinant/inverse only exist for 2 and 3 dimensions.
    #[error("no closed-form determinant/inverse for {nd} dimensions")]
    UnsupportedDim { nd: usize },
}
