//! Generator-level errors.

use clif_matrix::MatrixError;

/// Errors raised when requesting generator matrices.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("invalid signature: p = {p}, q = {q} (both must be non-negative)")]
    InvalidSignature { p: i32, q: i32 },

    #[error("generator index {index} out of range for Cl({p},{q})")]
    IndexOutOfRange { p: i32, q: i32, index: i32 },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
