//! # clif-matrix
//!
//! Sparse matrix foundation for the clif workspace.
//!
//! Provides the `SparseMatrix` value type with:
//! - Row-major storage tuned for monomial matrices (≤ 1 entry per row)
//! - Kronecker product and its approximate left-inverse
//! - O(dim) monomial product and a general sparse product
//! - Structural predicates (`is_singlet`, `is_perm_shaped`) and a
//!   normalized Frobenius pairing
//!
//! Everything is generic over a real or complex scalar via the `Scalar`
//! trait; the generator engine in `clif-gen` only ever stores exact ±1
//! entries, so integer scalars work as well.

pub mod error;
pub mod ops;
pub mod scalar;
pub mod sparse;

pub use error::MatrixError;
pub use scalar::Scalar;
pub use sparse::SparseMatrix;

pub type Result<T> = std::result::Result<T, MatrixError>;
