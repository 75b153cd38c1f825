//! # clif-gen
//!
//! Faithful real matrix representations of Clifford algebras Cl(p,q).
//!
//! A Clifford algebra of signature (p,q) is generated by p+q anti-commuting
//! elements with e_i² = +1 (the first p) or e_i² = −1 (the remaining q).
//! This crate constructs, per signature, a set of monomial ±1 matrices
//! whose products reproduce those relations, using the period-8 (Bott)
//! recursion over signature classes.
//!
//! Construction is memoized in an explicit [`GeneratorTable`]; sequences
//! are built once per signature and handed out as shared read-only views.
//!
//! ```
//! use clif_gen::GeneratorTable;
//! use clif_matrix::ops::mono_prod;
//! use clif_matrix::SparseMatrix;
//!
//! let table = GeneratorTable::<f64>::new();
//! // Cl(1,1): generator 0 squares to +I, generator 1 to -I.
//! let e0 = table.generator(1, 1, 0).unwrap();
//! let sq = mono_prod(&e0, &e0).unwrap();
//! assert_eq!(sq, SparseMatrix::identity(2));
//! ```

pub mod error;
pub mod sequence;
pub mod signature;
pub mod table;

pub use error::GenError;
pub use sequence::{GeneratorSeq, GeneratorView};
pub use signature::Signature;
pub use table::GeneratorTable;

pub type Result<T> = std::result::Result<T, GenError>;
