//! Scalar trait alias for matrix entries.

use std::fmt;
use std::ops::Neg;

use num_traits::Num;

/// Entry type for `SparseMatrix`: a field-like scalar with exact 0, 1 and
/// negation.
///
/// Blanket-implemented for anything satisfying the bounds, which covers
/// `f32`, `f64`, integers and `num_complex::Complex`.
pub trait Scalar: Num + Neg<Output = Self> + Clone + fmt::Display {}

impl<T> Scalar for T where T: Num + Neg<Output = Self> + Clone + fmt::Display {}
