//! Cached generator sequences and the views handed out to callers.

use std::ops::{Deref, Index};
use std::sync::Arc;

use clif_matrix::{Scalar, SparseMatrix};

/// The ordered matrices cached for one signature.
///
/// For a signature (p,q) with even p+q the sequence holds p+q+1 square
/// matrices of dimension 2^((p+q)/2): entries 0..q are the negative-square
/// generators (outermost first), entry q is an auxiliary element consumed
/// only by the periodicity recursion, and entries q+1..=p+q are the
/// positive-square generators in order.
#[derive(Debug, Clone)]
pub struct GeneratorSeq<T> {
    mats: Vec<SparseMatrix<T>>,
}

impl<T: Scalar> GeneratorSeq<T> {
    pub(crate) fn new(mats: Vec<SparseMatrix<T>>) -> Self {
        debug_assert!(!mats.is_empty());
        Self { mats }
    }

    pub fn len(&self) -> usize {
        self.mats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mats.is_empty()
    }

    /// Common dimension of every matrix in the sequence.
    pub fn dim(&self) -> usize {
        self.mats[0].dim()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SparseMatrix<T>> {
        self.mats.iter()
    }
}

impl<T: Scalar> Index<usize> for GeneratorSeq<T> {
    type Output = SparseMatrix<T>;

    fn index(&self, pos: usize) -> &SparseMatrix<T> {
        &self.mats[pos]
    }
}

/// Read-only view of one generator matrix.
///
/// Holds the cached sequence alive via `Arc`, so the matrix is borrowed
/// from the cache rather than copied. Derefs to [`SparseMatrix`].
#[derive(Debug, Clone)]
pub struct GeneratorView<T> {
    seq: Arc<GeneratorSeq<T>>,
    pos: usize,
}

impl<T: Scalar> GeneratorView<T> {
    pub(crate) fn new(seq: Arc<GeneratorSeq<T>>, pos: usize) -> Self {
        Self { seq, pos }
    }

    pub fn matrix(&self) -> &SparseMatrix<T> {
        &self.seq[self.pos]
    }
}

impl<T: Scalar> Deref for GeneratorView<T> {
    type Target = SparseMatrix<T>;

    fn deref(&self) -> &SparseMatrix<T> {
        self.matrix()
    }
}
