//! Row-major sparse matrix with inline storage for monomial rows.
//!
//! The matrices flowing through the generator engine are *monomial*: at
//! most one non-zero per row and per column, and that entry is ±1. Rows
//! are therefore `SmallVec`s with inline capacity 1, so the common case
//! never touches the heap per row.

use std::fmt;
use std::ops::Neg;

use smallvec::SmallVec;

use crate::scalar::Scalar;

type Row<T> = SmallVec<[(usize, T); 1]>;

/// Sparse matrix storing only structural non-zeros, row by row.
///
/// Entries within a row are kept sorted by column, so `PartialEq` compares
/// structure and values directly. Rectangular shapes are supported (`kron`
/// and `nork` need them); the generator engine only produces square ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    rows: Vec<Row<T>>,
    cols: usize,
}

impl<T: Scalar> SparseMatrix<T> {
    /// All-zero matrix of the given shape.
    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self {
            rows: vec![SmallVec::new(); nrows],
            cols: ncols,
        }
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.rows[i].push((i, T::one()));
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows.len() == self.cols
    }

    /// Dimension of a square matrix.
    pub fn dim(&self) -> usize {
        debug_assert!(self.is_square());
        self.rows.len()
    }

    /// Set entry (row, col), replacing any existing value. A zero value
    /// clears the entry so stored entries stay structurally non-zero.
    pub fn insert(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.nrows() && col < self.cols, "entry out of bounds");
        let r = &mut self.rows[row];
        match r.binary_search_by_key(&col, |(c, _)| *c) {
            Ok(idx) => {
                if value.is_zero() {
                    r.remove(idx);
                } else {
                    r[idx].1 = value;
                }
            }
            Err(idx) => {
                if !value.is_zero() {
                    r.insert(idx, (col, value));
                }
            }
        }
    }

    /// Add `value` to entry (row, col), clearing the entry if the sum
    /// cancels to zero.
    pub fn add_at(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.nrows() && col < self.cols, "entry out of bounds");
        let r = &mut self.rows[row];
        match r.binary_search_by_key(&col, |(c, _)| *c) {
            Ok(idx) => {
                let sum = r[idx].1.clone() + value;
                if sum.is_zero() {
                    r.remove(idx);
                } else {
                    r[idx].1 = sum;
                }
            }
            Err(idx) => {
                if !value.is_zero() {
                    r.insert(idx, (col, value));
                }
            }
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        let r = self.rows.get(row)?;
        r.binary_search_by_key(&col, |(c, _)| *c)
            .ok()
            .map(|idx| &r[idx].1)
    }

    /// Non-zero entries of one row, sorted by column.
    pub fn row(&self, row: usize) -> &[(usize, T)] {
        &self.rows[row]
    }

    /// Iterate over structural non-zeros as (row, col, &value).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().map(move |(c, v)| (r, *c, v)))
    }

    /// Count of structural non-zeros.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// Does every row hold exactly one non-zero?
    ///
    /// Necessary condition for monomial shape; cheap gate for the fast
    /// multiply path.
    pub fn is_singlet(&self) -> bool {
        self.rows.iter().all(|r| r.len() == 1)
    }

    /// Is this a signed permutation shape: one non-zero per row *and* per
    /// column? All generator matrices satisfy this.
    pub fn is_perm_shaped(&self) -> bool {
        self.is_singlet() && self.transpose().is_singlet()
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zero(self.cols, self.rows.len());
        for (r, c, v) in self.iter() {
            out.rows[c].push((r, v.clone()));
        }
        for row in &mut out.rows {
            row.sort_by_key(|(c, _)| *c);
        }
        out
    }
}

impl<T: Scalar> Neg for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn neg(self) -> SparseMatrix<T> {
        let mut out = self.clone();
        for row in &mut out.rows {
            for (_, v) in row.iter_mut() {
                *v = -v.clone();
            }
        }
        out
    }
}

impl<T: Scalar> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} [", self.nrows(), self.cols)?;
        let mut first = true;
        for (r, c, v) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "({r},{c})={v}")?;
            first = false;
        }
        write!(f, "]")
    }
}
