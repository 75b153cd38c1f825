//! Matrix algebra primitives used by the generator engine.
//!
//! All operations are pure and iterate structural non-zeros only, so cost
//! scales with sparsity rather than with dense dimension.

use crate::error::MatrixError;
use crate::scalar::Scalar;
use crate::sparse::SparseMatrix;
use crate::Result;

/// Kronecker (tensor) product: block (i,j) of the result is lhs(i,j)·rhs.
///
/// Lifts a generator set for a smaller signature into one of twice the
/// dimension.
pub fn kron<T: Scalar>(lhs: &SparseMatrix<T>, rhs: &SparseMatrix<T>) -> SparseMatrix<T> {
    let (rr, rc) = (rhs.nrows(), rhs.ncols());
    let mut out = SparseMatrix::zero(lhs.nrows() * rr, lhs.ncols() * rc);
    for (i, j, v) in lhs.iter() {
        for (k, l, w) in rhs.iter() {
            out.insert(i * rr + k, j * rc + l, v.clone() * w.clone());
        }
    }
    out
}

/// Approximate left-inverse of `kron`: given `rhs ≈ kron(lhs, b)`,
/// recover `b`.
///
/// For every non-zero of `lhs` at (i,j) the corresponding block of `rhs`
/// is scaled by 1/(lhs(i,j)·norm) and accumulated, where `norm` is the row
/// count of `lhs` when `mono` is set (valid only for monomial `lhs`) and
/// the exact non-zero count otherwise.
///
/// Fails with [`MatrixError::Dimension`] when the shape of `rhs` is zero
/// or not an exact multiple of the shape of `lhs`, and with
/// [`MatrixError::DegenerateInput`] when `lhs` has no non-zero entries.
pub fn nork<T: Scalar>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
    mono: bool,
) -> Result<SparseMatrix<T>> {
    let (lr, lc) = (lhs.nrows(), lhs.ncols());
    let (rr, rc) = (rhs.nrows(), rhs.ncols());
    if lr == 0 || lc == 0 || rr == 0 || rc == 0 || rr % lr != 0 || rc % lc != 0 {
        return Err(MatrixError::Dimension {
            op: "nork",
            lhs_rows: lr,
            lhs_cols: lc,
            rhs_rows: rr,
            rhs_cols: rc,
        });
    }
    if lhs.nnz() == 0 {
        return Err(MatrixError::DegenerateInput);
    }
    let br = rr / lr;
    let bc = rc / lc;
    let norm = scalar_from_count::<T>(if mono { lr } else { lhs.nnz() });

    let mut out = SparseMatrix::zero(br, bc);
    for (i, j, v) in lhs.iter() {
        let denom = v.clone() * norm.clone();
        for r in 0..br {
            for &(c, ref w) in rhs.row(i * br + r) {
                if c >= j * bc && c < (j + 1) * bc {
                    out.add_at(r, c - j * bc, w.clone() / denom.clone());
                }
            }
        }
    }
    Ok(out)
}

/// Product of two matrices assumed monomial: one lookup per row, O(dim).
///
/// This is the hot path of the generator recursion. Correctness requires
/// both operands to truly be monomial: entries beyond the first in any
/// row are silently dropped.
pub fn mono_prod<T: Scalar>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    if !lhs.is_square() || !rhs.is_square() || lhs.nrows() != rhs.nrows() {
        return Err(dimension_error("mono_prod", lhs, rhs));
    }
    let n = lhs.nrows();
    let mut out = SparseMatrix::zero(n, n);
    for i in 0..n {
        if let Some((j, v)) = lhs.row(i).first() {
            if let Some((k, w)) = rhs.row(*j).first() {
                out.insert(i, *k, v.clone() * w.clone());
            }
        }
    }
    Ok(out)
}

/// General sparse product, for operands not known to be monomial.
pub fn sparse_prod<T: Scalar>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    if lhs.ncols() != rhs.nrows() {
        return Err(dimension_error("sparse_prod", lhs, rhs));
    }
    let mut out = SparseMatrix::zero(lhs.nrows(), rhs.ncols());
    for i in 0..lhs.nrows() {
        for &(k, ref v) in lhs.row(i) {
            for &(j, ref w) in rhs.row(k) {
                out.add_at(i, j, v.clone() * w.clone());
            }
        }
    }
    Ok(out)
}

/// Normalized Frobenius pairing: Σ lhs(i,j)·rhs(i,j) / nrows(lhs).
///
/// Used to extract scalar coordinates of an algebra element from its
/// matrix image by pairing against a dual basis matrix.
pub fn inner<T: Scalar>(lhs: &SparseMatrix<T>, rhs: &SparseMatrix<T>) -> Result<T> {
    if lhs.nrows() != rhs.nrows() || lhs.ncols() != rhs.ncols() || lhs.nrows() == 0 {
        return Err(dimension_error("inner", lhs, rhs));
    }
    let mut acc = T::zero();
    for (i, j, v) in lhs.iter() {
        if let Some(w) = rhs.get(i, j) {
            acc = acc + v.clone() * w.clone();
        }
    }
    Ok(acc / scalar_from_count::<T>(lhs.nrows()))
}

fn dimension_error<T: Scalar>(
    op: &'static str,
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> MatrixError {
    MatrixError::Dimension {
        op,
        lhs_rows: lhs.nrows(),
        lhs_cols: lhs.ncols(),
        rhs_rows: rhs.nrows(),
        rhs_cols: rhs.ncols(),
    }
}

/// Small counting number as a scalar (the trait has no usize conversion).
fn scalar_from_count<T: Scalar>(n: usize) -> T {
    let mut acc = T::zero();
    for _ in 0..n {
        acc = acc + T::one();
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two(a: f64, b: f64, c: f64, d: f64) -> SparseMatrix<f64> {
        let mut m = SparseMatrix::zero(2, 2);
        m.insert(0, 0, a);
        m.insert(0, 1, b);
        m.insert(1, 0, c);
        m.insert(1, 1, d);
        m
    }

    #[test]
    fn test_kron_identity() {
        let a = SparseMatrix::<f64>::identity(2);
        let b = SparseMatrix::<f64>::identity(3);
        assert_eq!(kron(&a, &b), SparseMatrix::identity(6));
    }

    #[test]
    fn test_kron_blocks() {
        // kron(diag(1,-1), X) places X and -X on the diagonal blocks.
        let dup = two_by_two(1.0, 0.0, 0.0, -1.0);
        let x = two_by_two(0.0, 2.0, 3.0, 0.0);
        let k = kron(&dup, &x);
        assert_eq!(k.nrows(), 4);
        assert_eq!(k.get(0, 1), Some(&2.0));
        assert_eq!(k.get(1, 0), Some(&3.0));
        assert_eq!(k.get(2, 3), Some(&-2.0));
        assert_eq!(k.get(3, 2), Some(&-3.0));
        assert_eq!(k.nnz(), 4);
    }

    #[test]
    fn test_nork_roundtrip() {
        // For monomial a, nork(a, kron(a, b), mono) recovers b exactly.
        let a = two_by_two(0.0, -1.0, 1.0, 0.0);
        let mut b = SparseMatrix::<f64>::zero(3, 3);
        b.insert(0, 2, 2.5);
        b.insert(1, 1, -4.0);
        b.insert(2, 0, 1.0);
        let k = kron(&a, &b);
        assert_eq!(nork(&a, &k, true).unwrap(), b);
        assert_eq!(nork(&a, &k, false).unwrap(), b);
    }

    #[test]
    fn test_nork_dimension_error() {
        let a = SparseMatrix::<f64>::identity(2);
        let b = SparseMatrix::<f64>::identity(3);
        assert!(matches!(
            nork(&a, &b, true),
            Err(MatrixError::Dimension { op: "nork", .. })
        ));
    }

    #[test]
    fn test_nork_degenerate_error() {
        let a = SparseMatrix::<f64>::zero(2, 2);
        let b = SparseMatrix::<f64>::identity(4);
        assert!(matches!(
            nork(&a, &b, true),
            Err(MatrixError::DegenerateInput)
        ));
    }

    #[test]
    fn test_mono_prod_matches_sparse_prod() {
        let neg = two_by_two(0.0, -1.0, 1.0, 0.0);
        let pos = two_by_two(0.0, 1.0, 1.0, 0.0);
        let fast = mono_prod(&neg, &pos).unwrap();
        let slow = sparse_prod(&neg, &pos).unwrap();
        assert_eq!(fast, slow);
        // neg·pos = diag(-1, 1)
        assert_eq!(fast, two_by_two(-1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mono_prod_square() {
        // neg² = -I
        let neg = two_by_two(0.0, -1.0, 1.0, 0.0);
        let sq = mono_prod(&neg, &neg).unwrap();
        assert_eq!(sq, -&SparseMatrix::identity(2));
    }

    #[test]
    fn test_mono_prod_shape_error() {
        let a = SparseMatrix::<f64>::identity(2);
        let b = SparseMatrix::<f64>::identity(3);
        assert!(mono_prod(&a, &b).is_err());
    }

    #[test]
    fn test_sparse_prod_accumulates() {
        // [1 1; 0 0] · [1 0; -1 0] = [0 0; 0 0] (cancellation drops entries)
        let mut a = SparseMatrix::<f64>::zero(2, 2);
        a.insert(0, 0, 1.0);
        a.insert(0, 1, 1.0);
        let mut b = SparseMatrix::<f64>::zero(2, 2);
        b.insert(0, 0, 1.0);
        b.insert(1, 0, -1.0);
        let p = sparse_prod(&a, &b).unwrap();
        assert_eq!(p.nnz(), 0);
    }

    #[test]
    fn test_inner() {
        let id = SparseMatrix::<f64>::identity(4);
        assert_eq!(inner(&id, &id).unwrap(), 1.0);
        // Disjoint sparsity pairs to zero.
        let mut off = SparseMatrix::<f64>::zero(4, 4);
        off.insert(0, 1, 1.0);
        assert_eq!(inner(&id, &off).unwrap(), 0.0);
    }

    #[test]
    fn test_inner_complex() {
        use num_complex::Complex;
        let id = SparseMatrix::<Complex<f64>>::identity(2);
        let v = inner(&id, &id).unwrap();
        assert_eq!(v, Complex::new(1.0, 0.0));
    }
}
