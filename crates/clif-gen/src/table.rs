//! Memoized recursive construction of generator sequences.
//!
//! Real Clifford algebras recur with period 8 in p − q (Bott periodicity).
//! Only the two residue classes 0 and 2 are materialized; every other
//! class is resolved by the accessor to a minimal "super" signature in one
//! of those classes before the cache is consulted. Within classes 0 and 2
//! four reduction rules apply, each building a sequence from a strictly
//! smaller or more canonical one:
//!
//! - dimension doubling, (p,q) from (p−1,q−1): tensor the old sequence
//!   with fixed 2×2 blocks;
//! - periodicity-4 folds, (p,q) from (p∓4,q±4): replace four generators by
//!   their products with a 4-generator "volume" element h;
//! - conjugation, (p,q) from (q+1,p−1): multiply through by the last
//!   generator (class 2, bias exactly 2 only).
//!
//! References: Porteous, "Clifford algebras and the classical groups",
//! Prop. 15.17/15.20 and Table 15.27; Lounesto, "Clifford algebras and
//! spinors", §16.4.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use clif_matrix::ops::{kron, mono_prod};
use clif_matrix::{Scalar, SparseMatrix};

use crate::error::GenError;
use crate::sequence::{GeneratorSeq, GeneratorView};
use crate::signature::Signature;
use crate::Result;

/// Signed shift from a signature's Bott class to the nearest class-{0,2}
/// super-signature: positive adds positive generators, negative adds
/// negative ones. Minimal |shift| with (p − q + shift) mod 8 in {0,2};
/// the property tests verify it rather than trusting the derivation.
const OFFSET_TO_SUPER: [i32; 8] = [0, 1, 0, -1, -2, -3, 2, 1];

/// Cache of generator sequences, keyed by signature.
///
/// An explicit object rather than a process global: every accessor call on
/// the same table sees the same sequences, which is what arithmetic built
/// on top relies on. Sequences are immutable once inserted and shared out
/// as `Arc`s; a lost first-construction race keeps the earlier entry.
pub struct GeneratorTable<T> {
    cache: RwLock<HashMap<Signature, Arc<GeneratorSeq<T>>>>,
}

impl<T: Scalar> std::fmt::Debug for GeneratorTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorTable")
            .field("signatures", &self.cache.read().len())
            .finish()
    }
}

impl<T: Scalar> Default for GeneratorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> GeneratorTable<T> {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The generator matrix e_index of Cl(p,q), for index in [0, p+q).
    ///
    /// Indices 0..p square to +I, indices p..p+q to −I, and any two
    /// distinct generators anti-commute. The returned view borrows from
    /// the cache; no matrix data is copied.
    pub fn generator(&self, p: i32, q: i32, index: i32) -> Result<GeneratorView<T>> {
        let sig = Signature::new(p, q)?;
        if index < 0 || index >= sig.card() {
            return Err(GenError::IndexOutOfRange { p, q, index });
        }
        let offset = OFFSET_TO_SUPER[sig.bott() as usize];
        let super_sig = Signature::unchecked(p + offset.max(0), q - offset.min(0));
        let seq = self.sequence(super_sig)?;
        // Positive generators sit above the auxiliary slot at super_q,
        // negative ones below it, outermost first.
        let pos = if index < p {
            super_sig.q() + index + 1
        } else {
            super_sig.q() - (index - p) - 1
        };
        Ok(GeneratorView::new(seq, pos as usize))
    }

    /// The full cached sequence for a class-{0,2} signature, constructing
    /// it (and everything it depends on) on first request.
    ///
    /// # Panics
    ///
    /// Panics if `sig` lies outside Bott classes 0 and 2; such signatures
    /// have no sequence of their own and must go through [`Self::generator`],
    /// which resolves them to a class-{0,2} super-signature first.
    pub fn sequence(&self, sig: Signature) -> Result<Arc<GeneratorSeq<T>>> {
        if let Some(seq) = self.cache.read().get(&sig) {
            return Ok(Arc::clone(seq));
        }
        let seq = Arc::new(self.build(sig)?);
        let mut cache = self.cache.write();
        Ok(Arc::clone(cache.entry(sig).or_insert(seq)))
    }

    /// Number of signatures constructed so far.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().len() == 0
    }

    /// One reduction step; recursion happens through `sequence`, so every
    /// intermediate signature is cached on the way down.
    fn build(&self, sig: Signature) -> Result<GeneratorSeq<T>> {
        let (p, q) = (sig.p(), sig.q());
        let bias = sig.bias();
        match sig.bott() {
            0 => {
                if bias < 0 {
                    debug!(%sig, rule = "fold_up", "constructing generator sequence");
                    fold_up(&*self.sequence(Signature::unchecked(p + 4, q - 4))?)
                } else if bias > 0 {
                    debug!(%sig, rule = "fold_down", "constructing generator sequence");
                    fold_down(&*self.sequence(Signature::unchecked(p - 4, q + 4))?)
                } else if sig.card() == 0 {
                    debug!(%sig, rule = "base", "constructing generator sequence");
                    Ok(GeneratorSeq::new(vec![SparseMatrix::identity(1)]))
                } else {
                    debug!(%sig, rule = "double", "constructing generator sequence");
                    Ok(double(&*self.sequence(Signature::unchecked(p - 1, q - 1))?))
                }
            }
            2 => {
                if bias < 2 {
                    debug!(%sig, rule = "fold_up", "constructing generator sequence");
                    fold_up(&*self.sequence(Signature::unchecked(p + 4, q - 4))?)
                } else if bias > 2 {
                    debug!(%sig, rule = "fold_down", "constructing generator sequence");
                    fold_down(&*self.sequence(Signature::unchecked(p - 4, q + 4))?)
                } else {
                    debug!(%sig, rule = "conjugate", "constructing generator sequence");
                    conjugate(&*self.sequence(Signature::unchecked(q + 1, p - 1))?)
                }
            }
            // The accessor resolves every request to class 0 or 2 first;
            // landing here means the offset table is wrong.
            bott => unreachable!("generator table queried for class-{bott} signature {sig}"),
        }
    }
}

/// 2×2 building blocks for the dimension-doubling step.
fn neg_block<T: Scalar>() -> SparseMatrix<T> {
    let mut m = SparseMatrix::zero(2, 2);
    m.insert(0, 1, -T::one());
    m.insert(1, 0, T::one());
    m
}

fn dup_block<T: Scalar>() -> SparseMatrix<T> {
    let mut m = SparseMatrix::zero(2, 2);
    m.insert(0, 0, T::one());
    m.insert(1, 1, -T::one());
    m
}

fn pos_block<T: Scalar>() -> SparseMatrix<T> {
    let mut m = SparseMatrix::zero(2, 2);
    m.insert(0, 1, T::one());
    m.insert(1, 0, T::one());
    m
}

/// (p,q) from (p−1,q−1): prepend kron(neg, I), append kron(pos, I), and
/// lift every old entry through kron(dup, ·). Doubles the dimension.
fn double<T: Scalar>(old: &GeneratorSeq<T>) -> GeneratorSeq<T> {
    let eye = SparseMatrix::identity(old.dim());
    let mut mats = Vec::with_capacity(old.len() + 2);
    mats.push(kron(&neg_block(), &eye));
    for m in old.iter() {
        mats.push(kron(&dup_block(), m));
    }
    mats.push(kron(&pos_block(), &eye));
    GeneratorSeq::new(mats)
}

/// (p,q) from (p−4,q+4): h is the volume element of the first four old
/// entries; they move to the tail multiplied by h, the rest shift down.
fn fold_down<T: Scalar>(old: &GeneratorSeq<T>) -> Result<GeneratorSeq<T>> {
    let n = old.len();
    let mut h = old[0].clone();
    for k in 1..4 {
        h = mono_prod(&old[k], &h)?;
    }
    let mut mats = Vec::with_capacity(n);
    for k in 4..n {
        mats.push(old[k].clone());
    }
    for k in 0..4 {
        mats.push(mono_prod(&old[k], &h)?);
    }
    Ok(GeneratorSeq::new(mats))
}

/// (p,q) from (p+4,q−4): mirror of `fold_down`, chaining h from the end.
fn fold_up<T: Scalar>(old: &GeneratorSeq<T>) -> Result<GeneratorSeq<T>> {
    let n = old.len();
    let mut h = old[n - 1].clone();
    for k in 1..4 {
        h = mono_prod(&old[n - 1 - k], &h)?;
    }
    let mut mats = Vec::with_capacity(n);
    for k in 0..4 {
        mats.push(mono_prod(&old[n - 4 + k], &h)?);
    }
    for k in 4..n {
        mats.push(old[k - 4].clone());
    }
    Ok(GeneratorSeq::new(mats))
}

/// (p,q) from (q+1,p−1), class 2 at bias exactly 2: multiply the old
/// entries (second-to-last backward) through the last entry a, keep a.
fn conjugate<T: Scalar>(old: &GeneratorSeq<T>) -> Result<GeneratorSeq<T>> {
    let n = old.len();
    let a = &old[n - 1];
    let mut mats = Vec::with_capacity(n);
    for k in (1..n).rev() {
        mats.push(mono_prod(&old[k - 1], a)?);
    }
    mats.push(a.clone());
    Ok(GeneratorSeq::new(mats))
}
