//! Clifford algebra signatures (p,q).

use std::fmt;

use crate::error::GenError;
use crate::Result;

/// Signature of a Clifford algebra: p generators squaring to +1, q
/// squaring to −1.
///
/// Validated non-negative at construction; ordered and hashable so it can
/// key the generator cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature {
    p: i32,
    q: i32,
}

impl Signature {
    pub fn new(p: i32, q: i32) -> Result<Self> {
        if p < 0 || q < 0 {
            return Err(GenError::InvalidSignature { p, q });
        }
        Ok(Self { p, q })
    }

    /// Internal constructor for signatures produced by the recursion,
    /// which are non-negative by the rule preconditions.
    pub(crate) fn unchecked(p: i32, q: i32) -> Self {
        debug_assert!(p >= 0 && q >= 0);
        Self { p, q }
    }

    pub fn p(&self) -> i32 {
        self.p
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    /// Number of generators, p + q.
    pub fn card(&self) -> i32 {
        self.p + self.q
    }

    /// p − q, the quantity whose residue mod 8 drives the recursion.
    pub fn bias(&self) -> i32 {
        self.p - self.q
    }

    /// Bott periodicity class: (p − q) mod 8, folded into [0, 8).
    pub fn bott(&self) -> i32 {
        self.bias().rem_euclid(8)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cl({},{})", self.p, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            Signature::new(-1, 0),
            Err(GenError::InvalidSignature { p: -1, q: 0 })
        ));
        assert!(Signature::new(0, -3).is_err());
        assert!(Signature::new(0, 0).is_ok());
    }

    #[test]
    fn test_bott_folding() {
        assert_eq!(Signature::new(0, 0).unwrap().bott(), 0);
        assert_eq!(Signature::new(3, 1).unwrap().bott(), 2);
        assert_eq!(Signature::new(0, 1).unwrap().bott(), 7);
        assert_eq!(Signature::new(0, 6).unwrap().bott(), 2);
        assert_eq!(Signature::new(9, 0).unwrap().bott(), 1);
    }

    #[test]
    fn test_ordering() {
        let a = Signature::new(1, 2).unwrap();
        let b = Signature::new(2, 1).unwrap();
        assert!(a < b);
        assert_eq!(a, Signature::new(1, 2).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Signature::new(3, 1).unwrap().to_string(), "Cl(3,1)");
    }
}
