//! AIGER literals.
//!
//! A literal packs a node index and a polarity bit into one integer:
//! `(index << 1) | inverted`. Node index 0 is reserved for the constant-false
//! node, so literal 0 is constant false and literal 1 is constant true.

use std::ops::Not;

/// An AIGER literal: a node index plus a polarity bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit(u32);

impl Lit {
    /// The constant-false literal.
    pub const FALSE: Self = Self::new(0, false);
    /// The constant-true literal.
    pub const TRUE: Self = Self::new(0, true);

    /// Builds a literal from a node index and a polarity.
    #[must_use]
    pub const fn new(index: u32, inverted: bool) -> Self {
        Self((index << 1) | inverted as u32)
    }

    /// Builds a literal from its packed integer encoding.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The node index this literal refers to.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0 >> 1
    }

    /// Whether this literal is an inverted reference to its node.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.0 & 1 != 0
    }

    /// The packed integer encoding.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl Not for Lit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

#[cfg(test)]
mod tests {
    use super::Lit;

    #[test]
    fn decode() {
        let lit = Lit::from_raw(13);
        assert_eq!(lit.index(), 6);
        assert!(lit.is_inverted());

        let lit = Lit::new(6, false);
        assert_eq!(lit.raw(), 12);
        assert!(!lit.is_inverted());
    }

    #[test]
    fn constants() {
        assert_eq!(Lit::FALSE.index(), 0);
        assert!(!Lit::FALSE.is_inverted());
        assert_eq!(Lit::TRUE, !Lit::FALSE);
    }

    #[test]
    fn negation_flips_polarity_only() {
        let lit = Lit::new(42, false);
        assert_eq!((!lit).index(), 42);
        assert!((!lit).is_inverted());
        assert_eq!(!!lit, lit);
    }
}
