//! Literals are atoms paired with a (boolean) polarity.
//!
//! A literal with atom *p* and polarity *true* is written `p`, and with polarity *false* is written `-p`.
//!
//! ```rust
//! # use dpll_sat::structures::literal::Literal;
//! let literal = Literal::new("p", true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), &"p");
//! assert_eq!(literal.negate().to_string(), "-p");
//!
//! assert_eq!(literal, Literal::from(("p", !false)));
//! ```

use crate::structures::atom::Atom;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal<A: Atom> {
    /// The atom of a literal.
    atom: A,

    /// The polarity of a literal.
    polarity: bool,
}

impl<A: Atom> Literal<A> {
    /// A literal, specified by pairing an atom with a boolean.
    pub fn new(atom: A, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &A {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether the literal is made true by binding `atom` to `value`.
    ///
    /// Returns None if the literal is not on `atom`.
    pub fn value_on(&self, atom: &A, value: bool) -> Option<bool> {
        match self.atom == *atom {
            true => Some(self.polarity == value),
            false => None,
        }
    }
}

impl<A: Atom> From<(A, bool)> for Literal<A> {
    fn from((atom, polarity): (A, bool)) -> Self {
        Self::new(atom, polarity)
    }
}

impl<A: Atom> std::fmt::Display for Literal<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
