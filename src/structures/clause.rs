//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use dpll_sat::structures::literal::Literal;
//! # use dpll_sat::structures::clause::{CClause, Clause};
//! let clause: CClause<&str> = vec![Literal::new("p", true), Literal::new("q", false)];
//!
//! assert_eq!(clause.size(), 2);
//! assert!(clause.unit().is_none());
//! assert_eq!(clause.as_string(), "p -q");
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause containing exactly one literal is a 'unit' clause, and forces the value of the atom of that literal.
//! - Literals in a clause are not required to be distinct, and a clause may contain a literal and its negation.

use crate::structures::{assignment::Assignment, atom::Atom, literal::Literal};

/// The canonical implementation of a clause.
pub type CClause<A> = Vec<Literal<A>>;

/// The clause trait.
pub trait Clause<A: Atom> {
    /// A string representation of the clause, with literals separated by a space.
    fn as_string(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The literal of the clause, if the clause is a unit clause.
    fn unit(&self) -> Option<&Literal<A>>;

    /// An iterator over all literals in the clause, in order.
    fn literals<'a>(&'a self) -> impl Iterator<Item = &'a Literal<A>>
    where
        A: 'a;

    /// Whether some literal of the clause is on the given atom.
    fn contains_atom(&self, atom: &A) -> bool;

    /// Whether some literal of the clause is true on the given assignment.
    fn satisfied_by(&self, assignment: &Assignment<A>) -> bool;
}

impl<A: Atom> Clause<A> for [Literal<A>] {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn unit(&self) -> Option<&Literal<A>> {
        match self {
            [literal] => Some(literal),
            _ => None,
        }
    }

    fn literals<'a>(&'a self) -> impl Iterator<Item = &'a Literal<A>>
    where
        A: 'a,
    {
        self.iter()
    }

    fn contains_atom(&self, atom: &A) -> bool {
        self.iter().any(|literal| literal.atom() == atom)
    }

    fn satisfied_by(&self, assignment: &Assignment<A>) -> bool {
        self.iter()
            .any(|literal| assignment.value_of(literal.atom()) == Some(literal.polarity()))
    }
}
