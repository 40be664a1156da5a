//! Formulas, aka. a sequence of clauses, interpreted as the conjunction of those clauses.
//!
//! A formula is immutable with respect to a [simplification](crate::procedures::simplify), which always builds a fresh formula.
//!
//! ```rust
//! # use dpll_sat::structures::{formula::Formula, literal::Literal};
//! let formula = Formula::from(vec![
//!     vec![("p", true), ("q", false)],
//!     vec![("q", true)],
//! ]);
//!
//! assert_eq!(formula.len(), 2);
//! assert_eq!(formula.first_unit(), Some(&Literal::new("q", true)));
//! assert_eq!(formula.first_literal(), Some(&Literal::new("p", true)));
//! assert_eq!(formula.atoms(), vec![&"p", &"q"]);
//! assert_eq!(formula.as_string(), "(p -q) (q)");
//! ```

use std::collections::HashSet;

use crate::{
    procedures::simplify::{simplify, Simplification},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// A formula, as a vector of clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula<A: Atom> {
    clauses: Vec<CClause<A>>,
}

impl<A: Atom> Default for Formula<A> {
    fn default() -> Self {
        Formula {
            clauses: Vec::default(),
        }
    }
}

impl<A: Atom> Formula<A> {
    /// A formula from some clauses, with order kept.
    pub fn new(clauses: Vec<CClause<A>>) -> Self {
        Formula { clauses }
    }

    /// The clauses of the formula.
    pub fn clauses(&self) -> &[CClause<A>] {
        &self.clauses
    }

    /// Appends a clause to the formula.
    pub fn push(&mut self, clause: CClause<A>) {
        self.clauses.push(clause)
    }

    /// The number of clauses in the formula.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula has no clauses (and so is trivially true).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether the formula contains the empty clause (and so is unsatisfiable).
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The literal of the first unit clause of the formula, if one exists.
    pub fn first_unit(&self) -> Option<&Literal<A>> {
        self.clauses.iter().find_map(|clause| clause.unit())
    }

    /// The first literal of the first clause of the formula, if the formula has a (non-empty) first clause.
    pub fn first_literal(&self) -> Option<&Literal<A>> {
        self.clauses.first().and_then(|clause| clause.first())
    }

    /// Whether some clause of the formula contains a literal on `atom`.
    pub fn contains_atom(&self, atom: &A) -> bool {
        self.clauses.iter().any(|clause| clause.contains_atom(atom))
    }

    /// The (distinct) atoms of the formula, in order of first occurrence.
    pub fn atoms(&self) -> Vec<&A> {
        let mut seen = HashSet::new();
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.atom())
            .filter(|atom| seen.insert(*atom))
            .collect()
    }

    /// A checked [simplification](crate::procedures::simplify) of the formula.
    ///
    /// Returns an error if `atom` does not occur in the formula, rather than simplifying.
    pub fn try_simplify(
        &self,
        atom: &A,
        value: bool,
    ) -> Result<Simplification<A>, err::SimplifyError> {
        match self.contains_atom(atom) {
            true => Ok(simplify(self, atom, value)),
            false => Err(err::SimplifyError::AbsentAtom),
        }
    }

    /// The formula as a string, with each clause parenthesised.
    pub fn as_string(&self) -> String {
        self.clauses
            .iter()
            .map(|clause| format!("({})", clause.as_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<A: Atom> From<Vec<Vec<(A, bool)>>> for Formula<A> {
    fn from(clauses: Vec<Vec<(A, bool)>>) -> Self {
        clauses
            .into_iter()
            .map(|clause| clause.into_iter().map(Literal::from).collect())
            .collect()
    }
}

impl<A: Atom> FromIterator<CClause<A>> for Formula<A> {
    fn from_iter<I: IntoIterator<Item = CClause<A>>>(iter: I) -> Self {
        Formula {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl<A: Atom> std::fmt::Display for Formula<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_literal_of_empty_clause() {
        let formula: Formula<&str> = Formula::new(vec![vec![]]);

        assert!(formula.has_empty_clause());
        assert!(formula.first_literal().is_none());
        assert!(formula.first_unit().is_none());
    }

    #[test]
    fn unit_found_past_first_clause() {
        let formula = Formula::from(vec![
            vec![("a", true), ("b", true)],
            vec![("c", false)],
            vec![("d", true)],
        ]);

        assert_eq!(formula.first_unit(), Some(&Literal::new("c", false)));
    }

    #[test]
    fn try_simplify_absent_atom() {
        let formula = Formula::from(vec![vec![("a", true)]]);

        assert_eq!(
            formula.try_simplify(&"z", true),
            Err(err::SimplifyError::AbsentAtom)
        );
        assert_eq!(
            formula.try_simplify(&"a", true),
            Ok(Simplification::TriviallyTrue)
        );
    }
}
