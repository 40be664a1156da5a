//! Procedures to identify and eliminate pure literals.
//!
//! A literal is pure with respect to a formula if the atom of the literal occurs in the formula, and only with the polarity of the literal.
//! Binding the atom of a pure literal to the polarity of the literal satisfies every clause containing the atom, and so never leads to a contradiction which would not otherwise occur.
//!
//! ```rust
//! # use dpll_sat::structures::{assignment::Assignment, formula::Formula, literal::Literal};
//! # use dpll_sat::preprocessing::pure::{eliminate_pure, pure_literals};
//! # use dpll_sat::procedures::simplify::Simplification;
//! let formula = Formula::from(vec![
//!     vec![("p", true), ("q", true)],
//!     vec![("p", true), ("q", false)],
//!     vec![("r", false), ("q", true)],
//! ]);
//!
//! assert_eq!(pure_literals(&formula), vec![Literal::new("p", true), Literal::new("r", false)]);
//!
//! let mut assignment = Assignment::default();
//! assert_eq!(eliminate_pure(&formula, &mut assignment), Simplification::TriviallyTrue);
//! assert_eq!(assignment.as_string(), "p -r");
//! ```

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    procedures::simplify::{simplify, Simplification},
    structures::{
        assignment::Assignment, atom::Atom, clause::Clause, formula::Formula, literal::Literal,
    },
};

/// The pure literals of a formula, in order of the first occurrence of their atoms.
pub fn pure_literals<A: Atom>(formula: &Formula<A>) -> Vec<Literal<A>> {
    // General order for pairs related to booleans is 0 is false, 1 is true
    let mut polarities: HashMap<&A, (bool, bool)> = HashMap::new();

    for literal in formula.clauses().iter().flat_map(|clause| clause.literals()) {
        let seen = polarities.entry(literal.atom()).or_insert((false, false));
        match literal.polarity() {
            true => seen.1 = true,
            false => seen.0 = true,
        }
    }

    formula
        .atoms()
        .into_iter()
        .filter_map(|atom| match polarities.get(atom) {
            Some((false, true)) => Some(Literal::new(atom.clone(), true)),
            Some((true, false)) => Some(Literal::new(atom.clone(), false)),
            _ => None,
        })
        .collect()
}

/// Binds every pure literal of `formula` in `assignment` and simplifies the formula on each binding, in turn.
///
/// Pure literals are those of the input formula.
/// A pure literal whose atom no longer occurs, as every clause containing the atom was satisfied by an earlier binding, is skipped.
pub fn eliminate_pure<A: Atom>(
    formula: &Formula<A>,
    assignment: &mut Assignment<A>,
) -> Simplification<A> {
    let mut current = formula.clone();

    for literal in pure_literals(formula) {
        if !current.contains_atom(literal.atom()) {
            log::trace!(target: targets::PREPROCESSING, "Skipped {literal}");
            continue;
        }

        match simplify(&current, literal.atom(), literal.polarity()) {
            Simplification::TriviallyTrue => {
                log::debug!(target: targets::PREPROCESSING, "Pure {literal} satisfied the formula");
                assignment.bind(literal);
                return Simplification::TriviallyTrue;
            }

            Simplification::Reduced(reduced) => {
                log::trace!(target: targets::PREPROCESSING, "Pure {literal}");
                assignment.bind(literal);
                current = reduced;
            }

            // Only on an empty clause.
            Simplification::Contradiction => return Simplification::Contradiction,
        }
    }

    match current.is_empty() {
        true => Simplification::TriviallyTrue,
        false => Simplification::Reduced(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pure_literals() {
        let formula = Formula::from(vec![
            vec![("p", true), ("q", true)],
            vec![("p", false), ("q", false)],
        ]);

        assert!(pure_literals(&formula).is_empty());

        let mut assignment = Assignment::default();
        assert_eq!(
            eliminate_pure(&formula, &mut assignment),
            Simplification::Reduced(formula.clone())
        );
        assert!(assignment.is_empty());
    }

    #[test]
    fn skipped_after_earlier_binding() {
        // Binding p satisfies every clause containing s.
        let formula = Formula::from(vec![
            vec![("p", true), ("s", true)],
            vec![("q", true), ("r", true)],
            vec![("q", false), ("r", false)],
        ]);

        assert_eq!(
            pure_literals(&formula),
            vec![Literal::new("p", true), Literal::new("s", true)]
        );

        let mut assignment = Assignment::default();
        let expected = Formula::from(vec![
            vec![("q", true), ("r", true)],
            vec![("q", false), ("r", false)],
        ]);

        assert_eq!(
            eliminate_pure(&formula, &mut assignment),
            Simplification::Reduced(expected)
        );
        assert_eq!(assignment.as_string(), "p");
    }

    #[test]
    fn empty_clause() {
        let formula: Formula<&str> = Formula::new(vec![vec![Literal::new("p", true)], vec![]]);

        let mut assignment = Assignment::default();
        assert_eq!(
            eliminate_pure(&formula, &mut assignment),
            Simplification::Contradiction
        );
    }
}
