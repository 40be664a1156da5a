/*!
Simplification of a formula under a binding of an atom to a value.

# Overview

Each clause of the formula is examined independently, in order:

- A unit clause on the bound atom is either satisfied by the binding, in which case the clause is dropped, or falsified by the binding, in which case the formula is a contradiction.
- A unit clause on some other atom is kept as is.
- Any other clause containing a literal made true by the binding is satisfied, and dropped.
- Otherwise, every literal on the bound atom is false, and is removed from the clause.
  The remaining literals are kept, with order and polarity unchanged.

  If no literals remain the clause has collapsed to the empty clause, and the formula is a contradiction.

On a contradiction no further clauses are examined.
Otherwise, the result is either the formula of surviving clauses or, if no clause survives, the note that the formula is trivially true.

The distinction between a clause which is dropped and a clause which collapses is essential: a dropped clause is satisfied, while a collapsed clause cannot be satisfied by any binding of the remaining atoms.

# Example

```rust
# use dpll_sat::structures::formula::Formula;
# use dpll_sat::procedures::simplify::{simplify, Simplification};
let formula = Formula::from(vec![
    vec![("a", true), ("b", true), ("c", true)],
    vec![("a", false), ("f", true)],
    vec![("d", false), ("e", true), ("a", true), ("g", true)],
    vec![("h", false), ("c", true), ("a", false), ("f", true)],
]);

let expected = Formula::from(vec![
    vec![("f", true)],
    vec![("h", false), ("c", true), ("f", true)],
]);

assert_eq!(simplify(&formula, &"a", true), Simplification::Reduced(expected));
```

# Preconditions

The atom is expected to occur in the formula.
This is not checked, and simplifying on some other atom returns a copy of the formula (or, if the formula is empty, notes the formula is trivially true).
For a checked simplification, see [Formula::try_simplify].
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        formula::Formula,
    },
};

/// The result of a simplification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Simplification<A: Atom> {
    /// The (non-empty) formula of clauses which survived the simplification.
    Reduced(Formula<A>),

    /// Every clause was satisfied by the binding.
    TriviallyTrue,

    /// Some clause was falsified by the binding.
    Contradiction,
}

/// Simplifies `formula` on the binding of `atom` to `value`.
///
/// For documentation, see [procedures::simplify](crate::procedures::simplify).
pub fn simplify<A: Atom>(formula: &Formula<A>, atom: &A, value: bool) -> Simplification<A> {
    let mut surviving: Vec<CClause<A>> = Vec::with_capacity(formula.len());

    for (index, clause) in formula.clauses().iter().enumerate() {
        match clause.unit() {
            Some(unit) => match unit.value_on(atom, value) {
                Some(true) => continue,

                Some(false) => {
                    log::trace!(target: targets::SIMPLIFY, "Unit clause {index} ({unit}) falsified");
                    return Simplification::Contradiction;
                }

                None => surviving.push(clause.clone()),
            },

            None => {
                if clause
                    .literals()
                    .any(|literal| literal.value_on(atom, value) == Some(true))
                {
                    continue;
                }

                let remaining: CClause<A> = clause
                    .literals()
                    .filter(|literal| literal.atom() != atom)
                    .cloned()
                    .collect();

                if remaining.is_empty() {
                    log::trace!(target: targets::SIMPLIFY, "Clause {index} ({}) collapsed", clause.as_string());
                    return Simplification::Contradiction;
                }

                surviving.push(remaining);
            }
        }
    }

    match surviving.is_empty() {
        true => Simplification::TriviallyTrue,
        false => Simplification::Reduced(Formula::new(surviving)),
    }
}
