/*!
Assignments of (boolean) values to atoms.

An assignment is built one binding at a time, and the order of bindings is kept.

During a search an assignment is used as an undo log:
- On entering a branch the atom chosen is bound.
- On abandoning a branch the assignment is [truncated](Assignment::truncate) to the length it had before the branch was entered.

So, on any path through a search, an atom is bound at most once, and no binding from an abandoned branch survives.

```rust
# use dpll_sat::structures::{assignment::Assignment, literal::Literal};
let mut assignment = Assignment::default();

assignment.bind(Literal::new("p", true));
let mark = assignment.len();
assignment.bind(Literal::new("q", false));

assert_eq!(assignment.as_string(), "p -q");

assignment.truncate(mark);
assert_eq!(assignment.value_of(&"q"), None);
assert_eq!(assignment.value_of(&"p"), Some(true));
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, clause::Clause, formula::Formula, literal::Literal},
    types::err::{self},
};

/// An ordered assignment of values to atoms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<A: Atom> {
    /// Bindings in the order made, as literals.
    bindings: Vec<Literal<A>>,

    /// The index of the binding of each bound atom.
    index: HashMap<A, usize>,
}

impl<A: Atom> Default for Assignment<A> {
    fn default() -> Self {
        Assignment {
            bindings: Vec::default(),
            index: HashMap::default(),
        }
    }
}

impl<A: Atom> Assignment<A> {
    /// Binds the atom of `literal` to the polarity of `literal`.
    ///
    /// If the atom is already bound the value is overwritten in place, keeping the position of the original binding.
    pub fn bind(&mut self, literal: Literal<A>) {
        match self.index.get(literal.atom()) {
            Some(&position) => {
                log::warn!(target: targets::VALUATION, "Rebinding {} to {literal}", self.bindings[position]);
                self.bindings[position] = literal;
            }
            None => {
                log::trace!(target: targets::VALUATION, "Bound {literal}");
                self.index.insert(literal.atom().clone(), self.bindings.len());
                self.bindings.push(literal);
            }
        }
    }

    /// Removes every binding made after the first `length` bindings.
    pub fn truncate(&mut self, length: usize) {
        for literal in self.bindings.drain(length.min(self.bindings.len())..) {
            self.index.remove(literal.atom());
        }
    }

    /// The value bound to `atom`, if any.
    pub fn value_of(&self, atom: &A) -> Option<bool> {
        self.index
            .get(atom)
            .map(|&position| self.bindings[position].polarity())
    }

    /// A count of bound atoms.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no atom is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The bindings of the assignment as literals, in the order made.
    pub fn literals(&self) -> impl Iterator<Item = &Literal<A>> {
        self.bindings.iter()
    }

    /// Whether every clause of `formula` is satisfied by the assignment.
    pub fn satisfies(&self, formula: &Formula<A>) -> bool {
        self.check(formula).is_ok()
    }

    /// Checks every clause of `formula` is satisfied by the assignment.
    ///
    /// Returns the index of the first clause which is not satisfied, as an error, otherwise.
    pub fn check(&self, formula: &Formula<A>) -> Result<(), err::ValuationError> {
        match formula
            .clauses()
            .iter()
            .position(|clause| !clause.satisfied_by(self))
        {
            None => Ok(()),
            Some(index) => Err(err::ValuationError::Unsatisfied(index)),
        }
    }

    /// The assignment as a string of literals, in the order bound.
    pub fn as_string(&self) -> String {
        self.bindings
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<A: Atom> FromIterator<Literal<A>> for Assignment<A> {
    fn from_iter<I: IntoIterator<Item = Literal<A>>>(iter: I) -> Self {
        let mut assignment = Assignment::default();
        for literal in iter {
            assignment.bind(literal);
        }
        assignment
    }
}
