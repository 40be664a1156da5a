/*!
Search for an assignment which satisfies a formula.

# Overview

A search repeatedly chooses a literal, binds the atom of the literal to the polarity of the literal, and [simplifies](crate::procedures::simplify) the formula on that binding.

- If the formula is empty, the search succeeds with the (empty) assignment.
- If the simplification is trivially true, the search succeeds with the bindings made.
- If the simplification is some reduced formula, the search continues on the reduced formula.
- If the simplification is a contradiction, or the search on the reduced formula fails, the binding is undone and:
  + If the choice was free, the opposite value is tried on the formula the choice was made on.
  + If the choice was forced, the search on the formula the choice was made on fails.

A search which fails on the input formula reports that no satisfying assignment exists.

# Choices

Choices follow a fixed heuristic, and so a search is deterministic.

- If the formula has a unit clause, the literal of the *first* unit clause is chosen.
  The choice is *forced*, as a unit clause has one legal value.
- Otherwise, the *first* literal of the *first* clause is chosen.
  The choice is *free*, and the value opposite the polarity of the literal is kept as an alternative.

# Strategies

A search may walk the tree of choices with an explicit stack of frames ([Iterative](SearchStrategy::Iterative)) or by recursion ([Recursive](SearchStrategy::Recursive)).
Each frame records the formula of its level, the alternative value still to try (if any), and the length of the assignment before the binding of its level.
On backtracking, the assignment is truncated to that length, so no binding from an abandoned branch survives.

The recursive walk requires one call per bound atom and so is limited by the size of the native stack.
The iterative walk is limited only by memory, and is the default.

# Example

```rust
# use dpll_sat::structures::formula::Formula;
# use dpll_sat::procedures::search::{satisfying_assignment, SearchResult};
let unsatisfiable = Formula::from(vec![vec![("a", true)], vec![("a", false)]]);
assert_eq!(satisfying_assignment(&unsatisfiable), SearchResult::NotFound);

let empty: Formula<&str> = Formula::default();
match satisfying_assignment(&empty) {
    SearchResult::Found(assignment) => assert!(assignment.is_empty()),
    SearchResult::NotFound => panic!("the empty formula is satisfiable"),
}
```
*/

use crate::{
    config::SearchStrategy,
    context::Counters,
    misc::log::targets::{self},
    procedures::simplify::{simplify, Simplification},
    structures::{assignment::Assignment, atom::Atom, formula::Formula, literal::Literal},
};

/// The result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult<A: Atom> {
    /// An assignment on which every clause of the formula is satisfied.
    Found(Assignment<A>),

    /// No assignment satisfies the formula.
    NotFound,
}

impl<A: Atom> SearchResult<A> {
    /// The assignment found, if any.
    pub fn assignment(self) -> Option<Assignment<A>> {
        match self {
            Self::Found(assignment) => Some(assignment),
            Self::NotFound => None,
        }
    }
}

/// Searches for an assignment satisfying `formula`, with the default strategy.
///
/// For documentation, see [procedures::search](crate::procedures::search).
pub fn satisfying_assignment<A: Atom>(formula: &Formula<A>) -> SearchResult<A> {
    let mut counters = Counters::default();
    search(
        formula,
        SearchStrategy::default(),
        Assignment::default(),
        &mut counters,
    )
}

/// Searches for an assignment satisfying `formula` with the given strategy, extending `assignment`.
///
/// Atoms bound in `assignment` are expected not to occur in `formula`.
pub fn search<A: Atom>(
    formula: &Formula<A>,
    strategy: SearchStrategy,
    assignment: Assignment<A>,
    counters: &mut Counters,
) -> SearchResult<A> {
    if formula.is_empty() {
        return SearchResult::Found(assignment);
    }

    if formula.has_empty_clause() && formula.first_unit().is_none() {
        log::debug!(target: targets::SEARCH, "Empty clause without a unit clause to propagate");
        return SearchResult::NotFound;
    }

    log::debug!(target: targets::SEARCH, "Search on {} clauses ({strategy})", formula.len());

    let mut the_search = Search {
        assignment,
        counters,
    };

    let found = match strategy {
        SearchStrategy::Iterative => the_search.iterative(formula),
        SearchStrategy::Recursive => the_search.recursive(formula, 1),
    };

    match found {
        true => SearchResult::Found(the_search.assignment),
        false => SearchResult::NotFound,
    }
}

/// A choice of literal, and whether the choice was forced by a unit clause.
struct Choice<A: Atom> {
    literal: Literal<A>,
    forced: bool,
}

/// The choice on a formula, if some literal may be chosen.
fn choose<A: Atom>(formula: &Formula<A>) -> Option<Choice<A>> {
    match formula.first_unit() {
        Some(unit) => Some(Choice {
            literal: unit.clone(),
            forced: true,
        }),
        None => formula.first_literal().map(|literal| Choice {
            literal: literal.clone(),
            forced: false,
        }),
    }
}

/// The outcome of trying a literal on a formula.
enum Step<A: Atom> {
    /// The formula is satisfied, and the literal has been bound.
    Satisfied,

    /// The formula reduced, and the literal has been bound.
    Descend(Formula<A>),

    /// The literal led to a contradiction, and nothing was bound.
    Conflict,
}

/// A level of an iterative search.
struct Frame<A: Atom> {
    /// The formula on which the choice of the level was made.
    formula: Formula<A>,

    /// The value still to try, if the choice was free and the value has not been tried.
    alternative: Option<Literal<A>>,

    /// The length of the assignment before the binding of the level.
    mark: usize,
}

struct Search<'c, A: Atom> {
    assignment: Assignment<A>,
    counters: &'c mut Counters,
}

impl<A: Atom> Search<'_, A> {
    fn note_choice(&mut self, choice: &Choice<A>) {
        match choice.forced {
            true => {
                self.counters.total_propagations += 1;
                log::trace!(target: targets::SEARCH, "Propagate {}", choice.literal);
            }
            false => {
                self.counters.total_decisions += 1;
                log::trace!(target: targets::SEARCH, "Decide {}", choice.literal);
            }
        }
    }

    /// Simplifies `formula` on `literal`, binding the literal unless a contradiction is found.
    fn try_literal(&mut self, formula: &Formula<A>, literal: Literal<A>) -> Step<A> {
        match simplify(formula, literal.atom(), literal.polarity()) {
            Simplification::TriviallyTrue => {
                self.assignment.bind(literal);
                Step::Satisfied
            }

            Simplification::Reduced(reduced) => {
                self.assignment.bind(literal);
                Step::Descend(reduced)
            }

            Simplification::Contradiction => {
                self.counters.total_conflicts += 1;
                log::trace!(target: targets::SEARCH, "Contradiction on {literal}");
                Step::Conflict
            }
        }
    }

    /// Walks the tree of choices with an explicit stack of frames.
    ///
    /// Returns true if a satisfying assignment was found, in which case the assignment of the search is the assignment found.
    fn iterative(&mut self, formula: &Formula<A>) -> bool {
        let mut stack: Vec<Frame<A>> = Vec::default();
        let mut pending = Some(formula.clone());

        loop {
            // Expand the pending formula, if there is one.
            if let Some(node) = pending.take() {
                match choose(&node) {
                    Some(choice) => {
                        self.note_choice(&choice);
                        self.counters.max_depth = self.counters.max_depth.max(stack.len() + 1);
                        let mark = self.assignment.len();
                        let alternative = match choice.forced {
                            true => None,
                            false => Some(choice.literal.negate()),
                        };

                        match self.try_literal(&node, choice.literal) {
                            Step::Satisfied => return true,
                            Step::Descend(reduced) => pending = Some(reduced),
                            Step::Conflict => {}
                        }

                        stack.push(Frame {
                            formula: node,
                            alternative,
                            mark,
                        });

                        if pending.is_some() {
                            continue;
                        }
                    }

                    None => {
                        log::trace!(target: targets::SEARCH, "No literal to choose");
                    }
                }
            }

            // The most recent attempt failed, so backtrack to the nearest frame with an alternative.
            loop {
                let Some(frame) = stack.pop() else {
                    return false;
                };

                self.assignment.truncate(frame.mark);

                let Some(alternative) = frame.alternative else {
                    continue;
                };

                self.counters.total_backtracks += 1;
                log::trace!(target: targets::SEARCH, "Backtrack to {alternative} at depth {}", stack.len() + 1);

                match self.try_literal(&frame.formula, alternative) {
                    Step::Satisfied => return true,

                    Step::Descend(reduced) => {
                        stack.push(Frame {
                            formula: frame.formula,
                            alternative: None,
                            mark: frame.mark,
                        });
                        pending = Some(reduced);
                        break;
                    }

                    Step::Conflict => continue,
                }
            }
        }
    }

    /// Walks the tree of choices by recursion, with `depth` the depth of the call.
    ///
    /// Returns true if a satisfying assignment was found, in which case the assignment of the search is the assignment found.
    fn recursive(&mut self, formula: &Formula<A>, depth: usize) -> bool {
        self.counters.max_depth = self.counters.max_depth.max(depth);

        let Some(choice) = choose(formula) else {
            log::trace!(target: targets::SEARCH, "No literal to choose");
            return false;
        };
        self.note_choice(&choice);
        let mark = self.assignment.len();

        match self.try_literal(formula, choice.literal.clone()) {
            Step::Satisfied => return true,
            Step::Descend(reduced) => {
                if self.recursive(&reduced, depth + 1) {
                    return true;
                }
            }
            Step::Conflict => {}
        }

        self.assignment.truncate(mark);

        if choice.forced {
            return false;
        }

        let alternative = choice.literal.negate();
        self.counters.total_backtracks += 1;
        log::trace!(target: targets::SEARCH, "Backtrack to {alternative} at depth {depth}");

        match self.try_literal(formula, alternative) {
            Step::Satisfied => true,
            Step::Descend(reduced) => match self.recursive(&reduced, depth + 1) {
                true => true,
                false => {
                    self.assignment.truncate(mark);
                    false
                }
            },
            Step::Conflict => false,
        }
    }
}
