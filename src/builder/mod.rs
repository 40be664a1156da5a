/*!
Tools for building a context.

Clauses are added to a context one at a time with [add_clause](crate::context::Context::add_clause), or all at once from a formula with [add_formula](crate::context::Context::add_formula).
Clauses are kept as given: literals are neither sorted nor deduplicated, and tautologies are kept, as the order of clauses and literals guides a search.

Adding a clause after a solve discards the result of the solve.

# Examples

```rust
# use dpll_sat::builder::ClauseOk;
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
# use dpll_sat::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());

let clause_a = vec![Literal::new("p", true), Literal::new("q", false)];
let clause_b = vec![Literal::new("p", false), Literal::new("q", true)];

assert_eq!(the_context.add_clause(clause_a), ClauseOk::Added);
assert_eq!(the_context.add_clause(clause_b), ClauseOk::Added);
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

assert_eq!(the_context.add_clause(vec![]), ClauseOk::Empty);
assert_eq!(the_context.report(), Report::Unknown);
assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
```

For random formulas, see [uniform].
*/

pub mod uniform;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{atom::Atom, clause::{CClause, Clause}, formula::Formula},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was empty, and so the formula of the context is unsatisfiable.
    Empty,
}

impl<A: Atom> Context<A> {
    /// Adds a clause to the formula of the context.
    pub fn add_clause(&mut self, clause: CClause<A>) -> ClauseOk {
        if self.state > ContextState::Input {
            log::debug!(target: targets::CONTEXT, "Clause added after a solve");
            self.assignment = None;
        }
        self.state = ContextState::Input;

        log::trace!(target: targets::CONTEXT, "Clause {}: {}", self.formula.len(), clause.as_string());

        let ok = match clause.is_empty() {
            true => ClauseOk::Empty,
            false => ClauseOk::Added,
        };
        self.formula.push(clause);
        ok
    }

    /// Adds each clause of a formula to the formula of the context, in order.
    ///
    /// Returns [Empty](ClauseOk::Empty) if some clause added was empty.
    pub fn add_formula(&mut self, formula: Formula<A>) -> ClauseOk {
        let mut ok = ClauseOk::Added;
        for clause in formula.clauses() {
            if self.add_clause(clause.clone()) == ClauseOk::Empty {
                ok = ClauseOk::Empty;
            }
        }
        ok
    }
}
