/*!
The context --- to which formulas are added and within which solves take place, etc.

A context owns a formula, a [configuration](crate::config), [counters](Counters) from the most recent solve, and the assignment found by that solve (if any).

# Example
```rust
# use dpll_sat::builder::ClauseOk;
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
# use dpll_sat::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());

let p_q_clause = vec![Literal::new("p", true), Literal::new("q", true)];
assert_eq!(the_context.add_clause(p_q_clause), ClauseOk::Added);

let not_p = vec![Literal::new("p", false)];
assert_eq!(the_context.add_clause(not_p), ClauseOk::Added);

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(&"p"), Some(false));
assert_eq!(the_context.value_of(&"q"), Some(true));
```
*/

mod counters;
pub use counters::Counters;

use std::time::Instant;

use crate::{
    config::{Config, SearchStrategy},
    misc::log::targets::{self},
    preprocessing,
    procedures::{
        search::{self, SearchResult},
        simplify::Simplification,
    },
    reports::Report,
    structures::{assignment::Assignment, atom::Atom, formula::Formula},
    types::err::{self, ErrorKind},
};

/// The state of a context.
///
/// States are ordered, and a [configuration option](crate::config::ConfigOption) may be set in any state up to the max state of the option.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// The formula is known to be satisfiable, on the assignment found.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context, over atoms of type `A`.
pub struct Context<A: Atom> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the most recent solve.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The formula of the context.
    pub(crate) formula: Formula<A>,

    /// The assignment found by the most recent solve, if the formula is satisfiable.
    pub(crate) assignment: Option<Assignment<A>>,
}

impl<A: Atom> Context<A> {
    /// A fresh context, without any clauses.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            state: ContextState::Configuration,
            formula: Formula::default(),
            assignment: None,
        }
    }

    /// Sets the search strategy of the context.
    pub fn set_strategy(&mut self, strategy: SearchStrategy) -> Result<(), ErrorKind> {
        self.config.search.set(strategy, &self.state)?;
        Ok(())
    }

    /// Enables, or disables, preprocessing.
    pub fn set_preprocessing(&mut self, preprocessing: bool) -> Result<(), ErrorKind> {
        self.config.preprocessing.set(preprocessing, &self.state)?;
        Ok(())
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The formula of the context.
    pub fn formula(&self) -> &Formula<A> {
        &self.formula
    }

    /// The assignment found by the most recent solve, if the formula was found to be satisfiable.
    pub fn assignment(&self) -> Option<&Assignment<A>> {
        self.assignment.as_ref()
    }

    /// The value of `atom` on the assignment found by the most recent solve, if any.
    ///
    /// An atom which occurs in a satisfiable formula may be without a value, as the clauses containing the atom may be satisfied by other bindings.
    pub fn value_of(&self, atom: &A) -> Option<bool> {
        self.assignment
            .as_ref()
            .and_then(|assignment| assignment.value_of(atom))
    }

    /// Determines the satisfiability of the formula of the context.
    ///
    /// Preprocessing, if enabled, binds pure literals before the configured search.
    /// An assignment found is checked against the formula, and an error is returned if the check fails.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let start = Instant::now();
        self.counters = Counters::default();

        let mut assignment = Assignment::default();

        let simplified = match self.config.preprocessing.value {
            true => preprocessing::pure::eliminate_pure(&self.formula, &mut assignment),
            false => match self.formula.is_empty() {
                true => Simplification::TriviallyTrue,
                false => Simplification::Reduced(self.formula.clone()),
            },
        };

        let result = match simplified {
            Simplification::TriviallyTrue => SearchResult::Found(assignment),
            Simplification::Contradiction => SearchResult::NotFound,
            Simplification::Reduced(formula) => search::search(
                &formula,
                self.config.search.value,
                assignment,
                &mut self.counters,
            ),
        };

        self.counters.time = start.elapsed();

        match result {
            SearchResult::Found(assignment) => {
                if let Err(e) = assignment.check(&self.formula) {
                    log::error!(target: targets::CONTEXT, "Assignment found fails on the formula: {e:?}");
                    return Err(err::ErrorKind::from(e));
                }

                log::info!(target: targets::CONTEXT, "Satisfiable with {} bindings", assignment.len());
                self.assignment = Some(assignment);
                self.state = ContextState::Satisfiable;
            }

            SearchResult::NotFound => {
                log::info!(target: targets::CONTEXT, "Unsatisfiable");
                self.assignment = None;
                self.state = ContextState::Unsatisfiable;
            }
        }

        Ok(self.report())
    }
}
