//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! dpll_sat decides satisfiability by the classic pairing of *simplification* and *backtracking search*:
//! - A formula is [simplified](crate::procedures::simplify) under a single binding of an atom to a value, dropping satisfied clauses and falsified literals.
//! - A [search](crate::procedures::search) repeatedly picks an atom, preferring atoms forced by unit clauses, tries a value, simplifies, and continues, undoing choices when a contradiction is found.
//!
//! The search terminates with either a satisfying [assignment](crate::structures::assignment) or a definitive report that no such assignment exists.
//!
//! There is no clause learning, no backjumping, and no incremental solving.
//! Choices are made by a fixed heuristic, and so for a fixed formula (with fixed clause and literal order) the result of a search is fixed.
//!
//! # Orientation
//!
//! - The [structures] used throughout: atoms, literals, clauses, formulas, and assignments.
//! - The two [procedures]: the simplifier and the search engine.
//! - A [context] bundles a formula with a [configuration](crate::config) and [counters](crate::context::Counters) from a solve.
//!
//! # Examples
//!
//! + Search a formula directly.
//!
//! ```rust
//! # use dpll_sat::structures::formula::Formula;
//! # use dpll_sat::procedures::search::{satisfying_assignment, SearchResult};
//! let formula = Formula::from(vec![
//!     vec![("p", true), ("q", true)],
//!     vec![("p", false)],
//! ]);
//!
//! match satisfying_assignment(&formula) {
//!     SearchResult::Found(assignment) => {
//!         assert_eq!(assignment.value_of(&"p"), Some(false));
//!         assert_eq!(assignment.value_of(&"q"), Some(true));
//!     }
//!     SearchResult::NotFound => panic!("satisfiable"),
//! }
//! ```
//!
//! + Solve through a context.
//!
//! ```rust
//! # use dpll_sat::builder::ClauseOk;
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! # use dpll_sat::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert_eq!(the_context.add_clause(vec![Literal::new("a", true)]), ClauseOk::Added);
//! assert_eq!(the_context.add_clause(vec![Literal::new("a", false)]), ClauseOk::Added);
//!
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! No logger is provided, though with [env_logger](https://docs.rs/env_logger/latest/env_logger/) search logs may be isolated with `RUST_LOG=search …`.

pub mod builder;
pub mod config;
pub mod context;
pub mod generic;
pub mod misc;
pub mod preprocessing;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
