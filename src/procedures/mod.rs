//! The procedures which determine satisfiability.
//!
//! - [simplify] reduces a formula under a single binding of an atom to a value.
//! - [search] chooses bindings, simplifies on each, and backtracks on contradiction.
//!
//! The search depends on the simplifier, and not the other way around.

pub mod search;
pub mod simplify;
