//! Key structures, such as literals, clauses, and formulas.
//!
//! # Formulas
//!
//! A formula 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! In turn, a clause is a sequence of [literals](literal), interpreted as the disjunction of those literals.
//! And, a literal is an [atom](atom) paired with a polarity.
//!
//! - The empty formula is trivially true.
//! - The empty clause is always false.
//!
//! # Assignments
//!
//! An [assignment](assignment) maps atoms to (boolean) values, and is built one binding at a time during a search.
//! An assignment satisfies a formula when every clause of the formula contains some literal whose polarity matches the value bound to its atom.
//!
//! Order is significant throughout.
//! Clauses and literals are kept in the order given, as the search picks atoms by position, and bindings are kept in the order made.

pub mod assignment;
pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
