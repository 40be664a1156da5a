//! Error types used in the library.
//!
//! - None of these are expected during a search.
//!   In particular, a contradiction found on simplification or a formula without a satisfying assignment are results, not errors.
//! - Some of these are external --- e.g. a request to simplify a formula on an atom which does not occur in the formula, or to configure a context after a solve.
//! - Some are internal --- e.g. an assignment found by search which does not satisfy the formula searched.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping specific errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Generator(GeneratorError),
    Simplify(SimplifyError),
    Valuation(ValuationError),
}

/// Noted errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A requested value is outside the bounds of an option.
    OutOfBounds,

    /// The option may not be changed in the current state of the context.
    InvalidState,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors when generating a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GeneratorError {
    /// Clauses are required to be non-empty.
    EmptyClause,

    /// A clause of the requested length could not be made from distinct atoms.
    ClauseTooLong,
}

impl From<GeneratorError> for ErrorKind {
    fn from(e: GeneratorError) -> Self {
        ErrorKind::Generator(e)
    }
}

/// Noted errors on a checked simplification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SimplifyError {
    /// The atom to simplify on does not occur in the formula.
    AbsentAtom,
}

impl From<SimplifyError> for ErrorKind {
    fn from(e: SimplifyError) -> Self {
        ErrorKind::Simplify(e)
    }
}

/// Noted errors when checking an assignment against a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValuationError {
    /// The clause at the given index of the formula is not satisfied.
    Unsatisfied(usize),
}

impl From<ValuationError> for ErrorKind {
    fn from(e: ValuationError) -> Self {
        ErrorKind::Valuation(e)
    }
}
