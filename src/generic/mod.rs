//! Generic structures, not specific to satisfiability.

pub mod minimal_pcg;
