//! Procedures for preprocessing formulas.
//!
//! Preprocessing is optional, and is applied by a [context](crate::context) before search when enabled by [Config::preprocessing](crate::config::Config::preprocessing).

pub mod pure;
