use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of all free choices, aka. decisions, made.
    pub total_decisions: usize,

    /// A count of all choices forced by a unit clause.
    pub total_propagations: usize,

    /// A count of every simplification which resulted in a contradiction.
    pub total_conflicts: usize,

    /// A count of every time the opposite value of a free choice was tried.
    pub total_backtracks: usize,

    /// The deepest level reached during a search.
    pub max_depth: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_decisions: 0,
            total_propagations: 0,
            total_conflicts: 0,
            total_backtracks: 0,

            max_depth: 0,
            time: Duration::from_secs(0),
        }
    }
}
