pub mod dpll;
pub mod walksat;

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub steps: u64,
    pub restarts: u64,
    pub elapsed: Duration,
}

/// What a solving engine came back with. Only `Solved` carries a model;
/// `ResourceExhausted` is an aborted run, never a verdict on the formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved {
        assignment: Vec<bool>,
        stats: SolveStats,
    },
    TimedOut(SolveStats),
    ProvenUnsat(SolveStats),
    ResourceExhausted,
}

impl Outcome {
    pub fn solution(&self) -> Option<&[bool]> {
        match self {
            Outcome::Solved { assignment, .. } => Some(assignment),
            _ => None,
        }
    }

    pub fn stats(&self) -> Option<SolveStats> {
        match self {
            Outcome::Solved { stats, .. } => Some(*stats),
            Outcome::TimedOut(stats) | Outcome::ProvenUnsat(stats) => Some(*stats),
            Outcome::ResourceExhausted => None,
        }
    }
}
