//! Incomplete stochastic local search. Each attempt starts from a uniform
//! random full assignment and repairs the first unsatisfied clause, mixing
//! pure noise flips with greedy best-improvement flips; attempts that stop
//! improving are abandoned and restarted from scratch.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::eval::{first_unsatisfied_clause, unsatisfied_count};
use crate::formula::formula::Formula;
use crate::solve::{Outcome, SolveStats};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkSatConfig {
    pub time_budget: Duration,
    /// Consecutive non-improving steps tolerated before a restart.
    pub restart_threshold: u64,
    /// Probability of a pure noise flip instead of a greedy one.
    pub noise: f64,
    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for WalkSatConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(60),
            restart_threshold: 10,
            noise: 0.30,
            seed: None,
        }
    }
}

pub fn solve(formula: &Formula, config: &WalkSatConfig) -> Outcome {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let start = Instant::now();
    let num_clauses = formula.num_clauses();
    let mut steps = 0u64;
    let mut restarts = 0u64;
    let mut assignment = vec![false; formula.num_vars() as usize];

    loop {
        for slot in assignment.iter_mut() {
            *slot = rng.random_bool(0.5);
        }
        let mut satisfied = num_clauses - unsatisfied_count(formula, &assignment);
        let mut best = satisfied;
        let mut steps_at_best = steps;

        while satisfied != num_clauses {
            if start.elapsed() > config.time_budget {
                return Outcome::TimedOut(SolveStats {
                    steps,
                    restarts,
                    elapsed: start.elapsed(),
                });
            }
            steps += 1;

            let Some(target) = first_unsatisfied_clause(formula, &assignment) else {
                unreachable!("an unsatisfied clause must exist while satisfied < num_clauses");
            };
            let clause = formula.clause(target);

            if rng.random_bool(config.noise) {
                let slot = clause[rng.random_range(0..clause.len())].index();
                assignment[slot] = !assignment[slot];
            } else {
                // Try each flip in the clause, keep the first one that beats
                // everything seen so far; no flip if none beats the current
                // state.
                let mut best_flip = None;
                let mut best_score = satisfied;
                for (j, lit) in clause.iter().enumerate() {
                    assignment[lit.index()] = !assignment[lit.index()];
                    let score = num_clauses - unsatisfied_count(formula, &assignment);
                    if score > best_score {
                        best_score = score;
                        best_flip = Some(j);
                    }
                    assignment[lit.index()] = !assignment[lit.index()];
                }
                if let Some(j) = best_flip {
                    let slot = clause[j].index();
                    assignment[slot] = !assignment[slot];
                }
            }

            satisfied = num_clauses - unsatisfied_count(formula, &assignment);
            if satisfied > best {
                best = satisfied;
                steps_at_best = steps;
            } else if steps - steps_at_best > config.restart_threshold {
                restarts += 1;
                break;
            }
        }

        if satisfied == num_clauses {
            return Outcome::Solved {
                assignment,
                stats: SolveStats {
                    steps,
                    restarts,
                    elapsed: start.elapsed(),
                },
            };
        }
    }
}
