//! Complete backtracking search over partial assignments. The frontier is
//! an explicit LIFO stack of independently owned assignment vectors, so the
//! time budget is polled at a single control point and memory growth is
//! bounded by the stack rather than call-stack recursion.

use std::collections::TryReserveError;
use std::time::{Duration, Instant};

use crate::eval::{is_solution, is_valid_partial, lit_state};
use crate::formula::formula::Formula;
use crate::solve::{Outcome, SolveStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpllConfig {
    pub time_budget: Duration,
}

impl Default for DpllConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(60),
        }
    }
}

pub fn solve(formula: &Formula, config: &DpllConfig) -> Outcome {
    let start = Instant::now();
    let mut steps = 0u64;

    let mut root: Vec<Option<bool>> = vec![None; formula.num_vars() as usize];
    pure_literal_elimination(formula, &mut root);

    let mut stack: Vec<Vec<Option<bool>>> = vec![root];

    while !stack.is_empty() {
        if start.elapsed() > config.time_budget {
            return Outcome::TimedOut(stats(steps, start));
        }

        let Some(mut assignment) = stack.pop() else {
            break;
        };
        steps += 1;

        if is_solution(formula, &assignment) {
            return solved(assignment, steps, start);
        }

        unit_propagation(formula, &mut assignment);

        let Some(var) = first_unassigned(&assignment) else {
            // Propagation can complete the vector. A completed solution is
            // the answer; anything else is falsified and has no children.
            if is_solution(formula, &assignment) {
                return solved(assignment, steps, start);
            }
            continue;
        };

        // False is pushed first so the true branch is explored first.
        assignment[var] = Some(false);
        if is_valid_partial(formula, &assignment) && push_copy(&mut stack, &assignment).is_err() {
            return Outcome::ResourceExhausted;
        }
        assignment[var] = Some(true);
        if is_valid_partial(formula, &assignment) && push_copy(&mut stack, &assignment).is_err() {
            return Outcome::ResourceExhausted;
        }
    }

    Outcome::ProvenUnsat(stats(steps, start))
}

fn solved(assignment: Vec<Option<bool>>, steps: u64, start: Instant) -> Outcome {
    // Variables the search never had to commit default to false; every
    // clause is already satisfied without them.
    let model = assignment.into_iter().map(|v| v.unwrap_or(false)).collect();
    Outcome::Solved {
        assignment: model,
        stats: stats(steps, start),
    }
}

fn stats(steps: u64, start: Instant) -> SolveStats {
    SolveStats {
        steps,
        restarts: 0,
        elapsed: start.elapsed(),
    }
}

fn first_unassigned(assignment: &[Option<bool>]) -> Option<usize> {
    assignment.iter().position(|v| v.is_none())
}

/// Pushes an independent deep copy; the caller keeps its own vector.
/// Allocation failure is reported instead of aborting the process.
fn push_copy(
    stack: &mut Vec<Vec<Option<bool>>>,
    assignment: &[Option<bool>],
) -> Result<(), TryReserveError> {
    stack.try_reserve(1)?;
    let mut copy = Vec::new();
    copy.try_reserve_exact(assignment.len())?;
    copy.extend_from_slice(assignment);
    stack.push(copy);
    Ok(())
}

/// One-shot pre-search reduction: a variable occurring with a single
/// polarity across the whole formula is committed to the polarity that
/// satisfies every clause it appears in. Mixed-polarity and absent
/// variables are left untouched.
pub fn pure_literal_elimination(formula: &Formula, assignment: &mut [Option<bool>]) {
    let mut first_polarity: Vec<Option<bool>> = vec![None; assignment.len()];
    let mut mixed = vec![false; assignment.len()];

    for clause in formula.clauses() {
        for &lit in clause {
            match first_polarity[lit.index()] {
                None => first_polarity[lit.index()] = Some(lit.sign),
                Some(sign) if sign != lit.sign => mixed[lit.index()] = true,
                Some(_) => {}
            }
        }
    }

    for (slot, (&polarity, &is_mixed)) in assignment
        .iter_mut()
        .zip(first_polarity.iter().zip(mixed.iter()))
    {
        if !is_mixed {
            if let Some(sign) = polarity {
                *slot = Some(sign);
            }
        }
    }
}

/// One in-place pass: every clause that is not yet satisfied and has
/// exactly one unassigned literal left gets that literal committed to the
/// satisfying polarity. Assignments made early in the pass are visible to
/// later clauses. A clause with zero open literals and no satisfying one
/// is left alone; the validity check on child generation rejects it.
pub fn unit_propagation(formula: &Formula, assignment: &mut [Option<bool>]) {
    for clause in formula.clauses() {
        let mut satisfied = false;
        let mut open_count = 0usize;
        let mut open_lit = None;

        for &lit in clause {
            match lit_state(lit, assignment) {
                Some(true) => {
                    satisfied = true;
                    break;
                }
                Some(false) => {}
                None => {
                    open_count += 1;
                    open_lit = Some(lit);
                    if open_count == 2 {
                        break;
                    }
                }
            }
        }

        if !satisfied && open_count == 1 {
            if let Some(lit) = open_lit {
                assignment[lit.index()] = Some(lit.sign);
            }
        }
    }
}
