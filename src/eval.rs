//! Pure evaluation of assignments against a formula. The full-assignment
//! functions drive the local-search objective; the partial-assignment
//! functions drive backtracking validity and the solution check.

use crate::formula::formula::{Formula, Lit};

/// Truth of a literal under a partial assignment; `None` while its
/// variable is unassigned.
pub fn lit_state(lit: Lit, assignment: &[Option<bool>]) -> Option<bool> {
    assignment[lit.index()].map(|v| if lit.sign { v } else { !v })
}

fn lit_holds(lit: Lit, assignment: &[bool]) -> bool {
    assignment[lit.index()] == lit.sign
}

/// Number of clauses with no satisfied literal under a full assignment.
pub fn unsatisfied_count(formula: &Formula, assignment: &[bool]) -> usize {
    formula
        .clauses()
        .filter(|clause| !clause.iter().any(|&lit| lit_holds(lit, assignment)))
        .count()
}

/// First clause (in table order) with no satisfied literal, or `None` when
/// every clause is satisfied. Callers that have just observed a positive
/// `unsatisfied_count` may treat `None` as unreachable.
pub fn first_unsatisfied_clause(formula: &Formula, assignment: &[bool]) -> Option<usize> {
    formula
        .clauses()
        .position(|clause| !clause.iter().any(|&lit| lit_holds(lit, assignment)))
}

/// A partial assignment is valid while no clause is already falsified:
/// every clause keeps at least one literal that is satisfied or unassigned.
pub fn is_valid_partial(formula: &Formula, assignment: &[Option<bool>]) -> bool {
    formula.clauses().all(|clause| {
        clause
            .iter()
            .any(|&lit| lit_state(lit, assignment) != Some(false))
    })
}

/// Stricter than validity: every clause must hold an assigned literal of
/// matching polarity. Unassigned literals do not count.
pub fn is_solution(formula: &Formula, assignment: &[Option<bool>]) -> bool {
    formula.clauses().all(|clause| {
        clause
            .iter()
            .any(|&lit| lit_state(lit, assignment) == Some(true))
    })
}
