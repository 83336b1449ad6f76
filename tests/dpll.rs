use std::time::Duration;

use ksat::eval::unsatisfied_count;
use ksat::formula::formula::Formula;
use ksat::solve::dpll::{self, DpllConfig};
use ksat::solve::Outcome;

fn formula(num_vars: u32, width: usize, values: &[i64]) -> Formula {
    Formula::new(num_vars, width, values).expect("valid formula")
}

fn solve(f: &Formula) -> Outcome {
    dpll::solve(f, &DpllConfig::default())
}

#[test]
fn solves_a_single_clause() {
    let f = formula(3, 2, &[1, -2]);
    let outcome = solve(&f);
    let model = outcome.solution().expect("satisfiable");
    assert_eq!(model.len(), 3);
    assert!(model[0] || !model[1]);
    assert_eq!(unsatisfied_count(&f, model), 0);
}

#[test]
fn solves_complementary_clauses() {
    let f = formula(2, 2, &[1, 2, -1, -2]);
    let outcome = solve(&f);
    let model = outcome.solution().expect("satisfiable");
    assert_eq!(unsatisfied_count(&f, model), 0);
    // The two variables cannot agree.
    assert_ne!(model[0], model[1]);
}

#[test]
fn proves_the_full_binary_square_unsatisfiable() {
    let f = formula(2, 2, &[1, 2, 1, -2, -1, 2, -1, -2]);
    match solve(&f) {
        Outcome::ProvenUnsat(stats) => {
            assert!(stats.steps >= 1);
            assert_eq!(stats.restarts, 0);
        }
        other => panic!("expected ProvenUnsat, got {other:?}"),
    }
}

#[test]
fn pure_literal_formula_solves_without_branching() {
    // Every variable is pure, so the root node is already a solution.
    let f = formula(3, 2, &[1, -2, 1, 3, -2, 3]);
    match solve(&f) {
        Outcome::Solved { assignment, stats } => {
            assert_eq!(stats.steps, 1);
            assert_eq!(assignment, vec![true, false, true]);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn propagation_can_complete_a_node_into_the_solution() {
    // Branching on P1=true leaves (not P1 or not P2) with one open
    // literal; propagation commits P2=false and the completed vector is
    // the model, with nothing left to branch on.
    let f = formula(2, 2, &[1, 2, -1, -2, 1, -2]);
    match solve(&f) {
        Outcome::Solved { assignment, stats } => {
            assert_eq!(assignment, vec![true, false]);
            assert_eq!(unsatisfied_count(&f, &assignment), 0);
            assert_eq!(stats.steps, 2);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn propagation_completed_dead_ends_are_discarded() {
    // On the full binary square, propagation completes both branches into
    // falsified full vectors; each must be dropped as a dead end so the
    // stack drains to an unsat proof.
    let f = formula(2, 2, &[1, 2, 1, -2, -1, 2, -1, -2]);
    match solve(&f) {
        Outcome::ProvenUnsat(stats) => assert_eq!(stats.steps, 3),
        other => panic!("expected ProvenUnsat, got {other:?}"),
    }
}

#[test]
fn zero_budget_times_out() {
    let f = formula(2, 2, &[1, 2, 1, -2, -1, 2, -1, -2]);
    let outcome = dpll::solve(
        &f,
        &DpllConfig {
            time_budget: Duration::ZERO,
        },
    );
    match outcome {
        Outcome::TimedOut(stats) => assert_eq!(stats.steps, 0),
        other => panic!("expected TimedOut, got {other:?}"),
    }
}

#[test]
fn free_variables_default_to_false_in_the_model() {
    // P3 appears nowhere; the model must still cover it.
    let f = formula(3, 2, &[1, 2, -1, 2]);
    let model = solve(&f).solution().expect("satisfiable").to_vec();
    assert_eq!(model.len(), 3);
    assert!(!model[2]);
    assert_eq!(unsatisfied_count(&f, &model), 0);
}

#[test]
fn wider_clauses_are_handled() {
    let f = formula(4, 3, &[1, 2, 3, -1, -2, -3, 2, 3, -4]);
    let model = solve(&f).solution().expect("satisfiable").to_vec();
    assert_eq!(unsatisfied_count(&f, &model), 0);
}

#[test]
fn reported_stats_carry_elapsed_time_and_steps() {
    let f = formula(2, 2, &[1, 2, -1, -2]);
    let stats = solve(&f).stats().expect("terminated normally");
    assert!(stats.steps >= 1);
    assert!(stats.elapsed <= Duration::from_secs(60));
}
