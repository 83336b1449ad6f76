use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use ksat::formula::io::{load_formula, write_assignment};
use ksat::solve::dpll::{self, DpllConfig};
use ksat::solve::walksat::{self, WalkSatConfig};
use ksat::solve::{Outcome, SolveStats};

#[derive(Parser, Debug)]
#[command(name = "ksat")]
#[command(about = "Fixed-width k-SAT solver: stochastic local search or complete backtracking")]
struct Cli {
    /// Solving method to run.
    #[arg(value_enum)]
    method: Method,
    /// Problem file: N M K, then M rows of K signed literals.
    inputfile: String,
    /// Where the satisfying assignment goes; written only on success.
    outputfile: String,
    /// Time budget in seconds for either engine.
    #[arg(long, default_value_t = 60.0)]
    time_budget: f64,
    /// Non-improving walksat steps tolerated before a random restart.
    #[arg(long, default_value_t = 10)]
    restart_threshold: u64,
    /// Probability of a pure noise flip in walksat.
    #[arg(long, default_value_t = 0.30)]
    noise: f64,
    /// Fixed RNG seed for reproducible walksat runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the clause set before solving.
    #[arg(long)]
    show_problem: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Method {
    Walksat,
    Dpll,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let formula = load_formula(&cli.inputfile)?;
    if cli.show_problem {
        println!("The current problem:");
        println!("====================");
        print!("{formula}");
    }

    let time_budget = Duration::from_secs_f64(cli.time_budget);
    let outcome = match cli.method {
        Method::Walksat => walksat::solve(
            &formula,
            &WalkSatConfig {
                time_budget,
                restart_threshold: cli.restart_threshold,
                noise: cli.noise,
                seed: cli.seed,
            },
        ),
        Method::Dpll => dpll::solve(&formula, &DpllConfig { time_budget }),
    };

    let name = match cli.method {
        Method::Walksat => "walksat",
        Method::Dpll => "dpll",
    };
    match &outcome {
        Outcome::Solved { assignment, stats } => {
            println!("Solution found with {name}!");
            println!("{}", describe_assignment(assignment));
            print_stats(cli.method, *stats);
            write_assignment(&cli.outputfile, assignment)?;
        }
        Outcome::TimedOut(stats) => {
            println!("NO SOLUTION found with {name} within the time limit...");
            print_stats(cli.method, *stats);
        }
        Outcome::ProvenUnsat(stats) => {
            println!("NO SOLUTION EXISTS. Proved by {name}!");
            print_stats(cli.method, *stats);
        }
        Outcome::ResourceExhausted => {
            // Distinct from "unsatisfiable": the run was aborted, the
            // formula got no verdict.
            bail!("memory exhausted while growing the {name} search stack");
        }
    }
    Ok(())
}

fn print_stats(method: Method, stats: SolveStats) {
    println!("Time spent: {:.3} secs", stats.elapsed.as_secs_f64());
    if matches!(method, Method::Walksat) {
        println!("Number of restarts: {}", stats.restarts);
    }
    println!("Number of steps: {}", stats.steps);
}

fn describe_assignment(assignment: &[bool]) -> String {
    assignment
        .iter()
        .enumerate()
        .map(|(i, &value)| format!("P{}={}", i + 1, value))
        .collect::<Vec<_>>()
        .join("  ")
}
