//! Fixed-width k-SAT: every clause of a problem holds exactly K signed
//! literals. Two engines solve the same [`formula::formula::Formula`]:
//! an incomplete stochastic local search ([`solve::walksat`]) and a
//! complete backtracking search ([`solve::dpll`]).

pub mod eval;
pub mod formula;
pub mod solve;
