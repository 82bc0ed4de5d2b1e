//! # Fourier-Motzkin elimination with certificates
//!
//! Decides whether a system of linear inequalities has a real solution. Variables are eliminated
//! one by one, and the answer is proven: a feasible system comes with a satisfying assignment, an
//! infeasible system with a non-negative combination of its constraints that reads `0 <= b` with
//! `b < 0` (Farkas' lemma). Both are checked independently before they are returned by
//! `DecideFeasibility::decide_feasibility`.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
