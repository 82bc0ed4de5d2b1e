//! # Fourier-Motzkin elimination
//!
//! Variables are projected out one by one, starting with the last. Once no variables remain, the
//! constraints read `0 <= b` and feasibility can be read off directly. All intermediate programs
//! are kept. Going back through them, the answer for each reduced program is lifted to an answer
//! for the program it was derived from:
//!
//! * an assignment is extended with a value for the eliminated variable,
//! * Farkas multipliers are distributed over the constraints that were combined.
//!
//! The number of constraints can grow quadratically in each step. Optionally, dominated
//! constraints are removed from each reduced program (see `Config`).
use index_utils::remove_indices;
use tracing::{debug, trace};

use crate::algorithm::error::Error;
use crate::algorithm::fourier_motzkin::certificate::{feasible_value_for_eliminated_variable, lift_multipliers};
use crate::algorithm::fourier_motzkin::elimination::{check_relations, eliminate_last_variable, Elimination};
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::Certificate;
use crate::data::number_types::traits::Real;

pub mod certificate;
pub mod elimination;

/// Settings of the elimination.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Remove constraints that are implied by a single other constraint after each elimination.
    ///
    /// Never applied to the program that is being solved, only to the programs derived from it.
    pub prune: bool,
}

/// Decide whether a program of `<=` constraints has a solution.
///
/// # Return value
///
/// A satisfying assignment with one value per variable, or non-negative multipliers with one value
/// per constraint of `program`. The certificate is not verified here.
///
/// # Errors
///
/// If a constraint is not of type `<=`, or if an internal consistency check fails.
pub fn solve<F: Real>(program: &LinearProgram<F>, config: &Config) -> Result<Certificate<F>, Error> {
    let mut eliminations: Vec<Elimination<F>> = Vec::with_capacity(program.nr_variables());
    loop {
        let current = eliminations.last().map_or(program, |elimination| &elimination.program);
        if current.nr_variables() == 0 {
            break;
        }

        let Elimination { program: mut reduced, mut records } = eliminate_last_variable(current)?;
        if config.prune {
            let removed = reduced.prune();
            remove_indices(&mut records, &removed);
            debug!(nr_removed = removed.len(), remaining = reduced.nr_constraints(), "pruned reduced program");
        }
        eliminations.push(Elimination { program: reduced, records });
    }

    let base = eliminations.last().map_or(program, |elimination| &elimination.program);
    let mut certificate = decide_without_variables(base)?;

    // Step `level` eliminated a variable from the program of the step before it
    for (level, elimination) in eliminations.iter().enumerate().rev() {
        let parent = match level {
            0 => program,
            _ => &eliminations[level - 1].program,
        };

        certificate = match certificate {
            Certificate::Feasible(mut assignment) => {
                let value = feasible_value_for_eliminated_variable(parent.constraints(), &assignment)?;
                assignment.push(value);
                Certificate::Feasible(assignment)
            },
            Certificate::Infeasible(multipliers) => {
                Certificate::Infeasible(lift_multipliers(&multipliers, &elimination.records, parent.nr_constraints()))
            },
        };
    }

    Ok(certificate)
}

/// Base case: all constraints are of the form `0 <= b`.
///
/// Any constraint with `b < 0` is a contradiction by itself.
fn decide_without_variables<F: Real>(program: &LinearProgram<F>) -> Result<Certificate<F>, Error> {
    debug_assert_eq!(program.nr_variables(), 0);

    check_relations(program)?;

    let violated = program.constraints().iter().position(|constraint| constraint.value() < F::zero());
    trace!(nr_constraints = program.nr_constraints(), ?violated, "no variables left");

    Ok(match violated {
        Some(index) => {
            let mut multipliers = vec![F::zero(); program.nr_constraints()];
            multipliers[index] = F::one();
            Certificate::Infeasible(multipliers)
        },
        None => Certificate::Feasible(Vec::new()),
    })
}
