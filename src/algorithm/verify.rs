//! # Checking certificates
//!
//! A certificate is checked against the program it is claimed to be a certificate for, without
//! looking at how it was computed. All comparisons are exact.
use crate::algorithm::error::VerificationError;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::solution::Certificate;
use crate::data::number_types::traits::Real;

/// Check that a certificate proves what it claims about a program.
///
/// # Errors
///
/// The first violated condition that was found.
pub fn verify<F: Real>(
    program: &LinearProgram<F>,
    certificate: &Certificate<F>,
) -> Result<(), VerificationError> {
    match certificate {
        Certificate::Feasible(assignment) => verify_assignment(program, assignment),
        Certificate::Infeasible(multipliers) => verify_farkas(program, multipliers),
    }
}

/// Every constraint should be satisfied.
fn verify_assignment<F: Real>(
    program: &LinearProgram<F>,
    assignment: &[F],
) -> Result<(), VerificationError> {
    if assignment.len() != program.nr_variables() {
        return Err(VerificationError::WrongLength {
            expected: program.nr_variables(),
            found: assignment.len(),
        });
    }

    match program.constraints().iter().position(|constraint| !constraint.is_satisfied(assignment)) {
        Some(constraint) => Err(VerificationError::Unsatisfied { constraint }),
        None => Ok(()),
    }
}

/// The multipliers should combine the constraints into `0 <= b` with `b < 0`.
///
/// Constraints are read in the `<=` direction, so a `>=` constraint contributes with its sign
/// flipped. An equality constraint implies its `<=` half and is used as such.
fn verify_farkas<F: Real>(
    program: &LinearProgram<F>,
    multipliers: &[F],
) -> Result<(), VerificationError> {
    if multipliers.len() != program.nr_constraints() {
        return Err(VerificationError::WrongLength {
            expected: program.nr_constraints(),
            found: multipliers.len(),
        });
    }

    if let Some((constraint, &value)) = multipliers.iter().enumerate().find(|(_, value)| !(**value >= F::zero())) {
        return Err(VerificationError::NegativeMultiplier { constraint, value: value.as_f64() });
    }

    let directed = program.constraints().iter()
        .zip(multipliers)
        .map(|(constraint, &multiplier)| match constraint.relation() {
            ConstraintType::Greater => (constraint, -multiplier),
            ConstraintType::Less | ConstraintType::Equal => (constraint, multiplier),
        })
        .collect::<Vec<_>>();

    let bound_sum = directed.iter()
        .fold(F::zero(), |total, &(constraint, multiplier)| total + multiplier * constraint.value());
    if !(bound_sum < F::zero()) {
        return Err(VerificationError::NonNegativeBoundSum { sum: bound_sum.as_f64() });
    }

    for variable in 0..program.nr_variables() {
        let sum = directed.iter()
            .fold(F::zero(), |total, &(constraint, multiplier)| {
                total + multiplier * constraint.coefficient(variable)
            });
        if sum != F::zero() {
            return Err(VerificationError::NonZeroCoefficientSum { variable, sum: sum.as_f64() });
        }
    }

    Ok(())
}
