//! # Projecting out a single variable
//!
//! Every constraint in which the last variable has a positive coefficient is paired with every
//! constraint in which it has a negative coefficient. Each pair is combined with positive weights
//! such that the variable cancels. Constraints that don't contain the variable are kept as they
//! are.
use tracing::debug;

use crate::algorithm::error::Error;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::constraint::Constraint;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::number_types::traits::Real;

/// How a constraint of a reduced program was derived from the constraints of its parent.
///
/// The constraint equals `first.1 * parent[first.0] + second.1 * parent[second.0]`, without the
/// coefficient of the eliminated variable. Both weights are non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CombinationRecord<F> {
    /// Index into the parent constraints and the weight it was multiplied with.
    pub first: (usize, F),
    /// Index into the parent constraints and the weight it was multiplied with.
    pub second: (usize, F),
}

impl<F: Real> CombinationRecord<F> {
    /// A constraint that didn't contain the eliminated variable and was copied.
    pub fn pass_through(index: usize) -> Self {
        Self {
            first: (index, F::one()),
            second: (index, F::zero()),
        }
    }

    /// A constraint that is the sum of two weighted parent constraints.
    pub fn pair(first: (usize, F), second: (usize, F)) -> Self {
        debug_assert!(first.1 > F::zero() && second.1 > F::zero());

        Self { first, second }
    }
}

/// Result of eliminating one variable.
#[derive(Debug, PartialEq)]
pub struct Elimination<F> {
    /// Program with one variable less.
    pub program: LinearProgram<F>,
    /// For each constraint of `program`, where it came from.
    pub records: Vec<CombinationRecord<F>>,
}

/// Remove the last variable from a program of `<=` constraints.
///
/// The resulting program is feasible if and only if the original program is. Constraints appear
/// in the order of their (first) parent; pairs of the same positive constraint follow the order of
/// the negative constraints.
///
/// # Arguments
///
/// * `program`: Program with at least one variable.
///
/// # Errors
///
/// If the program contains a constraint that is not of type `<=`.
pub fn eliminate_last_variable<F: Real>(program: &LinearProgram<F>) -> Result<Elimination<F>, Error> {
    debug_assert!(program.nr_variables() > 0);

    check_relations(program)?;

    let variable = program.nr_variables() - 1;
    let constraints = program.constraints();
    let negative = constraints.iter()
        .enumerate()
        .filter(|(_, constraint)| constraint.coefficient(variable) < F::zero())
        .map(|(index, _)| index)
        .collect::<Vec<_>>();

    let mut reduced = LinearProgram::new(variable);
    let mut records = Vec::new();
    for (index, constraint) in constraints.iter().enumerate() {
        let coefficient = constraint.coefficient(variable);

        if coefficient == F::zero() {
            reduced.add_constraint(constraint.clone().without_last_variable())?;
            records.push(CombinationRecord::pass_through(index));
        } else if coefficient > F::zero() {
            for &other_index in &negative {
                let other = &constraints[other_index];
                let other_coefficient = other.coefficient(variable);

                let weight = -other_coefficient;
                let other_weight = coefficient;
                let sum = Constraint::sum(constraint, other, weight, other_weight)?;
                // Both products are equal up to sign, unless they overflow
                debug_assert!({
                    let cancelled = sum.coefficient(variable);
                    cancelled == F::zero() || !cancelled.is_finite()
                });

                reduced.add_constraint(sum.without_last_variable())?;
                records.push(CombinationRecord::pair((index, weight), (other_index, other_weight)));
            }
        }
        // Negative coefficients were all combined with the positive ones
    }

    debug!(
        variable,
        constraints_before = program.nr_constraints(),
        constraints_after = reduced.nr_constraints(),
        nr_negative = negative.len(),
        "eliminated variable"
    );

    Ok(Elimination { program: reduced, records })
}

/// Check that the engine can handle all constraints of the program.
pub(super) fn check_relations<F: Real>(program: &LinearProgram<F>) -> Result<(), Error> {
    match program.constraints().iter().position(|constraint| constraint.relation() != ConstraintType::Less) {
        Some(index) => Err(Error::UnsupportedRelation {
            index,
            relation: program.constraints()[index].relation(),
        }),
        None => Ok(()),
    }
}
