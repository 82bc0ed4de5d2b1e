//! # Lifting certificates through an elimination step
//!
//! A certificate for the reduced program is turned into a certificate for the program the variable
//! was eliminated from. An assignment is extended by a value for the eliminated variable, Farkas
//! multipliers are distributed over the constraints that were combined.
use tracing::trace;

use crate::algorithm::error::InvariantViolation;
use crate::algorithm::fourier_motzkin::elimination::CombinationRecord;
use crate::data::linear_program::constraint::Constraint;
use crate::data::linear_program::elements::BoundDirection;
use crate::data::number_types::traits::Real;

/// Values a single variable may take, given the values of all other variables.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Interval<F> {
    lower: F,
    upper: F,
}

impl<F: Real> Interval<F> {
    fn unbounded() -> Self {
        Self {
            lower: F::neg_infinity(),
            upper: F::infinity(),
        }
    }

    /// Intersect with a half line.
    fn tighten(&mut self, direction: BoundDirection, bound: F) {
        match direction {
            BoundDirection::Lower => if bound > self.lower {
                self.lower = bound;
            },
            BoundDirection::Upper => if bound < self.upper {
                self.upper = bound;
            },
        }
    }

    fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    fn contains(&self, value: F) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Pick a value inside the (nonempty) interval.
    ///
    /// Zero is preferred, then the midpoint. Half lines give an integer one unit away from their
    /// endpoint.
    fn choose(&self) -> F {
        debug_assert!(!self.is_empty());

        let zero = F::zero();
        let one = F::one();
        match (self.lower.is_finite(), self.upper.is_finite()) {
            _ if self.contains(zero) => zero,
            (true, true) => (self.lower + self.upper) / (one + one),
            (false, true) => (self.upper - one).round(),
            (true, false) => (self.lower + one).round(),
            (false, false) => zero,
        }
    }
}

/// Compute a value for the last variable, given values for all others.
///
/// Each constraint with a nonzero coefficient for the last variable bounds it from one side. The
/// value is chosen inside the intersection of these bounds.
///
/// # Arguments
///
/// * `constraints`: The `<=` constraints the last variable was eliminated from.
/// * `assignment`: Values for all but the last variable, satisfying the reduced program.
///
/// # Errors
///
/// If the bounds contradict each other. The reduced program being satisfied guarantees that they
/// don't, so this signals a bug.
pub fn feasible_value_for_eliminated_variable<F: Real>(
    constraints: &[Constraint<F>],
    assignment: &[F],
) -> Result<F, InvariantViolation> {
    let variable = assignment.len();

    let mut interval = Interval::unbounded();
    for constraint in constraints {
        debug_assert_eq!(constraint.nr_variables(), variable + 1);

        let coefficient = constraint.coefficient(variable);
        if coefficient == F::zero() {
            continue;
        }

        let rest = constraint.partial_lhs(assignment);
        let bound = (constraint.value() - rest) / coefficient;
        let direction = if coefficient > F::zero() {
            BoundDirection::Upper
        } else {
            BoundDirection::Lower
        };
        interval.tighten(direction, bound);
    }

    if interval.is_empty() {
        return Err(InvariantViolation::EmptyInterval {
            variable,
            lower: interval.lower.as_f64(),
            upper: interval.upper.as_f64(),
        });
    }

    let value = interval.choose();
    trace!(variable, lower = interval.lower.as_f64(), upper = interval.upper.as_f64(), value = value.as_f64(), "fixed eliminated variable");

    Ok(value)
}

/// Distribute Farkas multipliers of a reduced program over the constraints it was derived from.
///
/// Transposed application of the combinations: every parent constraint receives the multiplier of
/// each child it contributed to, times the weight it was given.
///
/// # Arguments
///
/// * `multipliers`: One non-negative value for each constraint of the reduced program.
/// * `records`: One record for each constraint of the reduced program.
/// * `nr_constraints`: Number of constraints before elimination.
///
/// # Return value
///
/// One non-negative multiplier for each constraint before elimination.
pub fn lift_multipliers<F: Real>(
    multipliers: &[F],
    records: &[CombinationRecord<F>],
    nr_constraints: usize,
) -> Vec<F> {
    debug_assert_eq!(multipliers.len(), records.len());

    let mut lifted = vec![F::zero(); nr_constraints];
    for (&multiplier, record) in multipliers.iter().zip(records) {
        for (index, weight) in [record.first, record.second] {
            debug_assert!(index < nr_constraints);
            lifted[index] = lifted[index] + weight * multiplier;
        }
    }

    lifted
}
