//! # A single linear relation
//!
//! A `Constraint` is meaningless on its own: its coefficients are indexed by the variables of the
//! `LinearProgram` that owns it, and it should always have exactly one coefficient per variable.
use std::fmt;

use itertools::Itertools;

use crate::algorithm::error::InvariantViolation;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::number_types::traits::Real;

/// Relation `<a, x> ~ b` with `~` one of `=`, `>=` and `<=`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    /// Coefficients `a`, one for each variable.
    linear_combination: Vec<F>,
    /// Right-hand side `b`.
    value: F,
    relation: ConstraintType,
}

impl<F: Real> Constraint<F> {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `linear_combination`: One coefficient for each variable of the program this constraint
    /// will be part of.
    /// * `relation`: How the linear combination relates to the `value`.
    /// * `value`: Right-hand side.
    pub fn new(linear_combination: Vec<F>, relation: ConstraintType, value: F) -> Self {
        Self { linear_combination, value, relation }
    }

    /// A constraint with all coefficients and the value equal to zero.
    pub fn empty(relation: ConstraintType, nr_variables: usize) -> Self {
        Self::new(vec![F::zero(); nr_variables], relation, F::zero())
    }

    /// Number of coefficients.
    pub fn nr_variables(&self) -> usize {
        self.linear_combination.len()
    }

    /// All coefficients, ordered by variable index.
    pub fn linear_combination(&self) -> &[F] {
        &self.linear_combination
    }

    /// Coefficient of a single variable.
    pub fn coefficient(&self, variable: usize) -> F {
        debug_assert!(variable < self.nr_variables());

        self.linear_combination[variable]
    }

    /// Right-hand side.
    pub fn value(&self) -> F {
        self.value
    }

    /// The type of (in)equality.
    pub fn relation(&self) -> ConstraintType {
        self.relation
    }

    /// Scale such that the coefficient of `variable` becomes `1` or `-1`.
    ///
    /// # Return value
    ///
    /// Whether the coefficient was nonzero. If it wasn't, the constraint is left as is.
    pub fn normalize(&mut self, variable: usize) -> bool {
        let coefficient = self.coefficient(variable);
        if coefficient == F::zero() {
            return false;
        }

        // Positive, so the relation is kept
        let factor = coefficient.abs().recip();
        self.scale_unchecked(factor);
        true
    }

    /// Multiply both sides with a factor.
    ///
    /// A negative factor swaps the direction of an inequality.
    ///
    /// # Errors
    ///
    /// If the factor is infinite or NaN. The constraint is unchanged in that case.
    pub fn scale(&mut self, factor: F) -> Result<(), InvariantViolation> {
        if !factor.is_finite() {
            return Err(InvariantViolation::NonFiniteFactor { factor: factor.as_f64() });
        }

        self.scale_unchecked(factor);
        Ok(())
    }

    /// Multiply both sides with `-1`.
    pub fn negated(&self) -> Self {
        let mut copy = self.clone();
        copy.scale_unchecked(-F::one());
        copy
    }

    fn scale_unchecked(&mut self, factor: F) {
        for coefficient in &mut self.linear_combination {
            *coefficient = *coefficient * factor;
        }
        self.value = self.value * factor;
        if factor < F::zero() {
            self.relation = !self.relation;
        }
    }

    /// Non-negative combination `weight_lhs * lhs + weight_rhs * rhs` of two constraints.
    ///
    /// # Errors
    ///
    /// If the two relations differ or if a weight is negative: the result would not be implied by
    /// the two constraints. A dimension mismatch is reported as well.
    pub fn sum(
        lhs: &Self,
        rhs: &Self,
        weight_lhs: F,
        weight_rhs: F,
    ) -> Result<Self, InvariantViolation> {
        if lhs.relation != rhs.relation {
            return Err(InvariantViolation::IncompatibleRelations {
                lhs: lhs.relation,
                rhs: rhs.relation,
            });
        }
        if let Some(weight) = [weight_lhs, weight_rhs].into_iter().find(|&weight| !(weight >= F::zero())) {
            return Err(InvariantViolation::NegativeWeight { weight: weight.as_f64() });
        }
        if lhs.nr_variables() != rhs.nr_variables() {
            return Err(InvariantViolation::DimensionMismatch {
                expected: lhs.nr_variables(),
                found: rhs.nr_variables(),
            });
        }

        let linear_combination = lhs.linear_combination.iter()
            .zip_eq(&rhs.linear_combination)
            .map(|(&left, &right)| weight_lhs * left + weight_rhs * right)
            .collect();

        Ok(Self {
            linear_combination,
            value: weight_lhs * lhs.value + weight_rhs * rhs.value,
            relation: lhs.relation,
        })
    }

    /// The same constraint, without the coefficient of the last variable.
    ///
    /// Only meaningful when that coefficient is zero, or when it has been cancelled out by
    /// combining this constraint with another one.
    pub fn without_last_variable(mut self) -> Self {
        debug_assert!(self.nr_variables() > 0);

        self.linear_combination.pop();
        self
    }

    /// Evaluate the linear combination.
    ///
    /// # Arguments
    ///
    /// * `assignment`: A value for each variable.
    pub fn lhs(&self, assignment: &[F]) -> F {
        debug_assert_eq!(assignment.len(), self.nr_variables());

        self.partial_lhs(assignment)
    }

    /// Evaluate the linear combination restricted to the first variables.
    ///
    /// # Arguments
    ///
    /// * `assignment`: A value for each of the first `assignment.len()` variables.
    pub fn partial_lhs(&self, assignment: &[F]) -> F {
        debug_assert!(assignment.len() <= self.nr_variables());

        self.linear_combination.iter()
            .zip(assignment)
            .fold(F::zero(), |total, (&coefficient, &value)| total + coefficient * value)
    }

    /// Whether the assignment satisfies this constraint.
    ///
    /// Comparison is exact, no tolerance is applied.
    pub fn is_satisfied(&self, assignment: &[F]) -> bool {
        let lhs = self.lhs(assignment);
        match self.relation {
            ConstraintType::Less => lhs <= self.value,
            ConstraintType::Greater => lhs >= self.value,
            ConstraintType::Equal => lhs == self.value,
        }
    }

    /// Whether any assignment satisfying `self` also satisfies `other`.
    ///
    /// Only detects the case where both constraints have identical coefficients, and `self` is at
    /// least as tight as `other`.
    pub fn implies(&self, other: &Self) -> bool {
        use ConstraintType::{Equal, Greater, Less};

        if self.linear_combination != other.linear_combination {
            return false;
        }

        match (self.relation, other.relation) {
            (Less, Less) | (Equal, Less) => self.value <= other.value,
            (Greater, Greater) | (Equal, Greater) => self.value >= other.value,
            (Equal, Equal) => self.value == other.value,
            _ => false,
        }
    }

    /// Whether the constraint holds for every assignment.
    ///
    /// That is the case when all coefficients are zero and `0 ~ b` is true.
    pub fn is_tautology(&self) -> bool {
        self.linear_combination.iter().all(|coefficient| coefficient.is_zero())
            && self.is_satisfied(&vec![F::zero(); self.nr_variables()])
    }
}

impl<F: Real> fmt::Display for Constraint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (variable, coefficient) in self.linear_combination.iter().enumerate() {
            if variable > 0 {
                f.write_str(" + ")?;
            }
            if coefficient.is_zero() {
                // Keep the columns aligned across constraints
                f.write_str("           ")?;
            } else {
                write!(f, "({} * x_{})", coefficient, variable + 1)?;
            }
        }

        write!(f, " {} {}", self.relation, self.value)
    }
}
