//! # Representation of answers
//!
//! Whether a linear program is feasible or not, the answer comes with evidence that can be checked
//! without trusting the algorithm that produced it.
use std::fmt;

use itertools::Itertools;

use crate::data::number_types::traits::Real;

/// Evidence for (in)feasibility of a linear program.
///
/// Immutable once created. See `algorithm::verify` for the conditions that make a certificate
/// valid.
#[derive(Clone, Debug, PartialEq)]
pub enum Certificate<F> {
    /// A value for each variable such that all constraints are satisfied.
    Feasible(Vec<F>),
    /// A non-negative multiplier for each constraint.
    ///
    /// Summing the constraints with these weights gives `0 <= b` with `b < 0`, which can't hold:
    /// the constraints can't all be satisfied at the same time (Farkas' lemma).
    Infeasible(Vec<F>),
}

impl<F> Certificate<F> {
    /// Whether this certificate proves feasibility.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Certificate::Feasible(_))
    }

    /// The assignment or the multipliers.
    pub fn values(&self) -> &[F] {
        match self {
            Certificate::Feasible(values) | Certificate::Infeasible(values) => values,
        }
    }
}

impl<F: Real> Certificate<F> {
    /// Render only the answer: the assignment if feasible, `INFEASIBLE` otherwise.
    pub fn value_only(&self) -> String {
        match self {
            Certificate::Feasible(assignment) => assignment.iter().join(" "),
            Certificate::Infeasible(_) => "INFEASIBLE".to_string(),
        }
    }
}

/// Render the full certificate on a single line.
///
/// An assignment is written as is, multipliers are preceded by `empty` (the feasible set is).
impl<F: Real> fmt::Display for Certificate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Certificate::Feasible(assignment) => write!(f, "{}", assignment.iter().join(" ")),
            Certificate::Infeasible(multipliers) => write!(f, "empty {}", multipliers.iter().join(" ")),
        }
    }
}
