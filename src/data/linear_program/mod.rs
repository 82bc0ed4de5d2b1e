//! # Representing linear programs
//!
//! A `LinearProgram` is an ordered collection of constraints over a fixed number of variables. The
//! order matters: certificates of infeasibility refer to constraints by their index.
use std::fmt;

use enum_map::EnumMap;
use index_utils::remove_indices;

use crate::algorithm::error::InvariantViolation;
use crate::data::linear_program::constraint::Constraint;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::number_types::traits::Real;

pub mod constraint;
pub mod elements;
pub mod solution;

/// A system of linear (in)equalities, with an objective function that is carried along.
///
/// Every constraint has exactly `nr_variables` coefficients. This is checked when constraints are
/// added, and maintained by all operations that change the number of variables.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    nr_variables: usize,
    /// Coefficients of a linear objective function, if one was given.
    ///
    /// Feasibility doesn't depend on it; it is only read and written.
    objective: Option<Vec<F>>,
    constraints: Vec<Constraint<F>>,
}

impl<F: Real> LinearProgram<F> {
    /// Create a program without constraints.
    pub fn new(nr_variables: usize) -> Self {
        Self {
            nr_variables,
            objective: None,
            constraints: Vec::new(),
        }
    }

    /// Create a program without constraints, with an objective function.
    ///
    /// # Arguments
    ///
    /// * `objective`: One cost coefficient per variable, so its length determines the number of
    /// variables.
    pub fn with_objective(objective: Vec<F>) -> Self {
        Self {
            nr_variables: objective.len(),
            objective: Some(objective),
            constraints: Vec::new(),
        }
    }

    /// Create a program from a collection of constraints.
    ///
    /// # Errors
    ///
    /// If any of the constraints doesn't have `nr_variables` coefficients.
    pub fn from_constraints(
        nr_variables: usize,
        constraints: impl IntoIterator<Item = Constraint<F>>,
    ) -> Result<Self, InvariantViolation> {
        let mut program = Self::new(nr_variables);
        for constraint in constraints {
            program.add_constraint(constraint)?;
        }

        Ok(program)
    }

    /// Number of variables, which is also the number of coefficients of every constraint.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The objective function, if any.
    pub fn objective(&self) -> Option<&[F]> {
        self.objective.as_deref()
    }

    /// All constraints in order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Append a constraint.
    ///
    /// # Errors
    ///
    /// If the constraint doesn't have one coefficient per variable of this program. The program is
    /// unchanged in that case.
    pub fn add_constraint(&mut self, constraint: Constraint<F>) -> Result<(), InvariantViolation> {
        if constraint.nr_variables() != self.nr_variables {
            return Err(InvariantViolation::DimensionMismatch {
                expected: self.nr_variables,
                found: constraint.nr_variables(),
            });
        }

        self.constraints.push(constraint);
        Ok(())
    }

    /// Remove a single constraint.
    ///
    /// The relative order of the remaining constraints is kept, such that constraints after
    /// `index` shift one position down.
    ///
    /// # Return value
    ///
    /// The removed constraint.
    pub fn remove_constraint(&mut self, index: usize) -> Constraint<F> {
        debug_assert!(index < self.nr_constraints());

        self.constraints.remove(index)
    }

    /// Remove several constraints at once.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, unique indices of the constraints to remove.
    pub fn remove_constraints(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(indices.iter().all(|&index| index < self.nr_constraints()));

        remove_indices(&mut self.constraints, indices);
    }

    /// How often each relation appears.
    pub fn constraint_type_counts(&self) -> EnumMap<ConstraintType, usize> {
        let mut counts = EnumMap::default();
        for constraint in &self.constraints {
            counts[constraint.relation()] += 1;
        }

        counts
    }

    /// Rewrite all constraints into the `<a, x> <= b` form.
    ///
    /// A `>=` constraint is multiplied by `-1`, an `=` constraint is replaced by a `<=` and a
    /// `>=` constraint that is then multiplied by `-1`. Constraints that already had the right form
    /// keep their relative order; the order of the result follows the order of the input.
    pub fn standardized(&self) -> Self {
        let mut constraints = Vec::with_capacity(self.nr_constraints());
        for constraint in &self.constraints {
            match constraint.relation() {
                ConstraintType::Less => constraints.push(constraint.clone()),
                ConstraintType::Greater => constraints.push(constraint.negated()),
                ConstraintType::Equal => {
                    let coefficients = constraint.linear_combination().to_vec();
                    let upper = Constraint::new(coefficients, ConstraintType::Less, constraint.value());
                    let lower = upper.negated();
                    constraints.push(upper);
                    constraints.push(lower);
                },
            }
        }

        Self {
            nr_variables: self.nr_variables,
            objective: self.objective.clone(),
            constraints,
        }
    }

    /// Remove constraints that are implied by other constraints.
    ///
    /// Removes constraints that hold for every assignment, and out of each pair where one
    /// constraint implies the other, the weaker one. This doesn't change the set of feasible
    /// solutions. Among identical constraints, the first one is kept.
    ///
    /// # Return value
    ///
    /// Sorted indices the removed constraints had before removal.
    pub fn prune(&mut self) -> Vec<usize> {
        let nr_constraints = self.nr_constraints();
        let mut redundant = vec![false; nr_constraints];

        for i in 0..nr_constraints {
            if redundant[i] {
                continue;
            }
            if self.constraints[i].is_tautology() {
                redundant[i] = true;
                continue;
            }

            for j in (i + 1)..nr_constraints {
                if redundant[j] {
                    continue;
                }

                if self.constraints[i].implies(&self.constraints[j]) {
                    redundant[j] = true;
                } else if self.constraints[j].implies(&self.constraints[i]) {
                    redundant[i] = true;
                    break;
                }
            }
        }

        let removed = redundant.into_iter()
            .enumerate()
            .filter_map(|(i, is_redundant)| is_redundant.then_some(i))
            .collect::<Vec<_>>();
        self.remove_constraints(&removed);

        removed
    }
}

impl<F: Real> fmt::Display for LinearProgram<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of variables: {}", self.nr_variables)?;
        writeln!(f, "Number of constraints: {}", self.nr_constraints())?;
        writeln!(f)?;

        if let Some(objective) = &self.objective {
            f.write_str("max     ")?;
            for (variable, coefficient) in objective.iter().enumerate() {
                if variable > 0 {
                    f.write_str(" + ")?;
                }
                if coefficient.is_zero() {
                    f.write_str("           ")?;
                } else {
                    write!(f, "({} * x_{})", coefficient, variable + 1)?;
                }
            }
            writeln!(f)?;
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            let prefix = if i == 0 { "s.t.    " } else { "        " };
            writeln!(f, "{}{}", prefix, constraint)?;
        }

        Ok(())
    }
}
