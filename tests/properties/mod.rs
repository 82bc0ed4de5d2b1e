//! Randomized systems for which all arithmetic stays exact in `f64`, so that every certificate
//! must pass the exact verifier.
//!
//! * Difference constraints `x_p - x_q <= c` (or one-sided bounds) stay of that form under
//!   elimination. Their feasibility is also decided independently, by looking for a negative cycle
//!   in the constraint graph.
//! * Two variables with coefficients in `{-1, 0, 1}` only ever divide by one or two.
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use fourier_motzkin::algorithm::DecideFeasibility;
use fourier_motzkin::algorithm::fourier_motzkin::{Config, solve};
use fourier_motzkin::algorithm::verify::verify;
use fourier_motzkin::data::linear_program::LinearProgram;
use fourier_motzkin::data::linear_program::constraint::Constraint;
use fourier_motzkin::data::linear_program::elements::ConstraintType::Less;
use fourier_motzkin::data::linear_program::solution::Certificate;

/// `x_plus - x_minus <= bound`, where a missing variable reads as zero.
#[derive(Copy, Clone, Debug)]
struct Difference {
    plus: Option<usize>,
    minus: Option<usize>,
    bound: i32,
}

fn difference(nr_variables: usize) -> impl Strategy<Value = Difference> {
    (option::of(0..nr_variables), option::of(0..nr_variables), -10..=10_i32)
        .prop_map(|(plus, minus, bound)| Difference { plus, minus, bound })
}

fn difference_system() -> impl Strategy<Value = (usize, Vec<Difference>)> {
    (1..=4_usize).prop_flat_map(|nr_variables| (Just(nr_variables), vec(difference(nr_variables), 0..=6)))
}

fn difference_program(nr_variables: usize, differences: &[Difference]) -> LinearProgram<f64> {
    let constraints = differences.iter()
        .map(|difference| {
            let mut coefficients = vec![0.; nr_variables];
            if let Some(plus) = difference.plus {
                coefficients[plus] += 1.;
            }
            if let Some(minus) = difference.minus {
                coefficients[minus] -= 1.;
            }
            Constraint::new(coefficients, Less, f64::from(difference.bound))
        });

    LinearProgram::from_constraints(nr_variables, constraints).unwrap()
}

/// Bellman-Ford from a virtual source connected to all vertices. Vertex `nr_variables` stands for
/// the constant zero.
fn has_negative_cycle(nr_variables: usize, differences: &[Difference]) -> bool {
    let zero = nr_variables;
    let edges = differences.iter()
        .map(|difference| {
            let from = difference.minus.unwrap_or(zero);
            let to = difference.plus.unwrap_or(zero);
            (from, to, i64::from(difference.bound))
        })
        .collect::<Vec<_>>();

    let mut distance = vec![0_i64; nr_variables + 1];
    for _ in 0..=nr_variables {
        for &(from, to, weight) in &edges {
            if distance[from] + weight < distance[to] {
                distance[to] = distance[from] + weight;
            }
        }
    }

    edges.iter().any(|&(from, to, weight)| distance[from] + weight < distance[to])
}

fn unit_system() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    let coefficient = prop_oneof![Just(-1.), Just(0.), Just(1.)];
    let row = (coefficient.clone(), coefficient, (-5..=5_i32).prop_map(f64::from));

    vec(row, 0..=6)
}

fn unit_program(rows: &[(f64, f64, f64)]) -> LinearProgram<f64> {
    let constraints = rows.iter()
        .map(|&(x, y, bound)| Constraint::new(vec![x, y], Less, bound));

    LinearProgram::from_constraints(2, constraints).unwrap()
}

proptest! {
    #[test]
    fn difference_constraints_verify((nr_variables, differences) in difference_system()) {
        let program = difference_program(nr_variables, &differences);

        let certificate = program.decide_feasibility(&Config::default());
        prop_assert!(certificate.is_ok(), "{:?}", certificate);
        let certificate = certificate.unwrap();

        prop_assert_eq!(certificate.is_feasible(), !has_negative_cycle(nr_variables, &differences));
        match &certificate {
            Certificate::Feasible(assignment) => prop_assert_eq!(assignment.len(), nr_variables),
            Certificate::Infeasible(multipliers) => {
                prop_assert_eq!(multipliers.len(), differences.len());
                prop_assert!(multipliers.iter().all(|&multiplier| multiplier >= 0.));
            },
        }
    }

    #[test]
    fn pruning_keeps_the_answer((nr_variables, differences) in difference_system()) {
        let program = difference_program(nr_variables, &differences);

        let plain = program.decide_feasibility(&Config::default()).unwrap();
        let pruned = program.decide_feasibility(&Config { prune: true }).unwrap();
        prop_assert_eq!(plain.is_feasible(), pruned.is_feasible());
    }

    #[test]
    fn unit_coefficients_verify(rows in unit_system()) {
        let program = unit_program(&rows);

        for prune in [false, true] {
            let result = program.decide_feasibility(&Config { prune });
            prop_assert!(result.is_ok(), "{:?}", result);
        }
    }

    #[test]
    fn repeated_runs_agree(rows in unit_system()) {
        let program = unit_program(&rows);

        let first = solve(&program, &Config::default()).unwrap();
        let second = solve(&program, &Config::default()).unwrap();
        prop_assert_eq!(verify(&program, &second), Ok(()));
        prop_assert_eq!(first, second);
    }
}
