//! Small programs with a known answer, read from text like a user would.
use fourier_motzkin::algorithm::DecideFeasibility;
use fourier_motzkin::algorithm::error::{Error, ErrorKind};
use fourier_motzkin::algorithm::fourier_motzkin::{Config, solve};
use fourier_motzkin::algorithm::verify::verify;
use fourier_motzkin::data::linear_program::LinearProgram;
use fourier_motzkin::data::linear_program::constraint::Constraint;
use fourier_motzkin::data::linear_program::elements::ConstraintType::{Equal, Greater, Less};
use fourier_motzkin::data::linear_program::solution::Certificate;
use fourier_motzkin::io::parse;

fn decide(text: &str) -> Certificate<f64> {
    let program = parse::<f64>(text).unwrap();
    program.decide_feasibility(&Config::default()).unwrap()
}

#[test]
fn bounded_interval() {
    // x <= 5, x >= 3
    let certificate = decide("2 1\n0\n5 -3\n1\n-1\n");
    assert_eq!(certificate, Certificate::Feasible(vec![4.]));
    assert_eq!(certificate.to_string(), "4");
}

#[test]
fn crossing_bounds() {
    // x <= 1, x >= 2
    let certificate = decide("2 1\n0\n1 -2\n1\n-1\n");
    assert_eq!(certificate, Certificate::Infeasible(vec![1., 1.]));
    assert_eq!(certificate.to_string(), "empty 1 1");
    assert_eq!(certificate.value_only(), "INFEASIBLE");
}

#[test]
fn no_constraints() {
    assert_eq!(decide("0 0\n\n\n"), Certificate::Feasible(vec![]));
    assert_eq!(decide("0 3\n1 2 3\n\n"), Certificate::Feasible(vec![0., 0., 0.]));
}

#[test]
fn contradiction() {
    // 0 <= -1
    assert_eq!(decide("1 0\n\n-1\n\n"), Certificate::Infeasible(vec![1.]));
}

#[test]
fn zero_rows() {
    // 0 <= 0 next to x + y <= 1 is harmless
    let certificate = decide("2 2\n0 0\n0 1\n0 0\n1 1\n");
    assert!(certificate.is_feasible());

    // 0 <= -3 is found after eliminating four unrelated variables
    let certificate = decide("3 4\n0 0 0 0\n5 -3 2\n1 -1 0 2\n0 0 0 0\n0 1 1 -1\n");
    assert_eq!(certificate, Certificate::Infeasible(vec![0., 1., 0.]));
}

#[test]
fn huge_coefficients() {
    // The weights of the combination overflow, the bounds on x don't
    assert_eq!(decide("2 1\n0\n1 1\n1e200\n-1e200\n"), Certificate::Feasible(vec![0.]));
}

#[test]
fn triangle() {
    // x - y <= -1, y - z <= -1, z - x <= -1 sums to 0 <= -3
    let text = "3 3\n0 0 0\n-1 -1 -1\n1 -1 0\n0 1 -1\n-1 0 1\n";
    for prune in [false, true] {
        let program = parse::<f64>(text).unwrap();
        let certificate = program.decide_feasibility(&Config { prune }).unwrap();
        assert_eq!(certificate, Certificate::Infeasible(vec![1., 1., 1.]));
    }
}

#[test]
fn repeated_runs() {
    let program = parse::<f64>("3 3\n0 0 0\n4 1 -2\n1 1 1\n-1 1 0\n0 -1 1\n").unwrap();

    let first = solve(&program, &Config::default()).unwrap();
    let second = solve(&program, &Config::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(verify(&program, &first), Ok(()));
    assert_eq!(verify(&program, &second), Ok(()));
}

#[test]
fn other_relations() {
    let mut program = LinearProgram::new(2);
    program.add_constraint(Constraint::new(vec![1., 1.], Equal, 2.)).unwrap();
    program.add_constraint(Constraint::new(vec![1., 0.], Greater, 3.)).unwrap();
    program.add_constraint(Constraint::new(vec![0., 1.], Greater, 0.)).unwrap();

    let error = program.decide_feasibility(&Config::default()).unwrap_err();
    assert_eq!(error, Error::UnsupportedRelation { index: 0, relation: Equal });
    assert_eq!(error.kind(), ErrorKind::User);

    // x + y = 2 with x >= 3 forces y < 0
    let standardized = program.standardized();
    assert_eq!(standardized.constraint_type_counts()[Less], 4);
    let certificate = standardized.decide_feasibility(&Config::default()).unwrap();
    assert!(!certificate.is_feasible());
}
