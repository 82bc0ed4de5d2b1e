//! # Plain text format
//!
//! A program of `<=` constraints written as whitespace separated numbers:
//!
//! ```text
//! <number of constraints> <number of variables>
//! <objective coefficients, one per variable>
//! <right-hand sides, one per constraint>
//! <coefficients of the first constraint, one per variable>
//! ...
//! <coefficients of the last constraint, one per variable>
//! ```
//!
//! Line breaks are not significant while reading, but they are used for error messages and when
//! writing.
use std::str::FromStr;
use std::vec::IntoIter;

use itertools::Itertools;

use crate::algorithm::error::Error;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::constraint::Constraint;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::number_types::traits::Real;
use crate::io::error::{FileLocation, ParseError, ParseResult};

/// Parse a program in the plain text format.
///
/// All constraints are of type `<=`.
///
/// # Errors
///
/// If a number is missing or can't be read, if a number is not finite, or if there is anything
/// after the last constraint.
pub fn parse<F: Real + FromStr>(program_string: &str) -> ParseResult<LinearProgram<F>> {
    let mut tokens = Tokens::new(program_string);

    let nr_constraints = tokens.next_count("number of constraints")?;
    let nr_variables = tokens.next_count("number of variables")?;

    let objective = (0..nr_variables)
        .map(|j| tokens.next_number(&format!("coefficient of variable {} in the objective function", j + 1)))
        .collect::<ParseResult<Vec<F>>>()
        .map_err(|error| ParseError::with_cause("Cannot read objective function.", error))?;

    let values = (0..nr_constraints)
        .map(|i| tokens.next_number(&format!("right-hand side of constraint {}", i + 1)))
        .collect::<ParseResult<Vec<F>>>()
        .map_err(|error| ParseError::with_cause("Cannot read constraint upper-bounds.", error))?;

    let mut program = LinearProgram::with_objective(objective);
    for (i, value) in values.into_iter().enumerate() {
        let linear_combination = (0..nr_variables)
            .map(|j| tokens.next_number(&format!("coefficient of variable {} in constraint {}", j + 1, i + 1)))
            .collect::<ParseResult<Vec<F>>>()
            .map_err(|error| ParseError::with_cause(format!("Cannot read constraint {}.", i + 1), error))?;

        program.add_constraint(Constraint::new(linear_combination, ConstraintType::Less, value))
            .map_err(|error| ParseError::new(error.to_string()))?;
    }

    if let Some((location, token)) = tokens.pop() {
        return Err(ParseError::with_file_location(
            format!("File parsed successfully, but found unexpected value \"{}\" at the end", token),
            location,
        ));
    }

    Ok(program)
}

/// Write a program in the plain text format.
///
/// A missing objective function is written as all zeros.
///
/// # Errors
///
/// If the program contains a constraint that is not of type `<=`.
pub fn export<F: Real>(program: &LinearProgram<F>) -> Result<String, Error> {
    if let Some(index) = program.constraints().iter().position(|constraint| constraint.relation() != ConstraintType::Less) {
        return Err(Error::UnsupportedRelation { index, relation: program.constraints()[index].relation() });
    }

    let mut lines = Vec::with_capacity(3 + program.nr_constraints());
    lines.push(format!("{} {}", program.nr_constraints(), program.nr_variables()));
    lines.push(match program.objective() {
        Some(objective) => objective.iter().join(" "),
        None => vec!["0"; program.nr_variables()].join(" "),
    });
    lines.push(program.constraints().iter().map(|constraint| constraint.value()).join(" "));
    for constraint in program.constraints() {
        lines.push(constraint.linear_combination().iter().join(" "));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

/// All whitespace separated values in a text, together with their location.
struct Tokens<'a> {
    tokens: IntoIter<(FileLocation<'a>, &'a str)>,
    nr_lines: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let tokens = text.lines()
            .enumerate()
            .map(|(number, line)| (number + 1, line)) // Count from 1
            .flat_map(|location| location.1.split_whitespace().map(move |token| (location, token)))
            .collect::<Vec<_>>();

        Self {
            tokens: tokens.into_iter(),
            nr_lines: text.lines().count(),
        }
    }

    fn pop(&mut self) -> Option<(FileLocation<'a>, &'a str)> {
        self.tokens.next()
    }

    fn next_token(&mut self, description: &str) -> ParseResult<(FileLocation<'a>, &'a str)> {
        let nr_lines = self.nr_lines;
        self.pop().ok_or_else(|| {
            ParseError::new(format!("Reached the end of the file (line {}) while looking for the {}", nr_lines, description))
        })
    }

    fn next_count(&mut self, description: &str) -> ParseResult<usize> {
        let (location, token) = self.next_token(description)?;
        token.parse().map_err(|_| {
            ParseError::with_file_location(format!("Could not parse \"{}\" as the {}", token, description), location)
        })
    }

    fn next_number<F: Real + FromStr>(&mut self, description: &str) -> ParseResult<F> {
        let (location, token) = self.next_token(description)?;
        let value = token.parse::<F>().map_err(|_| {
            ParseError::with_file_location(format!("Could not parse \"{}\" as the {}", token, description), location)
        })?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ParseError::with_file_location(format!("The {} is not finite: \"{}\"", description, token), location))
        }
    }
}
