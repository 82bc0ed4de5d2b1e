//! # Reading and writing of linear programs
//!
//! This module provides read and write functionality for the plain text format described in
//! `text`.
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use crate::data::linear_program::LinearProgram;
use crate::data::number_types::traits::Real;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

pub use text::{export, parse};

/// Import a problem from a file.
///
/// # Errors
///
/// When the file cannot be found or read, or when its contents are not a valid program.
pub fn import<F: Real + FromStr>(file_path: &Path) -> Result<LinearProgram<F>, ImportError> {
    let program = read_to_string(file_path)?;

    Ok(parse(&program)?)
}
