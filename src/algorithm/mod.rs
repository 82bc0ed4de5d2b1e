//! # Algorithms
use crate::algorithm::error::Error;
use crate::algorithm::fourier_motzkin::Config;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::Certificate;
use crate::data::number_types::traits::Real;

pub mod error;
pub mod fourier_motzkin;
pub mod verify;

/// A problem of which it can be decided whether it has a solution.
pub trait DecideFeasibility<F> {
    /// Decide feasibility and prove the answer.
    ///
    /// # Return value
    ///
    /// A certificate that has been checked against `self`.
    ///
    /// # Errors
    ///
    /// If the problem can't be handled, or if the computed certificate doesn't verify. The latter
    /// is reported as an internal error.
    fn decide_feasibility(&self, config: &Config) -> Result<Certificate<F>, Error>;
}

impl<F: Real> DecideFeasibility<F> for LinearProgram<F> {
    fn decide_feasibility(&self, config: &Config) -> Result<Certificate<F>, Error> {
        let certificate = fourier_motzkin::solve(self, config)?;
        verify::verify(self, &certificate)?;

        Ok(certificate)
    }
}
