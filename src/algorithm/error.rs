//! # Errors raised while deciding feasibility
//!
//! Two kinds of things can go wrong. The caller can hand the engine a problem it doesn't support,
//! or the engine can detect that one of its own invariants broke. The latter means that there is a
//! bug in this crate; it is never caused by the input alone.
use thiserror::Error;

use crate::data::linear_program::elements::ConstraintType;

/// Anything that prevents the engine from answering.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Only constraints of the form `<a, x> <= b` can be eliminated.
    ///
    /// Use `LinearProgram::standardized` to rewrite other relations first.
    #[error("constraint {index} has relation \"{relation}\", but only \"<=\" constraints can be eliminated")]
    UnsupportedRelation {
        /// Index of the offending constraint in the program handed to the engine.
        index: usize,
        #[allow(missing_docs)]
        relation: ConstraintType,
    },
    /// The engine detected an inconsistency in its own computations.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Who is to blame for an `Error`.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    User,
    Internal,
}

impl Error {
    /// Whether the error was caused by the input or by a bug.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedRelation { .. } => ErrorKind::User,
            Error::Invariant(_) => ErrorKind::Internal,
        }
    }
}

impl From<VerificationError> for Error {
    fn from(error: VerificationError) -> Self {
        Error::Invariant(InvariantViolation::Certificate(error))
    }
}

/// An internal consistency requirement that doesn't hold.
#[derive(Debug, Error, PartialEq)]
pub enum InvariantViolation {
    /// A constraint doesn't have one coefficient per variable of the program it is used in.
    #[error("constraint has {found} coefficients, expected {expected}")]
    DimensionMismatch {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// The bounds implied on an eliminated variable don't leave any room.
    ///
    /// Feasibility of the reduced program guarantees a nonempty interval, so this can only happen
    /// if the elimination or the extension of the assignment is wrong.
    #[error("no valid value for variable {variable} in [{lower}, {upper}]")]
    EmptyInterval {
        #[allow(missing_docs)]
        variable: usize,
        #[allow(missing_docs)]
        lower: f64,
        #[allow(missing_docs)]
        upper: f64,
    },
    /// A constraint was scaled by an infinite or NaN factor.
    #[error("can't scale a constraint by {factor}")]
    NonFiniteFactor {
        #[allow(missing_docs)]
        factor: f64,
    },
    /// Summing constraints of different relations doesn't give a valid constraint.
    #[error("can't add a \"{lhs}\" constraint to a \"{rhs}\" constraint")]
    IncompatibleRelations {
        #[allow(missing_docs)]
        lhs: ConstraintType,
        #[allow(missing_docs)]
        rhs: ConstraintType,
    },
    /// A negative weight would flip the direction of an inequality in a sum.
    #[error("can't add constraints with negative weight {weight}")]
    NegativeWeight {
        #[allow(missing_docs)]
        weight: f64,
    },
    /// The computed certificate doesn't prove what it claims to prove.
    #[error("certificate rejected: {0}")]
    Certificate(#[from] VerificationError),
}

/// Reasons for a certificate to be rejected by the verifier.
#[derive(Debug, Error, PartialEq)]
pub enum VerificationError {
    /// The certificate has the wrong number of entries.
    ///
    /// Assignments need one value per variable, multipliers one per constraint.
    #[error("certificate has {found} entries, expected {expected}")]
    WrongLength {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// The assignment doesn't satisfy a constraint.
    #[error("assignment violates constraint {constraint}")]
    Unsatisfied {
        #[allow(missing_docs)]
        constraint: usize,
    },
    /// Multipliers of a Farkas combination must be non-negative.
    #[error("multiplier {value} of constraint {constraint} is negative")]
    NegativeMultiplier {
        #[allow(missing_docs)]
        constraint: usize,
        #[allow(missing_docs)]
        value: f64,
    },
    /// The combination of the bounds should be strictly negative.
    #[error("weighted sum of the bounds is {sum}, which is not negative")]
    NonNegativeBoundSum {
        #[allow(missing_docs)]
        sum: f64,
    },
    /// The combination of the coefficients of a variable should vanish.
    #[error("weighted sum of the coefficients of variable {variable} is {sum}, not zero")]
    NonZeroCoefficientSum {
        #[allow(missing_docs)]
        variable: usize,
        #[allow(missing_docs)]
        sum: f64,
    },
}
