//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;

use enum_map::Enum;

/// A `Constraint` is a type of (in)equality.
///
/// These are read "from linear combination to constraint value", so `Less` means `<a, x> <= b`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Multiplying both sides of a relation with a negative number.
///
/// Equality is unaffected, the inequalities swap direction.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of a bound.
///
/// Used when a constraint is read as a bound on a single variable, with the values of all other
/// variables fixed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, `x >= b`.
    Lower,
    /// In the case of a variable, `x <= b`.
    Upper,
}

impl Not for BoundDirection {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}
