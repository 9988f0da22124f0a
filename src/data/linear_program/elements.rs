//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Neg;

use num_traits::One;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LpError;

/// Sense of a row in the dense matrix representation.
///
/// `Less` and `Greater` are not strict, they read as `<=` and `>=`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintType {
    #[default]
    Less,
    Equal,
    Greater,
}

impl ConstraintType {
    /// The symbol used for this sense in the dense matrix interface.
    pub fn symbol(self) -> char {
        match self {
            ConstraintType::Less => '<',
            ConstraintType::Equal => '=',
            ConstraintType::Greater => '>',
        }
    }
}

impl TryFrom<char> for ConstraintType {
    type Error = LpError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '<' => Ok(ConstraintType::Less),
            '=' => Ok(ConstraintType::Equal),
            '>' => Ok(ConstraintType::Greater),
            other => Err(LpError::InvalidSense(other)),
        }
    }
}

/// Direction of a bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// `x >= b`
    Lower,
    /// `x <= b`
    Upper,
}

impl BoundDirection {
    /// Convert a bound direction into a positive or negative one.
    ///
    /// Upper bounds needs positive slacks, lower bounds need negative slacks.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            BoundDirection::Lower => -F::one(),
            BoundDirection::Upper => F::one(),
        }
    }
}

/// Classification of the bounds of a variable or constraint.
///
/// The same classification is used for columns and rows when talking to a backend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundType<F> {
    /// Neither bound is finite.
    Free,
    /// Only the upper bound is finite.
    Upper(F),
    /// Only the lower bound is finite.
    Lower(F),
    /// Both bounds are finite and equal.
    Fixed(F),
    /// Both bounds are finite and different.
    Double(F, F),
}

impl<F: Clone + PartialEq> BoundType<F> {
    /// Classify a pair of bounds, `None` meaning infinite.
    pub fn classify(lower: &Option<F>, upper: &Option<F>) -> Self {
        match (lower, upper) {
            (None, None) => BoundType::Free,
            (None, Some(upper)) => BoundType::Upper(upper.clone()),
            (Some(lower), None) => BoundType::Lower(lower.clone()),
            (Some(lower), Some(upper)) if lower == upper => BoundType::Fixed(lower.clone()),
            (Some(lower), Some(upper)) => BoundType::Double(lower.clone(), upper.clone()),
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

/// Outcome of a solve.
///
/// All five outcomes stay distinguishable, whatever backend produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// A finite optimum was found.
    Optimal,
    /// There is no point satisfying all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// Either infeasible or unbounded, the method used can't tell which.
    InfeasibleOrUnbounded,
    /// The backend stopped without reaching one of the above conclusions.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::InfeasibleOrUnbounded => "infeasible or unbounded",
            Status::Error => "error",
        };
        f.write_str(text)
    }
}
