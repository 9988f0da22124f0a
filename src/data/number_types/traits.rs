//! # Traits
//!
//! A small hierarchy of number types. `Field` collects the arithmetic that data structures and
//! transformations need, `Exact` marks the types for which comparisons can be trusted, and
//! `LpNumber` ties an element type to the strategy that solves programs over it.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::algorithm::SolveStrategy;
use crate::config::SolverConfig;
use crate::error::Result;

/// Basic field operations.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    PartialEq +
    PartialOrd +
    Zero +
    One +
    Neg<Output=Self> +
    Add<Output=Self> +
    AddAssign +
    Sub<Output=Self> +
    SubAssign +
    Mul<Output=Self> +
    MulAssign +
    Div<Output=Self> +
    DivAssign +
    Clone +
    Display +
    Debug
{
}

impl<T> Field for T
where
    T: PartialEq + PartialOrd + Zero + One + Neg<Output=T>
        + Add<Output=T> + AddAssign + Sub<Output=T> + SubAssign
        + Mul<Output=T> + MulAssign + Div<Output=T> + DivAssign
        + Clone + Display + Debug,
{
}

/// A field in which every comparison is exact.
///
/// The simplex method in `algorithm::two_phase` compares against zero without any tolerance and
/// is only correct for these types.
pub trait Exact: Field + Eq + Ord {
}

/// Whether a number type represents its values exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Rationals.
    Exact,
    /// Floating point numbers.
    Floating,
}

/// Element type of a `LinearProgram`.
///
/// Selects, per element type, the strategy that solves linear programs over it.
pub trait LpNumber: Field {
    /// Kind of this number type.
    const KIND: NumberKind;

    /// Solving strategy for programs over this type.
    type Strategy: SolveStrategy<Self>;

    /// Create the strategy for a configuration.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` if the configuration can't be used with this number type.
    fn strategy(config: &SolverConfig) -> Result<Self::Strategy>;

    /// Configuration used when the caller doesn't provide one.
    fn default_config() -> SolverConfig;

    /// Whether the value represents positive or negative infinity.
    fn is_infinite(&self) -> bool {
        false
    }

    /// Value as handed to a floating point backend.
    ///
    /// `None` for types that should not be converted.
    fn to_backend(&self) -> Option<f64>;

    /// Value read back from a floating point backend.
    fn from_backend(value: f64) -> Option<Self>;
}
