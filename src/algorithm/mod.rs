//! # Algorithms
//!
//! Strategies that solve a `LinearProgram`. Which one is used follows from the element type of the
//! program, see `LpNumber::Strategy`.
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::error::Result;

pub mod two_phase;
pub mod external;

/// A way of solving linear programs over elements of type `F`.
pub trait SolveStrategy<F> {
    /// Solve a linear program.
    ///
    /// The problem itself is not changed, the solution is expressed in its variables.
    ///
    /// # Errors
    ///
    /// Only when the problem can't be handed to the underlying solver, or that solver misbehaves.
    /// Infeasibility and unboundedness are reported through the status of the solution.
    fn solve(&self, program: &LinearProgram<F>) -> Result<Solution<F>>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Vec<F>),
    Unbounded,
}
