//! # Backend contract
//!
//! The calls an external floating point LP solver has to offer to be driven by the adapter. Each
//! solve acquires an environment and a problem handle, both are released when they're dropped,
//! also when the solve bails out early.
use crate::config::{BackendKind, SolverConfig};
use crate::data::linear_program::elements::{BoundType, Objective, Status};
use crate::error::Result;

/// A variable as handed to a backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub bounds: BoundType<f64>,
    pub cost: f64,
}

/// An external solver.
pub trait Backend {
    /// State shared by all problems of a backend, held for the duration of a solve.
    type Environment;
    /// Handle to a single problem.
    type Problem: BackendProblem;

    fn kind() -> BackendKind;

    /// Acquire the environment.
    ///
    /// # Errors
    ///
    /// `Backend` if the solver can't be initialized.
    fn environment() -> Result<Self::Environment>;

    /// Create an empty problem.
    ///
    /// # Errors
    ///
    /// `Backend` if the solver can't allocate a problem.
    fn create_problem(environment: &Self::Environment) -> Result<Self::Problem>;
}

/// A problem inside a backend.
///
/// The adapter calls these methods in declaration order, every one of them once.
pub trait BackendProblem {
    fn set_direction(&mut self, objective: Objective);

    /// Add columns, the first one gets index zero.
    fn add_columns(&mut self, columns: &[Column]);

    /// Add rows, the first one gets index zero.
    fn add_rows(&mut self, rows: &[BoundType<f64>]);

    /// Load the nonzero constraint coefficients as `(row, column, value)`.
    fn load_matrix(&mut self, entries: &[(usize, usize, f64)]);

    /// # Errors
    ///
    /// `UnsupportedOperation` if the backend can't honor the configuration.
    fn configure(&mut self, config: &SolverConfig) -> Result<()>;

    /// Solve the problem.
    ///
    /// # Errors
    ///
    /// `Backend` if the solver failed in a way that is not one of the statuses.
    fn run(&mut self) -> Result<()>;

    /// Outcome of `run`.
    ///
    /// # Errors
    ///
    /// `Backend` if the backend is in a state that doesn't correspond to any status.
    fn status(&self) -> Result<Status>;

    /// Value of a column at the optimum.
    fn primal_value(&self, column: usize) -> Option<f64>;
}
