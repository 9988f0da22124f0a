//! # External solvers
//!
//! Linear programs over floating point numbers are solved by an external backend. The adapter
//! translates a `LinearProgram` into the calls of the `Backend` contract, optionally simplifies it
//! first, and normalizes the outcome into a `Status`.
use log::{debug, warn};

use crate::algorithm::SolveStrategy;
use crate::algorithm::external::backend::{Backend, BackendProblem, Column};
use crate::algorithm::external::minilp::MiniLp;
use crate::config::{BackendKind, SolverConfig, Verbosity};
use crate::data::linear_program::elements::{BoundType, Objective, Status};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::{LpNumber, NumberKind};
use crate::error::{LpError, Result};

pub mod backend;
pub mod presolve;
pub mod minilp;
#[cfg(feature = "clarabel")]
pub mod clarabel;

/// Absolute tolerance used when the adapter decides feasibility itself.
pub(crate) const TOLERANCE: f64 = 1e-9;

/// Solves linear programs with an external floating point backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalSolverAdapter {
    config: SolverConfig,
}

impl ExternalSolverAdapter {
    /// # Errors
    ///
    /// `UnsupportedOperation` if the configuration isn't a valid floating point configuration.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate(NumberKind::Floating)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve the program with the configured backend.
    ///
    /// # Return value
    ///
    /// The status and, if optimal, the value of each column.
    fn solve_float(&self, mut program: FloatProgram) -> Result<(Status, Vec<f64>)> {
        let nr_columns = program.columns.len();

        if let Err(status) = presolve::remove_empty_rows(&mut program) {
            return Ok((status, Vec::new()));
        }
        if self.config.presolve {
            if let Err(status) = presolve::presolve(&mut program) {
                debug!("presolve decided the problem: {status}");
                return Ok((status, Vec::new()));
            }
        }
        if program.rows.is_empty() {
            debug!("no rows left, variables are set to their best bound");
            return Ok(presolve::solve_without_rows(&program));
        }

        let (status, values) = match self.config.backend {
            BackendKind::MiniLp => run::<MiniLp>(&program, &self.config)?,
            #[cfg(feature = "clarabel")]
            BackendKind::Clarabel => run::<clarabel::Clarabel>(&program, &self.config)?,
            other => return Err(LpError::UnsupportedOperation(format!(
                "backend {other:?} is not an external floating point backend",
            ))),
        };
        debug_assert!(status != Status::Optimal || values.len() == nr_columns);

        self.report(status);
        Ok((status, values))
    }

    fn report(&self, status: Status) {
        match (status, self.config.verbosity) {
            (Status::Error, verbosity) if verbosity >= Verbosity::Error => {
                warn!("backend {:?} stopped without a conclusion", self.config.backend);
            },
            (status, verbosity) if verbosity >= Verbosity::On => {
                debug!("backend {:?} finished: {status}", self.config.backend);
            },
            _ => {},
        }
    }
}

impl<F: LpNumber> SolveStrategy<F> for ExternalSolverAdapter {
    fn solve(&self, program: &LinearProgram<F>) -> Result<Solution<F>> {
        if F::KIND == NumberKind::Exact {
            return Err(LpError::UnsupportedOperation(
                "exact element types can't be solved by a floating point backend".to_string(),
            ));
        }

        let (status, values) = self.solve_float(FloatProgram::from_program(program)?)?;
        if status != Status::Optimal {
            return Ok(Solution::without_optimum(status));
        }

        let values = values.into_iter()
            .map(|value| F::from_backend(value).ok_or_else(|| LpError::Backend(format!(
                "value {value} can't be represented",
            ))))
            .collect::<Result<Vec<_>>>()?;
        let objective = program.evaluate_objective(&values)?;

        Ok(Solution::optimal(values, objective))
    }
}

/// Drive a backend through a full solve.
///
/// The problem handle and the environment are dropped on every path out of this function.
fn run<B: Backend>(program: &FloatProgram, config: &SolverConfig) -> Result<(Status, Vec<f64>)> {
    debug!(
        "running {:?} on {} columns and {} rows", B::kind(), program.columns.len(), program.rows.len(),
    );

    let environment = B::environment()?;
    let mut problem = B::create_problem(&environment)?;

    problem.set_direction(program.objective);
    let columns = program.columns.iter()
        .map(|column| Column {
            bounds: BoundType::classify(&column.lower_bound, &column.upper_bound),
            cost: column.cost,
        })
        .collect::<Vec<_>>();
    problem.add_columns(&columns);
    let rows = program.rows.iter()
        .map(|row| BoundType::classify(&row.lower_bound, &row.upper_bound))
        .collect::<Vec<_>>();
    problem.add_rows(&rows);
    problem.load_matrix(&program.entries());
    problem.configure(config)?;
    problem.run()?;

    let status = problem.status()?;
    if status != Status::Optimal {
        return Ok((status, Vec::new()));
    }

    let values = (0..program.columns.len())
        .map(|column| problem.primal_value(column).ok_or_else(|| LpError::Backend(format!(
            "no value for column {column} at the optimum",
        ))))
        .collect::<Result<Vec<_>>>()?;
    if values.iter().any(|value| !value.is_finite()) {
        debug!("{:?} reported an optimum with infinite values", B::kind());
        return Ok((Status::Unbounded, Vec::new()));
    }

    Ok((status, values))
}

/// A variable in floating point.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FloatColumn {
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub cost: f64,
}

/// A constraint in floating point, with its nonzero coefficients as `(column, value)`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FloatRow {
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub coefficients: Vec<(usize, f64)>,
}

/// The problem as it is handed to a backend.
///
/// Rows may be removed, columns never are: column `j` is always variable `j` of the original
/// problem.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FloatProgram {
    pub objective: Objective,
    pub columns: Vec<FloatColumn>,
    pub rows: Vec<FloatRow>,
}

impl FloatProgram {
    /// # Errors
    ///
    /// `UnsupportedOperation` if a value can't be converted to a float.
    pub fn from_program<F: LpNumber>(program: &LinearProgram<F>) -> Result<Self> {
        let columns = program.variables.iter()
            .map(|variable| Ok(FloatColumn {
                lower_bound: convert_bound(&variable.lower_bound)?,
                upper_bound: convert_bound(&variable.upper_bound)?,
                cost: convert(&variable.cost)?,
            }))
            .collect::<Result<Vec<_>>>()?;
        let rows = program.constraints.iter().enumerate()
            .map(|(row, constraint)| Ok(FloatRow {
                lower_bound: convert_bound(&constraint.lower_bound)?,
                upper_bound: convert_bound(&constraint.upper_bound)?,
                coefficients: program.coefficients().row(row)
                    .map(|(column, value)| Ok((column, convert(value)?)))
                    .collect::<Result<Vec<_>>>()?,
            }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { objective: program.objective_direction(), columns, rows })
    }

    /// All nonzero coefficients as `(row, column, value)`, row major.
    pub fn entries(&self) -> Vec<(usize, usize, f64)> {
        self.rows.iter().enumerate()
            .flat_map(|(i, row)| row.coefficients.iter().map(move |&(j, value)| (i, j, value)))
            .collect()
    }
}

fn convert<F: LpNumber>(value: &F) -> Result<f64> {
    value.to_backend().ok_or_else(|| LpError::UnsupportedOperation(format!(
        "value {value} has no floating point representation",
    )))
}

fn convert_bound<F: LpNumber>(bound: &Option<F>) -> Result<Option<f64>> {
    bound.as_ref().map(convert).transpose()
}
