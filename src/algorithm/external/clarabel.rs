//! # The `clarabel` backend
//!
//! An interior point solver for conic programs of the form
//!
//! ```text
//! min 1/2 x^T P x + q^T x, s.t. A x + s = b, s in K
//! ```
//!
//! A linear program uses `P = 0` and a cone `K` made of a zero cone for the equalities followed by
//! a nonnegative cone for the inequalities. Variable bounds become unit rows of `A`.
//!
//! The interior point method can't always distinguish infeasibility from unboundedness: a dual
//! infeasibility certificate is reported as `InfeasibleOrUnbounded`.
use ::clarabel::algebra::CscMatrix;
use ::clarabel::solver::{
    DefaultSettings, DefaultSettingsBuilder, DefaultSolver, IPSolver, SolverStatus, SupportedConeT,
};
use log::trace;

use crate::algorithm::external::backend::{Backend, BackendProblem, Column};
use crate::config::{BackendKind, Method, SolverConfig, Verbosity};
use crate::data::linear_program::elements::{BoundType, Objective, Status};
use crate::error::{LpError, Result};

/// The `clarabel` backend.
pub struct Clarabel;

impl Backend for Clarabel {
    type Environment = ();
    type Problem = ClarabelProblem;

    fn kind() -> BackendKind {
        BackendKind::Clarabel
    }

    fn environment() -> Result<Self::Environment> {
        Ok(())
    }

    fn create_problem(_environment: &Self::Environment) -> Result<Self::Problem> {
        Ok(ClarabelProblem::default())
    }
}

/// A buffered `clarabel` problem.
#[derive(Debug, Default)]
pub struct ClarabelProblem {
    maximize: bool,
    columns: Vec<Column>,
    rows: Vec<BoundType<f64>>,
    coefficients: Vec<Vec<(usize, f64)>>,
    verbose: bool,
    /// Status and primal values of the last run.
    outcome: Option<(SolverStatus, Vec<f64>)>,
}

/// A row `a x + s = b` of the conic problem.
struct ConeRow {
    coefficients: Vec<(usize, f64)>,
    rhs: f64,
}

impl ConeRow {
    fn at_most(coefficients: &[(usize, f64)], upper: f64) -> Self {
        Self { coefficients: coefficients.to_vec(), rhs: upper }
    }

    fn at_least(coefficients: &[(usize, f64)], lower: f64) -> Self {
        Self {
            coefficients: coefficients.iter().map(|&(column, value)| (column, -value)).collect(),
            rhs: -lower,
        }
    }
}

impl ClarabelProblem {
    /// Split all rows and bounds into equalities and inequalities, in that order.
    fn cone_rows(&self) -> (Vec<ConeRow>, Vec<ConeRow>) {
        let mut equalities = Vec::new();
        let mut inequalities = Vec::new();

        let mut add = |coefficients: &[(usize, f64)], bounds: &BoundType<f64>| match *bounds {
            BoundType::Free => {},
            BoundType::Upper(upper) => inequalities.push(ConeRow::at_most(coefficients, upper)),
            BoundType::Lower(lower) => inequalities.push(ConeRow::at_least(coefficients, lower)),
            BoundType::Fixed(value) => equalities.push(ConeRow::at_most(coefficients, value)),
            BoundType::Double(lower, upper) => {
                inequalities.push(ConeRow::at_least(coefficients, lower));
                inequalities.push(ConeRow::at_most(coefficients, upper));
            },
        };

        for (bounds, coefficients) in self.rows.iter().zip(&self.coefficients) {
            add(coefficients, bounds);
        }
        for (column, Column { bounds, .. }) in self.columns.iter().enumerate() {
            add(&[(column, 1_f64)], bounds);
        }

        (equalities, inequalities)
    }

    fn settings(&self) -> Result<DefaultSettings<f64>> {
        DefaultSettingsBuilder::<f64>::default()
            .verbose(self.verbose)
            .build()
            .map_err(|error| LpError::Backend(format!("clarabel settings: {error:?}")))
    }
}

impl BackendProblem for ClarabelProblem {
    fn set_direction(&mut self, objective: Objective) {
        self.maximize = objective == Objective::Maximize;
    }

    fn add_columns(&mut self, columns: &[Column]) {
        self.columns.extend_from_slice(columns);
    }

    fn add_rows(&mut self, rows: &[BoundType<f64>]) {
        self.rows.extend_from_slice(rows);
        self.coefficients.resize(self.rows.len(), Vec::new());
    }

    fn load_matrix(&mut self, entries: &[(usize, usize, f64)]) {
        for &(row, column, value) in entries {
            debug_assert!(row < self.rows.len() && column < self.columns.len());
            self.coefficients[row].push((column, value));
        }
    }

    fn configure(&mut self, config: &SolverConfig) -> Result<()> {
        if config.method != Method::Interior {
            return Err(LpError::UnsupportedOperation(format!("clarabel doesn't implement {:?}", config.method)));
        }
        self.verbose = config.verbosity >= Verbosity::On;
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        let nr_columns = self.columns.len();
        let (equalities, inequalities) = self.cone_rows();
        let (nr_equalities, nr_inequalities) = (equalities.len(), inequalities.len());
        trace!("clarabel problem with {nr_equalities} equalities and {nr_inequalities} inequalities");

        let mut triplets = equalities.iter().chain(&inequalities).enumerate()
            .flat_map(|(i, row)| row.coefficients.iter().map(move |&(j, value)| (j, i, value)))
            .filter(|&(_, _, value)| value != 0_f64)
            .collect::<Vec<_>>();
        triplets.sort_by_key(|&(column, row, _)| (column, row));

        let mut column_pointers = vec![0; nr_columns + 1];
        for &(column, _, _) in &triplets {
            column_pointers[column + 1] += 1;
        }
        for column in 0..nr_columns {
            column_pointers[column + 1] += column_pointers[column];
        }
        let a = CscMatrix::new(
            nr_equalities + nr_inequalities,
            nr_columns,
            column_pointers,
            triplets.iter().map(|&(_, row, _)| row).collect(),
            triplets.iter().map(|&(_, _, value)| value).collect(),
        );
        let b = equalities.iter().chain(&inequalities).map(|row| row.rhs).collect::<Vec<_>>();
        let p = CscMatrix::new(nr_columns, nr_columns, vec![0; nr_columns + 1], Vec::new(), Vec::new());
        let q = self.columns.iter()
            .map(|column| if self.maximize { -column.cost } else { column.cost })
            .collect::<Vec<_>>();

        let mut cones = Vec::new();
        if nr_equalities > 0 {
            cones.push(SupportedConeT::ZeroConeT(nr_equalities));
        }
        if nr_inequalities > 0 {
            cones.push(SupportedConeT::NonnegativeConeT(nr_inequalities));
        }

        let mut solver = DefaultSolver::new(&p, &q, &a, &b, &cones, self.settings()?);
        solver.solve();

        self.outcome = Some((solver.solution.status, solver.solution.x.clone()));
        Ok(())
    }

    fn status(&self) -> Result<Status> {
        match &self.outcome {
            Some((status, _)) => match status {
                SolverStatus::Solved => Ok(Status::Optimal),
                SolverStatus::PrimalInfeasible => Ok(Status::Infeasible),
                SolverStatus::DualInfeasible => Ok(Status::InfeasibleOrUnbounded),
                SolverStatus::Unsolved => Err(LpError::Backend("clarabel didn't start solving".to_string())),
                _ => Ok(Status::Error),
            },
            None => Err(LpError::Backend("clarabel problem was not run".to_string())),
        }
    }

    fn primal_value(&self, column: usize) -> Option<f64> {
        match &self.outcome {
            Some((SolverStatus::Solved, values)) => values.get(column).copied(),
            _ => None,
        }
    }
}
