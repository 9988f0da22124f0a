//! # The `minilp` backend
//!
//! A pure Rust simplex solver. It first restores primal feasibility with the dual simplex method
//! and then optimizes with the primal simplex method, so it only offers
//! `Method::SimplexDualPrimal`.
//!
//! The problem is buffered and only built inside `minilp` when it is run.
use ::minilp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use crate::algorithm::external::backend::{Backend, BackendProblem, Column};
use crate::config::{BackendKind, Method, SolverConfig};
use crate::data::linear_program::elements::{BoundType, Objective, Status};
use crate::error::{LpError, Result};

/// The `minilp` backend.
pub struct MiniLp;

impl Backend for MiniLp {
    type Environment = ();
    type Problem = MiniLpProblem;

    fn kind() -> BackendKind {
        BackendKind::MiniLp
    }

    fn environment() -> Result<Self::Environment> {
        Ok(())
    }

    fn create_problem(_environment: &Self::Environment) -> Result<Self::Problem> {
        Ok(MiniLpProblem::default())
    }
}

/// Outcome of a `minilp` run.
#[derive(Debug)]
enum Outcome {
    Solved(Vec<f64>),
    Failed(::minilp::Error),
}

/// A buffered `minilp` problem.
#[derive(Debug, Default)]
pub struct MiniLpProblem {
    maximize: bool,
    columns: Vec<Column>,
    rows: Vec<BoundType<f64>>,
    /// Per row the `(column, value)` coefficients.
    coefficients: Vec<Vec<(usize, f64)>>,
    outcome: Option<Outcome>,
}

impl BackendProblem for MiniLpProblem {
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
        // Presolving is done by the adapter, verbosity is the `log` level of `minilp` itself
        match config.method {
            Method::SimplexDualPrimal => Ok(()),
            other => Err(LpError::UnsupportedOperation(format!("minilp doesn't implement {other:?}"))),
        }
    }

    fn run(&mut self) -> Result<()> {
        let direction = if self.maximize {
            OptimizationDirection::Maximize
        } else {
            OptimizationDirection::Minimize
        };
        let mut problem = Problem::new(direction);

        let variables = self.columns.iter()
            .map(|column| {
                let (lower, upper) = bound_values(&column.bounds);
                problem.add_var(column.cost, (lower, upper))
            })
            .collect::<Vec<_>>();

        for (bounds, coefficients) in self.rows.iter().zip(&self.coefficients) {
            let expression = coefficients.iter()
                .map(|&(column, value)| (variables[column], value))
                .collect::<Vec<_>>();
            let expression = expression.as_slice();
            match *bounds {
                BoundType::Free => {},
                BoundType::Upper(upper) => problem.add_constraint(expression, ComparisonOp::Le, upper),
                BoundType::Lower(lower) => problem.add_constraint(expression, ComparisonOp::Ge, lower),
                BoundType::Fixed(value) => problem.add_constraint(expression, ComparisonOp::Eq, value),
                BoundType::Double(lower, upper) => {
                    problem.add_constraint(expression, ComparisonOp::Ge, lower);
                    problem.add_constraint(expression, ComparisonOp::Le, upper);
                },
            }
        }

        self.outcome = Some(match problem.solve() {
            Ok(solution) => Outcome::Solved(variables.iter().map(|&variable: &Variable| solution[variable]).collect()),
            Err(error) => Outcome::Failed(error),
        });
        Ok(())
    }

    #[allow(unreachable_patterns)]
    fn status(&self) -> Result<Status> {
        match &self.outcome {
            // Some unbounded problems are "solved" with infinite values
            Some(Outcome::Solved(values)) if values.iter().any(|value| !value.is_finite()) => {
                Ok(Status::Unbounded)
            },
            Some(Outcome::Solved(_)) => Ok(Status::Optimal),
            Some(Outcome::Failed(::minilp::Error::Infeasible)) => Ok(Status::Infeasible),
            Some(Outcome::Failed(::minilp::Error::Unbounded)) => Ok(Status::Unbounded),
            Some(Outcome::Failed(other)) => Err(LpError::Backend(format!("minilp: {other}"))),
            None => Err(LpError::Backend("minilp problem was not run".to_string())),
        }
    }

    fn primal_value(&self, column: usize) -> Option<f64> {
        match &self.outcome {
            Some(Outcome::Solved(values)) => values.get(column).copied().filter(|value| value.is_finite()),
            _ => None,
        }
    }
}

/// Bounds in the form `minilp` expects them, with infinities for missing bounds.
fn bound_values(bounds: &BoundType<f64>) -> (f64, f64) {
    match *bounds {
        BoundType::Free => (f64::NEG_INFINITY, f64::INFINITY),
        BoundType::Upper(upper) => (f64::NEG_INFINITY, upper),
        BoundType::Lower(lower) => (lower, f64::INFINITY),
        BoundType::Fixed(value) => (value, value),
        BoundType::Double(lower, upper) => (lower, upper),
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::external::backend::{Backend, BackendProblem, Column};
    use crate::algorithm::external::minilp::MiniLp;
    use crate::config::{Method, SolverConfig};
    use crate::data::linear_program::elements::{BoundType, Objective, Status};
    use crate::error::LpError;

    /// Two nonnegative columns with costs 0.6 and 0.5 in the rows `x + 2y` and `3x + y`.
    fn build(rows: &[BoundType<f64>], direction: Objective) -> <MiniLp as Backend>::Problem {
        let mut problem = MiniLp::create_problem(&()).unwrap();
        problem.set_direction(direction);
        problem.add_columns(&[
            Column { bounds: BoundType::Lower(0_f64), cost: 0.6 },
            Column { bounds: BoundType::Lower(0_f64), cost: 0.5 },
        ]);
        problem.add_rows(rows);
        problem.load_matrix(&[(0, 0, 1_f64), (0, 1, 2_f64), (1, 0, 3_f64), (1, 1, 1_f64)]);
        problem.configure(&SolverConfig::floating()).unwrap();
        problem
    }

    #[test]
    fn optimal() {
        let mut problem = build(&[BoundType::Upper(1_f64), BoundType::Upper(2_f64)], Objective::Maximize);
        problem.run().unwrap();
        assert_eq!(problem.status(), Ok(Status::Optimal));
        assert_abs_diff_eq!(problem.primal_value(0).unwrap(), 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(problem.primal_value(1).unwrap(), 0.2, epsilon = 1e-9);
        assert_eq!(problem.primal_value(2), None);
    }

    #[test]
    fn infeasible_and_unbounded() {
        let mut problem = build(&[BoundType::Upper(-1_f64), BoundType::Free], Objective::Maximize);
        problem.run().unwrap();
        assert_eq!(problem.status(), Ok(Status::Infeasible));
        assert_eq!(problem.primal_value(0), None);

        let mut problem = build(&[BoundType::Lower(1_f64), BoundType::Lower(1_f64)], Objective::Maximize);
        problem.run().unwrap();
        assert_eq!(problem.status(), Ok(Status::Unbounded));

        assert_eq!(problem.primal_value(0), None);

        let mut problem = build(&[BoundType::Lower(1_f64), BoundType::Double(1_f64, 5_f64)], Objective::Minimize);
        problem.run().unwrap();
        assert_eq!(problem.status(), Ok(Status::Optimal));
    }

    #[test]
    fn infinite_values_are_unbounded() {
        // min -x with x >= 2 only
        let mut problem = MiniLp::create_problem(&()).unwrap();
        problem.set_direction(Objective::Minimize);
        problem.add_columns(&[Column { bounds: BoundType::Lower(0_f64), cost: -1_f64 }]);
        problem.add_rows(&[BoundType::Lower(2_f64)]);
        problem.load_matrix(&[(0, 0, 1_f64)]);
        problem.configure(&SolverConfig::floating()).unwrap();
        problem.run().unwrap();
        assert_eq!(problem.status(), Ok(Status::Unbounded));
        assert_eq!(problem.primal_value(0), None);
    }

    #[test]
    fn only_dual_primal() {
        let mut problem = MiniLp::create_problem(&()).unwrap();
        let config = SolverConfig::floating().with_method(Method::SimplexPrimal);
        assert!(matches!(problem.configure(&config), Err(LpError::UnsupportedOperation(_))));
        assert!(matches!(problem.status(), Err(LpError::Backend(_))));
    }
}
