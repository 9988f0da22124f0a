//! # Linear programs in general form
//!
//! The model that callers build incrementally: variables and constraints with arbitrary (possibly
//! infinite) bounds, sparse coefficients and an objective direction. Solving dispatches on the
//! element type, see `LpNumber::Strategy`.
use log::debug;

use crate::algorithm::SolveStrategy;
use crate::config::SolverConfig;
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_program::elements::{ConstraintType, Objective, Status};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::LpNumber;
use crate::error::{LpError, Result};
use crate::io::mps;

/// A column of the linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<F> {
    /// `None` is negative infinity.
    pub lower_bound: Option<F>,
    /// `None` is positive infinity.
    pub upper_bound: Option<F>,
    /// Coefficient in the objective function.
    pub cost: F,
}

/// A row of the linear program, `lower_bound <= a x <= upper_bound`.
///
/// At least one of the bounds is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    /// `None` is negative infinity.
    pub lower_bound: Option<F>,
    /// `None` is positive infinity.
    pub upper_bound: Option<F>,
}

/// A linear program in general form.
///
/// Variables and constraints are identified by the dense index they got at creation.
#[derive(Clone, Debug)]
pub struct LinearProgram<F> {
    pub(crate) objective: Objective,
    /// Whether `from_matrix` creates nonnegative or free variables.
    pub(crate) non_negative: bool,
    config: SolverConfig,

    pub(crate) variables: Vec<Variable<F>>,
    pub(crate) constraints: Vec<Constraint<F>>,
    /// Indexed by (constraint, variable).
    pub(crate) coefficients: SparseMatrix<F>,

    /// Result of the last solve.
    solution: Option<Solution<F>>,
}

impl<F: LpNumber> Default for LinearProgram<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: LpNumber> LinearProgram<F> {
    /// Create an empty maximization problem, solved with the default configuration of `F`.
    pub fn new() -> Self {
        Self::empty(F::default_config())
    }

    /// Create an empty problem with an explicit configuration.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` if the configuration can't be used to solve problems over `F`.
    pub fn with_config(config: SolverConfig) -> Result<Self> {
        F::strategy(&config)?;
        Ok(Self::empty(config))
    }

    fn empty(config: SolverConfig) -> Self {
        Self {
            objective: Objective::default(),
            non_negative: true,
            config,
            variables: Vec::new(),
            constraints: Vec::new(),
            coefficients: SparseMatrix::new(),
            solution: None,
        }
    }

    /// Create a variable.
    ///
    /// # Arguments
    ///
    /// * `lower_bound`: `None` (or an infinite value) for negative infinity.
    /// * `upper_bound`: `None` (or an infinite value) for positive infinity.
    ///
    /// # Return value
    ///
    /// Index of the new variable.
    ///
    /// # Errors
    ///
    /// `InvalidBounds` if the lower bound exceeds the upper bound.
    pub fn make_var(&mut self, lower_bound: Option<F>, upper_bound: Option<F>) -> Result<usize> {
        let (lower_bound, upper_bound) = normalize_bounds(lower_bound, upper_bound)?;
        self.clear_solution();
        Ok(self.push_variable(lower_bound, upper_bound, F::zero()))
    }

    /// Create `count` variables with the same bounds.
    ///
    /// # Errors
    ///
    /// `InvalidBounds` if the lower bound exceeds the upper bound.
    pub fn make_vars(
        &mut self,
        count: usize,
        lower_bound: Option<F>,
        upper_bound: Option<F>,
    ) -> Result<Vec<usize>> {
        let (lower_bound, upper_bound) = normalize_bounds(lower_bound, upper_bound)?;
        self.clear_solution();
        Ok((0..count)
            .map(|_| self.push_variable(lower_bound.clone(), upper_bound.clone(), F::zero()))
            .collect())
    }

    /// Create a `rows` by `columns` grid of variables with the same bounds, row by row.
    ///
    /// # Errors
    ///
    /// `InvalidBounds` if the lower bound exceeds the upper bound.
    pub fn make_var_grid(
        &mut self,
        rows: usize,
        columns: usize,
        lower_bound: Option<F>,
        upper_bound: Option<F>,
    ) -> Result<Vec<Vec<usize>>> {
        (0..rows)
            .map(|_| self.make_vars(columns, lower_bound.clone(), upper_bound.clone()))
            .collect()
    }

    /// Create a constraint `lower_bound <= a x <= upper_bound`, with `a` zero until coefficients are
    /// set.
    ///
    /// # Return value
    ///
    /// Index of the new constraint.
    ///
    /// # Errors
    ///
    /// `InvalidConstraint` if neither bound is finite, `InvalidBounds` if the lower bound exceeds
    /// the upper bound.
    pub fn make_con(&mut self, lower_bound: Option<F>, upper_bound: Option<F>) -> Result<usize> {
        let (lower_bound, upper_bound) = normalize_bounds(lower_bound, upper_bound)?;
        if lower_bound.is_none() && upper_bound.is_none() {
            return Err(LpError::InvalidConstraint);
        }

        self.clear_solution();
        Ok(self.push_constraint(lower_bound, upper_bound))
    }

    /// Set the objective coefficient of a variable.
    ///
    /// Like every change to the problem, this discards the last solution.
    ///
    /// # Arguments
    ///
    /// * `accumulate`: Add to the current coefficient instead of overwriting it.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the variable doesn't exist.
    pub fn set_obj_coeff(&mut self, variable: usize, value: F, accumulate: bool) -> Result<()> {
        self.check_variable(variable)?;
        self.clear_solution();

        let cost = &mut self.variables[variable].cost;
        if accumulate {
            *cost += value;
        } else {
            *cost = value;
        }
        Ok(())
    }

    /// Set the coefficient of a variable in a constraint.
    ///
    /// A coefficient that becomes zero is removed.
    ///
    /// # Arguments
    ///
    /// * `accumulate`: Add to the current coefficient instead of overwriting it.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the constraint or the variable doesn't exist.
    pub fn set_con_coeff(
        &mut self,
        constraint: usize,
        variable: usize,
        value: F,
        accumulate: bool,
    ) -> Result<()> {
        self.check_constraint(constraint)?;
        self.check_variable(variable)?;
        self.clear_solution();

        if accumulate {
            self.coefficients.add(constraint, variable, value);
        } else {
            self.coefficients.set(constraint, variable, value);
        }
        Ok(())
    }

    /// Replace the whole problem by `max/min c x` subject to `A x (sense) b`.
    ///
    /// Variables are nonnegative when the nonnegativity flag is set and free otherwise. A failing
    /// call leaves the problem untouched.
    ///
    /// # Arguments
    ///
    /// * `a`: Row major constraint matrix, one row per entry of `b`, one column per entry of `c`.
    /// * `b`: Right-hand side.
    /// * `c`: Objective coefficients.
    /// * `sense`: Either empty, in which case all rows are `<=`, or one sense per row.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the dimensions don't match, `InvalidConstraint` if a right-hand side is
    /// infinite.
    pub fn from_matrix(
        &mut self,
        a: &[Vec<F>],
        b: &[F],
        c: &[F],
        sense: &[ConstraintType],
    ) -> Result<()> {
        if a.len() != b.len() {
            return Err(LpError::InvalidSize(format!(
                "{} matrix rows but {} right-hand side values", a.len(), b.len(),
            )));
        }
        if let Some((row, values)) = a.iter().enumerate().find(|(_, row)| row.len() != c.len()) {
            return Err(LpError::InvalidSize(format!(
                "matrix row {} has {} values but there are {} objective coefficients",
                row, values.len(), c.len(),
            )));
        }
        if !sense.is_empty() && sense.len() != b.len() {
            return Err(LpError::InvalidSize(format!(
                "{} constraint senses for {} rows", sense.len(), b.len(),
            )));
        }

        let mut rebuilt = Self::empty(self.config);
        rebuilt.objective = self.objective;
        rebuilt.non_negative = self.non_negative;

        let lower_bound = if self.non_negative { Some(F::zero()) } else { None };
        for cost in c {
            rebuilt.push_variable(lower_bound.clone(), None, cost.clone());
        }
        for (row, rhs) in b.iter().enumerate() {
            let (lower, upper) = match sense.get(row).copied().unwrap_or_default() {
                ConstraintType::Less => (None, Some(rhs.clone())),
                ConstraintType::Equal => (Some(rhs.clone()), Some(rhs.clone())),
                ConstraintType::Greater => (Some(rhs.clone()), None),
            };
            rebuilt.make_con(lower, upper)?;
        }
        for (row, values) in a.iter().enumerate() {
            for (column, value) in values.iter().enumerate() {
                rebuilt.coefficients.set(row, column, value.clone());
            }
        }

        *self = rebuilt;
        Ok(())
    }

    /// Remove all variables, constraints and results.
    ///
    /// The objective direction, nonnegativity flag and configuration are kept.
    pub fn clear(&mut self) {
        self.variables.clear();
        self.constraints.clear();
        self.coefficients.clear();
        self.solution = None;
    }

    pub(crate) fn push_variable(&mut self, lower_bound: Option<F>, upper_bound: Option<F>, cost: F) -> usize {
        self.variables.push(Variable { lower_bound, upper_bound, cost });
        self.variables.len() - 1
    }

    pub(crate) fn push_constraint(&mut self, lower_bound: Option<F>, upper_bound: Option<F>) -> usize {
        self.constraints.push(Constraint { lower_bound, upper_bound });
        self.constraints.len() - 1
    }

    fn check_variable(&self, variable: usize) -> Result<()> {
        if variable < self.nr_variables() {
            Ok(())
        } else {
            Err(LpError::InvalidSize(format!(
                "variable {} doesn't exist, there are {} variables", variable, self.nr_variables(),
            )))
        }
    }

    fn check_constraint(&self, constraint: usize) -> Result<()> {
        if constraint < self.nr_constraints() {
            Ok(())
        } else {
            Err(LpError::InvalidSize(format!(
                "constraint {} doesn't exist, there are {} constraints", constraint, self.nr_constraints(),
            )))
        }
    }

    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// # Errors
    ///
    /// `InvalidSize` if the variable doesn't exist.
    pub fn variable(&self, variable: usize) -> Result<&Variable<F>> {
        self.check_variable(variable)?;
        Ok(&self.variables[variable])
    }

    /// # Errors
    ///
    /// `InvalidSize` if the constraint doesn't exist.
    pub fn constraint(&self, constraint: usize) -> Result<&Constraint<F>> {
        self.check_constraint(constraint)?;
        Ok(&self.constraints[constraint])
    }

    /// Coefficient of a variable in a constraint, zero if not set.
    pub fn coefficient(&self, constraint: usize, variable: usize) -> F {
        self.coefficients.value(constraint, variable)
    }

    /// All nonzero coefficients.
    pub fn coefficients(&self) -> &SparseMatrix<F> {
        &self.coefficients
    }

    pub fn objective_direction(&self) -> Objective {
        self.objective
    }

    pub fn set_objective(&mut self, objective: Objective) {
        if objective != self.objective {
            self.clear_solution();
        }
        self.objective = objective;
    }

    pub fn non_negative(&self) -> bool {
        self.non_negative
    }

    /// Whether `from_matrix` creates nonnegative (the default) or free variables.
    pub fn set_non_negative(&mut self, non_negative: bool) {
        self.non_negative = non_negative;
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute `a x` for a constraint.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the constraint doesn't exist or `values` doesn't have one value per
    /// variable.
    pub fn evaluate_row(&self, constraint: usize, values: &[F]) -> Result<F> {
        self.check_constraint(constraint)?;
        self.check_values(values)?;

        Ok(self.coefficients.row(constraint)
            .fold(F::zero(), |total, (variable, coefficient)| {
                total + coefficient.clone() * values[variable].clone()
            }))
    }

    /// Compute `c x`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `values` doesn't have one value per variable.
    pub fn evaluate_objective(&self, values: &[F]) -> Result<F> {
        self.check_values(values)?;

        Ok(self.variables.iter().zip(values)
            .filter(|(variable, _)| !variable.cost.is_zero())
            .fold(F::zero(), |total, (variable, value)| total + variable.cost.clone() * value.clone()))
    }

    fn check_values(&self, values: &[F]) -> Result<()> {
        if values.len() == self.nr_variables() {
            Ok(())
        } else {
            Err(LpError::InvalidSize(format!(
                "{} values for {} variables", values.len(), self.nr_variables(),
            )))
        }
    }

    /// Solve the linear program with the strategy of the element type.
    ///
    /// # Return value
    ///
    /// Whether an optimum was found. Other outcomes are available through `status`.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` if the configuration doesn't fit the element type, `Backend` if an
    /// external solver misbehaved.
    pub fn solve(&mut self) -> Result<bool> {
        let strategy = F::strategy(&self.config)?;
        debug!(
            "solving {} variables, {} constraints and {} coefficients with {:?}",
            self.nr_variables(), self.nr_constraints(), self.coefficients.nnz(), self.config.backend,
        );

        self.clear_solution();
        let solution = strategy.solve(self)?;
        debug!("solve finished: {}", solution.status());

        let optimal = solution.status() == Status::Optimal;
        self.solution = Some(solution);
        Ok(optimal)
    }

    /// Outcome of the last solve, `None` if there wasn't any.
    pub fn status(&self) -> Option<Status> {
        self.solution.as_ref().map(Solution::status)
    }

    /// # Errors
    ///
    /// `NoSolution` unless the last solve found an optimum.
    pub fn objective(&self) -> Result<F> {
        self.last_solution()?.objective().cloned()
    }

    /// Values of all variables, indexed by variable.
    ///
    /// # Errors
    ///
    /// `NoSolution` unless the last solve found an optimum.
    pub fn solution(&self) -> Result<&[F]> {
        self.last_solution()?.values()
    }

    /// # Errors
    ///
    /// `NoSolution` unless the last solve found an optimum, `InvalidSize` if the variable has been
    /// created after it.
    pub fn value(&self, variable: usize) -> Result<F> {
        let values = self.solution()?;
        values.get(variable).cloned().ok_or_else(|| LpError::InvalidSize(format!(
            "variable {variable} is not part of the solution",
        )))
    }

    /// Compute `a x` for a constraint at the last solution.
    ///
    /// # Errors
    ///
    /// `NoSolution` unless the last solve found an optimum, `InvalidSize` if the constraint doesn't
    /// exist or variables have been created after the solve.
    pub fn row_value(&self, constraint: usize) -> Result<F> {
        self.evaluate_row(constraint, self.solution()?)
    }

    pub(crate) fn clear_solution(&mut self) {
        self.solution = None;
    }

    fn last_solution(&self) -> Result<&Solution<F>> {
        self.solution.as_ref().ok_or(LpError::NoSolution)
    }

    /// Write the problem in MPS format.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` for exact element types.
    pub fn to_mps(&self) -> Result<String> {
        mps::export(self)
    }
}

/// Map infinite values to `None` and check the order of the bounds.
fn normalize_bounds<F: LpNumber>(
    lower_bound: Option<F>,
    upper_bound: Option<F>,
) -> Result<(Option<F>, Option<F>)> {
    let lower_bound = lower_bound.filter(|bound| !bound.is_infinite());
    let upper_bound = upper_bound.filter(|bound| !bound.is_infinite());

    if let (Some(lower), Some(upper)) = (&lower_bound, &upper_bound) {
        if lower > upper {
            return Err(LpError::InvalidBounds);
        }
    }

    Ok((lower_bound, upper_bound))
}
