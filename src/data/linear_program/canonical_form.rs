//! # Linear programs in canonical form
//!
//! A linear program in canonical form minimizes `c x` subject to `A x = b` and `x >= 0`, with
//! `b >= 0`. Bringing a general form problem in this form substitutes most variables. The
//! substitutions are recorded per original variable, such that a solution of the canonical
//! problem can be mapped back.
use log::debug;
use num_traits::Zero;

use crate::data::linear_program::elements::{BoundDirection, BoundType, Objective};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::LpNumber;

/// How an original variable is expressed in canonical variables.
///
/// `original = canonical * scale + offset - canonical[substitute]`, where `canonical` is the
/// variable with the same index as the original.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableTransform<F> {
    /// Index of the negative part of a split free variable.
    pub substitute: Option<usize>,
    /// Either `1` or `-1`.
    pub scale: F,
    pub offset: F,
}

/// A linear program in canonical form, together with the way the original variables map onto it.
///
/// The first variables of `program` correspond one-to-one to the variables of the problem it was
/// derived from, there is one transform for each of them.
#[derive(Clone, Debug)]
pub struct CanonicalForm<F> {
    pub program: LinearProgram<F>,
    pub transforms: Vec<VariableTransform<F>>,
}

impl<F: LpNumber> CanonicalForm<F> {
    pub fn nr_rows(&self) -> usize {
        self.program.nr_constraints()
    }

    pub fn nr_columns(&self) -> usize {
        self.program.nr_variables()
    }

    /// Right-hand side, nonnegative.
    pub fn b(&self) -> Vec<F> {
        self.program.constraints.iter()
            .map(|constraint| constraint.upper_bound.clone().unwrap_or_else(F::zero))
            .collect()
    }

    /// Cost vector of the minimization problem.
    pub fn cost(&self) -> Vec<F> {
        self.program.variables.iter().map(|variable| variable.cost.clone()).collect()
    }

    /// Dense columns of `A`, each of length `nr_rows`.
    pub fn columns(&self) -> Vec<Vec<F>> {
        let mut columns = vec![vec![F::zero(); self.nr_rows()]; self.nr_columns()];
        for (row, column, value) in self.program.coefficients.iter() {
            columns[column][row] = value.clone();
        }
        columns
    }
}

impl<F: LpNumber> LinearProgram<F> {
    /// Create an equivalent problem in canonical form.
    ///
    /// This problem is left untouched. The result has no solution attached.
    pub fn canonical_form(&self) -> CanonicalForm<F> {
        let mut program = self.clone();
        program.clear_solution();

        let transforms = program.transform_variables();
        program.split_ranges();
        program.add_slacks();
        program.make_b_non_negative();
        program.make_minimization_problem();

        debug_assert!(program.is_canonical());
        debug!(
            "canonical form has {} rows and {} columns, {} were given",
            program.nr_constraints(), program.nr_variables(), self.nr_variables(),
        );

        CanonicalForm { program, transforms }
    }

    /// Substitute all variables such that they are bounded below by zero only.
    ///
    /// Variables that are created in the process are already in that form.
    fn transform_variables(&mut self) -> Vec<VariableTransform<F>> {
        let nr_original = self.nr_variables();
        let mut transforms = Vec::with_capacity(nr_original);

        for variable in 0..nr_original {
            let lower_bound = self.variables[variable].lower_bound.take();
            let upper_bound = self.variables[variable].upper_bound.take();
            self.variables[variable].lower_bound = Some(F::zero());

            let transform = match (lower_bound, upper_bound) {
                // x = x+ - x-
                (None, None) => {
                    let cost = -self.variables[variable].cost.clone();
                    let negative_part = self.push_variable(Some(F::zero()), None, cost);
                    for (row, value) in self.coefficients.column(variable) {
                        self.coefficients.set(row, negative_part, -value);
                    }
                    VariableTransform { substitute: Some(negative_part), scale: F::one(), offset: F::zero() }
                },
                // x = ub - x'
                (None, Some(upper_bound)) => {
                    self.shift_constraints(variable, &upper_bound);
                    self.coefficients.negate_column(variable);
                    let cost = &mut self.variables[variable].cost;
                    *cost = -cost.clone();
                    VariableTransform { substitute: None, scale: -F::one(), offset: upper_bound }
                },
                // x = x' + lb
                (Some(lower_bound), upper_bound) => {
                    self.shift_constraints(variable, &lower_bound);
                    if let Some(upper_bound) = upper_bound {
                        let constraint = self.push_constraint(None, Some(upper_bound - lower_bound.clone()));
                        self.coefficients.set(constraint, variable, F::one());
                    }
                    VariableTransform { substitute: None, scale: F::one(), offset: lower_bound }
                },
            };
            transforms.push(transform);
        }

        transforms
    }

    /// Move the contribution `a * value` of a variable at a fixed value into the constraint bounds.
    fn shift_constraints(&mut self, variable: usize, value: &F) {
        for (row, coefficient) in self.coefficients.column(variable) {
            let shift = coefficient * value.clone();
            let constraint = &mut self.constraints[row];
            for bound in [&mut constraint.lower_bound, &mut constraint.upper_bound].into_iter().flatten() {
                *bound -= shift.clone();
            }
        }
    }

    /// Replace each constraint that is bounded on both sides by two constraints bounded on one side.
    fn split_ranges(&mut self) {
        for constraint in 0..self.nr_constraints() {
            if let BoundType::Double(lower, _) = BoundType::classify(
                &self.constraints[constraint].lower_bound,
                &self.constraints[constraint].upper_bound,
            ) {
                self.constraints[constraint].lower_bound = None;
                let lower_part = self.push_constraint(Some(lower), None);
                let row = self.coefficients.row(constraint)
                    .map(|(column, value)| (column, value.clone()))
                    .collect::<Vec<_>>();
                for (column, value) in row {
                    self.coefficients.set(lower_part, column, value);
                }
            }
        }
    }

    /// Make all constraints equalities by adding a slack (to `<=` rows) or surplus (to `>=` rows)
    /// variable.
    fn add_slacks(&mut self) {
        for constraint in 0..self.nr_constraints() {
            let (direction, rhs) = match BoundType::classify(
                &self.constraints[constraint].lower_bound,
                &self.constraints[constraint].upper_bound,
            ) {
                BoundType::Upper(rhs) => (BoundDirection::Upper, rhs),
                BoundType::Lower(rhs) => (BoundDirection::Lower, rhs),
                BoundType::Fixed(_) => continue,
                BoundType::Free | BoundType::Double(..) => {
                    debug_assert!(false, "constraints have at least one finite bound and ranges were split");
                    continue;
                },
            };

            let slack = self.push_variable(Some(F::zero()), None, F::zero());
            self.coefficients.set(constraint, slack, direction.into());
            self.constraints[constraint].lower_bound = Some(rhs.clone());
            self.constraints[constraint].upper_bound = Some(rhs);
        }
    }

    /// Flip the sign of each row with a negative right-hand side.
    fn make_b_non_negative(&mut self) {
        for constraint in 0..self.nr_constraints() {
            let is_negative = self.constraints[constraint].upper_bound.as_ref()
                .is_some_and(|rhs| *rhs < F::zero());
            if is_negative {
                self.coefficients.negate_row(constraint);
                let constraint = &mut self.constraints[constraint];
                for bound in [&mut constraint.lower_bound, &mut constraint.upper_bound].into_iter().flatten() {
                    *bound = -bound.clone();
                }
            }
        }
    }

    fn make_minimization_problem(&mut self) {
        if self.objective == Objective::Maximize {
            for variable in &mut self.variables {
                variable.cost = -variable.cost.clone();
            }
            self.objective = Objective::Minimize;
        }
    }

    fn is_canonical(&self) -> bool {
        self.objective == Objective::Minimize
            && self.variables.iter().all(|variable| {
                variable.lower_bound.as_ref().is_some_and(Zero::is_zero) && variable.upper_bound.is_none()
            })
            && self.constraints.iter().all(|constraint| {
                matches!(
                    BoundType::classify(&constraint.lower_bound, &constraint.upper_bound),
                    BoundType::Fixed(rhs) if rhs >= F::zero()
                )
            })
    }
}
