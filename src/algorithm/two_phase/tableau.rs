//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The inverse of the basis matrix is kept explicitly and updated with a Gauss-Jordan step on
//! every basis change.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use num_traits::{One, Zero};

use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::{Exact, LpNumber};

/// Which of the two phases a tableau is in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Minimizing the sum of the artificial variables.
    One,
    /// Minimizing the cost of the canonical problem.
    Two,
}

/// The simplex tableau of a linear program in canonical form, extended with one artificial variable
/// per row.
///
/// Columns `0..nr_real_columns()` are those of the canonical problem, the artificial column with
/// index `nr_real_columns() + i` is the `i`th unit vector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau<F> {
    /// Dense columns of length `m`, real columns followed by artificial columns.
    columns: Vec<Vec<F>>,
    nr_real_columns: usize,
    /// Cost of each column in the current phase.
    cost: Vec<F>,
    phase: Phase,

    /// `B^-1`, row major, of size `m x m`.
    basis_inverse: Vec<Vec<F>>,
    /// `B^-1 b`, the values of the basic variables.
    b: Vec<F>,
    /// Column index of the basic variable of each row.
    basis: Vec<usize>,
    /// Indexed by column.
    is_basic: Vec<bool>,
}

impl<F> Tableau<F>
where
    F: LpNumber + Exact,
{
    /// Create the phase one tableau, with all artificial variables in the basis.
    pub fn new(canonical: &CanonicalForm<F>) -> Self {
        let m = canonical.nr_rows();
        let n = canonical.nr_columns();

        let mut columns = canonical.columns();
        columns.extend((0..m).map(|i| unit_vector(i, m)));
        let cost = (0..n + m)
            .map(|j| if j < n { F::zero() } else { F::one() })
            .collect();

        Self {
            columns,
            nr_real_columns: n,
            cost,
            phase: Phase::One,
            basis_inverse: (0..m).map(|i| unit_vector(i, m)).collect(),
            b: canonical.b(),
            basis: (n..n + m).collect(),
            is_basic: (0..n + m).map(|j| j >= n).collect(),
        }
    }

    /// Replace the artificial cost by the cost of the canonical problem.
    ///
    /// Artificial variables that are still basic get cost zero.
    pub fn into_phase_two(&mut self, cost: &[F]) {
        debug_assert_eq!(cost.len(), self.nr_real_columns);
        debug_assert_eq!(self.phase, Phase::One);

        for (j, value) in self.cost.iter_mut().enumerate() {
            *value = if j < self.nr_real_columns { cost[j].clone() } else { F::zero() };
        }
        self.phase = Phase::Two;
    }

    /// Brings a column into the basis by pivoting `B^-1` and the basic values on the given row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column entering the basis.
    /// * `pivot_row_index`: Row of the variable leaving the basis.
    /// * `column`: The entering column with respect to the current basis, see `generate_column`.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize, column: &[F]) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_basic[pivot_column_index]);
        debug_assert!(!column[pivot_row_index].is_zero());

        let pivot = column[pivot_row_index].clone();
        for value in &mut self.basis_inverse[pivot_row_index] {
            *value /= pivot.clone();
        }
        self.b[pivot_row_index] /= pivot;

        let pivot_row = self.basis_inverse[pivot_row_index].clone();
        let pivot_b = self.b[pivot_row_index].clone();
        for (row, factor) in column.iter().enumerate() {
            if row == pivot_row_index || factor.is_zero() {
                continue;
            }
            for (value, pivot_value) in self.basis_inverse[row].iter_mut().zip(&pivot_row) {
                *value -= factor.clone() * pivot_value.clone();
            }
            self.b[row] -= factor.clone() * pivot_b.clone();
        }

        let leaving_column = self.basis[pivot_row_index];
        self.is_basic[leaving_column] = false;
        self.is_basic[pivot_column_index] = true;
        self.basis[pivot_row_index] = pivot_column_index;
    }

    /// Dual values `c_B B^-1`.
    fn duals(&self) -> Vec<F> {
        (0..self.nr_rows())
            .map(|k| {
                self.basis.iter().enumerate()
                    .map(|(i, &j)| self.cost[j].clone() * self.basis_inverse[i][k].clone())
                    .fold(F::zero(), |total, term| total + term)
            })
            .collect()
    }

    /// Relative cost `c_j - c_B B^-1 A_j` of a column, given the duals.
    fn relative_cost_with(&self, j: usize, duals: &[F]) -> F {
        let reduction = duals.iter().zip(&self.columns[j])
            .filter(|(_, value)| !value.is_zero())
            .fold(F::zero(), |total, (dual, value)| total + dual.clone() * value.clone());
        self.cost[j].clone() - reduction
    }

    /// Calculates the relative cost of a column.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.relative_cost_with(j, &self.duals())
    }

    /// Relative costs of all nonbasic columns of the canonical problem, in index order.
    ///
    /// Artificial columns are never candidates to enter the basis.
    pub fn relative_costs(&self) -> impl Iterator<Item = (usize, F)> + '_ {
        let duals = self.duals();
        (0..self.nr_real_columns)
            .filter(|&j| !self.is_basic[j])
            .map(move |j| (j, self.relative_cost_with(j, &duals)))
    }

    /// Column of the original problem with respect to the current basis, `B^-1 A_j`.
    pub fn generate_column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns());

        (0..self.nr_rows()).map(|i| self.generate_element(i, j)).collect()
    }

    /// Single element of `B^-1 A_j`.
    pub fn generate_element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.basis_inverse[i].iter().zip(&self.columns[j])
            .filter(|(_, value)| !value.is_zero())
            .fold(F::zero(), |total, (inverse, value)| total + inverse.clone() * value.clone())
    }

    pub fn is_in_basis(&self, column: usize) -> bool {
        self.is_basic[column]
    }

    /// Column index of the basic variable of a row.
    pub fn basis_column_index_for_row(&self, row: usize) -> usize {
        self.basis[row]
    }

    /// Value of the basic variable of a row.
    pub fn constraint_value(&self, row: usize) -> &F {
        &self.b[row]
    }

    /// Rows whose basic variable is artificial.
    pub fn artificial_basis_rows(&self) -> Vec<usize> {
        (0..self.nr_rows())
            .filter(|&i| self.basis[i] >= self.nr_real_columns)
            .collect()
    }

    /// Values of all variables, artificial ones included.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_columns()];
        for (row, &column) in self.basis.iter().enumerate() {
            values[column] = self.b[row].clone();
        }
        values
    }

    /// Cost of the current solution in the current phase.
    pub fn objective_function_value(&self) -> F {
        self.basis.iter().zip(&self.b)
            .fold(F::zero(), |total, (&j, value)| total + self.cost[j].clone() * value.clone())
    }

    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of columns, artificial ones included.
    pub fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn nr_real_columns(&self) -> usize {
        self.nr_real_columns
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: LpNumber + Exact>(tableau: &Tableau<F>) {
    debug_assert_eq!(tableau.basis.iter().unique().count(), tableau.nr_rows());
    debug_assert_eq!(tableau.is_basic.iter().filter(|&&basic| basic).count(), tableau.nr_rows());

    for (i, &j) in tableau.basis.iter().enumerate() {
        debug_assert_eq!(
            tableau.generate_column(j), unit_vector(i, tableau.nr_rows()),
            "column {} is not equal to e_{}", j, i,
        );
        debug_assert!(
            tableau.relative_cost(j).is_zero(),
            "relative cost of basic column {} is not zero", j,
        );
        debug_assert!(
            tableau.b[i] >= F::zero(),
            "rhs (b) is not always nonnegative: at index {} we have {} < 0", i, tableau.b[i],
        );
    }
}

fn unit_vector<F: Zero + One + Clone>(i: usize, len: usize) -> Vec<F> {
    let mut vector = vec![F::zero(); len];
    vector[i] = F::one();
    vector
}

impl<F> Display for Tableau<F>
where
    F: LpNumber + Exact,
{
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Tableau ({:?}), objective {}", self.phase, self.objective_function_value())?;
        for row in 0..self.nr_rows() {
            let values = self.generate_column_row(row);
            writeln!(f, "x{:<4} = {:<8} | {}", self.basis[row], self.b[row], values.iter().join(" "))?;
        }
        Ok(())
    }
}

impl<F> Tableau<F>
where
    F: LpNumber + Exact,
{
    /// Row of `B^-1 A`.
    fn generate_column_row(&self, i: usize) -> Vec<F> {
        (0..self.nr_columns()).map(|j| self.generate_element(i, j)).collect()
    }
}
