//! # The Simplex algorithm
//!
//! The two phase revised simplex method over exact numbers. The first phase finds a basic
//! feasible solution by minimizing the sum of one artificial variable per row, the second phase
//! minimizes the cost of the canonical problem starting from that solution. The algorithm is
//! implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book by Christos
//! H. Papadimitriou and Kenneth Steiglitz.
use log::{debug, trace};

use crate::algorithm::{OptimizationResult, SolveStrategy};
use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::config::PivotRuleKind;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{Solution, SolutionMapper};
use crate::data::number_types::traits::{Exact, LpNumber};
use crate::error::Result;

pub mod tableau;
pub mod strategy;


/// Solves linear programs over exact numbers with the two phase simplex method.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TwoPhase {
    pivot_rule: PivotRuleKind,
}

impl TwoPhase {
    pub fn new(pivot_rule: PivotRuleKind) -> Self {
        Self { pivot_rule }
    }

    /// Solve a problem in canonical form.
    ///
    /// # Return value
    ///
    /// In case of an optimum, the values of the canonical variables (artificial variables are not
    /// included).
    pub fn solve_canonical<F: LpNumber + Exact>(&self, canonical: &CanonicalForm<F>) -> OptimizationResult<F> {
        match self.pivot_rule {
            PivotRuleKind::FirstProfitable => two_phase::<_, FirstProfitable>(canonical),
            PivotRuleKind::Bland => two_phase::<_, Bland>(canonical),
        }
    }
}

impl<F: LpNumber + Exact> SolveStrategy<F> for TwoPhase {
    fn solve(&self, program: &LinearProgram<F>) -> Result<Solution<F>> {
        let canonical = program.canonical_form();

        let solution = match self.solve_canonical(&canonical) {
            OptimizationResult::FiniteOptimum(solved) => {
                let values = SolutionMapper::new(&canonical.transforms).map(Status::Optimal, &solved)?;
                let objective = program.evaluate_objective(&values)?;
                Solution::optimal(values, objective)
            },
            OptimizationResult::Infeasible => Solution::without_optimum(Status::Infeasible),
            OptimizationResult::Unbounded => Solution::without_optimum(Status::Unbounded),
        };

        Ok(solution)
    }
}

fn two_phase<F, PR>(canonical: &CanonicalForm<F>) -> OptimizationResult<F>
where
    F: LpNumber + Exact,
    PR: PivotRule,
{
    let mut tableau = Tableau::new(canonical);
    debug!("phase one: {} rows, {} columns", tableau.nr_rows(), tableau.nr_real_columns());

    match artificial_primal::<_, PR>(&mut tableau) {
        FeasibilityResult::Feasible { redundant_rows } => {
            if !redundant_rows.is_empty() {
                debug!("rows {:?} are redundant, their artificial variables stay basic at zero", redundant_rows);
            }
            tableau.into_phase_two(&canonical.cost());
            debug!("phase two");

            match primal::<_, PR>(&mut tableau) {
                OptimizationResult::FiniteOptimum(mut values) => {
                    values.truncate(canonical.nr_columns());
                    OptimizationResult::FiniteOptimum(values)
                },
                other => other,
            }
        },
        FeasibilityResult::Infeasible => OptimizationResult::Infeasible,
    }
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum FeasibilityResult {
    /// The tableau holds a basic feasible solution of the canonical problem.
    Feasible {
        /// Sorted indices of rows that are linear combinations of other rows.
        redundant_rows: Vec<usize>,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the canonical linear program is found.
///
/// # Arguments
///
/// * `tableau`: Phase one tableau with a valid basis. This basis will typically consist of only
/// artificial variables.
pub(crate) fn artificial_primal<F, PR>(tableau: &mut Tableau<F>) -> FeasibilityResult
where
    F: LpNumber + Exact,
    PR: PivotRule,
{
    let mut rule = PR::new();
    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                let column = tableau.generate_column(column_index);
                match rule.select_primal_pivot_row(tableau, &column) {
                    Some(row_index) => {
                        trace!("phase one pivot: column {column_index} (cost {cost}) on row {row_index}");
                        tableau.bring_into_basis(column_index, row_index, &column);
                    },
                    // The artificial cost is bounded below by zero
                    None => unreachable!("artificial cost can not be unbounded"),
                }
            },
            None => break if tableau.objective_function_value().is_zero() {
                let redundant_rows = remove_artificial_basis_variables(tableau);
                FeasibilityResult::Feasible { redundant_rows }
            } else {
                debug!("phase one ended with artificial cost {}", tableau.objective_function_value());
                FeasibilityResult::Infeasible
            },
        }
    }
}

/// Removes artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Return value
///
/// Rows for which no nonbasic column of the canonical problem has a nonzero value in the
/// current basis. Those rows are redundant, their artificial variable stays in the basis at zero.
fn remove_artificial_basis_variables<F: LpNumber + Exact>(tableau: &mut Tableau<F>) -> Vec<usize> {
    let mut redundant_rows = Vec::new();

    for pivot_row in tableau.artificial_basis_rows() {
        debug_assert!(tableau.constraint_value(pivot_row).is_zero());

        let pivot_column = (0..tableau.nr_real_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| !tableau.generate_element(pivot_row, j).is_zero());

        if let Some(pivot_column) = pivot_column {
            trace!("driving out artificial of row {pivot_row} with column {pivot_column}");
            let column = tableau.generate_column(pivot_column);
            tableau.bring_into_basis(pivot_column, pivot_row, &column);
        } else {
            redundant_rows.push(pivot_row);
        }
    }

    redundant_rows
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(tableau: &mut Tableau<F>) -> OptimizationResult<F>
where
    F: LpNumber + Exact,
    PR: PivotRule,
{
    let mut rule = PR::new();
    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                let column = tableau.generate_column(column_index);
                match rule.select_primal_pivot_row(tableau, &column) {
                    Some(row_index) => {
                        trace!("phase two pivot: column {column_index} (cost {cost}) on row {row_index}");
                        tableau.bring_into_basis(column_index, row_index, &column);
                    },
                    None => {
                        debug!("column {column_index} has negative cost and no limiting row");
                        break OptimizationResult::Unbounded;
                    },
                }
            },
            None => {
                debug!("optimal with cost {}", tableau.objective_function_value());
                break OptimizationResult::FiniteOptimum(tableau.current_bfs());
            },
        }
    }
}
