//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::{Exact, LpNumber};

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a nonbasic column with a negative relative cost, and that cost. `None` if there is
    /// no such column, in which case the current basis is optimal.
    fn select_primal_pivot_column<F: LpNumber + Exact>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        tableau.relative_costs().find(|(_, cost)| *cost < F::zero())
    }

    /// Row selection rule for the primal Simplex method.
    ///
    /// Only rows with a strictly positive entry in the column are considered, of those the ones
    /// with the minimal ratio between the basic value and that entry.
    ///
    /// # Arguments
    ///
    /// * `column`: The entering column with respect to the current basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    fn select_primal_pivot_row<F: LpNumber + Exact>(&mut self, tableau: &Tableau<F>, column: &[F]) -> Option<usize>;
}

/// Ratios `b_i / column_i` of all rows with a positive entry in the column.
fn ratios<'a, F: LpNumber + Exact>(
    tableau: &'a Tableau<F>,
    column: &'a [F],
) -> impl Iterator<Item = (usize, F)> + 'a {
    debug_assert_eq!(column.len(), tableau.nr_rows());

    column.iter().enumerate()
        .filter(|(_, value)| **value > F::zero())
        .map(|(row, value)| (row, tableau.constraint_value(row).clone() / value.clone()))
}

/// Pivot on the first column with a negative relative cost, and on the first row with the
/// smallest ratio.
///
/// This rule can cycle on degenerate problems.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_row<F: LpNumber + Exact>(&mut self, tableau: &Tableau<F>, column: &[F]) -> Option<usize> {
        let mut min_values: Option<(usize, F)> = None;
        for (row, ratio) in ratios(tableau, column) {
            match &min_values {
                Some((_, min_ratio)) if ratio >= *min_ratio => {},
                _ => min_values = Some((row, ratio)),
            }
        }

        min_values.map(|(row, _)| row)
    }
}

/// Bland's rule: the entering column has the lowest index among the columns with a negative
/// relative cost, and ties in the ratio test are broken by the lowest index of the leaving column.
///
/// The simplex method always terminates with this rule.
pub struct Bland;
impl PivotRule for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_row<F: LpNumber + Exact>(&mut self, tableau: &Tableau<F>, column: &[F]) -> Option<usize> {
        // (chosen index, minimum ratio, corresponding leaving column)
        let mut min_values: Option<(usize, F, usize)> = None;
        for (row, ratio) in ratios(tableau, column) {
            let leaving_column = tableau.basis_column_index_for_row(row);
            if let Some((min_index, min_ratio, min_leaving_column)) = &mut min_values {
                if ratio == *min_ratio && leaving_column < *min_leaving_column {
                    *min_index = row;
                    *min_leaving_column = leaving_column;
                } else if ratio < *min_ratio {
                    *min_index = row;
                    *min_ratio = ratio;
                    *min_leaving_column = leaving_column;
                }
            } else {
                min_values = Some((row, ratio, leaving_column));
            }
        }

        min_values.map(|(min_index, _, _)| min_index)
    }
}
