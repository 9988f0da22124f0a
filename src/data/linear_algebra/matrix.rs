//! # Sparse matrix
//!
//! Coefficients are kept in an ordered map keyed by `(row, column)`, such that iteration is
//! deterministic and in row major order. Only nonzero values are stored.
use std::collections::BTreeMap;
use std::ops::Bound::Included;

use crate::data::number_types::traits::Field;

/// Sparse matrix without fixed dimensions.
///
/// Setting a value to zero removes the entry, so `nnz` counts the structural nonzeros.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SparseMatrix<F> {
    data: BTreeMap<(usize, usize), F>,
}

impl<F: Field> SparseMatrix<F> {
    /// Create a matrix without any nonzero values.
    pub fn new() -> Self {
        Self { data: BTreeMap::new() }
    }

    /// Get the value at coordinate (`row`, `column`), if it is nonzero.
    pub fn get(&self, row: usize, column: usize) -> Option<&F> {
        self.data.get(&(row, column))
    }

    /// Get the value at coordinate (`row`, `column`), zero if nothing is stored.
    pub fn value(&self, row: usize, column: usize) -> F {
        self.get(row, column).cloned().unwrap_or_else(F::zero)
    }

    /// Overwrite the value at coordinate (`row`, `column`).
    pub fn set(&mut self, row: usize, column: usize, value: F) {
        if value.is_zero() {
            self.data.remove(&(row, column));
        } else {
            self.data.insert((row, column), value);
        }
    }

    /// Add `value` to the value at coordinate (`row`, `column`).
    pub fn add(&mut self, row: usize, column: usize, value: F) {
        let new_value = self.value(row, column) + value;
        self.set(row, column, new_value);
    }

    /// All nonzero values, ordered by row and then by column.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &F)> {
        self.data.iter().map(|(&(row, column), value)| (row, column, value))
    }

    /// Nonzero values of a row as `(column, value)`, ordered by column.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, &F)> {
        self.data
            .range((Included((row, 0)), Included((row, usize::MAX))))
            .map(|(&(_, column), value)| (column, value))
    }

    /// Nonzero values of a column as `(row, value)`, ordered by row.
    ///
    /// Has to visit all values, the storage is row major.
    pub fn column(&self, column: usize) -> Vec<(usize, F)> {
        self.data.iter()
            .filter(|&(&(_, j), _)| j == column)
            .map(|(&(i, _), value)| (i, value.clone()))
            .collect()
    }

    /// Multiply all values in a row with `-1`.
    pub fn negate_row(&mut self, row: usize) {
        for (_, value) in self.data.range_mut((Included((row, 0)), Included((row, usize::MAX)))) {
            *value = -value.clone();
        }
    }

    /// Multiply all values in a column with `-1`.
    pub fn negate_column(&mut self, column: usize) {
        for (_, value) in self.data.iter_mut().filter(|&(&(_, j), _)| j == column) {
            *value = -value.clone();
        }
    }

    /// Number of nonzero values.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
