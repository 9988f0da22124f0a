//! # Presolving
//!
//! Simplifications applied before a problem is handed to a backend. Each rule either removes rows
//! or tightens and fixes variable bounds, columns are never removed, so the values a backend
//! returns are the values of the original variables.
//!
//! A rule returns `Result::Err` with a status when it decided the problem.
use log::{debug, trace};

use crate::algorithm::external::{FloatColumn, FloatProgram, FloatRow, TOLERANCE};
use crate::data::linear_program::elements::{BoundDirection, Objective, Status};

/// Apply all presolve rules.
pub(crate) fn presolve(program: &mut FloatProgram) -> Result<(), Status> {
    let nr_rows = program.rows.len();

    remove_empty_rows(program)?;
    remove_bound_constraints(program)?;
    fix_empty_columns(program)?;

    debug!("presolve removed {} of {} rows", nr_rows - program.rows.len(), nr_rows);
    Ok(())
}

/// Remove rows without any coefficient.
///
/// `Result::Err` if zero doesn't satisfy the bounds of such a row.
pub(crate) fn remove_empty_rows(program: &mut FloatProgram) -> Result<(), Status> {
    if program.rows.iter().any(|row| row.coefficients.is_empty() && !admits_zero(row)) {
        debug!("a row without coefficients excludes zero");
        return Err(Status::Infeasible);
    }

    program.rows.retain(|row| !row.coefficients.is_empty());
    Ok(())
}

fn admits_zero(row: &FloatRow) -> bool {
    row.lower_bound.is_none_or(|lower| lower <= TOLERANCE)
        && row.upper_bound.is_none_or(|upper| upper >= -TOLERANCE)
}

/// Replace each row with a single coefficient by bounds on its variable.
///
/// `Result::Err` if the bounds of a variable cross.
fn remove_bound_constraints(program: &mut FloatProgram) -> Result<(), Status> {
    let (bounds, rows): (Vec<_>, Vec<_>) = program.rows.drain(..)
        .partition(|row| row.coefficients.len() == 1);
    program.rows = rows;

    for row in bounds {
        let (variable, coefficient) = row.coefficients[0];
        let (lower, upper) = if coefficient > 0_f64 {
            (row.lower_bound, row.upper_bound)
        } else {
            (row.upper_bound, row.lower_bound)
        };

        let column = &mut program.columns[variable];
        if let Some(lower) = lower {
            tighten(column, BoundDirection::Lower, lower / coefficient);
        }
        if let Some(upper) = upper {
            tighten(column, BoundDirection::Upper, upper / coefficient);
        }
        trace!("row on variable {variable} became bounds {:?}, {:?}", column.lower_bound, column.upper_bound);

        if let (Some(lower), Some(upper)) = (column.lower_bound, column.upper_bound) {
            if lower > upper + TOLERANCE {
                debug!("bounds of variable {variable} cross: {lower} > {upper}");
                return Err(Status::Infeasible);
            }
            if lower > upper {
                column.upper_bound = Some(lower);
            }
        }
    }

    Ok(())
}

fn tighten(column: &mut FloatColumn, direction: BoundDirection, value: f64) {
    match direction {
        BoundDirection::Lower => {
            column.lower_bound = Some(column.lower_bound.map_or(value, |current| current.max(value)));
        },
        BoundDirection::Upper => {
            column.upper_bound = Some(column.upper_bound.map_or(value, |current| current.min(value)));
        },
    }
}

/// Fix the variables that don't appear in any row at their best bound.
///
/// `Result::Err` if that bound is infinite. Whether the rest of the problem is feasible is not
/// known, so the problem is either infeasible or unbounded.
fn fix_empty_columns(program: &mut FloatProgram) -> Result<(), Status> {
    let mut in_row = vec![false; program.columns.len()];
    for row in &program.rows {
        for &(column, _) in &row.coefficients {
            in_row[column] = true;
        }
    }

    let objective = program.objective;
    for (variable, column) in program.columns.iter_mut().enumerate() {
        if in_row[variable] {
            continue;
        }

        match best_value(column, objective) {
            Some(value) => {
                column.lower_bound = Some(value);
                column.upper_bound = Some(value);
            },
            None => {
                debug!("variable {variable} improves the objective without limit");
                return Err(Status::InfeasibleOrUnbounded);
            },
        }
    }

    Ok(())
}

/// Solve a problem without any rows.
///
/// Every variable is at its best bound, the problem is unbounded when that bound is infinite.
pub(crate) fn solve_without_rows(program: &FloatProgram) -> (Status, Vec<f64>) {
    debug_assert!(program.rows.is_empty());

    let values = program.columns.iter()
        .map(|column| best_value(column, program.objective))
        .collect::<Option<Vec<_>>>();
    match values {
        Some(values) => (Status::Optimal, values),
        None => (Status::Unbounded, Vec::new()),
    }
}

/// The value within the bounds of a column that is best for the objective.
///
/// `None` if the objective improves without limit. Without cost, a finite bound is preferred, and
/// zero is used for free variables.
fn best_value(column: &FloatColumn, objective: Objective) -> Option<f64> {
    let cost = match objective {
        Objective::Minimize => column.cost,
        Objective::Maximize => -column.cost,
    };

    if cost > 0_f64 {
        column.lower_bound
    } else if cost < 0_f64 {
        column.upper_bound
    } else {
        Some(column.lower_bound.or(column.upper_bound).unwrap_or(0_f64))
    }
}
