//! # Writing MPS files
//!
//! Writing of linear programs in the fixed section layout of the
//! [MPS format](https://en.wikipedia.org/wiki/MPS_(format)). Rows are named `ROW1..ROWm` and
//! columns `X1..Xn`, following the order of their indices, so the output only depends on the
//! contents of the program.
//!
//! The objective direction is not written, readers assume minimization.
use std::fmt::Write;

use crate::data::linear_program::elements::BoundType;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::{LpNumber, NumberKind};
use crate::error::{LpError, Result};

/// Column bounds that don't need a line in the `BOUNDS` section.
fn is_default<F: LpNumber>(bounds: &BoundType<F>) -> bool {
    matches!(bounds, BoundType::Lower(lower) if lower.is_zero())
}

/// Write a linear program in MPS format.
///
/// # Errors
///
/// `UnsupportedOperation` for exact element types, their values have no faithful decimal
/// representation. `Backend` if formatting a value fails.
pub fn export<F: LpNumber>(program: &LinearProgram<F>) -> Result<String> {
    if F::KIND == NumberKind::Exact {
        return Err(LpError::UnsupportedOperation(
            "MPS export is only supported for floating point element types".to_string(),
        ));
    }

    let rows = program.constraints.iter()
        .map(|constraint| BoundType::classify(&constraint.lower_bound, &constraint.upper_bound))
        .collect::<Vec<_>>();
    let columns = program.variables.iter()
        .map(|variable| BoundType::classify(&variable.lower_bound, &variable.upper_bound))
        .collect::<Vec<_>>();

    let mut mps = String::new();
    write_sections(&mut mps, program, &rows, &columns)
        .map_err(|error| LpError::Backend(format!("writing MPS: {error}")))?;
    Ok(mps)
}

fn write_sections<F: LpNumber>(
    mps: &mut String,
    program: &LinearProgram<F>,
    rows: &[BoundType<F>],
    columns: &[BoundType<F>],
) -> std::fmt::Result {
    writeln!(mps, "NAME PROG")?;

    writeln!(mps, "ROWS")?;
    writeln!(mps, " N  OBJ")?;
    for (row, bounds) in rows.iter().enumerate() {
        let sense = match bounds {
            BoundType::Upper(_) => "L",
            BoundType::Fixed(_) => "E",
            // Constraints always have a finite bound
            BoundType::Lower(_) | BoundType::Double(_, _) | BoundType::Free => "G",
        };
        writeln!(mps, " {sense} ROW{}", row + 1)?;
    }

    writeln!(mps, "COLUMNS")?;
    let mut entries = program.coefficients().iter().collect::<Vec<_>>();
    entries.sort_by_key(|&(row, column, _)| (column, row));
    let mut entries = entries.into_iter().peekable();
    for (column, variable) in program.variables.iter().enumerate() {
        let name = column + 1;
        writeln!(mps, " X{name} OBJ {}", variable.cost)?;
        while let Some((row, _, value)) = entries.next_if(|&(_, entry_column, _)| entry_column == column) {
            writeln!(mps, " X{name} ROW{} {value}", row + 1)?;
        }
    }

    writeln!(mps, "RHS")?;
    for (row, bounds) in rows.iter().enumerate() {
        let rhs = match bounds {
            BoundType::Upper(value) | BoundType::Lower(value) | BoundType::Fixed(value) => value,
            BoundType::Double(lower, _) => lower,
            BoundType::Free => continue,
        };
        writeln!(mps, " RHS ROW{} {}", row + 1, rhs)?;
    }

    if rows.iter().any(|bounds| matches!(bounds, BoundType::Double(_, _))) {
        writeln!(mps, "RANGES")?;
        for (row, bounds) in rows.iter().enumerate() {
            if let BoundType::Double(lower, upper) = bounds {
                writeln!(mps, " RNG ROW{} {}", row + 1, upper.clone() - lower.clone())?;
            }
        }
    }

    if !columns.iter().all(is_default) {
        writeln!(mps, "BOUNDS")?;
        for (column, bounds) in columns.iter().enumerate() {
            let name = column + 1;
            match bounds {
                BoundType::Free => writeln!(mps, " FR BND X{name}")?,
                BoundType::Upper(upper) => {
                    writeln!(mps, " MI BND X{name}")?;
                    writeln!(mps, " UP BND X{name} {upper}")?;
                },
                BoundType::Lower(lower) => if !lower.is_zero() {
                    writeln!(mps, " LO BND X{name} {lower}")?;
                },
                BoundType::Fixed(value) => writeln!(mps, " FX BND X{name} {value}")?,
                BoundType::Double(lower, upper) => {
                    writeln!(mps, " LO BND X{name} {lower}")?;
                    writeln!(mps, " UP BND X{name} {upper}")?;
                },
            }
        }
    }

    writeln!(mps, "ENDATA")
}
