//! # A linear program solver
//!
//! Linear programs over exact rationals are solved with the two phase revised simplex method as
//! described in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth
//! Steiglitz. Linear programs over floating point numbers are handed to an external backend,
//! `minilp` for the simplex method or `clarabel` for the interior point method.
//!
//! The element type of a `LinearProgram` selects how it is solved:
//!
//! ```
//! use qif_lp::{LinearProgram, RationalBig, Status, RB};
//!
//! let mut lp = LinearProgram::<RationalBig>::new();
//! let x = lp.make_var(Some(RB!(0)), Some(RB!(4))).unwrap();
//! lp.set_obj_coeff(x, RB!(1, 2), false).unwrap();
//!
//! assert!(lp.solve().unwrap());
//! assert_eq!(lp.status(), Some(Status::Optimal));
//! assert_eq!(lp.objective(), Ok(RB!(2)));
//! ```
pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;
pub mod io;

pub use crate::config::{BackendKind, Method, PivotRuleKind, SolverConfig, Verbosity};
pub use crate::data::linear_program::elements::{ConstraintType, Objective, Status};
pub use crate::data::linear_program::general_form::LinearProgram;
pub use crate::data::linear_program::solution::Solution;
pub use crate::data::number_types::rational::{BigInt, RationalBig};
pub use crate::error::{LpError, Result};

#[cfg(test)]
mod tests;
