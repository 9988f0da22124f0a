//! # Representing linear programs
//!
//! A linear program in general form may contain any type of constraint and variable bound, while
//! a linear program in canonical form contains equality constraints and nonnegative variables
//! only.
pub mod elements;
pub mod general_form;
pub mod canonical_form;
pub mod solution;
