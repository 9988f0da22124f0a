//! # Strategies
//!
//! Decisions made while pivoting that don't affect the correctness of the simplex method.
pub mod pivot_rule;
