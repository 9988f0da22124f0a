//! # Linear algebra primitives
//!
//! Storage for the coefficients of a linear program. The simplex method keeps its own dense
//! tableau in `algorithm::two_phase::tableau`.
pub mod matrix;
