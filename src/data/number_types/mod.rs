//! # Number types
//!
//! Different algorithms are defined over different spaces. This module defines those spaces and
//! decides, per element type, which algorithm solves a linear program: exact rationals go through
//! the internal simplex method, floats through an external backend.
pub mod traits;
pub mod rational;
pub mod float;
