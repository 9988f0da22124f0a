//! # Error reporting
//!
//! Errors describe a malformed problem or a request that can't be honored. Outcomes of an LP
//! solve that are legitimate (infeasible, unbounded, etc.) are not errors, they are reported
//! through `Status`.
use thiserror::Error;

/// Error type for all fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LpError {
    /// Dimensions of the objective, constraint matrix or right-hand side don't match, or an index
    /// refers to a variable or constraint that doesn't exist.
    #[error("invalid size: {0}")]
    InvalidSize(String),

    /// A constraint without any finite bound was created.
    #[error("trying to add a constraint without any finite bound")]
    InvalidConstraint,

    /// A lower bound is larger than the upper bound.
    #[error("lower bound exceeds upper bound")]
    InvalidBounds,

    /// A constraint sense symbol other than `<`, `=` or `>`.
    #[error("invalid constraint sense '{0}', expected one of '<', '=', '>'")]
    InvalidSense(char),

    /// The requested combination of element type, backend, method and options is not available.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A solution was queried while the last solve didn't produce an optimal one.
    #[error("no solution available")]
    NoSolution,

    /// The backend ended up in a state that this crate doesn't know about.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, LpError>;
