//! # Solver configuration
//!
//! A single immutable value describing how a linear program is solved. It is handed to the model
//! at construction and validated against the element type right away, so unsupported
//! combinations are rejected before any work is done.
use enum_map::{Enum, EnumMap, enum_map};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::number_types::traits::NumberKind;
use crate::error::{LpError, Result};

/// Algorithm used to solve the linear program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Primal simplex.
    SimplexPrimal,
    /// Dual simplex.
    SimplexDual,
    /// Dual simplex to reach feasibility, primal simplex afterwards.
    SimplexDualPrimal,
    /// Interior point.
    Interior,
}

/// How much output a backend produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verbosity {
    /// Nothing.
    Off,
    /// Errors only.
    Error,
    /// Normal output.
    On,
    /// Everything, including per iteration output.
    All,
}

/// Engine that solves the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackendKind {
    /// The internal two phase simplex over exact rationals.
    Exact,
    /// The `minilp` floating point simplex.
    MiniLp,
    /// The `clarabel` interior point solver.
    Clarabel,
}

/// Pivot rule of the exact simplex method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Enum)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PivotRuleKind {
    /// First improving column, first strictly smallest ratio.
    #[default]
    FirstProfitable,
    /// First improving column, ratio ties broken by the smallest basic variable index.
    Bland,
}

/// What a backend can do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Methods the backend implements.
    pub methods: EnumMap<Method, bool>,
    /// Whether presolving may be requested together with a method.
    pub presolve: EnumMap<Method, bool>,
    /// Element types the backend computes with.
    pub number_kind: NumberKind,
}

impl BackendKind {
    /// Capability table of this backend.
    pub fn capabilities(self) -> Capabilities {
        match self {
            BackendKind::Exact => Capabilities {
                methods: enum_map! { Method::SimplexPrimal => true, _ => false },
                presolve: enum_map! { _ => false },
                number_kind: NumberKind::Exact,
            },
            BackendKind::MiniLp => Capabilities {
                methods: enum_map! { Method::SimplexDualPrimal => true, _ => false },
                presolve: enum_map! { Method::SimplexDualPrimal => true, _ => false },
                number_kind: NumberKind::Floating,
            },
            BackendKind::Clarabel => Capabilities {
                methods: enum_map! { Method::Interior => true, _ => false },
                presolve: enum_map! { _ => false },
                number_kind: NumberKind::Floating,
            },
        }
    }

    /// Whether this backend was compiled into the crate.
    pub fn is_available(self) -> bool {
        match self {
            BackendKind::Exact | BackendKind::MiniLp => true,
            BackendKind::Clarabel => cfg!(feature = "clarabel"),
        }
    }
}

/// Configuration of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Engine.
    pub backend: BackendKind,
    /// Algorithm.
    pub method: Method,
    /// Simplify the problem before handing it to the backend.
    pub presolve: bool,
    /// Backend output.
    pub verbosity: Verbosity,
    /// Only used by the exact backend.
    pub pivot_rule: PivotRuleKind,
}

impl SolverConfig {
    /// Default configuration for exact element types.
    pub fn exact() -> Self {
        Self {
            backend: BackendKind::Exact,
            method: Method::SimplexPrimal,
            presolve: false,
            verbosity: Verbosity::Off,
            pivot_rule: PivotRuleKind::default(),
        }
    }

    /// Default configuration for floating point element types.
    pub fn floating() -> Self {
        Self {
            backend: BackendKind::MiniLp,
            method: Method::SimplexDualPrimal,
            presolve: false,
            verbosity: Verbosity::Off,
            pivot_rule: PivotRuleKind::default(),
        }
    }

    /// Use the interior point backend.
    pub fn interior() -> Self {
        Self {
            backend: BackendKind::Clarabel,
            method: Method::Interior,
            ..Self::floating()
        }
    }

    #[must_use]
    pub fn with_backend(self, backend: BackendKind) -> Self {
        Self { backend, ..self }
    }

    #[must_use]
    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }

    #[must_use]
    pub fn with_presolve(self, presolve: bool) -> Self {
        Self { presolve, ..self }
    }

    #[must_use]
    pub fn with_verbosity(self, verbosity: Verbosity) -> Self {
        Self { verbosity, ..self }
    }

    #[must_use]
    pub fn with_pivot_rule(self, pivot_rule: PivotRuleKind) -> Self {
        Self { pivot_rule, ..self }
    }

    /// Check that this configuration can be used with element types of the given kind.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` when the backend is not compiled in, computes with another kind of
    /// numbers, doesn't implement the method, or can't presolve with that method.
    pub fn validate(&self, kind: NumberKind) -> Result<()> {
        if !self.backend.is_available() {
            return Err(LpError::UnsupportedOperation(format!(
                "backend {:?} is not compiled in", self.backend,
            )));
        }

        let capabilities = self.backend.capabilities();
        if capabilities.number_kind != kind {
            return Err(LpError::UnsupportedOperation(format!(
                "backend {:?} can't be used with {:?} element types", self.backend, kind,
            )));
        }
        if !capabilities.methods[self.method] {
            return Err(LpError::UnsupportedOperation(format!(
                "backend {:?} doesn't support method {:?}", self.backend, self.method,
            )));
        }
        if self.presolve && !capabilities.presolve[self.method] {
            return Err(LpError::UnsupportedOperation(format!(
                "backend {:?} doesn't support presolving with method {:?}", self.backend, self.method,
            )));
        }

        Ok(())
    }
}
