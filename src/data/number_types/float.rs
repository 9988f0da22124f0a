//! # Floating point numbers
//!
//! Programs over floats are handed to an external backend. Their bounds may use the infinities
//! of the type, which are read as "no bound".
use crate::algorithm::external::ExternalSolverAdapter;
use crate::config::SolverConfig;
use crate::data::number_types::traits::{LpNumber, NumberKind};
use crate::error::Result;

impl LpNumber for f64 {
    const KIND: NumberKind = NumberKind::Floating;
    type Strategy = ExternalSolverAdapter;

    fn strategy(config: &SolverConfig) -> Result<Self::Strategy> {
        ExternalSolverAdapter::new(*config)
    }

    fn default_config() -> SolverConfig {
        SolverConfig::floating()
    }

    fn is_infinite(&self) -> bool {
        f64::is_infinite(*self)
    }

    fn to_backend(&self) -> Option<f64> {
        Some(*self)
    }

    fn from_backend(value: f64) -> Option<Self> {
        Some(value)
    }
}
