//! # Rational numbers
//!
//! Arbitrary precision rationals make every comparison in the simplex method exact. They are the
//! element type of choice for the exact strategy.
pub use num_bigint::BigInt;
pub use num_rational::BigRational;
use num_rational::Ratio;

use crate::algorithm::two_phase::TwoPhase;
use crate::config::SolverConfig;
use crate::data::number_types::traits::{Exact, LpNumber, NumberKind};
use crate::error::Result;

/// Rational number with arbitrary size numerator and denominator.
pub type RationalBig = BigRational;

macro_rules! impl_exact {
    ($($in_t:ty),*) => {
        $(
            /// Except for the finiteness of the fixed size types, this is correct.
            impl Exact for Ratio<$in_t> {
            }
        )*
    }
}
impl_exact!(i32, i64, i128, BigInt);

impl LpNumber for RationalBig {
    const KIND: NumberKind = NumberKind::Exact;
    type Strategy = TwoPhase;

    fn strategy(config: &SolverConfig) -> Result<Self::Strategy> {
        config.validate(Self::KIND)?;
        Ok(TwoPhase::new(config.pivot_rule))
    }

    fn default_config() -> SolverConfig {
        SolverConfig::exact()
    }

    fn to_backend(&self) -> Option<f64> {
        None
    }

    fn from_backend(_value: f64) -> Option<Self> {
        None
    }
}

/// Shorthand for creating a `RationalBig`.
///
/// `RB!(3)` is the integer three, `RB!(1, 2)` is one half.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::RationalBig::from_integer($crate::BigInt::from($value))
    };
    ($numer:expr, $denom:expr) => {
        $crate::RationalBig::new($crate::BigInt::from($numer), $crate::BigInt::from($denom))
    };
}
