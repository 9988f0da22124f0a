//! # Integration tests that require a look inside the crate.
//!
//! Every problem is followed through the pipeline: the general form, the canonical form, the
//! solution of the canonical form and the mapped solution. The same problem is then solved by
//! each available floating point configuration.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn canonical_form()`
//! * `fn canonical_solution()`
//! * `fn float_form()`
use approx::assert_abs_diff_eq;
use num_traits::ToPrimitive;

use crate::config::SolverConfig;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::rational::RationalBig;


const TOLERANCE: f64 = 1e-6;

/// All floating point configurations compiled into the crate.
fn float_configs() -> Vec<SolverConfig> {
    let mut configs = vec![SolverConfig::floating(), SolverConfig::floating().with_presolve(true)];
    if SolverConfig::interior().backend.is_available() {
        configs.push(SolverConfig::interior());
    }
    configs
}

/// Check that the optimum satisfies every bound, without any tolerance.
fn assert_exact_feasible(lp: &LinearProgram<RationalBig>) {
    let values = lp.solution().unwrap();
    assert_eq!(values.len(), lp.nr_variables());
    for (variable, value) in values.iter().enumerate() {
        let variable = lp.variable(variable).unwrap();
        assert!(variable.lower_bound.as_ref().is_none_or(|lower| lower <= value));
        assert!(variable.upper_bound.as_ref().is_none_or(|upper| value <= upper));
    }
    for constraint in 0..lp.nr_constraints() {
        let value = lp.row_value(constraint).unwrap();
        let constraint = lp.constraint(constraint).unwrap();
        assert!(constraint.lower_bound.as_ref().is_none_or(|lower| *lower <= value));
        assert!(constraint.upper_bound.as_ref().is_none_or(|upper| value <= *upper));
    }
}

/// Check that the optimum satisfies every bound up to `TOLERANCE`.
fn assert_float_feasible(lp: &LinearProgram<f64>) {
    let values = lp.solution().unwrap();
    assert_eq!(values.len(), lp.nr_variables());
    for (variable, &value) in values.iter().enumerate() {
        let variable = lp.variable(variable).unwrap();
        assert!(variable.lower_bound.is_none_or(|lower| lower - TOLERANCE <= value));
        assert!(variable.upper_bound.is_none_or(|upper| value <= upper + TOLERANCE));
    }
    for constraint in 0..lp.nr_constraints() {
        let value = lp.row_value(constraint).unwrap();
        let constraint = lp.constraint(constraint).unwrap();
        assert!(constraint.lower_bound.is_none_or(|lower| lower - TOLERANCE <= value));
        assert!(constraint.upper_bound.is_none_or(|upper| value <= upper + TOLERANCE));
    }
}

/// Solve the exact and the floating point version and compare the optimal values.
fn assert_same_optimum(mut exact: LinearProgram<RationalBig>, float: impl Fn(SolverConfig) -> LinearProgram<f64>) {
    assert!(exact.solve().unwrap());
    assert_exact_feasible(&exact);
    let objective = exact.objective().unwrap().to_f64().unwrap();
    let values = exact.solution().unwrap().iter().map(|value| value.to_f64().unwrap()).collect::<Vec<_>>();

    for config in float_configs() {
        let mut lp = float(config);
        assert!(lp.solve().unwrap(), "{config:?}");
        assert_float_feasible(&lp);
        assert_abs_diff_eq!(lp.objective().unwrap(), objective, epsilon = TOLERANCE);
        for (computed, expected) in lp.solution().unwrap().iter().zip(&values) {
            assert_abs_diff_eq!(computed, expected, epsilon = TOLERANCE);
        }
    }
}
