use approx::assert_abs_diff_eq;

use qif_lp::{BackendKind, ConstraintType, LinearProgram, LpError, Method, Objective, SolverConfig, Status, Verbosity};

use super::{configs, diet, TOLERANCE};

#[test]
fn diet_problem() {
    for config in configs() {
        let mut lp = diet(config);
        assert!(lp.solve().unwrap(), "{config:?}");
        assert_eq!(lp.status(), Some(Status::Optimal));
        assert_abs_diff_eq!(lp.objective().unwrap(), 7_f64, epsilon = TOLERANCE);

        let values = lp.solution().unwrap();
        assert_abs_diff_eq!(values[0], 1_f64, epsilon = TOLERANCE);
        assert_abs_diff_eq!(values[1], 1_f64, epsilon = TOLERANCE);
        assert_abs_diff_eq!(values[2], 0_f64, epsilon = TOLERANCE);
        assert_abs_diff_eq!(lp.row_value(0).unwrap(), 3_f64, epsilon = TOLERANCE);
    }
}

#[test]
fn dense_interface() {
    for config in configs() {
        let mut lp = LinearProgram::<f64>::with_config(config).unwrap();
        lp.from_matrix(&[vec![1_f64, 2_f64], vec![3_f64, 1_f64]], &[1_f64, 2_f64], &[0.6, 0.5], &[]).unwrap();
        assert!(lp.solve().unwrap());
        assert_abs_diff_eq!(lp.objective().unwrap(), 0.46, epsilon = TOLERANCE);

        lp.set_objective(Objective::Minimize);
        lp.from_matrix(
            &[vec![1_f64, 2_f64, 2_f64], vec![2_f64, 1_f64, 2_f64], vec![2_f64, 2_f64, 1_f64]],
            &[20_f64; 3],
            &[-10_f64, -12_f64, -12_f64],
            &[ConstraintType::Less; 3],
        ).unwrap();
        assert!(lp.solve().unwrap());
        assert_abs_diff_eq!(lp.objective().unwrap(), -136_f64, epsilon = TOLERANCE);
        for &value in lp.solution().unwrap() {
            assert_abs_diff_eq!(value, 4_f64, epsilon = TOLERANCE);
        }
    }
}

#[test]
fn infinite_bounds() {
    let mut lp = LinearProgram::<f64>::new();
    let x = lp.make_var(Some(f64::NEG_INFINITY), Some(f64::INFINITY)).unwrap();
    assert_eq!(lp.variable(x).unwrap().lower_bound, None);
    assert_eq!(lp.variable(x).unwrap().upper_bound, None);
    assert_eq!(lp.make_con(Some(f64::NEG_INFINITY), None), Err(LpError::InvalidConstraint));

    // max x, x <= 3 with x free
    let row = lp.make_con(None, Some(3_f64)).unwrap();
    lp.set_con_coeff(row, x, 1_f64, false).unwrap();
    lp.set_obj_coeff(x, 1_f64, false).unwrap();
    assert!(lp.solve().unwrap());
    assert_abs_diff_eq!(lp.value(x).unwrap(), 3_f64, epsilon = TOLERANCE);
}

#[test]
fn unsupported_configurations() {
    let invalid = [
        SolverConfig::exact(),
        SolverConfig::floating().with_method(Method::SimplexPrimal),
        SolverConfig::floating().with_backend(BackendKind::Exact),
        SolverConfig::interior().with_presolve(true),
        SolverConfig::interior().with_method(Method::SimplexDualPrimal),
    ];
    for config in invalid {
        assert!(
            matches!(LinearProgram::<f64>::with_config(config), Err(LpError::UnsupportedOperation(_))),
            "{config:?}",
        );
    }
}

#[test]
fn verbose_backends() {
    for config in configs() {
        let mut lp = diet(config.with_verbosity(Verbosity::All));
        assert!(lp.solve().unwrap());
        assert_eq!(lp.config().verbosity, Verbosity::All);
    }
}

#[test]
fn infeasible_or_unbounded() {
    for config in configs() {
        let mut lp = diet(config);
        // Nothing may be bought anymore
        let nothing = lp.make_con(None, Some(0_f64)).unwrap();
        for food in 0..lp.nr_variables() {
            lp.set_con_coeff(nothing, food, 1_f64, false).unwrap();
        }
        assert!(!lp.solve().unwrap());
        assert!(matches!(lp.status(), Some(Status::Infeasible | Status::InfeasibleOrUnbounded)));
        assert_eq!(lp.solution(), Err(LpError::NoSolution));

        let mut lp = diet(config);
        lp.set_objective(Objective::Maximize);
        assert!(!lp.solve().unwrap());
        assert!(matches!(lp.status(), Some(Status::Unbounded | Status::InfeasibleOrUnbounded)));
    }
}
