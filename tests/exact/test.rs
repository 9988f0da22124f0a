use qif_lp::{ConstraintType, LinearProgram, LpError, Objective, PivotRuleKind, RationalBig, SolverConfig, Status, RB};

use super::{assignment, transportation};

#[test]
fn transportation_problem() {
    let (mut lp, shipped) = transportation();
    assert!(lp.solve().unwrap());
    assert_eq!(lp.objective(), Ok(RB!(465)));

    let expected = [[0, 20, 0], [10, 5, 15]];
    for (supplier, row) in expected.iter().enumerate() {
        for (customer, &amount) in row.iter().enumerate() {
            assert_eq!(lp.value(shipped[supplier][customer]), Ok(RB!(amount)));
        }
    }
    // First supplier is sold out
    assert_eq!(lp.row_value(0), Ok(RB!(20)));
}

#[test]
fn assignment_problem() {
    let costs = [[4, 1, 3], [2, 0, 5], [3, 2, 2]];
    for rule in [PivotRuleKind::FirstProfitable, PivotRuleKind::Bland] {
        let (mut lp, assigned) = assignment(&costs, SolverConfig::exact().with_pivot_rule(rule));
        assert!(lp.solve().unwrap());
        assert_eq!(lp.objective(), Ok(RB!(5)));
        for (worker, task) in [(0, 1), (1, 0), (2, 2)] {
            assert_eq!(lp.value(assigned[worker][task]), Ok(RB!(1)));
        }
    }
}

#[test]
fn dense_interface() {
    let mut lp = LinearProgram::<RationalBig>::new();
    lp.from_matrix(
        &[vec![RB!(1), RB!(1), RB!(0)], vec![RB!(0), RB!(1), RB!(1)]],
        &[RB!(1), RB!(1)],
        &[RB!(1), RB!(2), RB!(-1)],
        &[],
    ).unwrap();
    assert!(lp.solve().unwrap());
    assert_eq!(lp.objective(), Ok(RB!(2)));

    // Replacing the problem keeps the objective direction
    lp.set_objective(Objective::Minimize);
    let sense = ['<', '>', '>'].map(|symbol| ConstraintType::try_from(symbol).unwrap());
    lp.from_matrix(
        &[vec![RB!(3), RB!(-4)], vec![RB!(1), RB!(2)], vec![RB!(1), RB!(0)]],
        &[RB!(12), RB!(4), RB!(1)],
        &[RB!(3), RB!(4)],
        &sense,
    ).unwrap();
    assert_eq!(lp.status(), None);
    assert!(lp.solve().unwrap());
    assert_eq!(lp.objective(), Ok(RB!(9)));
    assert_eq!(lp.solution(), Ok(&[RB!(1), RB!(3, 2)][..]));
}

#[test]
fn fractional_data() {
    // max x + y, x / 3 + y / 2 <= 1, x <= 3 / 2
    let mut lp = LinearProgram::<RationalBig>::new();
    let x = lp.make_var(Some(RB!(0)), Some(RB!(3, 2))).unwrap();
    let y = lp.make_var(Some(RB!(0)), None).unwrap();
    let row = lp.make_con(None, Some(RB!(1))).unwrap();
    lp.set_con_coeff(row, x, RB!(1, 3), false).unwrap();
    lp.set_con_coeff(row, y, RB!(1, 2), false).unwrap();
    lp.set_obj_coeff(x, RB!(1), false).unwrap();
    lp.set_obj_coeff(y, RB!(1), false).unwrap();

    assert!(lp.solve().unwrap());
    assert_eq!(lp.solution(), Ok(&[RB!(3, 2), RB!(1)][..]));
    assert_eq!(lp.objective(), Ok(RB!(5, 2)));
}

#[test]
fn invalid_input() {
    let mut lp = LinearProgram::<RationalBig>::new();
    assert_eq!(lp.make_var(Some(RB!(2)), Some(RB!(1))), Err(LpError::InvalidBounds));
    assert_eq!(lp.make_con(None, None), Err(LpError::InvalidConstraint));
    assert!(matches!(lp.set_obj_coeff(0, RB!(1), false), Err(LpError::InvalidSize(_))));
    assert_eq!(ConstraintType::try_from('~'), Err(LpError::InvalidSense('~')));

    assert!(matches!(
        LinearProgram::<RationalBig>::with_config(SolverConfig::floating()),
        Err(LpError::UnsupportedOperation(_)),
    ));
    assert!(matches!(lp.to_mps(), Err(LpError::UnsupportedOperation(_))));
    assert_eq!(lp.status(), None);
    assert_eq!(Status::InfeasibleOrUnbounded.to_string(), "infeasible or unbounded");
}
