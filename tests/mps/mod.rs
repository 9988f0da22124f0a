//! # MPS export
//!
//! Exported problems are compared against the text that another solver would read.
use qif_lp::LinearProgram;

/// # Generation and execution
mod test;

/// The problem of the MPS format article on Wikipedia, without the objective constant.
///
/// ```text
/// min x1 + 2 x2 + 3 x3, x1 + x2 <= 4, x1 + x3 >= 1, -x2 + x3 = 7, x2 in [-1, 1], x3 free
/// ```
fn wikipedia() -> LinearProgram<f64> {
    let mut lp = LinearProgram::new();
    lp.set_objective(qif_lp::Objective::Minimize);

    let x1 = lp.make_var(Some(0_f64), None).unwrap();
    let x2 = lp.make_var(Some(-1_f64), Some(1_f64)).unwrap();
    let x3 = lp.make_var(None, None).unwrap();
    for (variable, cost) in [(x1, 1_f64), (x2, 2_f64), (x3, 3_f64)] {
        lp.set_obj_coeff(variable, cost, false).unwrap();
    }

    let lim1 = lp.make_con(None, Some(4_f64)).unwrap();
    let lim2 = lp.make_con(Some(1_f64), None).unwrap();
    let myeqn = lp.make_con(Some(7_f64), Some(7_f64)).unwrap();
    lp.set_con_coeff(lim1, x1, 1_f64, false).unwrap();
    lp.set_con_coeff(lim1, x2, 1_f64, false).unwrap();
    lp.set_con_coeff(lim2, x1, 1_f64, false).unwrap();
    lp.set_con_coeff(lim2, x3, 1_f64, false).unwrap();
    lp.set_con_coeff(myeqn, x2, -1_f64, false).unwrap();
    lp.set_con_coeff(myeqn, x3, 1_f64, false).unwrap();

    lp
}
