//! # Problems over floating point numbers
//!
//! Every problem is solved with each backend that is compiled in, with and without presolving
//! where the backend allows it.
use qif_lp::{LinearProgram, Objective, SolverConfig};

/// # Generation and execution
mod test;

const TOLERANCE: f64 = 1e-6;

fn configs() -> Vec<SolverConfig> {
    let mut configs = vec![SolverConfig::floating(), SolverConfig::floating().with_presolve(true)];
    if SolverConfig::interior().backend.is_available() {
        configs.push(SolverConfig::interior());
    }
    configs
}

/// A diet: cover minimal amounts of two nutrients with three foods at minimal cost.
///
/// The third food is capped, the optimum is to buy one unit of each of the first two foods.
fn diet(config: SolverConfig) -> LinearProgram<f64> {
    let mut lp = LinearProgram::with_config(config).unwrap();
    lp.set_objective(Objective::Minimize);

    let foods = [(2_f64, 1_f64, 3_f64), (1_f64, 3_f64, 4_f64), (1_f64, 1_f64, 5_f64)];
    let upper = [None, None, Some(0.5)];
    let nutrient_rows = [lp.make_con(Some(3_f64), None).unwrap(), lp.make_con(Some(4_f64), None).unwrap()];
    for (&(first, second, price), upper) in foods.iter().zip(upper) {
        let food = lp.make_var(Some(0_f64), upper).unwrap();
        lp.set_con_coeff(nutrient_rows[0], food, first, false).unwrap();
        lp.set_con_coeff(nutrient_rows[1], food, second, false).unwrap();
        lp.set_obj_coeff(food, price, false).unwrap();
    }

    lp
}
