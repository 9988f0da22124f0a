//! # Problems over exact rationals
//!
//! Small combinatorial problems of which the linear relaxation has an integral, unique optimum.
use qif_lp::{LinearProgram, Objective, RationalBig, SolverConfig, RB};

/// # Generation and execution
mod test;

/// Costs of shipping a unit from a supplier (row) to a customer (column).
const TRANSPORT_COSTS: [[i32; 3]; 2] = [[8, 6, 10], [9, 12, 13]];
const SUPPLY: [i32; 2] = [20, 30];
const DEMAND: [i32; 3] = [10, 25, 15];

/// Minimize shipping costs, suppliers have a limited stock and the demand must be met exactly.
///
/// # Return value
///
/// The program and its variables, `[supplier][customer]`.
fn transportation() -> (LinearProgram<RationalBig>, Vec<Vec<usize>>) {
    let mut lp = LinearProgram::new();
    lp.set_objective(Objective::Minimize);

    let shipped = lp.make_var_grid(SUPPLY.len(), DEMAND.len(), Some(RB!(0)), None).unwrap();
    for (supplier, &stock) in SUPPLY.iter().enumerate() {
        let row = lp.make_con(None, Some(RB!(stock))).unwrap();
        for customer in 0..DEMAND.len() {
            lp.set_con_coeff(row, shipped[supplier][customer], RB!(1), false).unwrap();
            lp.set_obj_coeff(shipped[supplier][customer], RB!(TRANSPORT_COSTS[supplier][customer]), false).unwrap();
        }
    }
    for (customer, &demand) in DEMAND.iter().enumerate() {
        let row = lp.make_con(Some(RB!(demand)), Some(RB!(demand))).unwrap();
        for supplier in 0..SUPPLY.len() {
            lp.set_con_coeff(row, shipped[supplier][customer], RB!(1), false).unwrap();
        }
    }

    (lp, shipped)
}

/// Assign each worker (row) to exactly one task (column) at minimal total cost.
fn assignment(costs: &[[i32; 3]; 3], config: SolverConfig) -> (LinearProgram<RationalBig>, Vec<Vec<usize>>) {
    let mut lp = LinearProgram::with_config(config).unwrap();
    lp.set_objective(Objective::Minimize);

    let assigned = lp.make_var_grid(3, 3, Some(RB!(0)), Some(RB!(1))).unwrap();
    for worker in 0..3 {
        let row = lp.make_con(Some(RB!(1)), Some(RB!(1))).unwrap();
        for task in 0..3 {
            lp.set_con_coeff(row, assigned[worker][task], RB!(1), false).unwrap();
            lp.set_obj_coeff(assigned[worker][task], RB!(costs[worker][task]), false).unwrap();
        }
    }
    for task in 0..3 {
        let row = lp.make_con(Some(RB!(1)), Some(RB!(1))).unwrap();
        for worker in 0..3 {
            lp.set_con_coeff(row, assigned[worker][task], RB!(1), false).unwrap();
        }
    }

    (lp, assigned)
}
