use qif_lp::{LinearProgram, RationalBig};
use qif_lp::io::mps::export;

use super::wikipedia;

const WIKIPEDIA: &str = "\
NAME PROG
ROWS
 N  OBJ
 L ROW1
 G ROW2
 E ROW3
COLUMNS
 X1 OBJ 1
 X1 ROW1 1
 X1 ROW2 1
 X2 OBJ 2
 X2 ROW1 1
 X2 ROW3 -1
 X3 OBJ 3
 X3 ROW2 1
 X3 ROW3 1
RHS
 RHS ROW1 4
 RHS ROW2 1
 RHS ROW3 7
BOUNDS
 LO BND X2 -1
 UP BND X2 1
 FR BND X3
ENDATA
";

#[test]
fn wikipedia_example() {
    let lp = wikipedia();
    assert_eq!(lp.to_mps().unwrap(), WIKIPEDIA);
    assert_eq!(export(&lp).unwrap(), WIKIPEDIA);
}

#[test]
fn unaffected_by_solving() {
    let mut lp = wikipedia();
    let before = lp.to_mps().unwrap();
    assert!(lp.solve().unwrap());
    assert_eq!(lp.to_mps().unwrap(), before);
    assert_eq!(lp.to_mps().unwrap(), lp.clone().to_mps().unwrap());
}

#[test]
fn nonnegative_dense_problem_has_no_bounds() {
    let mut lp = LinearProgram::<f64>::new();
    lp.from_matrix(&[vec![1_f64, 0_f64]], &[2.5], &[1_f64, -1_f64], &[]).unwrap();
    let mps = lp.to_mps().unwrap();
    assert!(!mps.contains("BOUNDS"));
    assert!(mps.contains(" X2 OBJ -1\nRHS\n"));

    lp.set_non_negative(false);
    lp.from_matrix(&[vec![1_f64, 0_f64]], &[2.5], &[1_f64, -1_f64], &[]).unwrap();
    let mps = lp.to_mps().unwrap();
    assert!(mps.ends_with("BOUNDS\n FR BND X1\n FR BND X2\nENDATA\n"));
}

#[test]
fn exact_types_are_not_exported() {
    let lp = LinearProgram::<RationalBig>::new();
    assert!(export(&lp).is_err());
}
