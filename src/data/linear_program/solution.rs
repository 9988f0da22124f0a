//! # Representation of solutions
//!
//! Once a linear program is solved, the solution is expressed in the variables of the problem as
//! the caller specified it. Variables introduced while bringing the problem in canonical form
//! (split free variables, slacks) are mapped back using the recorded transforms.
use crate::data::linear_program::canonical_form::VariableTransform;
use crate::data::linear_program::elements::Status;
use crate::data::number_types::traits::Field;
use crate::error::{LpError, Result};

/// Outcome of solving a linear program.
///
/// Values and the objective value are only present when the status is `Status::Optimal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    status: Status,
    /// Indexed by the variables of the original problem.
    values: Vec<F>,
    objective: Option<F>,
}

impl<F: Field> Solution<F> {
    /// A finite optimum.
    pub fn optimal(values: Vec<F>, objective: F) -> Self {
        Self {
            status: Status::Optimal,
            values,
            objective: Some(objective),
        }
    }

    /// Any other outcome.
    pub fn without_optimum(status: Status) -> Self {
        debug_assert_ne!(status, Status::Optimal);

        Self {
            status,
            values: Vec::new(),
            objective: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Value of each variable.
    ///
    /// # Errors
    ///
    /// `NoSolution` unless the solve ended with an optimum.
    pub fn values(&self) -> Result<&[F]> {
        match self.status {
            Status::Optimal => Ok(&self.values),
            _ => Err(LpError::NoSolution),
        }
    }

    /// Objective value at the optimum.
    ///
    /// # Errors
    ///
    /// `NoSolution` unless the solve ended with an optimum.
    pub fn objective(&self) -> Result<&F> {
        self.objective.as_ref().ok_or(LpError::NoSolution)
    }
}

/// Maps values of canonical variables back to the variables they were derived from.
///
/// `original = solved * scale + offset - solved[substitute]`, the last term only being present
/// for split free variables.
pub struct SolutionMapper<'a, F> {
    transforms: &'a [VariableTransform<F>],
}

impl<'a, F: Field> SolutionMapper<'a, F> {
    pub fn new(transforms: &'a [VariableTransform<F>]) -> Self {
        Self { transforms }
    }

    /// Compute the values of the original variables.
    ///
    /// # Arguments
    ///
    /// * `status`: Outcome of the solve that produced `solved`.
    /// * `solved`: Values of the canonical variables, at least one per transform.
    ///
    /// # Errors
    ///
    /// `NoSolution` if the status is not `Status::Optimal`, `InvalidSize` if `solved` doesn't
    /// contain a value for a variable that a transform refers to.
    pub fn map(&self, status: Status, solved: &[F]) -> Result<Vec<F>> {
        if status != Status::Optimal {
            return Err(LpError::NoSolution);
        }

        self.transforms.iter().enumerate().map(|(variable, transform)| {
            let value = solved.get(variable).ok_or_else(|| missing(variable, solved.len()))?;
            let mut original = value.clone() * transform.scale.clone() + transform.offset.clone();
            if let Some(substitute) = transform.substitute {
                let negative_part = solved.get(substitute)
                    .ok_or_else(|| missing(substitute, solved.len()))?;
                original -= negative_part.clone();
            }
            Ok(original)
        }).collect()
    }
}

fn missing(variable: usize, len: usize) -> LpError {
    LpError::InvalidSize(format!("no value for canonical variable {variable}, only {len} values"))
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::canonical_form::VariableTransform;
    use crate::data::linear_program::elements::Status;
    use crate::data::linear_program::solution::{Solution, SolutionMapper};
    use crate::error::LpError;
    use crate::RB;

    #[test]
    fn map_transforms() {
        let transforms = vec![
            // Free, split with the variable at index 3
            VariableTransform { substitute: Some(3), scale: RB!(1), offset: RB!(0) },
            // Upper bounded by 4
            VariableTransform { substitute: None, scale: RB!(-1), offset: RB!(4) },
            // Lower bounded by -5
            VariableTransform { substitute: None, scale: RB!(1), offset: RB!(-5) },
        ];
        let solved = vec![RB!(2), RB!(1), RB!(0), RB!(7, 2), RB!(9)];

        let mapped = SolutionMapper::new(&transforms).map(Status::Optimal, &solved);
        assert_eq!(mapped, Ok(vec![RB!(-3, 2), RB!(3), RB!(-5)]));
    }

    #[test]
    fn map_requires_optimum() {
        let transforms = vec![VariableTransform { substitute: None, scale: RB!(1), offset: RB!(0) }];
        let mapper = SolutionMapper::new(&transforms);
        assert_eq!(mapper.map(Status::Unbounded, &[RB!(1)]), Err(LpError::NoSolution));
        assert!(matches!(mapper.map(Status::Optimal, &[]), Err(LpError::InvalidSize(_))));
    }

    #[test]
    fn queries() {
        let solution = Solution::optimal(vec![1_f64, 2_f64], 3_f64);
        assert_eq!(solution.values(), Ok(&[1_f64, 2_f64][..]));
        assert_eq!(solution.objective(), Ok(&3_f64));

        let solution = Solution::<f64>::without_optimum(Status::Infeasible);
        assert_eq!(solution.status(), Status::Infeasible);
        assert_eq!(solution.values(), Err(LpError::NoSolution));
        assert_eq!(solution.objective(), Err(LpError::NoSolution));
    }
}
