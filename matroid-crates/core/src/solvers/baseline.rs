use log::debug;

use super::SolverError;
use crate::basic_types::ApproximationRatio;
use crate::basic_types::ApproximationSolution;
use crate::basic_types::ElementId;
use crate::problem::MatroidProblem;

/// Greedily adds every element of the ground set in index order, keeping those which the problem
/// accepts.
///
/// The result is a maximal common independent set, which is within a factor `1/k` of the optimum.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaselineSolver;

impl BaselineSolver {
    pub fn solve(
        &self,
        problem: &mut MatroidProblem,
    ) -> Result<ApproximationSolution, SolverError> {
        let mut session = problem.session()?;

        let mut elements = vec![];
        for element in ElementId::range(session.ground_set_size()) {
            if session.try_add_element(element)? {
                elements.push(element);
            }
        }

        let ratio = ApproximationRatio::proven(1.0 / session.num_matroids() as f64);
        debug!(
            "Baseline selected {} of {} elements",
            elements.len(),
            session.ground_set_size()
        );

        session.finish()?;
        Ok(ApproximationSolution::new(ratio, elements))
    }
}
