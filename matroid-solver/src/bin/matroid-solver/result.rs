use matroid_solver::core::ProblemError;
use matroid_solver::core::SolverError;
use thiserror::Error;

use crate::validation::ValidationError;

pub(crate) type MatroidSolverResult<T> = Result<T, MatroidSolverError>;

#[derive(Error, Debug)]
pub(crate) enum MatroidSolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance could not be built, more details: {0}")]
    Problem(#[from] ProblemError),
    #[error("A solver failed, more details: {0}")]
    Solver(#[from] SolverError),
    #[error("The {algorithm} solution failed validation, more details: {source}")]
    InvalidSolution {
        algorithm: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("The report could not be written, more details: {0}")]
    Serialisation(#[from] serde_json::Error),
    #[error("The edge probability {0} is not within [0, 1].")]
    InvalidProbability(f64),
}

impl MatroidSolverError {
    pub(crate) fn invalid_solution(algorithm: &'static str, source: ValidationError) -> Self {
        Self::InvalidSolution { algorithm, source }
    }
}
