use thiserror::Error;

use crate::basic_types::ElementId;
use crate::problem::ProblemError;

/// Errors which abort a solver run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error("no approximation ratio is known for the intersection of {matroid_count} matroids")]
    UnsupportedMatroidCount { matroid_count: usize },
    #[error("{element} was rejected while undoing a failed exchange")]
    RestorationFailed { element: ElementId },
    #[error("the exact matcher needs a bipartite matching problem, but {reason}")]
    NotBipartite { reason: String },
}
