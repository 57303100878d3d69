use thiserror::Error;

use crate::basic_types::ElementId;
use crate::oracles::OracleError;

/// Errors which occur when building or mutating a [`MatroidProblem`].
///
/// All of them indicate a programming error on the side of the caller, or a corrupted oracle.
///
/// [`MatroidProblem`]: super::MatroidProblem
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("a problem needs at least one matroid")]
    NoMatroids,
    #[error("the ground set has {expected} elements, but the {oracle} oracle was built for {actual}")]
    GroundSetMismatch {
        oracle: String,
        expected: usize,
        actual: usize,
    },
    #[error("hyperedge {edge} has {actual} endpoints, expected {expected}")]
    InconsistentEdgeRank {
        edge: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{element} is outside of the ground set of size {ground_set_size}")]
    ElementOutOfRange {
        element: ElementId,
        ground_set_size: usize,
    },
    #[error("{element} is already a member of the solution")]
    AlreadyAMember { element: ElementId },
    #[error("{element} is not a member of the solution")]
    NotAMember { element: ElementId },
    #[error("the problem still holds {num_members} elements from a previous run")]
    NotDrained { num_members: usize },
    #[error("the {oracle} oracle reported a contract violation: {source}")]
    Oracle {
        oracle: String,
        #[source]
        source: OracleError,
    },
}
