//! The algorithms which search for a large common independent set of a [`MatroidProblem`].
//!
//! Every solver opens a [`ProblemSession`] on the problem it is given, so the problem is empty
//! again when the solver returns, regardless of whether it succeeded.
//!
//! [`MatroidProblem`]: crate::problem::MatroidProblem
//! [`ProblemSession`]: crate::problem::ProblemSession

mod baseline;
mod exact_bipartite;
pub mod local_search;
mod solver_error;

pub use baseline::*;
pub use exact_bipartite::*;
pub use solver_error::*;
