//! A [`MatroidProblem`] combines the oracles of all matroids over one ground set and keeps them in
//! agreement: an element is either a member of every oracle's set or of none.

mod matroid_problem;
mod problem_error;
mod problem_session;

pub use matroid_problem::*;
pub use problem_error::*;
pub use problem_session::*;
