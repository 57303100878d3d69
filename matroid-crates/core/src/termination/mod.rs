//! A [`TerminationCondition`] is a condition which is polled by the local search during the
//! exploration of exchange neighbourhoods. It indicates when the search should stop, even if the
//! current solution has not been certified optimal. The most common example would be
//! [`TimeBudget`], which gives the search a certain wall-clock budget.
//!
//! Stopping is cooperative: the condition is only consulted between oracle mutations, so a stop
//! never interrupts an exchange halfway.

mod combinator;
mod indefinite;
mod time_budget;

pub use combinator::*;
pub use indefinite::*;
pub use time_budget::*;

/// The central trait that defines a termination condition. A termination condition determines when
/// the search should give up improving the current solution.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }
}
