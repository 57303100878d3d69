use std::ops::Deref;
use std::ops::DerefMut;

use log::error;

use super::MatroidProblem;
use super::ProblemError;

/// Exclusive access to a [`MatroidProblem`] for the duration of one solver run.
///
/// A session can only be started on an empty problem, and it removes every element again when it
/// is dropped, on every exit path of the run. Solution snapshots therefore have to be taken before
/// the session ends.
#[derive(Debug)]
pub struct ProblemSession<'problem> {
    problem: &'problem mut MatroidProblem,
}

impl<'problem> ProblemSession<'problem> {
    pub(crate) fn start(
        problem: &'problem mut MatroidProblem,
    ) -> Result<ProblemSession<'problem>, ProblemError> {
        if !problem.is_empty() {
            return Err(ProblemError::NotDrained {
                num_members: problem.num_members(),
            });
        }

        Ok(ProblemSession { problem })
    }

    /// Ends the session, draining the problem and reporting any failure to do so.
    pub fn finish(self) -> Result<(), ProblemError> {
        self.problem.reset()
    }
}

impl Deref for ProblemSession<'_> {
    type Target = MatroidProblem;

    fn deref(&self) -> &Self::Target {
        self.problem
    }
}

impl DerefMut for ProblemSession<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.problem
    }
}

impl Drop for ProblemSession<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.problem.reset() {
            error!("Could not drain the problem at the end of a session: {error}");
        }
    }
}
