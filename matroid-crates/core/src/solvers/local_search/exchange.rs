use crate::asserts::MATROID_ASSERT_ADVANCED;
use crate::asserts::MATROID_ASSERT_LEVEL_DEFINITION;
use crate::basic_types::ElementId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::matroid_assert_advanced;
use crate::matroid_assert_moderate;
use crate::matroid_assert_simple;
use crate::problem::MatroidProblem;
use crate::solvers::SolverError;
use crate::termination::TerminationCondition;

/// A change made to the solution during an exchange attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    Removed(ElementId),
    Added(ElementId),
}

/// Searches for an exchange which removes `i` members from the solution and adds `i + 1`
/// non-members.
///
/// The search is a backtracking scan over the ground set. Every change to the problem is pushed
/// on a trail, and a failing branch undoes exactly the changes it pushed, so after a failed attempt
/// the problem is in the state it was in before.
///
/// An element removed earlier in the attempt is *vacated* and may not be added again by the same
/// attempt.
#[derive(Debug)]
pub(crate) struct ExchangeAttempt {
    vacated: KeyedVec<ElementId, bool>,
    trail: Vec<Move>,
    num_restorations: u64,
}

impl ExchangeAttempt {
    pub(crate) fn new(ground_set_size: usize) -> ExchangeAttempt {
        ExchangeAttempt {
            vacated: KeyedVec::filled(ground_set_size, false),
            trail: vec![],
            num_restorations: 0,
        }
    }

    /// The number of removed elements which were added back while undoing failed branches.
    pub(crate) fn num_restorations(&self) -> u64 {
        self.num_restorations
    }

    /// Tries to grow the solution by one element through removing `num_removals` members and
    /// adding `num_removals + 1` others.
    ///
    /// Returns `Ok(false)` when no such exchange exists, or when `termination` asked to stop
    /// before one was found; in both cases the solution is unchanged.
    pub(crate) fn try_exchange(
        &mut self,
        problem: &mut MatroidProblem,
        termination: &mut impl TerminationCondition,
        num_removals: usize,
    ) -> Result<bool, SolverError> {
        matroid_assert_simple!(self.trail.is_empty());
        let size_before = problem.num_members();
        let members_before = if MATROID_ASSERT_LEVEL_DEFINITION >= MATROID_ASSERT_ADVANCED {
            problem.members().collect::<Vec<_>>()
        } else {
            vec![]
        };

        let found = self.remove_then_add(problem, termination, 0, num_removals, num_removals + 1)?;

        if found {
            matroid_assert_moderate!(problem.num_members() == size_before + 1);
            for change in self.trail.drain(..) {
                if let Move::Removed(element) = change {
                    self.vacated[element] = false;
                }
            }
        } else {
            matroid_assert_simple!(self.trail.is_empty());
            matroid_assert_moderate!(problem.num_members() == size_before);
            matroid_assert_advanced!(problem.members().eq(members_before));
        }

        Ok(found)
    }

    /// Removes `num_removals` members with an index of at least `start`, then adds
    /// `num_additions` elements.
    fn remove_then_add(
        &mut self,
        problem: &mut MatroidProblem,
        termination: &mut impl TerminationCondition,
        start: usize,
        num_removals: usize,
        num_additions: usize,
    ) -> Result<bool, SolverError> {
        if termination.should_stop() {
            return Ok(false);
        }
        if num_removals == 0 {
            return self.add(problem, termination, 0, num_additions);
        }

        for element in ElementId::range(problem.ground_set_size()).skip(start) {
            if termination.should_stop() {
                return Ok(false);
            }
            if !problem.contains(element) {
                continue;
            }

            let checkpoint = self.trail.len();
            problem.remove_element(element)?;
            self.vacated[element] = true;
            self.trail.push(Move::Removed(element));

            let next = element.index() + 1;
            if self.remove_then_add(problem, termination, next, num_removals - 1, num_additions)? {
                return Ok(true);
            }

            self.undo_until(problem, checkpoint)?;
        }

        Ok(false)
    }

    /// Adds `num_additions` elements with an index of at least `start` which are neither members
    /// nor vacated.
    fn add(
        &mut self,
        problem: &mut MatroidProblem,
        termination: &mut impl TerminationCondition,
        start: usize,
        num_additions: usize,
    ) -> Result<bool, SolverError> {
        if num_additions == 0 {
            return Ok(true);
        }
        if termination.should_stop() {
            return Ok(false);
        }

        for element in ElementId::range(problem.ground_set_size()).skip(start) {
            if termination.should_stop() {
                return Ok(false);
            }
            if self.vacated[element] || problem.contains(element) {
                continue;
            }
            if !problem.try_add_element(element)? {
                continue;
            }

            let checkpoint = self.trail.len();
            self.trail.push(Move::Added(element));

            if self.add(problem, termination, element.index() + 1, num_additions - 1)? {
                return Ok(true);
            }

            self.undo_until(problem, checkpoint)?;
        }

        Ok(false)
    }

    /// Pops the trail until it has `checkpoint` entries, reverting every popped move.
    fn undo_until(
        &mut self,
        problem: &mut MatroidProblem,
        checkpoint: usize,
    ) -> Result<(), SolverError> {
        while self.trail.len() > checkpoint {
            let Some(change) = self.trail.pop() else {
                break;
            };

            match change {
                Move::Added(element) => problem.remove_element(element)?,
                Move::Removed(element) => {
                    self.vacated[element] = false;
                    if !problem.try_add_element(element)? {
                        return Err(SolverError::RestorationFailed { element });
                    }
                    self.num_restorations += 1;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ExchangeAttempt;
    use crate::basic_types::ElementId;
    use crate::problem::MatroidProblem;
    use crate::solvers::local_search::tests::PollLimit;
    use crate::termination::Indefinite;

    /// The path a - b - c - d: edges (0,0), (1,0), (1,1) between two sides of two vertices. Taking
    /// the middle edge blocks both outer ones.
    fn path_problem() -> MatroidProblem {
        MatroidProblem::matching(2, 2, vec![vec![0, 0], vec![1, 0], vec![1, 1]])
            .expect("valid problem")
    }

    #[test]
    fn single_addition_succeeds_on_an_empty_solution() {
        let mut problem = path_problem();
        let mut attempt = ExchangeAttempt::new(3);

        assert_eq!(attempt.try_exchange(&mut problem, &mut Indefinite, 0), Ok(true));
        assert_eq!(problem.members().collect::<Vec<_>>(), vec![ElementId::new(0)]);
    }

    #[test]
    fn swap_of_one_for_two_grows_the_solution() {
        let mut problem = path_problem();
        let _ = problem.try_add_element(ElementId::new(1)).expect("in range");
        let mut attempt = ExchangeAttempt::new(3);

        assert_eq!(attempt.try_exchange(&mut problem, &mut Indefinite, 0), Ok(false));
        assert_eq!(attempt.try_exchange(&mut problem, &mut Indefinite, 1), Ok(true));
        assert_eq!(
            problem.members().collect::<Vec<_>>(),
            vec![ElementId::new(0), ElementId::new(2)]
        );
    }

    #[test]
    fn failed_attempt_restores_the_solution() {
        let mut problem = path_problem();
        let _ = problem.try_add_element(ElementId::new(0)).expect("in range");
        let _ = problem.try_add_element(ElementId::new(2)).expect("in range");
        let mut attempt = ExchangeAttempt::new(3);

        assert_eq!(attempt.try_exchange(&mut problem, &mut Indefinite, 1), Ok(false));
        assert_eq!(attempt.try_exchange(&mut problem, &mut Indefinite, 2), Ok(false));
        assert_eq!(
            problem.members().collect::<Vec<_>>(),
            vec![ElementId::new(0), ElementId::new(2)]
        );
        assert!(attempt.num_restorations() > 0);
    }

    #[test]
    fn vacated_elements_are_not_added_back() {
        // A single edge: removing it and adding two others is impossible, and re-adding the
        // removed edge must not count as one of the two.
        let mut problem = MatroidProblem::matching(2, 1, vec![vec![0, 0]]).expect("valid problem");
        let _ = problem.try_add_element(ElementId::new(0)).expect("in range");
        let mut attempt = ExchangeAttempt::new(1);

        assert_eq!(attempt.try_exchange(&mut problem, &mut Indefinite, 1), Ok(false));
        assert!(problem.contains(ElementId::new(0)));
    }

    #[test]
    fn stopped_attempt_leaves_the_solution_unchanged() {
        let mut problem = path_problem();
        let _ = problem.try_add_element(ElementId::new(1)).expect("in range");
        let mut attempt = ExchangeAttempt::new(3);

        assert_eq!(attempt.try_exchange(&mut problem, &mut PollLimit(3), 1), Ok(false));
        assert_eq!(problem.members().collect::<Vec<_>>(), vec![ElementId::new(1)]);
    }
}
