//! Exchange-based local search for matroid intersection.
//!
//! The search grows a common independent set by exchanges which remove `i` members and add `i + 1`
//! other elements. Exchanges are tried for an increasing neighbourhood size `s`, which bounds `i`.
//! Once no improving exchange with `i <= s` exists, the solution is `s`-exchange optimal, which
//! certifies a lower bound on its quality (see [`approximation_ratio`]). When the solution has
//! exactly `s` elements and still cannot be improved, it is optimal.
//!
//! The search is anytime: after every exhausted neighbourhood it records a checkpoint, and when its
//! [`TerminationCondition`] fires it stops with the best solution found so far.

mod certificate;
mod exchange;

use std::time::Duration;
use std::time::Instant;

pub use certificate::*;
use exchange::ExchangeAttempt;
use log::debug;
use log::info;

use crate::basic_types::ApproximationRatio;
use crate::basic_types::ApproximationSolution;
use crate::create_statistics_struct;
use crate::problem::MatroidProblem;
use crate::solvers::SolverError;
use crate::statistics::log_statistic;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::TerminationCondition;

create_statistics_struct!(
    /// Statistics about the exploration of exchange neighbourhoods.
    LocalSearchStatistics {
        /// The number of neighbourhood sizes which were exhausted
        num_neighbourhoods_explored: u64,
        /// The number of calls to the exchange search, one per number of removals
        num_exchange_attempts: u64,
        /// The number of exchanges which grew the solution
        num_improving_exchanges: u64,
        /// The number of elements added back while undoing failed exchanges
        num_restorations: u64,
});

/// The certificates produced by one run of [`LocalSearch`].
#[derive(Clone, Debug, PartialEq)]
pub struct LocalSearchOutcome {
    /// One snapshot per exhausted neighbourhood size, plus one for the final state. Later
    /// checkpoints never contain fewer elements than earlier ones.
    pub checkpoints: Vec<ApproximationSolution>,
    /// The neighbourhood size at which the search ended.
    pub num_steps: usize,
    /// Whether the termination condition ended the search before the solution was certified
    /// optimal.
    pub stopped_early: bool,
}

impl LocalSearchOutcome {
    /// The last, and therefore largest, checkpoint.
    pub fn best(&self) -> Option<&ApproximationSolution> {
        self.checkpoints.last()
    }
}

/// Remembers that a termination condition fired, so every later poll agrees.
#[derive(Debug)]
struct Latched<T> {
    condition: T,
    fired: bool,
}

impl<T: TerminationCondition> TerminationCondition for Latched<T> {
    fn should_stop(&mut self) -> bool {
        if !self.fired {
            self.fired = self.condition.should_stop();
        }
        self.fired
    }
}

/// The escalating local search.
///
/// Once its termination condition has fired, later calls to [`LocalSearch::solve`] stop
/// immediately.
#[derive(Debug)]
pub struct LocalSearch<T> {
    termination: Latched<T>,
    statistics: LocalSearchStatistics,
    time_spent: Duration,
}

impl<T: TerminationCondition> LocalSearch<T> {
    pub fn new(termination: T) -> LocalSearch<T> {
        LocalSearch {
            termination: Latched {
                condition: termination,
                fired: false,
            },
            statistics: LocalSearchStatistics::default(),
            time_spent: Duration::ZERO,
        }
    }

    pub fn statistics(&self) -> LocalSearchStatistics {
        self.statistics
    }

    /// Runs the search on `problem`, which has to be empty, and leaves it empty again.
    pub fn solve(
        &mut self,
        problem: &mut MatroidProblem,
    ) -> Result<LocalSearchOutcome, SolverError> {
        let started_at = Instant::now();
        let num_matroids = problem.num_matroids();
        // Fail before searching if no certificate can be issued for this problem.
        let _ = approximation_ratio(1, num_matroids)?;

        let mut session = problem.session()?;
        let mut attempt = ExchangeAttempt::new(session.ground_set_size());
        let mut checkpoints = vec![];
        let mut neighbourhood_size = 0;

        let stopped_early = loop {
            if !self.termination.should_stop() {
                self.explore_neighbourhood(&mut session, &mut attempt, neighbourhood_size)?;
            }

            if self.termination.fired {
                info!(
                    "Local search stopped at neighbourhood size {neighbourhood_size} with a solution of size {}",
                    session.num_members()
                );
                let ratio = match neighbourhood_size {
                    0 => ApproximationRatio::uncertified(),
                    s => approximation_ratio(s - 1, num_matroids)?,
                };
                checkpoints.push(ApproximationSolution::new(ratio, session.members().collect()));
                break true;
            }

            self.statistics.num_neighbourhoods_explored += 1;
            let size = session.num_members();
            debug!(
                "Neighbourhood size {neighbourhood_size} exhausted with a solution of size {size}"
            );

            if size == neighbourhood_size {
                checkpoints.push(ApproximationSolution::new(
                    ApproximationRatio::optimal(),
                    session.members().collect(),
                ));
                break false;
            }

            let ratio = approximation_ratio(neighbourhood_size, num_matroids)?;
            checkpoints.push(ApproximationSolution::new(ratio, session.members().collect()));
            neighbourhood_size += 1;
        };

        session.finish()?;
        self.statistics.num_restorations += attempt.num_restorations();
        self.time_spent += started_at.elapsed();

        Ok(LocalSearchOutcome {
            checkpoints,
            num_steps: neighbourhood_size,
            stopped_early,
        })
    }

    /// Applies improving exchanges with at most `neighbourhood_size` removals until there are none
    /// left, the solution has `neighbourhood_size` elements, or the search has to stop.
    fn explore_neighbourhood(
        &mut self,
        problem: &mut MatroidProblem,
        attempt: &mut ExchangeAttempt,
        neighbourhood_size: usize,
    ) -> Result<(), SolverError> {
        loop {
            let mut improved = false;

            for num_removals in 0..=neighbourhood_size {
                if self.termination.fired {
                    break;
                }

                self.statistics.num_exchange_attempts += 1;
                if attempt.try_exchange(problem, &mut self.termination, num_removals)? {
                    self.statistics.num_improving_exchanges += 1;
                    improved = true;
                    break;
                }
            }

            if !improved || self.termination.fired || problem.num_members() == neighbourhood_size {
                return Ok(());
            }
        }
    }

    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new(["localSearch"]));
            log_statistic("localSearchTime", self.time_spent.as_secs_f64());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::approximation_ratio;
    use super::LocalSearch;
    use crate::basic_types::CertificateKind;
    use crate::basic_types::ElementId;
    use crate::containers::StorageKey;
    use crate::oracles::IndependenceOracle;
    use crate::oracles::OracleError;
    use crate::oracles::PartitionOracle;
    use crate::problem::MatroidProblem;
    use crate::solvers::SolverError;
    use crate::termination::Indefinite;
    use crate::termination::TerminationCondition;
    use crate::termination::TimeBudget;

    /// Stops after the given number of polls.
    #[derive(Debug)]
    pub(crate) struct PollLimit(pub(crate) usize);

    impl TerminationCondition for PollLimit {
        fn should_stop(&mut self) -> bool {
            if self.0 == 0 {
                return true;
            }
            self.0 -= 1;
            false
        }
    }

    /// Accepts every element until it has been removed once; afterwards that element is refused.
    #[derive(Debug)]
    struct SingleUseOracle {
        ground_set_size: usize,
        is_present: Vec<bool>,
        was_removed: Vec<bool>,
    }

    impl SingleUseOracle {
        fn new(ground_set_size: usize) -> SingleUseOracle {
            SingleUseOracle {
                ground_set_size,
                is_present: vec![false; ground_set_size],
                was_removed: vec![false; ground_set_size],
            }
        }
    }

    impl IndependenceOracle for SingleUseOracle {
        fn name(&self) -> &str {
            "single-use"
        }

        fn ground_set_size(&self) -> usize {
            self.ground_set_size
        }

        fn try_add(&mut self, element: ElementId) -> Result<bool, OracleError> {
            let index = element.index();
            if self.was_removed[index] {
                return Ok(false);
            }
            self.is_present[index] = true;
            Ok(true)
        }

        fn remove(&mut self, element: ElementId) -> Result<(), OracleError> {
            let index = element.index();
            if !self.is_present[index] {
                return Err(OracleError::ElementNotPresent { element });
            }
            self.is_present[index] = false;
            self.was_removed[index] = true;
            Ok(())
        }
    }

    #[test]
    fn empty_ground_set_is_optimal_immediately() {
        let mut problem = MatroidProblem::matching(2, 1, vec![]).expect("valid problem");

        let outcome = LocalSearch::new(Indefinite)
            .solve(&mut problem)
            .expect("no contract violations");

        assert_eq!(outcome.checkpoints.len(), 1);
        assert_eq!(outcome.num_steps, 0);
        assert!(!outcome.stopped_early);
        assert_eq!(
            outcome.checkpoints[0].ratio().kind(),
            CertificateKind::Optimal
        );
    }

    #[test]
    fn search_escapes_the_greedy_trap() {
        let mut problem =
            MatroidProblem::matching(2, 2, vec![vec![0, 0], vec![0, 1], vec![1, 0]])
                .expect("valid problem");

        let mut local_search = LocalSearch::new(Indefinite);
        let outcome = local_search
            .solve(&mut problem)
            .expect("no contract violations");

        let best = outcome.best().expect("at least one checkpoint");
        assert_eq!(best.indices(), vec![1, 2]);
        assert_eq!(best.ratio().kind(), CertificateKind::Optimal);
        assert!(problem.is_empty());

        let statistics = local_search.statistics();
        assert_eq!(statistics.num_neighbourhoods_explored, 3);
        assert_eq!(statistics.num_improving_exchanges, 2);
    }

    #[test]
    fn checkpoints_record_the_certificates_per_neighbourhood() {
        let mut problem =
            MatroidProblem::matching(2, 2, vec![vec![0, 0], vec![0, 1], vec![1, 0]])
                .expect("valid problem");

        let outcome = LocalSearch::new(Indefinite)
            .solve(&mut problem)
            .expect("no contract violations");

        let ratios = outcome
            .checkpoints
            .iter()
            .map(|checkpoint| checkpoint.approximation_ratio())
            .collect::<Vec<_>>();
        assert_eq!(ratios, vec![0.5, 2.0 / 3.0, 1.0]);
        assert_eq!(outcome.num_steps, 2);
    }

    #[test]
    fn exhausted_budget_gives_an_uncertified_checkpoint() {
        let mut problem = MatroidProblem::matching(2, 1, vec![vec![0, 0]]).expect("valid problem");

        let outcome = LocalSearch::new(TimeBudget::starting_now(Duration::ZERO))
            .solve(&mut problem)
            .expect("no contract violations");

        assert!(outcome.stopped_early);
        assert_eq!(outcome.checkpoints.len(), 1);
        assert_eq!(
            outcome.checkpoints[0].ratio().kind(),
            CertificateKind::Uncertified
        );
        assert!(outcome.checkpoints[0].is_empty());
    }

    #[test]
    fn unsupported_matroid_counts_are_rejected_before_searching() {
        let mut problem =
            MatroidProblem::matching(4, 1, vec![vec![0, 0, 0, 0]]).expect("valid problem");

        let result = LocalSearch::new(Indefinite).solve(&mut problem);

        assert_eq!(
            result,
            Err(SolverError::UnsupportedMatroidCount { matroid_count: 4 })
        );
        assert!(!problem.contains(ElementId::new(0)));
    }

    #[test]
    fn refused_restoration_aborts_the_search() {
        // Elements 0 and 1 share slot 0. Swapping 0 out for two others fails since only 1 fits,
        // and putting 0 back is then refused.
        let oracles: Vec<Box<dyn IndependenceOracle>> = vec![
            Box::new(PartitionOracle::new(vec![0, 0, 1], 2).expect("valid slots")),
            Box::new(SingleUseOracle::new(3)),
        ];
        let mut problem = MatroidProblem::new(3, oracles).expect("valid problem");

        let result = LocalSearch::new(Indefinite).solve(&mut problem);

        assert_eq!(
            result,
            Err(SolverError::RestorationFailed {
                element: ElementId::new(0)
            })
        );
        assert!(problem.is_empty());
    }

    #[test]
    fn stop_in_a_later_neighbourhood_keeps_the_last_completed_certificate() {
        let mut num_later_stops = 0;

        for poll_limit in 0..500 {
            let mut problem =
                MatroidProblem::matching(2, 2, vec![vec![0, 0], vec![0, 1], vec![1, 0]])
                    .expect("valid problem");

            let outcome = LocalSearch::new(PollLimit(poll_limit))
                .solve(&mut problem)
                .expect("no contract violations");
            assert!(problem.is_empty());

            if !outcome.stopped_early || outcome.num_steps == 0 {
                continue;
            }
            num_later_stops += 1;

            let last = outcome.best().expect("a checkpoint is recorded on stop");
            let expected = approximation_ratio(outcome.num_steps - 1, 2).expect("k = 2");
            assert_eq!(last.ratio(), expected);
            assert_eq!(last.ratio().kind(), CertificateKind::Proven);
            assert!(outcome
                .checkpoints
                .windows(2)
                .all(|pair| pair[0].len() <= pair[1].len()));
        }

        assert!(num_later_stops > 0);
    }
}
