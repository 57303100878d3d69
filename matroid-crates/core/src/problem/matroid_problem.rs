use log::trace;

use super::ProblemError;
use super::ProblemSession;
use crate::basic_types::ElementId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::create_statistics_struct;
use crate::oracles::Endpoint;
use crate::oracles::EndpointOracle;
use crate::oracles::ForestCheck;
use crate::oracles::FunctionalForestOracle;
use crate::oracles::IndependenceOracle;
use crate::oracles::OracleError;
use crate::oracles::PartitionOracle;
use crate::oracles::TraversalForestOracle;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// Statistics about the oracle calls made through a [`MatroidProblem`].
    ProblemStatistics {
        /// The number of calls to [`MatroidProblem::try_add_element`]
        num_addition_attempts: u64,
        /// The number of additions which were rejected by one of the oracles
        num_rejected_additions: u64,
        /// The number of oracle removals performed to undo a partially accepted addition
        num_oracle_rollbacks: u64,
        /// The number of elements removed from the solution
        num_removals: u64,
});

/// The instance a [`MatroidProblem`] was built from; specialised solvers use it to check their
/// preconditions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstanceStructure {
    /// A `rank`-partite hypergraph with `vertices_per_part` vertices on each side. Every hyperedge
    /// lists its vertex on each side, and a solution is a matching.
    Matching {
        rank: usize,
        vertices_per_part: usize,
        edges: Vec<Vec<usize>>,
    },
    /// A directed graph whose `(tail, head)` edges should form vertex-disjoint paths.
    DirectedGraph {
        vertex_count: usize,
        edges: Vec<(usize, usize)>,
    },
    /// The oracles were supplied directly.
    Unstructured,
}

/// The intersection of `k` matroids over a shared ground set.
///
/// The problem owns one [`IndependenceOracle`] per matroid and a membership flag per element. The
/// flag of an element is set if and only if every oracle has accepted it and it has not been
/// removed since; [`MatroidProblem::try_add_element`] and [`MatroidProblem::remove_element`] are
/// the only ways to change either, and they keep the two in agreement.
#[derive(Debug)]
pub struct MatroidProblem {
    oracles: Vec<Box<dyn IndependenceOracle>>,
    membership: KeyedVec<ElementId, bool>,
    num_members: usize,
    structure: InstanceStructure,
    statistics: ProblemStatistics,
}

impl MatroidProblem {
    /// Creates a problem over `ground_set_size` elements from the given oracles.
    ///
    /// Oracles are queried in the order in which they are given.
    pub fn new(
        ground_set_size: usize,
        oracles: Vec<Box<dyn IndependenceOracle>>,
    ) -> Result<MatroidProblem, ProblemError> {
        MatroidProblem::with_structure(ground_set_size, oracles, InstanceStructure::Unstructured)
    }

    /// Creates the k-dimensional matching problem on a `rank`-partite hypergraph, with one
    /// partition oracle per side.
    ///
    /// For `rank == 2` this is bipartite matching, for `rank == 3` it is 3-dimensional matching.
    pub fn matching(
        rank: usize,
        vertices_per_part: usize,
        edges: Vec<Vec<usize>>,
    ) -> Result<MatroidProblem, ProblemError> {
        if let Some((edge, hyperedge)) = edges
            .iter()
            .enumerate()
            .find(|(_, hyperedge)| hyperedge.len() != rank)
        {
            return Err(ProblemError::InconsistentEdgeRank {
                edge,
                expected: rank,
                actual: hyperedge.len(),
            });
        }

        let oracles = (0..rank)
            .map(|part| -> Result<Box<dyn IndependenceOracle>, ProblemError> {
                let element_to_vertex = edges.iter().map(|hyperedge| hyperedge[part]).collect();
                let oracle = PartitionOracle::new(element_to_vertex, vertices_per_part)
                    .map_err(|source| ProblemError::oracle("partition", source))?;
                Ok(Box::new(oracle))
            })
            .collect::<Result<Vec<_>, _>>()?;

        MatroidProblem::with_structure(
            edges.len(),
            oracles,
            InstanceStructure::Matching {
                rank,
                vertices_per_part,
                edges,
            },
        )
    }

    /// Creates the Hamiltonian-path relaxation on a directed graph: every vertex has at most one
    /// incoming and at most one outgoing edge, and the edges contain no cycle.
    ///
    /// The oracles are queried in the order in-degree, out-degree, forest; the
    /// [`ForestCheck::FunctionalLinks`] check relies on this order.
    pub fn hamiltonian_path(
        vertex_count: usize,
        edges: Vec<(usize, usize)>,
        forest_check: ForestCheck,
    ) -> Result<MatroidProblem, ProblemError> {
        let incoming = EndpointOracle::new(Endpoint::Head, vertex_count, &edges)
            .map_err(|source| ProblemError::oracle("incoming-endpoint", source))?;
        let outgoing = EndpointOracle::new(Endpoint::Tail, vertex_count, &edges)
            .map_err(|source| ProblemError::oracle("outgoing-endpoint", source))?;
        let forest: Box<dyn IndependenceOracle> = match forest_check {
            ForestCheck::FunctionalLinks => Box::new(
                FunctionalForestOracle::new(vertex_count, &edges)
                    .map_err(|source| ProblemError::oracle("functional-forest", source))?,
            ),
            ForestCheck::Traversal => Box::new(
                TraversalForestOracle::new(vertex_count, &edges)
                    .map_err(|source| ProblemError::oracle("traversal-forest", source))?,
            ),
        };

        MatroidProblem::with_structure(
            edges.len(),
            vec![Box::new(incoming), Box::new(outgoing), forest],
            InstanceStructure::DirectedGraph {
                vertex_count,
                edges,
            },
        )
    }

    fn with_structure(
        ground_set_size: usize,
        oracles: Vec<Box<dyn IndependenceOracle>>,
        structure: InstanceStructure,
    ) -> Result<MatroidProblem, ProblemError> {
        if oracles.is_empty() {
            return Err(ProblemError::NoMatroids);
        }

        if let Some(oracle) = oracles
            .iter()
            .find(|oracle| oracle.ground_set_size() != ground_set_size)
        {
            return Err(ProblemError::GroundSetMismatch {
                oracle: oracle.name().to_owned(),
                expected: ground_set_size,
                actual: oracle.ground_set_size(),
            });
        }

        Ok(MatroidProblem {
            oracles,
            membership: KeyedVec::filled(ground_set_size, false),
            num_members: 0,
            structure,
            statistics: ProblemStatistics::default(),
        })
    }

    pub fn ground_set_size(&self) -> usize {
        self.membership.len()
    }

    /// The number of matroids `k` which are intersected.
    pub fn num_matroids(&self) -> usize {
        self.oracles.len()
    }

    /// The number of elements in the current common independent set.
    pub fn num_members(&self) -> usize {
        self.num_members
    }

    pub fn is_empty(&self) -> bool {
        self.num_members == 0
    }

    pub fn contains(&self, element: ElementId) -> bool {
        element.index() < self.membership.len() && self.membership[element]
    }

    /// The elements of the current common independent set, in increasing order.
    pub fn members(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.membership
            .keys()
            .filter(move |&element| self.membership[element])
    }

    pub fn structure(&self) -> &InstanceStructure {
        &self.structure
    }

    pub fn statistics(&self) -> ProblemStatistics {
        self.statistics
    }

    /// Adds `element` to the set of every oracle, or to none of them.
    ///
    /// The oracles are asked in order. When one of them rejects the element, the oracles which
    /// already accepted it are rolled back in reverse order and `Ok(false)` is returned; the
    /// problem is then exactly as it was before the call.
    pub fn try_add_element(&mut self, element: ElementId) -> Result<bool, ProblemError> {
        self.check_element(element)?;
        if self.membership[element] {
            return Err(ProblemError::AlreadyAMember { element });
        }

        self.statistics.num_addition_attempts += 1;

        for index in 0..self.oracles.len() {
            match self.oracles[index].try_add(element) {
                Ok(true) => {}
                Ok(false) => {
                    trace!("{element} rejected by the {} oracle", self.oracles[index].name());
                    self.statistics.num_rejected_additions += 1;
                    self.roll_back(element, index)?;
                    return Ok(false);
                }
                Err(source) => {
                    let oracle = self.oracles[index].name().to_owned();
                    self.roll_back(element, index)?;
                    return Err(ProblemError::Oracle { oracle, source });
                }
            }
        }

        self.membership[element] = true;
        self.num_members += 1;
        Ok(true)
    }

    /// Removes `element` from the set of every oracle.
    ///
    /// It is an error to remove an element which is not a member.
    pub fn remove_element(&mut self, element: ElementId) -> Result<(), ProblemError> {
        self.check_element(element)?;
        if !self.membership[element] {
            return Err(ProblemError::NotAMember { element });
        }

        for oracle in self.oracles.iter_mut().rev() {
            oracle
                .remove(element)
                .map_err(|source| ProblemError::oracle(oracle.name(), source))?;
        }

        self.membership[element] = false;
        self.num_members -= 1;
        self.statistics.num_removals += 1;
        Ok(())
    }

    /// Removes every member, returning the problem to its initial empty state without rebuilding
    /// the oracles.
    pub fn reset(&mut self) -> Result<(), ProblemError> {
        if self.is_empty() {
            return Ok(());
        }

        for element in ElementId::range(self.ground_set_size()) {
            if self.membership[element] {
                self.remove_element(element)?;
            }
        }

        Ok(())
    }

    /// Starts a run on this problem; see [`ProblemSession`].
    ///
    /// Fails if the problem still contains elements.
    pub fn session(&mut self) -> Result<ProblemSession<'_>, ProblemError> {
        ProblemSession::start(self)
    }

    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new(["problem"]));
        }
    }

    /// Undoes the addition of `element` in the first `num_accepted` oracles.
    fn roll_back(&mut self, element: ElementId, num_accepted: usize) -> Result<(), ProblemError> {
        for oracle in self.oracles[..num_accepted].iter_mut().rev() {
            oracle
                .remove(element)
                .map_err(|source| ProblemError::oracle(oracle.name(), source))?;
            self.statistics.num_oracle_rollbacks += 1;
        }

        Ok(())
    }

    fn check_element(&self, element: ElementId) -> Result<(), ProblemError> {
        if element.index() >= self.ground_set_size() {
            return Err(ProblemError::ElementOutOfRange {
                element,
                ground_set_size: self.ground_set_size(),
            });
        }
        Ok(())
    }
}

impl ProblemError {
    pub(crate) fn oracle(oracle: &str, source: OracleError) -> ProblemError {
        ProblemError::Oracle {
            oracle: oracle.to_owned(),
            source,
        }
    }
}
