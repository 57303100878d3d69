use log::debug;

use super::SolverError;
use crate::basic_types::ApproximationRatio;
use crate::basic_types::ApproximationSolution;
use crate::basic_types::ElementId;
use crate::problem::InstanceStructure;
use crate::problem::MatroidProblem;

/// Computes a maximum matching of a bipartite matching problem with augmenting paths.
///
/// The matcher only reads the structure of the problem; the oracles are never queried. It requires
/// a problem built by [`MatroidProblem::matching`] with rank two.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactBipartiteMatcher;

impl ExactBipartiteMatcher {
    pub fn solve(
        &self,
        problem: &mut MatroidProblem,
    ) -> Result<ApproximationSolution, SolverError> {
        let session = problem.session()?;

        let (vertices_per_part, edges) = match session.structure() {
            InstanceStructure::Matching {
                rank: 2,
                vertices_per_part,
                edges,
            } if session.num_matroids() == 2 => (*vertices_per_part, edges),
            InstanceStructure::Matching { rank, .. } => {
                return Err(SolverError::NotBipartite {
                    reason: format!("the hyperedges have {rank} endpoints"),
                })
            }
            _ => {
                return Err(SolverError::NotBipartite {
                    reason: "the problem is not a matching problem".to_owned(),
                })
            }
        };

        let mut matching = AugmentingPaths::new(vertices_per_part, edges);
        matching.maximise();
        let elements = matching.matched_edges();
        debug!("Maximum matching has {} edges", elements.len());

        session.finish()?;
        Ok(ApproximationSolution::new(ApproximationRatio::optimal(), elements))
    }
}

/// Kuhn's algorithm on the bipartite graph between the left and right vertices.
#[derive(Debug)]
struct AugmentingPaths {
    /// For every left vertex, its right neighbours and the connecting edge.
    adjacency: Vec<Vec<(usize, ElementId)>>,
    /// For every right vertex, the left vertex and edge it is matched through.
    right_match: Vec<Option<(usize, ElementId)>>,
    left_matched: Vec<bool>,
    visited: Vec<bool>,
}

impl AugmentingPaths {
    fn new(vertices_per_part: usize, edges: &[Vec<usize>]) -> AugmentingPaths {
        let mut adjacency = vec![vec![]; vertices_per_part];
        for (element, edge) in ElementId::range(edges.len()).zip(edges) {
            adjacency[edge[0]].push((edge[1], element));
        }

        AugmentingPaths {
            adjacency,
            right_match: vec![None; vertices_per_part],
            left_matched: vec![false; vertices_per_part],
            visited: vec![false; vertices_per_part],
        }
    }

    /// Runs phases of augmenting path searches until a phase finds none.
    fn maximise(&mut self) {
        loop {
            self.visited.fill(false);

            let mut augmented = false;
            for left in 0..self.adjacency.len() {
                if !self.visited[left] && !self.left_matched[left] && self.augment(left) {
                    augmented = true;
                }
            }

            if !augmented {
                break;
            }
        }
    }

    fn augment(&mut self, left: usize) -> bool {
        if self.visited[left] {
            return false;
        }
        self.visited[left] = true;

        for index in 0..self.adjacency[left].len() {
            let (right, element) = self.adjacency[left][index];
            let free = match self.right_match[right] {
                None => true,
                Some((other, _)) => self.augment(other),
            };

            if free {
                self.right_match[right] = Some((left, element));
                self.left_matched[left] = true;
                return true;
            }
        }

        false
    }

    fn matched_edges(&self) -> Vec<ElementId> {
        self.right_match
            .iter()
            .flatten()
            .map(|&(_, element)| element)
            .collect()
    }
}
