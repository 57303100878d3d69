use super::check_edges;
use super::check_element;
use super::IndependenceOracle;
use super::OracleError;
use crate::basic_types::ElementId;
use crate::containers::KeyedVec;

/// The oracle of a graphic matroid: a set of edges is independent if it contains no cycle when
/// the edges are read as undirected.
///
/// Adding `(tail, head)` searches the current forest for a path between the two endpoints, which
/// takes time linear in the number of vertices, and accepts the edge only if none exists. Unlike
/// the [`FunctionalForestOracle`] it makes no assumption on the degrees of the vertices, so it is
/// correct for any order of additions and removals.
///
/// [`FunctionalForestOracle`]: super::FunctionalForestOracle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalForestOracle {
    edges: KeyedVec<ElementId, (usize, usize)>,
    is_element_present: KeyedVec<ElementId, bool>,
    /// For every vertex, its neighbours in the current forest and the elements connecting them.
    adjacency: Vec<Vec<(usize, ElementId)>>,
}

impl TraversalForestOracle {
    pub fn new(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, OracleError> {
        check_edges(edges, vertex_count)?;

        Ok(TraversalForestOracle {
            edges: KeyedVec::from(edges.to_vec()),
            is_element_present: KeyedVec::filled(edges.len(), false),
            adjacency: vec![vec![]; vertex_count],
        })
    }

    /// Returns whether `source` and `target` lie in the same tree of the current forest.
    pub fn are_connected(&self, source: usize, target: usize) -> bool {
        if source == target {
            return true;
        }

        let mut visited = vec![false; self.adjacency.len()];
        let mut stack = vec![source];
        visited[source] = true;

        while let Some(vertex) = stack.pop() {
            for &(neighbour, _) in &self.adjacency[vertex] {
                if neighbour == target {
                    return true;
                }
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    stack.push(neighbour);
                }
            }
        }

        false
    }

    fn unlink(&mut self, vertex: usize, element: ElementId) {
        if let Some(position) = self.adjacency[vertex]
            .iter()
            .position(|&(_, linked)| linked == element)
        {
            let _ = self.adjacency[vertex].remove(position);
        }
    }
}

impl IndependenceOracle for TraversalForestOracle {
    fn name(&self) -> &str {
        "traversal-forest"
    }

    fn ground_set_size(&self) -> usize {
        self.edges.len()
    }

    fn try_add(&mut self, element: ElementId) -> Result<bool, OracleError> {
        check_element(element, self.edges.len())?;
        if self.is_element_present[element] {
            return Err(OracleError::ElementAlreadyPresent { element });
        }

        let (tail, head) = self.edges[element];
        if self.are_connected(tail, head) {
            return Ok(false);
        }

        self.adjacency[tail].push((head, element));
        self.adjacency[head].push((tail, element));
        self.is_element_present[element] = true;
        Ok(true)
    }

    fn remove(&mut self, element: ElementId) -> Result<(), OracleError> {
        check_element(element, self.edges.len())?;
        if !self.is_element_present[element] {
            return Err(OracleError::ElementNotPresent { element });
        }

        let (tail, head) = self.edges[element];
        self.unlink(tail, element);
        self.unlink(head, element);
        self.is_element_present[element] = false;
        Ok(())
    }
}
