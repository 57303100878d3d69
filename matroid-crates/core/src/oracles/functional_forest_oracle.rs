use super::check_edges;
use super::check_element;
use super::IndependenceOracle;
use super::OracleError;
use crate::basic_types::ElementId;
use crate::containers::KeyedVec;
use crate::matroid_assert_eq_simple;

/// A cycle check for directed edges which stores a single forward link per vertex.
///
/// Adding the edge `(tail, head)` follows the forward links starting at `head`. If the walk ends in
/// `tail`, the edge would close a cycle and is rejected; otherwise `tail` is linked to `head`.
///
/// The walk is only a correct cycle test when every vertex has at most one outgoing and at most
/// one incoming edge in the current set, i.e. when the set is a collection of vertex-disjoint
/// directed paths. In a Hamiltonian-path problem this oracle is therefore placed after the two
/// [`EndpointOracle`]s, which guarantee exactly that. For arbitrary access patterns use the
/// [`TraversalForestOracle`].
///
/// [`EndpointOracle`]: super::EndpointOracle
/// [`TraversalForestOracle`]: super::TraversalForestOracle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionalForestOracle {
    /// The `(tail, head)` pair of every element.
    edges: KeyedVec<ElementId, (usize, usize)>,
    is_element_present: KeyedVec<ElementId, bool>,
    /// The forward link of every vertex, if it has one.
    next: Vec<Option<usize>>,
}

impl FunctionalForestOracle {
    pub fn new(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, OracleError> {
        check_edges(edges, vertex_count)?;

        Ok(FunctionalForestOracle {
            edges: KeyedVec::from(edges.to_vec()),
            is_element_present: KeyedVec::filled(edges.len(), false),
            next: vec![None; vertex_count],
        })
    }

    /// Follows the forward links from `vertex` to the last vertex of its path.
    fn end_of_path(&self, element: ElementId, vertex: usize) -> Result<usize, OracleError> {
        let mut vertex = vertex;
        let mut num_steps = 0;

        while let Some(successor) = self.next[vertex] {
            vertex = successor;
            num_steps += 1;

            if num_steps > self.next.len() {
                return Err(OracleError::CorruptedForest { element });
            }
        }

        Ok(vertex)
    }
}

impl IndependenceOracle for FunctionalForestOracle {
    fn name(&self) -> &str {
        "functional-forest"
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
        if self.next[tail].is_some() {
            return Err(OracleError::LinkOccupied {
                element,
                vertex: tail,
            });
        }

        if self.end_of_path(element, head)? == tail {
            return Ok(false);
        }

        self.next[tail] = Some(head);
        self.is_element_present[element] = true;
        Ok(true)
    }

    fn remove(&mut self, element: ElementId) -> Result<(), OracleError> {
        check_element(element, self.edges.len())?;
        if !self.is_element_present[element] {
            return Err(OracleError::ElementNotPresent { element });
        }

        let (tail, head) = self.edges[element];
        matroid_assert_eq_simple!(self.next[tail], Some(head));

        self.next[tail] = None;
        self.is_element_present[element] = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FunctionalForestOracle;
    use crate::basic_types::ElementId;
    use crate::oracles::IndependenceOracle;
    use crate::oracles::OracleError;

    #[test]
    fn closing_edge_of_a_path_is_rejected() {
        let edges = [(0, 1), (1, 2), (2, 0)];
        let mut oracle = FunctionalForestOracle::new(3, &edges).expect("valid edges");

        assert_eq!(oracle.try_add(ElementId::new(0)), Ok(true));
        assert_eq!(oracle.try_add(ElementId::new(1)), Ok(true));

        let before = oracle.clone();
        assert_eq!(oracle.try_add(ElementId::new(2)), Ok(false));
        assert_eq!(oracle, before);
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut oracle = FunctionalForestOracle::new(2, &[(1, 1)]).expect("valid edges");

        assert_eq!(oracle.try_add(ElementId::new(0)), Ok(false));
    }

    #[test]
    fn paths_can_be_joined() {
        let edges = [(0, 1), (2, 3), (1, 2), (3, 0)];
        let mut oracle = FunctionalForestOracle::new(4, &edges).expect("valid edges");

        assert_eq!(oracle.try_add(ElementId::new(0)), Ok(true));
        assert_eq!(oracle.try_add(ElementId::new(1)), Ok(true));
        assert_eq!(oracle.try_add(ElementId::new(2)), Ok(true));
        assert_eq!(oracle.try_add(ElementId::new(3)), Ok(false));
    }

    #[test]
    fn add_then_remove_restores_state() {
        let edges = [(0, 1), (1, 2)];
        let mut oracle = FunctionalForestOracle::new(3, &edges).expect("valid edges");
        let _ = oracle.try_add(ElementId::new(0)).expect("in range");

        let before = oracle.clone();
        assert_eq!(oracle.try_add(ElementId::new(1)), Ok(true));
        oracle.remove(ElementId::new(1)).expect("was added");

        assert_eq!(oracle, before);
    }

    #[test]
    fn second_forward_link_is_a_contract_violation() {
        let edges = [(0, 1), (0, 2)];
        let mut oracle = FunctionalForestOracle::new(3, &edges).expect("valid edges");
        let _ = oracle.try_add(ElementId::new(0)).expect("in range");

        assert_eq!(
            oracle.try_add(ElementId::new(1)),
            Err(OracleError::LinkOccupied {
                element: ElementId::new(1),
                vertex: 0
            })
        );
    }

    #[test]
    fn out_of_range_vertices_are_rejected_on_construction() {
        assert!(matches!(
            FunctionalForestOracle::new(2, &[(0, 2)]),
            Err(OracleError::VertexOutOfBounds { vertex: 2, .. })
        ));
    }
}
