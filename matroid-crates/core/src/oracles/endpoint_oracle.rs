use super::IndependenceOracle;
use super::OracleError;
use super::PartitionOracle;
use crate::basic_types::ElementId;

/// Which end of a directed edge `(tail, head)` an [`EndpointOracle`] looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The vertex the edge points to; bounds the in-degree.
    Head,
    /// The vertex the edge leaves from; bounds the out-degree.
    Tail,
}

/// Bounds the in-degree or the out-degree of every vertex by one, for a ground set of directed
/// edges.
///
/// This is the partition matroid whose slots are the vertices at the chosen [`Endpoint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointOracle {
    endpoint: Endpoint,
    partition: PartitionOracle,
}

impl EndpointOracle {
    /// Creates the oracle for the directed `edges`, given as `(tail, head)` pairs over
    /// `vertex_count` vertices.
    pub fn new(
        endpoint: Endpoint,
        vertex_count: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, OracleError> {
        let element_to_vertex = edges
            .iter()
            .map(|&(tail, head)| match endpoint {
                Endpoint::Head => head,
                Endpoint::Tail => tail,
            })
            .collect();

        Ok(EndpointOracle {
            endpoint,
            partition: PartitionOracle::new(element_to_vertex, vertex_count)?,
        })
    }
}

impl IndependenceOracle for EndpointOracle {
    fn name(&self) -> &str {
        match self.endpoint {
            Endpoint::Head => "incoming-endpoint",
            Endpoint::Tail => "outgoing-endpoint",
        }
    }

    fn ground_set_size(&self) -> usize {
        self.partition.ground_set_size()
    }

    fn try_add(&mut self, element: ElementId) -> Result<bool, OracleError> {
        self.partition.try_add(element)
    }

    fn remove(&mut self, element: ElementId) -> Result<(), OracleError> {
        self.partition.remove(element)
    }
}
