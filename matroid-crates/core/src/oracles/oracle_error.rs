use thiserror::Error;

use crate::basic_types::ElementId;

/// Violations of the contract of an [`IndependenceOracle`].
///
/// [`IndependenceOracle`]: super::IndependenceOracle
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("{element} is outside of the ground set of size {ground_set_size}")]
    ElementOutOfRange {
        element: ElementId,
        ground_set_size: usize,
    },
    #[error("{element} is mapped to slot {slot}, but only {num_slots} slots exist")]
    SlotOutOfBounds {
        element: ElementId,
        slot: usize,
        num_slots: usize,
    },
    #[error("{element} touches vertex {vertex}, but only {vertex_count} vertices exist")]
    VertexOutOfBounds {
        element: ElementId,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("{element} was added while it was already present")]
    ElementAlreadyPresent { element: ElementId },
    #[error("{element} was removed while it was not present")]
    ElementNotPresent { element: ElementId },
    #[error("adding {element} would give vertex {vertex} a second forward link")]
    LinkOccupied { element: ElementId, vertex: usize },
    #[error("the forward links contain a cycle, detected while adding {element}")]
    CorruptedForest { element: ElementId },
}
