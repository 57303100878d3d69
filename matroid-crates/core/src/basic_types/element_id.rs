use crate::containers::StorageKey;

/// An identifier of an element of the ground set shared by all matroids of a problem.
///
/// Elements are dense: a ground set of size `m` consists of the ids `0..m`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub fn new(index: usize) -> ElementId {
        ElementId::create_from_index(index)
    }

    /// Iterate over the first `ground_set_size` element ids in increasing order.
    pub fn range(ground_set_size: usize) -> impl Iterator<Item = ElementId> {
        (0..ground_set_size).map(ElementId::create_from_index)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

impl StorageKey for ElementId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ElementId(index as u32)
    }
}
