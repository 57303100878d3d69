use super::check_element;
use super::IndependenceOracle;
use super::OracleError;
use crate::basic_types::ElementId;
use crate::containers::KeyedVec;

/// The oracle of a partition matroid with capacity one: every element belongs to exactly one slot,
/// and a set is independent if no slot is used twice.
///
/// In a k-dimensional matching problem there is one such oracle per side of the hypergraph, where
/// the slot of a hyperedge is its vertex on that side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionOracle {
    /// The slot of every element of the ground set.
    element_to_slot: KeyedVec<ElementId, usize>,
    /// Whether an element is currently present.
    is_element_present: KeyedVec<ElementId, bool>,
    /// Whether a slot is currently occupied by a present element.
    is_slot_used: Vec<bool>,
}

impl PartitionOracle {
    /// Creates an oracle where element `i` belongs to slot `element_to_slot[i]`.
    ///
    /// Every slot has to be smaller than `num_slots`.
    pub fn new(element_to_slot: Vec<usize>, num_slots: usize) -> Result<Self, OracleError> {
        let element_to_slot: KeyedVec<ElementId, usize> = KeyedVec::from(element_to_slot);

        if let Some(element) = element_to_slot
            .keys()
            .find(|&element| element_to_slot[element] >= num_slots)
        {
            return Err(OracleError::SlotOutOfBounds {
                element,
                slot: element_to_slot[element],
                num_slots,
            });
        }

        Ok(PartitionOracle {
            is_element_present: KeyedVec::filled(element_to_slot.len(), false),
            element_to_slot,
            is_slot_used: vec![false; num_slots],
        })
    }

}

impl IndependenceOracle for PartitionOracle {
    fn name(&self) -> &str {
        "partition"
    }

    fn ground_set_size(&self) -> usize {
        self.element_to_slot.len()
    }

    fn try_add(&mut self, element: ElementId) -> Result<bool, OracleError> {
        check_element(element, self.element_to_slot.len())?;
        if self.is_element_present[element] {
            return Err(OracleError::ElementAlreadyPresent { element });
        }

        let slot = self.element_to_slot[element];
        if self.is_slot_used[slot] {
            return Ok(false);
        }

        self.is_slot_used[slot] = true;
        self.is_element_present[element] = true;
        Ok(true)
    }

    fn remove(&mut self, element: ElementId) -> Result<(), OracleError> {
        check_element(element, self.element_to_slot.len())?;
        if !self.is_element_present[element] {
            return Err(OracleError::ElementNotPresent { element });
        }

        let slot = self.element_to_slot[element];
        self.is_slot_used[slot] = false;
        self.is_element_present[element] = false;
        Ok(())
    }
}
