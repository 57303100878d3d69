use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// Structure for storing elements of type `Value`, the structure can only be indexed by structures
/// of type `Key`.
///
/// The oracles use it to keep per-element metadata (slots, endpoints, membership flags) so that an
/// [`ElementId`] can never be confused with a vertex or slot index.
///
/// Almost all features of this structure require that `Key` implements the [StorageKey] trait.
///
/// [`ElementId`]: crate::basic_types::ElementId
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    /// [PhantomData] to ensure that the [KeyedVec] is bound to the structure
    key: PhantomData<Key>,
    /// Storage of the elements of type `Value`
    elements: Vec<Value>,
}

impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        Self {
            key: PhantomData,
            elements: self.elements.clone(),
        }
    }
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        Self {
            key: PhantomData,
            elements: Vec::default(),
        }
    }
}

impl<Key, Value> From<Vec<Value>> for KeyedVec<Key, Value> {
    fn from(elements: Vec<Value>) -> Self {
        Self {
            key: PhantomData,
            elements,
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the keys which currently have a value.
    pub fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }
}

impl<Key: StorageKey, Value: Clone> KeyedVec<Key, Value> {
    /// Creates a [`KeyedVec`] holding `len` copies of `value`.
    pub fn filled(len: usize, value: Value) -> Self {
        Self::from(vec![value; len])
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, index: Key) -> &Self::Output {
        &self.elements[index.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, index: Key) -> &mut Self::Output {
        &mut self.elements[index.index()]
    }
}

/// A simple trait which requires that the structures implementing this trait can generate an index.
pub trait StorageKey: Clone {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

#[cfg(test)]
mod tests {
    use super::KeyedVec;
    use crate::basic_types::ElementId;

    #[test]
    fn keyed_vec_is_indexed_by_its_keys() {
        let keyed_vec: KeyedVec<ElementId, char> = KeyedVec::from(vec!['a', 'b']);

        assert_eq!(keyed_vec[ElementId::new(1)], 'b');
        assert_eq!(keyed_vec.len(), 2);
    }

    #[test]
    fn filled_vec_can_be_updated_by_key() {
        let mut keyed_vec: KeyedVec<ElementId, bool> = KeyedVec::filled(3, false);
        keyed_vec[ElementId::new(2)] = true;

        assert_eq!(
            keyed_vec.keys().filter(|&key| keyed_vec[key]).collect::<Vec<_>>(),
            vec![ElementId::new(2)]
        );
        assert_eq!(keyed_vec.keys().count(), 3);
    }
}
