//! Ordered index contract shared by both levels of the matrix
//!
//! Row and column indices are both keyed ordered trees with unique keys.
//! This module pins down the operations the matrix relies on and provides
//! the implementation over `alloc::collections::BTreeMap`.

use alloc::collections::BTreeMap;

use crate::{Result, SpmatError};

/// Ordered associative index with unique keys
///
/// All operations are logarithmic in the number of stored keys. The merge
/// primitives `upsert` and `take` are total. The strict forms `insert`,
/// `update` and `remove` state whether the key must be absent or present
/// and report a violation instead of silently merging.
pub trait OrderedIndex<K: Ord, V> {
    /// Look up the value stored under `key`
    fn find(&self, key: &K) -> Option<&V>;

    /// Look up the value stored under `key` for in-place mutation
    fn find_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Store `value` under `key`, returning the value it replaced
    fn upsert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove `key` if present, returning its value
    fn take(&mut self, key: &K) -> Option<V>;

    /// Number of stored keys
    fn len(&self) -> usize;

    /// Whether the index holds no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a new key
    ///
    /// Fails with [`SpmatError::DuplicateKey`] if the key is already present;
    /// the index is left unchanged in that case.
    fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.find(&key).is_some() {
            return Err(SpmatError::DuplicateKey);
        }
        self.upsert(key, value);
        Ok(())
    }

    /// Replace the value of an existing key
    ///
    /// Fails with [`SpmatError::MissingKey`] if the key is absent.
    fn update(&mut self, key: K, value: V) -> Result<()> {
        match self.find_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SpmatError::MissingKey),
        }
    }

    /// Remove a key and return its value
    ///
    /// Fails with [`SpmatError::MissingKey`] if the key is absent.
    fn remove(&mut self, key: &K) -> Result<V> {
        self.take(key).ok_or(SpmatError::MissingKey)
    }
}

impl<K: Ord, V> OrderedIndex<K, V> for BTreeMap<K, V> {
    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn take(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut index: BTreeMap<usize, i32> = BTreeMap::new();

        assert_eq!(OrderedIndex::insert(&mut index, 7, 1), Ok(()));
        assert_eq!(
            OrderedIndex::insert(&mut index, 7, 2),
            Err(SpmatError::DuplicateKey)
        );

        // Rejected insert must not overwrite
        assert_eq!(index.find(&7), Some(&1));
        assert_eq!(OrderedIndex::len(&index), 1);
    }

    #[test]
    fn test_update_and_remove_require_presence() {
        let mut index: BTreeMap<usize, i32> = BTreeMap::new();

        assert_eq!(index.update(3, 9), Err(SpmatError::MissingKey));
        assert_eq!(OrderedIndex::remove(&mut index, &3), Err(SpmatError::MissingKey));

        OrderedIndex::insert(&mut index, 3, 1).unwrap();
        assert_eq!(index.update(3, 9), Ok(()));
        assert_eq!(index.find(&3), Some(&9));

        assert_eq!(OrderedIndex::remove(&mut index, &3), Ok(9));
        assert!(OrderedIndex::is_empty(&index));
        assert_eq!(index.find(&3), None);
    }

    #[test]
    fn test_merge_primitives_are_total() {
        let mut index: BTreeMap<usize, i32> = BTreeMap::new();

        assert_eq!(index.upsert(4, 1), None);
        assert_eq!(index.upsert(4, 2), Some(1));
        assert_eq!(index.take(&4), Some(2));
        assert_eq!(index.take(&4), None);
        assert!(OrderedIndex::is_empty(&index));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: BTreeMap<usize, i32> = BTreeMap::new();
        OrderedIndex::insert(&mut original, 1, 10).unwrap();

        let mut copy = original.clone();
        copy.update(1, 20).unwrap();
        OrderedIndex::insert(&mut copy, 2, 30).unwrap();

        assert_eq!(original.find(&1), Some(&10));
        assert_eq!(original.find(&2), None);
        assert_eq!(OrderedIndex::len(&copy), 2);
    }
}
