use super::{IntervalKey, IntervalTree};

/// Deduplicating spatial collection.
///
/// Wraps an [IntervalTree] and rejects adds of an entry already present
/// (identity equality on the stored value together with its key, not
/// geometric equality). Every polygon's edge collection and face collection
/// is one of these.
#[derive(Debug, Clone)]
pub struct PlanarSet<K, V> {
    tree: IntervalTree<K, V>,
}

impl<K, V> Default for PlanarSet<K, V>
where
    K: IntervalKey,
    V: Copy + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PlanarSet<K, V>
where
    K: IntervalKey,
    V: Copy + PartialEq,
{
    pub fn new() -> Self {
        PlanarSet {
            tree: IntervalTree::new(),
        }
    }

    /// Add an entry; no-op returning `false` when the identical entry is
    /// already present (observable via unchanged [PlanarSet::len]).
    pub fn add(&mut self, key: K, value: V) -> bool {
        if self.tree.contains(&key, value) {
            return false;
        }
        self.tree.insert(key, value);
        true
    }

    /// Remove an entry, returning `true` when it was present.
    pub fn remove(&mut self, key: &K, value: V) -> bool {
        self.tree.remove(key, value)
    }

    /// All stored values whose key intersects `query`.
    pub fn query(&self, query: &K) -> Vec<V> {
        self.tree.query(query)
    }

    /// Test for the exact entry.
    pub fn contains(&self, key: &K, value: V) -> bool {
        self.tree.contains(key, value)
    }

    /// Merge of all stored keys, `None` when empty.
    pub fn bounds(&self) -> Option<K> {
        self.tree.bounds()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Iterate all `(key, value)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.tree.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AABB;

    #[test]
    fn add_is_deduplicating() {
        let mut set = PlanarSet::new();
        let key = AABB::new(0.0, 0.0, 1.0, 1.0);
        assert!(set.add(key, 7usize));
        assert!(!set.add(key, 7usize));
        assert_eq!(set.len(), 1);
        // same key, different identity is a distinct entry
        assert!(set.add(key, 8usize));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_missing_entry() {
        let mut set = PlanarSet::new();
        let key = AABB::new(0.0, 0.0, 1.0, 1.0);
        assert!(!set.remove(&key, 1usize));
        set.add(key, 1usize);
        assert!(set.remove(&key, 1usize));
        assert!(set.is_empty());
    }
}
