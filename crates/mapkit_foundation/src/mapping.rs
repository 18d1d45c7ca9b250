//! The [`Mapping`] abstraction over concrete key-value containers.
//!
//! Every toolkit operation is written against this trait rather than a
//! particular map type, so the same operations work on `std` maps,
//! insertion-ordered [`IndexMap`]s and the persistent maps from `im`.
//!
//! Iteration order is whatever the underlying container guarantees:
//! arbitrary for hash maps, key order for tree maps, insertion order for
//! [`IndexMap`].

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// A container associating unique keys with values.
///
/// Capability bounds on keys and values belong to the implementations (hashing
/// for hash maps, ordering for tree maps), never to the trait itself.
pub trait Mapping {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// Iterator over `(key, value)` pairs in the container's iteration order.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets a value by key.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Gets a mutable reference to a value by key.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Returns true if the map contains the key.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or overwrites, returning the previous value if any.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes a key, returning its value if it was present.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Returns an iterator over key-value pairs.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = std::collections::hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = std::collections::btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}

/// Insertion-ordered map. Removal shifts later entries down so the
/// remaining pairs keep their relative order.
impl<K, V, S> Mapping for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        IndexMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        IndexMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        IndexMap::shift_remove(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }
}

/// Persistent hash map with structural sharing.
impl<K, V> Mapping for im::HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = im::hashmap::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        im::HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        im::HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        im::HashMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        im::HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        im::HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        im::HashMap::remove(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        im::HashMap::iter(self)
    }
}

/// Persistent ordered map with structural sharing.
impl<K, V> Mapping for im::OrdMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = im::ordmap::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        im::OrdMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        im::OrdMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        im::OrdMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        im::OrdMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        im::OrdMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        im::OrdMap::remove(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        im::OrdMap::iter(self)
    }
}
