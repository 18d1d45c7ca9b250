//! A thread-safe map for sharing entries across threads.
//!
//! [`ConcurrentMap`] is a cloneable handle around `Arc<RwLock<HashMap>>`.
//! Every clone refers to the same storage, so a write through one handle is
//! visible through all the others. Readers only ever see whole writes: each
//! operation holds the lock for its full duration, and caller code only ever
//! mutates private copies while it runs.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::mapping::Mapping;

/// A map safe for concurrent reads and writes from multiple threads.
pub struct ConcurrentMap<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K: Eq + Hash, V> ConcurrentMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Copies every pair of `source` into a new concurrent map.
    ///
    /// The copy is independent: later changes to `source` are not reflected.
    #[must_use]
    pub fn from_mapping<M>(source: &M) -> Self
    where
        M: Mapping<Key = K, Value = V> + ?Sized,
        K: Clone,
        V: Clone,
    {
        let mut copy = HashMap::with_capacity(source.len());
        for (k, v) in source.iter() {
            copy.insert(k.clone(), v.clone());
        }
        tracing::trace!(entries = copy.len(), "copied map into concurrent map");
        Self {
            inner: Arc::new(RwLock::new(copy)),
        }
    }

    // No caller closure ever runs against the stored map, so a panic while
    // the lock is held leaves the entries untouched and poison is safe to
    // clear.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    /// Gets a copy of the value for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.read().get(key).cloned()
    }

    /// Inserts or overwrites, returning the previous value if any.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.write().insert(key, value)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.write().remove(key)
    }

    /// Returns the value for `key`, inserting `factory()` first if absent.
    ///
    /// The factory runs with no lock held, so it may read this map. When
    /// callers race on an absent key each may run its factory, but only the
    /// first insert is kept and every caller gets that winning value.
    pub fn get_or_add_with<F>(&self, key: K, factory: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        let existing = self.read().get(&key).cloned();
        if let Some(existing) = existing {
            return existing;
        }
        let value = factory();
        self.write().entry(key).or_insert(value).clone()
    }

    /// Applies `f` to the value for `key`.
    ///
    /// `f` works on a copy that replaces the stored value only once `f`
    /// returns, so a panic inside `f` leaves the entry as it was. Returns
    /// false when the key is absent.
    pub fn update<F>(&self, key: &K, f: F) -> bool
    where
        V: Clone,
        F: FnOnce(&mut V),
    {
        let mut guard = self.write();
        let Some(slot) = guard.get_mut(key) else {
            return false;
        };
        let mut value = slot.clone();
        f(&mut value);
        *slot = value;
        true
    }

    /// Copies the current contents into a plain `HashMap`.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.read().clone()
    }

    /// Returns a read-only handle onto the same storage.
    ///
    /// Unlike [`snapshot`](Self::snapshot), the view observes writes made
    /// after it was created.
    #[must_use]
    pub fn read_only(&self) -> ConcurrentView<K, V> {
        ConcurrentView {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ConcurrentMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash + fmt::Debug, V: fmt::Debug> fmt::Debug for ConcurrentMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.read().iter()).finish()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for ConcurrentMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::from_iter(iter))),
        }
    }
}

/// Read-only handle onto a [`ConcurrentMap`].
pub struct ConcurrentView<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K: Eq + Hash, V> ConcurrentView<K, V> {
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    /// Gets a copy of the value for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.read().get(key).cloned()
    }

    /// Copies the current contents into a plain `HashMap`.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.read().clone()
    }
}

impl<K, V> Clone for ConcurrentView<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
