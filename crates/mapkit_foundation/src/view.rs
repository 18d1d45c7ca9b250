//! Read-only views over borrowed maps.

use std::fmt;

use crate::mapping::Mapping;

/// A non-mutating window onto a map.
///
/// The view borrows the underlying storage; nothing is copied. It exposes
/// lookups and iteration only, so code handed a view cannot change the map.
/// For a view that keeps observing writes made elsewhere, see
/// [`ConcurrentMap::read_only`](crate::ConcurrentMap::read_only).
pub struct ReadOnlyView<'a, M: ?Sized> {
    inner: &'a M,
}

impl<'a, M: Mapping + ?Sized> ReadOnlyView<'a, M> {
    /// Wraps a map without copying it.
    #[must_use]
    pub fn new(inner: &'a M) -> Self {
        Self { inner }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the underlying map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &M::Key) -> Option<&'a M::Value> {
        self.inner.get(key)
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &M::Key) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns an iterator over key-value pairs.
    pub fn iter(&self) -> M::Iter<'a> {
        self.inner.iter()
    }

    /// Returns an iterator over keys.
    pub fn keys(&self) -> impl Iterator<Item = &'a M::Key> + use<'a, M> {
        self.inner.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over values.
    pub fn values(&self) -> impl Iterator<Item = &'a M::Value> + use<'a, M> {
        self.inner.iter().map(|(_, v)| v)
    }
}

impl<M: ?Sized> Clone for ReadOnlyView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for ReadOnlyView<'_, M> {}

impl<M: ?Sized + fmt::Debug> fmt::Debug for ReadOnlyView<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnlyView").field(&self.inner).finish()
    }
}

impl<'a, M: Mapping + ?Sized> IntoIterator for ReadOnlyView<'a, M> {
    type Item = (&'a M::Key, &'a M::Value);
    type IntoIter = M::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
