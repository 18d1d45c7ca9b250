//! Non-mutating lookups and snapshots.

use std::collections::HashSet;
use std::hash::Hash;

use mapkit_foundation::{Mapping, ReadOnlyView};

/// Read operations, available on every [`Mapping`].
pub trait MapRead: Mapping {
    /// Returns the value for `key`, or `default` when absent.
    fn get_value_or_default(&self, key: &Self::Key, default: Self::Value) -> Self::Value
    where
        Self::Value: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Snapshot of all keys in iteration order.
    fn get_keys(&self) -> Vec<Self::Key>
    where
        Self::Key: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Snapshot of all values in iteration order.
    fn get_values(&self) -> Vec<Self::Value>
    where
        Self::Value: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Lazily finds every key mapped to `value`.
    ///
    /// Nothing is scanned until the result is iterated, and each iteration
    /// walks the map afresh.
    fn find_keys_for_value<'a>(&'a self, value: &'a Self::Value) -> KeysForValue<'a, Self>
    where
        Self::Value: PartialEq,
    {
        KeysForValue { map: self, value }
    }

    /// True iff at least two entries hold equal values.
    fn has_duplicate_values(&self) -> bool
    where
        Self::Value: Eq + Hash,
    {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter().any(|(_, v)| !seen.insert(v))
    }

    /// Snapshot of all pairs in iteration order.
    fn to_list(&self) -> Vec<(Self::Key, Self::Value)>
    where
        Self::Key: Clone,
        Self::Value: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Wraps the map in a read-only view without copying it.
    fn as_read_only(&self) -> ReadOnlyView<'_, Self> {
        ReadOnlyView::new(self)
    }
}

impl<M: Mapping + ?Sized> MapRead for M {}

/// Restartable lazy sequence of the keys holding a given value.
///
/// Returned by [`MapRead::find_keys_for_value`].
pub struct KeysForValue<'a, M: Mapping + ?Sized> {
    map: &'a M,
    value: &'a M::Value,
}

impl<'a, M> KeysForValue<'a, M>
where
    M: Mapping + ?Sized,
    M::Value: PartialEq,
{
    /// Starts a fresh scan of the map.
    #[must_use]
    pub fn iter(&self) -> KeysForValueIter<'a, M> {
        KeysForValueIter {
            inner: self.map.iter(),
            value: self.value,
        }
    }
}

impl<M: Mapping + ?Sized> Clone for KeysForValue<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Mapping + ?Sized> Copy for KeysForValue<'_, M> {}

impl<'a, M> IntoIterator for KeysForValue<'a, M>
where
    M: Mapping + ?Sized,
    M::Value: PartialEq,
{
    type Item = &'a M::Key;
    type IntoIter = KeysForValueIter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, M> IntoIterator for &KeysForValue<'a, M>
where
    M: Mapping + ?Sized,
    M::Value: PartialEq,
{
    type Item = &'a M::Key;
    type IntoIter = KeysForValueIter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass of a [`KeysForValue`] scan.
pub struct KeysForValueIter<'a, M: Mapping + ?Sized + 'a> {
    inner: M::Iter<'a>,
    value: &'a M::Value,
}

impl<'a, M> Iterator for KeysForValueIter<'a, M>
where
    M: Mapping + ?Sized,
    M::Value: PartialEq,
{
    type Item = &'a M::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let wanted = self.value;
        self.inner.find(|(_, v)| *v == wanted).map(|(k, _)| k)
    }
}
