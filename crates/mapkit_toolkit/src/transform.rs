//! Filtering, projection, inversion, copying and ordering.
//!
//! Operations that build a new map are generic over the output container
//! and fill it with sequential inserts, so a later pair always replaces an
//! earlier one with the same key.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use mapkit_foundation::{Error, Mapping, Result};

/// Transform operations, available on every [`Mapping`].
pub trait MapTransform: Mapping {
    /// New map of the pairs for which `predicate` holds.
    ///
    /// The predicate runs exactly once per pair, in iteration order.
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized + Default,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        let mut out = Self::default();
        for (k, v) in self.iter() {
            if predicate(k, v) {
                out.insert(k.clone(), v.clone());
            }
        }
        out
    }

    /// Removes every pair for which `predicate` holds, returning how many.
    ///
    /// Matching keys are collected in a first pass and removed in a second,
    /// so the predicate always sees the map as it was before the call.
    fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
        Self::Key: Clone,
    {
        let doomed: Vec<Self::Key> = self
            .iter()
            .filter(|(k, v)| predicate(*k, *v))
            .map(|(k, _)| k.clone())
            .collect();
        for key in &doomed {
            self.remove(key);
        }
        tracing::trace!(removed = doomed.len(), "remove_where");
        doomed.len()
    }

    /// New map with the same keys and each value passed through `transform`.
    fn map_values<O, R, F>(&self, mut transform: F) -> O
    where
        O: Mapping<Key = Self::Key, Value = R> + Default,
        F: FnMut(&Self::Value) -> R,
        Self::Key: Clone,
    {
        let mut out = O::default();
        for (k, v) in self.iter() {
            out.insert(k.clone(), transform(v));
        }
        out
    }

    /// Alias of [`map_values`](Self::map_values); both names are kept.
    fn transform_values<O, R, F>(&self, transform: F) -> O
    where
        O: Mapping<Key = Self::Key, Value = R> + Default,
        F: FnMut(&Self::Value) -> R,
        Self::Key: Clone,
    {
        self.map_values(transform)
    }

    /// Combines values of keys present in both maps.
    ///
    /// Keys found on only one side are dropped without error.
    fn combine_with<M2, O, R, F>(&self, other: &M2, mut combiner: F) -> O
    where
        M2: Mapping<Key = Self::Key> + ?Sized,
        O: Mapping<Key = Self::Key, Value = R> + Default,
        F: FnMut(&Self::Value, &M2::Value) -> R,
        Self::Key: Clone,
    {
        let mut out = O::default();
        for (k, v) in self.iter() {
            if let Some(w) = other.get(k) {
                out.insert(k.clone(), combiner(v, w));
            }
        }
        out
    }

    /// Swaps keys and values.
    ///
    /// Values are expected to be unique. When they are not, the pair that
    /// comes later in iteration order wins and no error is raised.
    fn invert<O>(&self) -> O
    where
        O: Mapping<Key = Self::Value, Value = Self::Key> + Default,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        let mut out = O::default();
        for (k, v) in self.iter() {
            if out.insert(v.clone(), k.clone()).is_some() {
                tracing::trace!("invert overwrote an entry for a repeated value");
            }
        }
        out
    }

    /// New map holding independent clones of every value.
    ///
    /// Mutating a copied value never affects the original. Values that
    /// share state through `Rc`/`Arc` keep sharing it; use
    /// [`deep_copy_via_codec`](crate::MapInterchange::deep_copy_via_codec)
    /// to break such links.
    fn deep_copy(&self) -> Self
    where
        Self: Sized + Default,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        let mut out = Self::default();
        for (k, v) in self.iter() {
            out.insert(k.clone(), v.clone());
        }
        out
    }

    /// New map ordered by key.
    fn sorted_by_key(&self) -> BTreeMap<Self::Key, Self::Value>
    where
        Self::Key: Ord + Clone,
        Self::Value: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Pairs ordered by key for keys with only a partial order.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IncomparableType`](mapkit_foundation::ErrorKind::IncomparableType)
    /// if any two keys (or a key and itself) have no defined order.
    fn try_sorted_by_key(&self) -> Result<Vec<(Self::Key, Self::Value)>>
    where
        Self::Key: PartialOrd + Clone,
        Self::Value: Clone,
    {
        let mut pairs = snapshot(self);
        sort_partial::<_, Self::Key, _>(&mut pairs, |(a, _), (b, _)| a.partial_cmp(b))?;
        Ok(pairs)
    }

    /// Pairs ordered by ascending value, stable for equal values.
    ///
    /// Returns a sequence rather than a map.
    fn sorted_by_value(&self) -> Vec<(Self::Key, Self::Value)>
    where
        Self::Key: Clone,
        Self::Value: Ord + Clone,
    {
        let mut pairs = snapshot(self);
        pairs.sort_by(|(_, a), (_, b)| a.cmp(b));
        pairs
    }

    /// Pairs ordered by ascending value for partially ordered values.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IncomparableType`](mapkit_foundation::ErrorKind::IncomparableType)
    /// if any value is unordered, such as a floating point `NaN`.
    fn try_sorted_by_value(&self) -> Result<Vec<(Self::Key, Self::Value)>>
    where
        Self::Key: Clone,
        Self::Value: PartialOrd + Clone,
    {
        let mut pairs = snapshot(self);
        sort_partial::<_, Self::Value, _>(&mut pairs, |(_, a), (_, b)| a.partial_cmp(b))?;
        Ok(pairs)
    }

    /// Calls `action` once per pair in iteration order.
    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&Self::Key, &Self::Value),
    {
        for (k, v) in self.iter() {
            action(k, v);
        }
    }
}

impl<M: Mapping + ?Sized> MapTransform for M {}

fn snapshot<M>(map: &M) -> Vec<(M::Key, M::Value)>
where
    M: Mapping + ?Sized,
    M::Key: Clone,
    M::Value: Clone,
{
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Stable sort under a partial order; fails on the first unordered pair.
///
/// `U` names the compared type in the error.
fn sort_partial<T, U: ?Sized, F>(items: &mut [T], mut compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    // a value unordered with itself (NaN) never meets a partner in a
    // single-element slice, so check reflexivity up front
    if items.iter().any(|item| compare(item, item).is_none()) {
        return Err(Error::incomparable::<U>());
    }
    let mut failed = false;
    items.sort_by(|a, b| {
        compare(a, b).unwrap_or_else(|| {
            failed = true;
            Ordering::Equal
        })
    });
    if failed {
        return Err(Error::incomparable::<U>());
    }
    Ok(())
}
