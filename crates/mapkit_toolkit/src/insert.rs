//! Insertion and update operations.
//!
//! Only [`add`](MapInsert::add) and [`add_range`](MapInsert::add_range)
//! treat an existing key as an error. Every other operation here handles a
//! present key as an ordinary case: it either overwrites or leaves the map
//! untouched.

use std::fmt;

use mapkit_foundation::{Counter, Error, Mapping, Result};

/// Insertion and update operations, available on every [`Mapping`].
pub trait MapInsert: Mapping {
    /// Strict insert: fails with a duplicate key error if `key` is present.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateKey`](mapkit_foundation::ErrorKind::DuplicateKey)
    /// when the key already exists; the map is left unchanged.
    fn add(&mut self, key: Self::Key, value: Self::Value) -> Result<()>
    where
        Self::Key: fmt::Debug,
    {
        if self.contains_key(&key) {
            return Err(Error::duplicate_key(&key));
        }
        self.insert(key, value);
        Ok(())
    }

    /// Inserts only when `key` is absent. A present key is left as is.
    fn add_if_not_exists(&mut self, key: Self::Key, value: Self::Value) {
        if !self.contains_key(&key) {
            self.insert(key, value);
        }
    }

    /// Inserts or overwrites unconditionally.
    fn add_or_update(&mut self, key: Self::Key, value: Self::Value) {
        self.insert(key, value);
    }

    /// Inserts only when `key` is absent, reporting whether it did.
    fn try_add(&mut self, key: Self::Key, value: Self::Value) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    /// Strict-inserts each pair in order.
    ///
    /// Not transactional: pairs inserted before a duplicate stay in the map.
    ///
    /// # Errors
    ///
    /// Returns the duplicate key error of the first colliding pair.
    fn add_range<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
        Self::Key: fmt::Debug,
    {
        for (inserted, (key, value)) in pairs.into_iter().enumerate() {
            if let Err(err) = self.add(key, value) {
                tracing::debug!(inserted, error = %err, "add_range stopped at duplicate key");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Returns the value for `key`, inserting `factory()` first if absent.
    ///
    /// The factory runs at most once, and only when the key is missing.
    fn get_or_add_with<F>(&mut self, key: Self::Key, factory: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value,
        Self::Value: Clone,
    {
        if let Some(existing) = self.get(&key) {
            return existing.clone();
        }
        let value = factory();
        self.insert(key, value.clone());
        value
    }

    /// Returns the value for `key`, inserting `value` first if absent.
    fn get_or_add(&mut self, key: Self::Key, value: Self::Value) -> Self::Value
    where
        Self::Value: Clone,
    {
        self.get_or_add_with(key, || value)
    }

    /// Counts an occurrence of `key`, seeding new keys with one.
    ///
    /// Equivalent to `increment_or_seed(key, 1)`; see
    /// [`DEFAULT_INCREMENT_SEED`](mapkit_foundation::DEFAULT_INCREMENT_SEED).
    fn increment(&mut self, key: Self::Key) -> Self::Value
    where
        Self::Value: Counter,
    {
        self.increment_or_seed(key, <Self::Value as Counter>::ONE)
    }

    /// Adds one to the value for `key`, or inserts `initial` if absent.
    ///
    /// `initial` only seeds the first occurrence; a present key always grows
    /// by exactly one. Returns the stored value afterwards.
    fn increment_or_seed(&mut self, key: Self::Key, initial: Self::Value) -> Self::Value
    where
        Self::Value: Counter,
    {
        if let Some(current) = self.get_mut(&key) {
            *current = current.bump();
            return *current;
        }
        self.insert(key, initial);
        initial
    }

    /// Upserts every pair of `other` into `self`; `other` wins on conflict.
    fn merge<O>(&mut self, other: &O)
    where
        O: Mapping<Key = Self::Key, Value = Self::Value> + ?Sized,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        for (k, v) in other.iter() {
            self.insert(k.clone(), v.clone());
        }
    }
}

impl<M: Mapping + ?Sized> MapInsert for M {}
