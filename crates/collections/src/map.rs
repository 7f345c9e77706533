//! Presence-aware keyed mapping
//!
//! `PresenceMap<K, V, S>` owns a `HashMap<K, V, S>` and adds lookups that
//! return [`Presence`], plus get-or-insert-default. Every other `HashMap`
//! operation passes through via `Deref`/`DerefMut` unchanged.

use presence_core::{from_nullable, Presence};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::hash_map::{Entry, RandomState};
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// A keyed mapping with presence-returning lookups
///
/// ## Invariants
///
/// - Keys are unique
/// - `maybe_get` never alters the mapping
/// - `get_or_add` inserts at most one entry, and only for an unset key
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash, V: Serialize, S: BuildHasher",
    deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>, S: BuildHasher + Default"
))]
pub struct PresenceMap<K, V, S = RandomState> {
    entries: HashMap<K, V, S>,
}

impl<K, V> PresenceMap<K, V, RandomState> {
    /// Create an empty mapping
    pub fn new() -> Self {
        PresenceMap {
            entries: HashMap::new(),
        }
    }

    /// Create an empty mapping with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PresenceMap {
            entries: HashMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> PresenceMap<K, V, S> {
    /// Create an empty mapping that hashes keys with `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        PresenceMap {
            entries: HashMap::with_hasher(hasher),
        }
    }

    /// Wrap an existing map, keeping every key/value pair
    pub fn from_map(entries: HashMap<K, V, S>) -> Self {
        PresenceMap { entries }
    }

    /// Consume and return the inner map
    #[inline]
    pub fn into_map(self) -> HashMap<K, V, S> {
        self.entries
    }
}

impl<K, V, S> PresenceMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// The value stored under `key`, absent if the key is unset
    ///
    /// # Example
    ///
    /// ```
    /// use presence_collections::PresenceMap;
    ///
    /// let names = PresenceMap::from([(1, "A"), (2, "B"), (3, "C")]);
    /// assert_eq!(names.maybe_get(&2).extract(), Ok(&"B"));
    /// assert!(names.maybe_get(&99).is_absent());
    /// ```
    pub fn maybe_get<Q>(&self, key: &Q) -> Presence<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        from_nullable(self.entries.get(key))
    }

    /// The value stored under `key`, inserting `alternative` first if the key is unset
    ///
    /// An existing value is returned untouched and `alternative` is dropped.
    pub fn get_or_add(&mut self, key: K, alternative: V) -> &mut V {
        self.get_or_add_with(key, || alternative)
    }

    /// Like [`get_or_add`](Self::get_or_add), computing the value only when it is needed
    pub fn get_or_add_with<F>(&mut self, key: K, alternative: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(target: "presence::map", "Key unset, inserting alternative value");
                entry.insert(alternative())
            }
        }
    }

    /// Remove and return the value stored under `key`
    pub fn maybe_remove<Q>(&mut self, key: &Q) -> Presence<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        from_nullable(self.entries.remove(key))
    }

    /// Store `value` under `key`, returning the value it replaced
    pub fn maybe_insert(&mut self, key: K, value: V) -> Presence<V> {
        from_nullable(self.entries.insert(key, value))
    }
}

impl<K, V, S: Default> Default for PresenceMap<K, V, S> {
    fn default() -> Self {
        PresenceMap {
            entries: HashMap::default(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for PresenceMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K, V, S> PartialEq for PresenceMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V, S> Eq for PresenceMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Deref for PresenceMap<K, V, S> {
    type Target = HashMap<K, V, S>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<K, V, S> DerefMut for PresenceMap<K, V, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entries
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for PresenceMap<K, V, S> {
    fn from(entries: HashMap<K, V, S>) -> Self {
        PresenceMap::from_map(entries)
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for PresenceMap<K, V, RandomState> {
    fn from(entries: [(K, V); N]) -> Self {
        PresenceMap::from_map(HashMap::from(entries))
    }
}

impl<K, V, S> From<PresenceMap<K, V, S>> for HashMap<K, V, S> {
    fn from(map: PresenceMap<K, V, S>) -> Self {
        map.entries
    }
}

impl<K, V, S> FromIterator<(K, V)> for PresenceMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PresenceMap::from_map(iter.into_iter().collect())
    }
}

impl<K, V, S> Extend<(K, V)> for PresenceMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V, S> IntoIterator for PresenceMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a PresenceMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
