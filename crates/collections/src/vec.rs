//! Presence-aware ordered sequence
//!
//! `PresenceVec<T>` owns a `Vec<T>` and adds lookups that return
//! [`Presence`] instead of panicking or yielding a not-found index.
//! Every other `Vec` operation passes through via `Deref`/`DerefMut`
//! unchanged.

use presence_core::{empty, from_nullable, present, Presence};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// An ordered, index-addressable sequence with presence-returning lookups
///
/// ## Invariants
///
/// - Lookups never alter the sequence
/// - `maybe_pop`/`maybe_shift`/`maybe_remove` remove exactly one element when
///   they return a present value, and none otherwise
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresenceVec<T> {
    items: Vec<T>,
}

impl<T> PresenceVec<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        PresenceVec { items: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        PresenceVec {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an existing vector, keeping its length and order
    pub fn from_vec(items: Vec<T>) -> Self {
        PresenceVec { items }
    }

    /// Consume and return the inner vector
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// The element at `index`, absent if out of bounds
    #[inline]
    pub fn maybe_at(&self, index: usize) -> Presence<&T> {
        from_nullable(self.items.get(index))
    }

    /// The first element, absent if the sequence is empty
    #[inline]
    pub fn maybe_first(&self) -> Presence<&T> {
        from_nullable(self.items.first())
    }

    /// The last element, absent if the sequence is empty
    #[inline]
    pub fn maybe_last(&self) -> Presence<&T> {
        from_nullable(self.items.last())
    }

    /// The element `offset` places from the end, absent if out of bounds
    ///
    /// `offset` 1 is the last element, so this mirrors a negative index `-offset`.
    /// An `offset` of 0 is always absent.
    pub fn maybe_at_from_end(&self, offset: usize) -> Presence<&T> {
        match self.items.len().checked_sub(offset) {
            Some(index) if offset > 0 => self.maybe_at(index),
            _ => empty(),
        }
    }

    /// Remove and return the last element
    ///
    /// Absent, with the sequence unchanged, if the sequence is empty.
    pub fn maybe_pop(&mut self) -> Presence<T> {
        from_nullable(self.items.pop())
    }

    /// Remove and return the first element
    ///
    /// Absent, with the sequence unchanged, if the sequence is empty.
    pub fn maybe_shift(&mut self) -> Presence<T> {
        self.maybe_remove(0)
    }

    /// Remove and return the element at `index`, shifting later elements down
    ///
    /// Absent, with the sequence unchanged, if `index` is out of bounds.
    pub fn maybe_remove(&mut self, index: usize) -> Presence<T> {
        if index < self.items.len() {
            present(self.items.remove(index))
        } else {
            empty()
        }
    }

    /// Index of the first element satisfying `predicate`
    pub fn maybe_find_index<P>(&self, predicate: P) -> Presence<usize>
    where
        P: FnMut(&T) -> bool,
    {
        from_nullable(self.items.iter().position(predicate))
    }

    /// The first element satisfying `predicate`
    pub fn maybe_find<P>(&self, mut predicate: P) -> Presence<&T>
    where
        P: FnMut(&T) -> bool,
    {
        from_nullable(self.items.iter().find(|item| predicate(*item)))
    }

    /// Index of the first element equal to `value`
    pub fn maybe_index_of(&self, value: &T) -> Presence<usize>
    where
        T: PartialEq,
    {
        self.maybe_index_of_from(value, 0)
    }

    /// Index of the first element at or after `from_index` equal to `value`
    ///
    /// Absent if `from_index` is past the end.
    pub fn maybe_index_of_from(&self, value: &T, from_index: usize) -> Presence<usize>
    where
        T: PartialEq,
    {
        let found = self
            .items
            .get(from_index..)
            .and_then(|tail| tail.iter().position(|item| item == value))
            .map(|offset| from_index + offset);
        from_nullable(found)
    }
}

impl<T> Default for PresenceVec<T> {
    fn default() -> Self {
        PresenceVec::new()
    }
}

impl<T> Deref for PresenceVec<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for PresenceVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> AsRef<[T]> for PresenceVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for PresenceVec<T> {
    fn from(items: Vec<T>) -> Self {
        PresenceVec::from_vec(items)
    }
}

impl<T, const N: usize> From<[T; N]> for PresenceVec<T> {
    fn from(items: [T; N]) -> Self {
        PresenceVec::from_vec(Vec::from(items))
    }
}

impl<T> From<PresenceVec<T>> for Vec<T> {
    fn from(seq: PresenceVec<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for PresenceVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PresenceVec::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for PresenceVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for PresenceVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PresenceVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut PresenceVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

// ============================================================================
// Tests
// ============================================================================
