//! Generic presence wrapper type
//!
//! `Presence<T>` states explicitly whether a value of type `T` is held.
//! Lookups that would otherwise hand back a sentinel (a null-equivalent or a
//! not-found index) return `Presence<T>` instead.
//!
//! ## The Contract
//!
//! ```text
//! fn is_present(&self) -> bool
//! fn extract(self) -> Result<T, ExtractionError>
//! fn transform<Y>(self, f) -> Presence<Y>
//! ```
//!
//! - The absent/present state is the single source of truth for every combinator
//! - Containers are immutable; combinators always produce a new container
//! - `extract` is the only fallible read
//!
//! Use [`present`](crate::present), [`from_nullable`](crate::from_nullable) or
//! [`empty`](crate::empty) to create one.

use crate::error::{ExtractionError, DEFAULT_EXTRACTION_MESSAGE};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is either present or absent
///
/// ## Invariants
///
/// - Exactly one of `is_present()` and `is_absent()` holds
/// - A container never changes state after construction
/// - Closures handed to a combinator are never invoked on the wrong state
///
/// ## Serialization
///
/// Serialized as a sequence of zero or one element (`[]` absent, `[v]`
/// present), so a held value that itself serializes as `null` keeps its
/// presence across a round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Presence<T> {
    value: Option<T>,
}

impl<T> Presence<T> {
    #[inline]
    pub(crate) const fn new(value: Option<T>) -> Self {
        Presence { value }
    }

    /// Returns true if a value is held
    #[inline]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns true if no value is held
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Return the held value
    ///
    /// Fails with an [`ExtractionError`] carrying [`DEFAULT_EXTRACTION_MESSAGE`]
    /// when absent.
    ///
    /// # Example
    ///
    /// ```
    /// use presence_core::{empty, present, Presence};
    ///
    /// assert_eq!(present("John").extract(), Ok("John"));
    ///
    /// let name: Presence<&str> = empty();
    /// assert!(name.extract().is_err());
    /// ```
    pub fn extract(self) -> Result<T, ExtractionError> {
        self.extract_with_message(DEFAULT_EXTRACTION_MESSAGE)
    }

    /// Return the held value, failing with `message` when absent
    ///
    /// The message should explain why the caller expected a value to be held.
    /// An empty message falls back to [`DEFAULT_EXTRACTION_MESSAGE`].
    pub fn extract_with_message(self, message: impl Into<String>) -> Result<T, ExtractionError> {
        match self.value {
            Some(value) => Ok(value),
            None => {
                let message = message.into();
                if message.is_empty() {
                    Err(ExtractionError::default())
                } else {
                    Err(ExtractionError::new(message))
                }
            }
        }
    }

    /// Return the held value, or `fallback` when absent
    #[inline]
    pub fn extract_or(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Return the held value, or compute a fallback when absent
    ///
    /// `fallback` is only invoked on an absent container.
    #[inline]
    pub fn extract_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(fallback)
    }

    /// Return the held value, or `T::default()` when absent
    #[inline]
    pub fn extract_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Convert into a plain `Option<T>` for interop with code that does not use `Presence`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Borrow the held value without consuming the container
    #[inline]
    pub fn as_ref(&self) -> Presence<&T> {
        Presence::new(self.value.as_ref())
    }

    /// Map the held value to a new type
    ///
    /// `f` is invoked exactly once on a present container and never on an
    /// absent one.
    ///
    /// # Example
    ///
    /// ```
    /// use presence_core::present;
    ///
    /// let age = present(34).transform(|years| years * 12);
    /// assert_eq!(age.extract(), Ok(408));
    /// ```
    pub fn transform<Y, F>(self, f: F) -> Presence<Y>
    where
        F: FnOnce(T) -> Y,
    {
        Presence::new(self.value.map(f))
    }

    /// Chain a step that may itself produce absence
    pub fn flat_transform<Y, F>(self, f: F) -> Presence<Y>
    where
        F: FnOnce(T) -> Presence<Y>,
    {
        match self.value {
            Some(value) => f(value),
            None => Presence::new(None),
        }
    }

    /// Keep the held value only if it satisfies `predicate`
    pub fn filter<P>(self, predicate: P) -> Presence<T>
    where
        P: FnOnce(&T) -> bool,
    {
        Presence::new(self.value.filter(predicate))
    }

    /// Invoke `action` with the held value if present
    pub fn when_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
    }

    /// Invoke `action` if absent
    pub fn when_absent<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.value.is_none() {
            action();
        }
    }

    /// Invoke exactly one of `present_action` and `absent_action`, depending on state
    pub fn when_present_or_else<P, A>(&self, present_action: P, absent_action: A)
    where
        P: FnOnce(&T),
        A: FnOnce(),
    {
        match &self.value {
            Some(value) => present_action(value),
            None => absent_action(),
        }
    }

    /// Return `self` if present, otherwise the container computed by `absent_action`
    ///
    /// `absent_action` is not invoked on a present container. Its result may
    /// itself be absent.
    pub fn or_else_compute<F>(self, absent_action: F) -> Presence<T>
    where
        F: FnOnce() -> Presence<T>,
    {
        match self.value {
            Some(_) => self,
            None => absent_action(),
        }
    }

    /// Returns true only if a value is held and it satisfies `predicate`
    ///
    /// `predicate` is not invoked on an absent container.
    pub fn satisfies_when_present<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.value.as_ref().is_some_and(predicate)
    }

    /// Iterate over the held value (zero or one item)
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::new(None)
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        Presence::new(value)
    }
}

impl<T> From<Presence<T>> for Option<T> {
    fn from(presence: Presence<T>) -> Self {
        presence.value
    }
}

impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.value.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Presence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut items = Vec::<T>::deserialize(deserializer)?;
        if items.len() > 1 {
            return Err(D::Error::invalid_length(
                items.len(),
                &"a sequence of zero or one element",
            ));
        }
        Ok(Presence::new(items.pop()))
    }
}

impl<T> IntoIterator for Presence<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Presence<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
