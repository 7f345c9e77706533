//! Construction functions for `Presence<T>`
//!
//! Each function encodes a different caller intent:
//!
//! - `present`: the value is genuine and its type cannot encode absence
//! - `from_required`: the input is nullable, but the caller asserts it holds a value
//! - `from_nullable`: the caller does not know whether the input holds a value
//! - `empty`: no value, unconditionally

use crate::error::{Error, Result};
use crate::presence::Presence;
use tracing::warn;

/// Create a present container from a genuine value
///
/// # Example
///
/// ```
/// use presence_core::present;
///
/// let name = present("John");
/// assert!(name.is_present());
/// ```
#[inline]
pub fn present<T>(value: T) -> Presence<T> {
    Presence::new(Some(value))
}

/// Create a present container from a nullable input the caller asserts is set
///
/// Fails with [`Error::RequiredValueAbsent`] when handed `None`, so a broken
/// assertion surfaces where the container is built rather than at a later
/// extraction.
pub fn from_required<T>(value: Option<T>) -> Result<Presence<T>> {
    match value {
        Some(value) => Ok(present(value)),
        None => {
            warn!(target: "presence::construct", "from_required called with an absent input");
            Err(Error::RequiredValueAbsent)
        }
    }
}

/// Create a container from an input that may or may not hold a value
///
/// # Example
///
/// ```
/// use presence_core::from_nullable;
///
/// let name: Option<&str> = None;
/// assert!(from_nullable(name).is_absent());
/// ```
#[inline]
pub fn from_nullable<T>(value: Option<T>) -> Presence<T> {
    Presence::new(value)
}

/// Create an absent container
#[inline]
pub fn empty<T>() -> Presence<T> {
    Presence::new(None)
}
