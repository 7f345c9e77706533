//! Presence-aware collections
//!
//! Thin wrappers over the standard collections whose lookups return
//! [`Presence`](presence_core::Presence) instead of a sentinel:
//! - PresenceVec: ordered sequence (`Vec<T>`) with `maybe_at`, `maybe_pop`,
//!   `maybe_shift`, `maybe_find`, `maybe_find_index`, `maybe_index_of`
//! - PresenceMap: keyed mapping (`HashMap<K, V, S>`) with `maybe_get` and `get_or_add`
//!
//! Both own their inner collection and expose it through `Deref`/`DerefMut`,
//! so the raw operations stay available alongside the presence-aware ones.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod map;
pub mod vec;

pub use map::PresenceMap;
pub use vec::PresenceVec;
