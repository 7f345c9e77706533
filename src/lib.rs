//! Presence - explicit value-presence containers
//!
//! `Presence<T>` states whether a value is held instead of relying on a
//! sentinel. `PresenceVec` and `PresenceMap` apply the same discipline to
//! sequence and keyed lookups.
//!
//! # Quick Start
//!
//! ```
//! use presence::{from_nullable, run_in_context, present, PresenceMap, PresenceVec};
//!
//! let mut animals = PresenceVec::from(vec!["dog", "cat"]);
//! assert_eq!(animals.maybe_shift().extract(), Ok("dog"));
//!
//! let ages = PresenceMap::from([("tom", 45)]);
//! let tom = ages.maybe_get("tom").transform(|age| age + 1);
//! assert_eq!(tom.extract(), Ok(46));
//!
//! let nickname: Option<&str> = None;
//! let greeting = run_in_context(|| {
//!     let nickname = from_nullable(nickname).extract()?;
//!     Ok(present(format!("hi {nickname}")))
//! });
//! assert!(greeting.is_absent());
//! ```
//!
//! # Architecture
//!
//! The container, its construction functions and the contextual evaluator
//! live in `presence-core`; the collections live in `presence-collections`.

pub use presence_collections::*;
pub use presence_core::*;
