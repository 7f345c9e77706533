//! Contextual evaluation
//!
//! `run_in_context` lets a block chain several `extract()` calls with `?` and
//! treat any failed extraction as "the whole block produced absence".
//!
//! ```
//! use presence_core::{empty, from_nullable, present, run_in_context, Presence};
//!
//! let name = from_nullable(Some("Tom"));
//! let age: Presence<u32> = empty();
//!
//! let person = run_in_context(|| Ok(present((name.extract()?, age.extract()?))));
//! assert!(person.is_absent());
//! ```

use crate::error::ExtractionError;
use crate::presence::Presence;
use tracing::debug;

/// Run `computation`, converting a failed extraction into an absent container
///
/// A container returned normally by `computation` passes through unchanged,
/// absent or not. No `ExtractionError` escapes this function.
pub fn run_in_context<T, F>(computation: F) -> Presence<T>
where
    F: FnOnce() -> Result<Presence<T>, ExtractionError>,
{
    match computation() {
        Ok(presence) => presence,
        Err(err) => {
            debug!(
                target: "presence::context",
                reason = %err,
                "Extraction failed inside context, yielding absence"
            );
            Presence::default()
        }
    }
}
