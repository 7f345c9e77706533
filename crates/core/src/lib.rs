//! Core presence types for Presence
//!
//! This crate defines the value-presence abstraction the collections build on:
//! - Presence: Container that is either present (holds a `T`) or absent
//! - Construction: `present`, `from_required`, `from_nullable`, `empty`
//! - Context: `run_in_context` turns a failed extraction into absence
//! - Error: ExtractionError and the crate-level Error

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod construct;
pub mod context;
pub mod error;
pub mod presence;

// Re-export commonly used types and functions
pub use construct::{empty, from_nullable, from_required, present};
pub use context::run_in_context;
pub use error::{Error, ExtractionError, Result, DEFAULT_EXTRACTION_MESSAGE};
pub use presence::Presence;
