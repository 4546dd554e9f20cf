//! Key Index Service contract for the pruning layer
//!
//! The key index maps key strings to the physical locations of the
//! rows holding them. This layer only ever reads it.
//!
//! # Design Principles
//!
//! - The index narrows the search space; it never decides visibility
//! - Unknown keys are absent from results, not errors
//! - Lookup failures are fatal to the calling scan and propagate
//!   unmodified: a silently incomplete candidate set would corrupt
//!   query results

mod errors;
mod service;

pub use errors::{IndexError, IndexErrorCode, IndexResult, Severity};
pub use service::{InMemoryKeyIndex, KeyIndexService, Location};
