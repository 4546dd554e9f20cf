//! Observability for the pruning layer
//!
//! # Principles
//!
//! 1. Observability is read-only: no event influences pruning decisions
//! 2. Logs are synchronous, one JSON line per event
//! 3. Field ordering is deterministic
//!
//! # Usage
//!
//! ```ignore
//! use lakeprune::observability::Logger;
//!
//! Logger::trace("FILES_PRUNED", &[("candidates", "2"), ("total", "10")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
