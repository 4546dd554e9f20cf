//! File catalog model for the pruning layer
//!
//! The scan supplies the full list of candidate data files; this module
//! owns the plain-data file record and the pure derivation of a file's
//! identity from its path.
//!
//! # Invariants
//!
//! - File-identity derivation is deterministic and performs no I/O
//! - The catalog is consumed read-only; no ordering is assumed

mod file;

pub use file::{file_id_from_path, DataFile};
