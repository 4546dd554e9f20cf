//! Table configuration and index availability
//!
//! Configuration is a read-only collaborator injected by the caller;
//! this module resolves it into the two facts the pruning layer gates
//! on: "which single key column does this role have, if any" and
//! "is the index for this role actually built".
//!
//! # Design Principles
//!
//! - Configuration ambiguity is never an error: a role with zero or
//!   multiple key columns silently disables the optimization
//! - Availability is re-derived on each query, never cached here
//! - Secondary availability structurally implies record availability

mod keys;

pub use keys::{
    is_index_available, is_secondary_index_available, key_columns, KeyColumns, KeyRole,
    TableConfig, RECORD_INDEX_PARTITION, SECONDARY_INDEX_PARTITION,
};
