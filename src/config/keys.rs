//! Key-column resolution and index-availability checks.

use std::collections::HashSet;

/// Metadata partition holding the record-key index.
pub const RECORD_INDEX_PARTITION: &str = "record_index";

/// Metadata partition holding the secondary-key index.
pub const SECONDARY_INDEX_PARTITION: &str = "secondary_index";

/// Which key role a predicate or lookup targets.
///
/// One enum serves both configuration lookup and index-flavor
/// selection; the resolver operations differ only in this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// The record (primary) key
    Record,
    /// The secondary indexed key
    Secondary,
}

impl KeyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRole::Record => "record",
            KeyRole::Secondary => "secondary",
        }
    }
}

/// Table configuration provided to the pruning layer (read-only).
pub trait TableConfig {
    /// Configured key field names for the given role, in declaration order
    fn key_fields(&self, role: KeyRole) -> Vec<String>;

    /// Whether the metadata subsystem is enabled for this table
    fn metadata_enabled(&self) -> bool;

    /// Names of the metadata partitions that have been built
    fn built_partitions(&self) -> HashSet<String>;
}

/// Result of resolving a role's key configuration.
///
/// Classification only ever branches on `Single`; zero or multiple
/// columns disable the optimization for that role by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyColumns {
    /// No key column declared for this role
    None,
    /// Exactly one key column
    Single(String),
    /// Composite key; excluded from index pruning
    Composite(Vec<String>),
}

impl KeyColumns {
    /// Returns the column name iff exactly one is configured
    pub fn single(&self) -> Option<&str> {
        match self {
            KeyColumns::Single(name) => Some(name),
            _ => None,
        }
    }
}

/// Resolves the key configuration for a role.
pub fn key_columns<C: TableConfig>(config: &C, role: KeyRole) -> KeyColumns {
    let mut fields = config.key_fields(role);
    match fields.len() {
        0 => KeyColumns::None,
        1 => KeyColumns::Single(fields.remove(0)),
        _ => KeyColumns::Composite(fields),
    }
}

/// True iff the record-key index is enabled and built.
pub fn is_index_available<C: TableConfig>(config: &C) -> bool {
    config.metadata_enabled() && config.built_partitions().contains(RECORD_INDEX_PARTITION)
}

/// True iff the secondary-key index is enabled and built.
///
/// Nested on [`is_index_available`] so secondary-only availability
/// cannot occur.
pub fn is_secondary_index_available<C: TableConfig>(config: &C) -> bool {
    is_index_available(config)
        && config.built_partitions().contains(SECONDARY_INDEX_PARTITION)
}
