//! Key Index Service contract and the in-memory implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::KeyRole;

use super::errors::IndexResult;

/// Physical location of the rows holding a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Identity of the data file
    pub file_id: String,
    /// Partition the file lives in
    pub partition_path: String,
}

impl Location {
    /// Creates a location
    pub fn new(file_id: impl Into<String>, partition_path: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            partition_path: partition_path.into(),
        }
    }
}

/// Read-only key index provided to the pruning layer.
///
/// A single key may map to zero, one, or more locations; during
/// overlapping compaction states duplicates are possible and all
/// returned locations are honored.
pub trait KeyIndexService {
    /// Looks up the given keys in the index flavor for `role`.
    ///
    /// The result maps each found key to its locations; unknown keys
    /// are simply absent. An empty key list yields an empty mapping.
    fn lookup(
        &self,
        keys: &[String],
        role: KeyRole,
    ) -> IndexResult<HashMap<String, Vec<Location>>>;
}

/// Map-backed key index.
///
/// Serves embedding callers that maintain the index in process, and
/// the test suites. One store per role; lookups never cross flavors.
#[derive(Debug, Default)]
pub struct InMemoryKeyIndex {
    record: HashMap<String, Vec<Location>>,
    secondary: HashMap<String, Vec<Location>>,
}

impl InMemoryKeyIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location for a key in the given flavor
    pub fn insert(&mut self, role: KeyRole, key: impl Into<String>, location: Location) {
        self.store_mut(role).entry(key.into()).or_default().push(location);
    }

    /// Number of distinct keys in the given flavor
    pub fn len(&self, role: KeyRole) -> usize {
        self.store(role).len()
    }

    /// Whether the given flavor holds no keys
    pub fn is_empty(&self, role: KeyRole) -> bool {
        self.store(role).is_empty()
    }

    fn store(&self, role: KeyRole) -> &HashMap<String, Vec<Location>> {
        match role {
            KeyRole::Record => &self.record,
            KeyRole::Secondary => &self.secondary,
        }
    }

    fn store_mut(&mut self, role: KeyRole) -> &mut HashMap<String, Vec<Location>> {
        match role {
            KeyRole::Record => &mut self.record,
            KeyRole::Secondary => &mut self.secondary,
        }
    }
}

impl KeyIndexService for InMemoryKeyIndex {
    fn lookup(
        &self,
        keys: &[String],
        role: KeyRole,
    ) -> IndexResult<HashMap<String, Vec<Location>>> {
        let store = self.store(role);
        let mut found = HashMap::new();
        for key in keys {
            if let Some(locations) = store.get(key) {
                found.insert(key.clone(), locations.clone());
            }
        }
        Ok(found)
    }
}
