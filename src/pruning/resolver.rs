//! Candidate-file resolution.
//!
//! Translates extracted key strings into the subset of the scan's
//! files that may hold them. The index is a black box here: returned
//! partition paths are recorded but never gate inclusion, only
//! file-identity membership does.

use std::collections::{HashMap, HashSet};

use crate::catalog::DataFile;
use crate::config::KeyRole;
use crate::index::{IndexResult, KeyIndexService};
use crate::observability::Logger;

/// Resolves keys to candidate file names via the key index.
///
/// The index service is a constructor-supplied collaborator with
/// caller-controlled lifetime. Lookup failures propagate unmodified;
/// availability must be checked before keys are ever extracted, so a
/// resolver is only reached with an index that exists.
pub struct CandidateFileResolver<'a, I: KeyIndexService> {
    index: &'a I,
}

impl<'a, I: KeyIndexService> CandidateFileResolver<'a, I> {
    /// Creates a resolver over the given key index
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Returns the names of files that may contain the given record
    /// keys, restricted to `all_files`.
    pub fn candidate_files(
        &self,
        all_files: &[DataFile],
        record_keys: &[String],
    ) -> IndexResult<HashSet<String>> {
        self.candidates(KeyRole::Record, all_files, record_keys)
    }

    /// Same mechanics as [`candidate_files`](Self::candidate_files),
    /// sourced from the secondary-key index.
    pub fn candidate_files_from_secondary_index(
        &self,
        all_files: &[DataFile],
        secondary_keys: &[String],
    ) -> IndexResult<HashSet<String>> {
        self.candidates(KeyRole::Secondary, all_files, secondary_keys)
    }

    fn candidates(
        &self,
        role: KeyRole,
        all_files: &[DataFile],
        keys: &[String],
    ) -> IndexResult<HashSet<String>> {
        if keys.is_empty() {
            return Ok(HashSet::new());
        }

        let found = self.index.lookup(keys, role)?;

        // Fold every location into file-id -> partition-path.
        // Last-write-wins on duplicate ids; the path is consistent per
        // file id in practice and never filters below.
        let mut hits: HashMap<String, String> = HashMap::new();
        for locations in found.values() {
            for location in locations {
                hits.insert(location.file_id.clone(), location.partition_path.clone());
            }
        }

        let names: HashSet<String> = all_files
            .iter()
            .filter(|file| hits.contains_key(&file.file_id()))
            .map(|file| file.file_name().to_string())
            .collect();

        let candidates = names.len().to_string();
        let keys_looked_up = keys.len().to_string();
        let total = all_files.len().to_string();
        Logger::trace(
            "FILES_PRUNED",
            &[
                ("candidates", &candidates),
                ("keys", &keys_looked_up),
                ("role", role.as_str()),
                ("total", &total),
            ],
        );
        Ok(names)
    }
}
