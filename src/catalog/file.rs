//! Data-file record and file-identity derivation.

use serde::{Deserialize, Serialize};

/// A physical data file belonging to a scan's candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFile {
    /// Full physical path
    pub path: String,
}

impl DataFile {
    /// Creates a data file record
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file name (final path segment)
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Returns the file identity embedded in this file's name
    pub fn file_id(&self) -> String {
        file_id_from_path(&self.path)
    }
}

/// Derives the file identity embedded in a data-file path.
///
/// Data files are named `<fileId>_<writeToken>_<instant>.<ext>`; the
/// identity is the token before the first `_` of the final path
/// segment. Names without a token separator fall back to the stem
/// without extension, so bare identities round-trip unchanged.
pub fn file_id_from_path(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.split_once('_') {
        Some((id, _)) => id.to_string(),
        None => name
            .split_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(name)
            .to_string(),
    }
}
