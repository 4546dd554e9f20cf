//! Key-index error types.
//!
//! Error codes:
//! - LAKE_INDEX_LOOKUP_FAILED (FATAL)
//! - LAKE_INDEX_CORRUPT (FATAL)

use std::fmt;

/// Severity levels for index errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The calling scan must fail
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Key-index error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorCode {
    /// Index storage could not be read
    LakeIndexLookupFailed,
    /// Index contents failed validation
    LakeIndexCorrupt,
}

impl IndexErrorCode {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            IndexErrorCode::LakeIndexLookupFailed => "LAKE_INDEX_LOOKUP_FAILED",
            IndexErrorCode::LakeIndexCorrupt => "LAKE_INDEX_CORRUPT",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        // A wrong candidate set is worse than a failed query
        Severity::Fatal
    }
}

impl fmt::Display for IndexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Key-index error with context
#[derive(Debug, Clone)]
pub struct IndexError {
    code: IndexErrorCode,
    message: String,
}

impl IndexError {
    /// Create a lookup failure error
    pub fn lookup_failed(reason: impl Into<String>) -> Self {
        Self {
            code: IndexErrorCode::LakeIndexLookupFailed,
            message: reason.into(),
        }
    }

    /// Create a corrupt-index error
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self {
            code: IndexErrorCode::LakeIndexCorrupt,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> IndexErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for IndexError {}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;
