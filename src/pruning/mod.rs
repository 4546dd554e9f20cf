//! Index-assisted file pruning
//!
//! Two cooperating pieces, consumed by the query planner:
//!
//! - [`KeyPredicateExtractor`] classifies predicates that constrain the
//!   configured record or secondary key to a finite literal set
//! - [`CandidateFileResolver`] resolves the extracted keys through the
//!   key index and intersects the hits with the scan's file list
//!
//! # Design Principles
//!
//! - Sound, never complete: a missed pruning opportunity is fine, a
//!   missed file is not
//! - Inputs are never mutated; every output is a new collection
//! - Unavailable or ambiguous configuration disables pruning silently;
//!   only index-service failures are errors, and they are fatal

mod extractor;
mod resolver;

pub use extractor::{Extraction, KeyPredicateExtractor};
pub use resolver::CandidateFileResolver;
