//! lakeprune - index-assisted file pruning for table-scan planning
//!
//! Given a scan's predicates and its full file list, decides which
//! predicates an auxiliary key index can answer and which files can
//! possibly contain the matching rows.

pub mod catalog;
pub mod config;
pub mod expr;
pub mod index;
pub mod observability;
pub mod pruning;
