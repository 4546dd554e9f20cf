//! Pruning Invariant Tests
//!
//! End-to-end tests for the pruning layer:
//! - Extraction is sound (outputs are subsets of inputs)
//! - Unavailable indexes disable pruning, never break it
//! - Candidate sets are restricted to the supplied catalog

use std::collections::HashSet;

use lakeprune::catalog::DataFile;
use lakeprune::config::{
    KeyRole, TableConfig, RECORD_INDEX_PARTITION, SECONDARY_INDEX_PARTITION,
};
use lakeprune::expr::Predicate;
use lakeprune::index::{InMemoryKeyIndex, Location};
use lakeprune::pruning::{CandidateFileResolver, KeyPredicateExtractor};
use serde_json::json;

// =============================================================================
// Helper Fixtures
// =============================================================================

struct TestConfig {
    record_keys: Vec<String>,
    secondary_keys: Vec<String>,
    metadata: bool,
    partitions: HashSet<String>,
}

impl TestConfig {
    fn full() -> Self {
        Self {
            record_keys: vec!["id".into()],
            secondary_keys: vec!["email".into()],
            metadata: true,
            partitions: [RECORD_INDEX_PARTITION, SECONDARY_INDEX_PARTITION]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    fn secondary_unbuilt() -> Self {
        let mut cfg = Self::full();
        cfg.partitions.remove(SECONDARY_INDEX_PARTITION);
        cfg
    }
}

impl TableConfig for TestConfig {
    fn key_fields(&self, role: KeyRole) -> Vec<String> {
        match role {
            KeyRole::Record => self.record_keys.clone(),
            KeyRole::Secondary => self.secondary_keys.clone(),
        }
    }

    fn metadata_enabled(&self) -> bool {
        self.metadata
    }

    fn built_partitions(&self) -> HashSet<String> {
        self.partitions.clone()
    }
}

fn make_files(names: &[&str]) -> Vec<DataFile> {
    names
        .iter()
        .map(|n| DataFile::new(format!("2024/{}", n)))
        .collect()
}

fn mixed_predicates() -> Vec<Predicate> {
    vec![
        Predicate::eq_lit("id", json!("42")),
        Predicate::eq_lit("name", json!("Alice")),
        Predicate::in_lits("id", [json!("7"), json!("8")]),
        Predicate::other("age > 18"),
    ]
}

// =============================================================================
// Extraction Soundness
// =============================================================================

/// Eligible predicates are a subset of the input; every key comes from
/// an eligible predicate.
#[test]
fn test_extraction_soundness() {
    let cfg = TestConfig::full();
    let extractor = KeyPredicateExtractor::new(&cfg);

    let input = mixed_predicates();
    let result = extractor.filter_record_key_queries(&input);

    for predicate in &result.predicates {
        assert!(input.contains(predicate));
    }
    assert_eq!(result.predicates.len(), 2);
    assert_eq!(result.keys, vec!["42", "7", "8"]);
}

/// Unavailable record index returns nothing for any input.
#[test]
fn test_safety_under_unavailability() {
    let mut cfg = TestConfig::full();
    cfg.metadata = false;
    let extractor = KeyPredicateExtractor::new(&cfg);

    let result = extractor.filter_record_key_queries(&mixed_predicates());
    assert!(result.predicates.is_empty());
    assert!(result.keys.is_empty());
}

/// A composite record key disables classification for every shape.
#[test]
fn test_composite_key_exclusion() {
    let mut cfg = TestConfig::full();
    cfg.record_keys = vec!["id".into(), "region".into()];
    let extractor = KeyPredicateExtractor::new(&cfg);

    let result = extractor.filter_record_key_queries(&mixed_predicates());
    assert!(result.predicates.is_empty());
}

// =============================================================================
// Candidate File Properties
// =============================================================================

/// No keys, no candidates, for any catalog.
#[test]
fn test_pruning_idempotence_on_empty_keys() {
    let index = InMemoryKeyIndex::new();
    let resolver = CandidateFileResolver::new(&index);

    let all = make_files(&["f1_0_1.parquet", "f2_0_1.parquet", "f3_0_1.parquet"]);
    let result = resolver.candidate_files(&all, &[]).unwrap();
    assert!(result.is_empty());
}

/// The resolver never invents file names absent from the catalog.
#[test]
fn test_pruning_subset_property() {
    let mut index = InMemoryKeyIndex::new();
    index.insert(KeyRole::Record, "a", Location::new("f1", "p"));
    index.insert(KeyRole::Record, "b", Location::new("ghost", "p"));
    let resolver = CandidateFileResolver::new(&index);

    let all = make_files(&["f1_0_1.parquet", "f2_0_1.parquet"]);
    let catalog_names: HashSet<String> =
        all.iter().map(|f| f.file_name().to_string()).collect();

    let result = resolver
        .candidate_files(&all, &["a".to_string(), "b".to_string()])
        .unwrap();
    assert!(result.is_subset(&catalog_names));
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

/// Record index maps "42" to f1; predicate `id = 42` prunes the scan
/// from three files to one.
#[test]
fn test_end_to_end_record_key_pruning() {
    let cfg = TestConfig::full();
    let mut index = InMemoryKeyIndex::new();
    index.insert(KeyRole::Record, "42", Location::new("f1", "p"));

    let extractor = KeyPredicateExtractor::new(&cfg);
    let resolver = CandidateFileResolver::new(&index);

    let predicates = vec![Predicate::eq_lit("id", json!(42))];
    let extraction = extractor.filter_record_key_queries(&predicates);
    assert_eq!(extraction.predicates, predicates);
    assert_eq!(extraction.keys, vec!["42"]);

    let all = make_files(&["f1_0_1.parquet", "f2_0_1.parquet", "f3_0_1.parquet"]);
    let candidates = resolver.candidate_files(&all, &extraction.keys).unwrap();
    assert_eq!(
        candidates,
        ["f1_0_1.parquet".to_string()].into_iter().collect()
    );
}

/// Secondary round-trip: all-literal IN list extracts in list order.
#[test]
fn test_end_to_end_secondary_key_pruning() {
    let cfg = TestConfig::full();
    let mut index = InMemoryKeyIndex::new();
    index.insert(KeyRole::Secondary, "a@x", Location::new("f2", "p"));
    index.insert(KeyRole::Secondary, "b@x", Location::new("f3", "p"));

    let extractor = KeyPredicateExtractor::new(&cfg);
    let resolver = CandidateFileResolver::new(&index);

    let predicates = vec![Predicate::in_lits("email", [json!("a@x"), json!("b@x")])];
    let extraction = extractor.filter_secondary_key_queries(&predicates);
    assert_eq!(extraction.keys, vec!["a@x", "b@x"]);

    let all = make_files(&["f1_0_1.parquet", "f2_0_1.parquet", "f3_0_1.parquet"]);
    let candidates = resolver
        .candidate_files_from_secondary_index(&all, &extraction.keys)
        .unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates.contains("f2_0_1.parquet"));
    assert!(candidates.contains("f3_0_1.parquet"));
}

/// Secondary index not built: extraction is empty no matter how well
/// the key configuration matches, and the planner falls back cleanly.
#[test]
fn test_end_to_end_secondary_unavailable() {
    let cfg = TestConfig::secondary_unbuilt();
    let extractor = KeyPredicateExtractor::new(&cfg);

    let predicates = vec![Predicate::in_lits("email", [json!("a@x"), json!("b@x")])];
    let extraction = extractor.filter_secondary_key_queries(&predicates);
    assert!(extraction.predicates.is_empty());
    assert!(extraction.keys.is_empty());

    // The record flavor still works against the same configuration
    let record = extractor.filter_record_key_queries(&[Predicate::eq_lit("id", json!("1"))]);
    assert_eq!(record.keys, vec!["1"]);
}
