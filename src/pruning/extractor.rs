//! Key-predicate extraction.
//!
//! Walks a flat predicate list and keeps the predicates that pin the
//! configured single key column to literal values. Never recurses into
//! boolean combinators: only top-level predicates are considered.

use crate::config::{
    is_index_available, is_secondary_index_available, key_columns, KeyColumns, KeyRole,
    TableConfig,
};
use crate::expr::{Operand, Predicate};
use crate::observability::Logger;

/// Result of extraction: the index-eligible predicates, in input
/// order, and the flattened literal key values they reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Eligible predicates, cloned from the input
    pub predicates: Vec<Predicate>,
    /// Canonical key strings, one per referenced literal
    pub keys: Vec<String>,
}

impl Extraction {
    /// An extraction with nothing eligible
    pub fn empty() -> Self {
        Self::default()
    }

    /// True iff no predicate was eligible
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Classifies predicates against the configured key columns.
///
/// Pure with respect to its inputs; configuration is re-read on every
/// call so a refreshed provider takes effect immediately.
pub struct KeyPredicateExtractor<'a, C: TableConfig> {
    config: &'a C,
}

impl<'a, C: TableConfig> KeyPredicateExtractor<'a, C> {
    /// Creates an extractor over the given table configuration
    pub fn new(config: &'a C) -> Self {
        Self { config }
    }

    /// Extracts predicates eligible for the record-key index.
    ///
    /// Short-circuits to an empty extraction when the record index is
    /// unavailable, so callers never pay lookup cost without an index.
    pub fn filter_record_key_queries(&self, predicates: &[Predicate]) -> Extraction {
        if !is_index_available(self.config) {
            return Extraction::empty();
        }
        self.extract(predicates, KeyRole::Record)
    }

    /// Extracts predicates eligible for the secondary-key index.
    pub fn filter_secondary_key_queries(&self, predicates: &[Predicate]) -> Extraction {
        if !is_secondary_index_available(self.config) {
            return Extraction::empty();
        }
        self.extract(predicates, KeyRole::Secondary)
    }

    fn extract(&self, predicates: &[Predicate], role: KeyRole) -> Extraction {
        let key_column = match key_columns(self.config, role) {
            KeyColumns::Single(name) => name,
            // Zero or composite key columns: the optimization is off
            // for this role, not an error
            KeyColumns::None | KeyColumns::Composite(_) => return Extraction::empty(),
        };

        let mut out = Extraction::empty();
        for predicate in predicates {
            if let Some(mut keys) = classify(predicate, &key_column) {
                out.predicates.push(predicate.clone());
                out.keys.append(&mut keys);
            }
        }

        let eligible = out.predicates.len().to_string();
        let keys = out.keys.len().to_string();
        let total = predicates.len().to_string();
        Logger::trace(
            "KEY_PREDICATES_EXTRACTED",
            &[
                ("eligible", &eligible),
                ("keys", &keys),
                ("role", role.as_str()),
                ("total", &total),
            ],
        );
        out
    }
}

/// Classifies one predicate against a key column.
///
/// Returns the literal key strings the predicate pins the column to,
/// or `None` when the predicate is not index-eligible. A single
/// non-literal entry in a membership list rejects the whole predicate.
fn classify(predicate: &Predicate, key_column: &str) -> Option<Vec<String>> {
    match predicate {
        Predicate::Equals(left, right) => {
            let (attr, literal) = match (left, right) {
                (Operand::Attribute(name), Operand::Literal(_)) => (name.as_str(), right),
                (Operand::Literal(_), Operand::Attribute(name)) => (name.as_str(), left),
                // attribute-vs-attribute and literal-vs-literal are
                // never index-eligible
                _ => return None,
            };
            if attr != key_column {
                return None;
            }
            literal.key_string().map(|key| vec![key])
        }
        Predicate::In { target, list } => {
            let attr = target.attribute_name()?;
            if attr != key_column {
                return None;
            }
            let mut keys = Vec::with_capacity(list.len());
            for item in list {
                keys.push(item.key_string()?);
            }
            Some(keys)
        }
        Predicate::Other(_) => None,
    }
}
