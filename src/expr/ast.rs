//! Predicate tree structures consumed read-only by the pruning layer.

use std::fmt;

/// One side of a comparison: an attribute reference or a literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Reference to a named column
    Attribute(String),
    /// A literal value as parsed by the query engine
    Literal(serde_json::Value),
}

impl Operand {
    /// Creates an attribute reference operand
    pub fn attr(name: impl Into<String>) -> Self {
        Operand::Attribute(name.into())
    }

    /// Creates a literal operand
    pub fn lit(value: serde_json::Value) -> Self {
        Operand::Literal(value)
    }

    /// Returns the attribute name if this operand is a reference
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            Operand::Attribute(name) => Some(name),
            Operand::Literal(_) => None,
        }
    }

    /// Returns the canonical key string if this operand is a literal.
    ///
    /// The key index stores string keys regardless of the column's
    /// declared type: JSON strings yield their inner text, every other
    /// value its compact rendering (`42`, `true`, `null`).
    pub fn key_string(&self) -> Option<String> {
        match self {
            Operand::Literal(serde_json::Value::String(s)) => Some(s.clone()),
            Operand::Literal(v) => Some(v.to_string()),
            Operand::Attribute(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Attribute(name) => write!(f, "{}", name),
            Operand::Literal(v) => write!(f, "{}", v),
        }
    }
}

/// A predicate shape this layer does not inspect.
///
/// Carried so the input list round-trips losslessly; the pruning layer
/// treats it as a black box and the planner keeps it on the normal
/// (non-index) evaluation path.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueExpr {
    /// Query-engine rendering of the expression, for diagnostics only
    pub repr: String,
}

impl OpaqueExpr {
    pub fn new(repr: impl Into<String>) -> Self {
        Self { repr: repr.into() }
    }
}

/// A node in the query engine's predicate tree.
///
/// Closed variant set: `Equals` and `In` are the only shapes the
/// extractor classifies; everything else arrives as `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Equality test, operand order as written in the query
    Equals(Operand, Operand),
    /// Set-membership test of a target expression in a candidate list
    In {
        target: Operand,
        list: Vec<Operand>,
    },
    /// Any shape this layer does not recognize
    Other(OpaqueExpr),
}

impl Predicate {
    /// Creates an equality predicate
    pub fn equals(left: Operand, right: Operand) -> Self {
        Predicate::Equals(left, right)
    }

    /// Creates an `attr = literal` equality predicate
    pub fn eq_lit(attr: impl Into<String>, value: serde_json::Value) -> Self {
        Predicate::Equals(Operand::attr(attr), Operand::lit(value))
    }

    /// Creates a set-membership predicate over an attribute
    pub fn is_in(attr: impl Into<String>, list: Vec<Operand>) -> Self {
        Predicate::In {
            target: Operand::attr(attr),
            list,
        }
    }

    /// Creates an `attr IN (literals...)` predicate
    pub fn in_lits(
        attr: impl Into<String>,
        values: impl IntoIterator<Item = serde_json::Value>,
    ) -> Self {
        Predicate::is_in(attr, values.into_iter().map(Operand::lit).collect())
    }

    /// Creates an opaque predicate
    pub fn other(repr: impl Into<String>) -> Self {
        Predicate::Other(OpaqueExpr::new(repr))
    }

    /// Returns true if this is an equality predicate
    pub fn is_equality(&self) -> bool {
        matches!(self, Predicate::Equals(_, _))
    }

    /// Returns true if this is a set-membership predicate
    pub fn is_membership(&self) -> bool {
        matches!(self, Predicate::In { .. })
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equals(l, r) => write!(f, "{} = {}", l, r),
            Predicate::In { target, list } => {
                write!(f, "{} IN (", target)?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Predicate::Other(o) => write!(f, "{}", o.repr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operand_attribute_name() {
        assert_eq!(Operand::attr("id").attribute_name(), Some("id"));
        assert_eq!(Operand::lit(json!("x")).attribute_name(), None);
    }

    #[test]
    fn test_key_string_canonical_forms() {
        assert_eq!(Operand::lit(json!("k1")).key_string(), Some("k1".into()));
        assert_eq!(Operand::lit(json!(42)).key_string(), Some("42".into()));
        assert_eq!(Operand::lit(json!(true)).key_string(), Some("true".into()));
        assert_eq!(Operand::lit(json!(null)).key_string(), Some("null".into()));
        assert_eq!(Operand::attr("id").key_string(), None);
    }

    #[test]
    fn test_predicate_shapes() {
        let eq = Predicate::eq_lit("id", json!(42));
        assert!(eq.is_equality());
        assert!(!eq.is_membership());

        let inp = Predicate::in_lits("email", [json!("a@x"), json!("b@x")]);
        assert!(inp.is_membership());

        let other = Predicate::other("age > 18");
        assert!(!other.is_equality());
        assert!(!other.is_membership());
    }

    #[test]
    fn test_predicate_display() {
        let eq = Predicate::eq_lit("id", json!(42));
        assert_eq!(format!("{}", eq), "id = 42");

        let inp = Predicate::in_lits("c", [json!("a"), json!("b")]);
        assert_eq!(format!("{}", inp), "c IN (\"a\", \"b\")");
    }
}
