//! Predicate AST for the pruning layer
//!
//! The query engine hands the pruning layer a flat list of predicates.
//! Only two shapes are ever recognized here:
//!
//! 1. Equality between an attribute reference and a literal
//! 2. Set membership of an attribute reference in an all-literal list
//!
//! Every other shape is carried opaquely and passed through unmodified.
//! Adding a new recognizable shape means one new variant arm, not a
//! change to the AST itself.

mod ast;

pub use ast::{OpaqueExpr, Operand, Predicate};
