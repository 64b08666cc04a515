//! `db.*` procedures.

use crate::clauses::Procedure;
use crate::expressions::Expr;
use crate::references::Variable;

/// `CALL db.labels() YIELD label AS <label>`
pub fn labels(label: impl Into<Variable>) -> Procedure {
    Procedure::new("db.labels", vec![]).yield_as("label", label)
}

/// `CALL db.relationshipTypes() YIELD relationshipType AS <rel_type>`
pub fn relationship_types(rel_type: impl Into<Variable>) -> Procedure {
    Procedure::new("db.relationshipTypes", vec![]).yield_as("relationshipType", rel_type)
}

/// `CALL db.propertyKeys() YIELD propertyKey AS <key>`
pub fn property_keys(key: impl Into<Variable>) -> Procedure {
    Procedure::new("db.propertyKeys", vec![]).yield_as("propertyKey", key)
}

/// Full-text node search, yielding the matched node and its score
///
/// `CALL db.index.fulltext.queryNodes("index", $param0) YIELD node AS this0, score AS var1`
pub fn fulltext_query_nodes(
    index_name: impl Into<String>,
    query: impl Into<Expr>,
    node: impl Into<Variable>,
    score: impl Into<Variable>,
) -> Procedure {
    Procedure::new(
        "db.index.fulltext.queryNodes",
        vec![Expr::from(index_name.into()), query.into()],
    )
    .yield_as("node", node)
    .yield_as("score", score)
}
