//! Catalogue of well-known procedures and procedure-backed functions.
//!
//! Each helper returns a ready `Procedure` (or `FunctionCall`) with the
//! procedure's name and yield columns filled in:
//! - `db.labels()`, `db.relationshipTypes()`, `db.propertyKeys()`: schema metadata
//! - `db.index.fulltext.queryNodes(index, query)`: full-text search
//! - `apoc.util.validate(predicate, message, params)`: void assertion procedure
//! - `apoc.util.validatePredicate(...)`: the same check as a boolean function

pub mod apoc;
pub mod db;
