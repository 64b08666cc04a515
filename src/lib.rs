//! cyphergen - typed Cypher statement builder
//!
//! This crate assembles graph queries from strongly typed clause and
//! expression values and compiles them into parameterized Cypher text:
//! - References (nodes, relationships, paths, variables) named per render
//! - Parameters that never leak values into the query text
//! - Precedence-aware expression rendering
//! - Pattern, clause and sub-query composition
//!
//! ```
//! use cyphergen::clauses::{Match, Return};
//! use cyphergen::expressions::eq;
//! use cyphergen::pattern::{NodePattern, Pattern, RelationshipPattern};
//! use cyphergen::references::{NodeRef, Param};
//!
//! let person = NodeRef::new();
//! let friend = NodeRef::new();
//! let query = Match::new(
//!     Pattern::new(NodePattern::new(&person).label("Person")).related(
//!         RelationshipPattern::anonymous().rel_type("KNOWS"),
//!         NodePattern::new(&friend).label("Person"),
//!     ),
//! )
//! .and_where(eq(person.property("name"), Param::new("Alice")))
//! .returning(Return::new().column(&person).column(&friend));
//!
//! let result = query.build().unwrap();
//! assert_eq!(
//!     result.cypher,
//!     "MATCH (this0:Person)-[:KNOWS]->(this1:Person)\nWHERE this0.name = $param0\nRETURN this0, this1"
//! );
//! assert_eq!(result.params["param0"], "Alice");
//! ```

pub mod clauses;
pub mod config;
pub mod environment;
pub mod errors;
pub mod expressions;
pub mod pattern;
pub mod procedures;
pub mod references;
pub mod to_cypher;
pub mod utils;

pub use clauses::{concat, Clause};
pub use config::BuildConfig;
pub use environment::{CypherResult, Environment};
pub use errors::{BuildResult, CypherBuildError, ErrorKind};
pub use expressions::Expr;
pub use to_cypher::ToCypher;
