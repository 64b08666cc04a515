//! Typed handles (variables, nodes, relationships, paths), parameters,
//! literals and property access.

mod literal;
mod param;
mod property;
mod variable;

pub use literal::{Literal, MAX_SAFE_INTEGER};
pub use param::Param;
pub use property::{PropertyKey, PropertyRef};
pub use variable::{NodeRef, PathRef, RelationshipRef, Variable, VariableKind};
