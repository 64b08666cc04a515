//! Function calls and the built-in function catalogue.
//!
//! Every helper returns a `FunctionCall` (or `PredicateFunction`), both of
//! which convert into `Expr`:
//!
//! ```
//! use cyphergen::expressions::functions;
//! use cyphergen::references::NodeRef;
//! use cyphergen::{Environment, ToCypher};
//!
//! let movie = NodeRef::new();
//! let call = functions::to_lower(movie.property("title"));
//! let mut env = Environment::new();
//! assert_eq!(call.to_cypher(&mut env).unwrap(), "toLower(this0.title)");
//! ```

mod aggregation;
mod list;
mod path;
mod predicate;
mod scalar;
mod string;
mod temporal;

pub use aggregation::{avg, collect, count, count_star, max, min, sum};
pub use list::{head, keys, last, range, reverse, size, tail};
pub use path::{length, nodes, relationships};
pub use predicate::{all, any, exists, none, single, PredicateFunction, PredicateKind};
pub use scalar::{
    coalesce, distance, element_id, id, labels, point, point_distance, random_uuid, to_boolean,
    to_float, to_integer,
};
pub use string::{left, ltrim, replace, right, rtrim, split, substring, to_lower, to_string, to_upper, trim};
pub use temporal::{
    date, date_from, datetime, datetime_from, localdatetime, localdatetime_from, localtime,
    localtime_from, time, time_from,
};

use super::Expr;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::to_cypher::{compile_joined, ToCypher};
use crate::utils::escape_identifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Scalar,
    /// Accepts `DISTINCT` before its argument
    Aggregation,
}

/// Call of a named function: `name(arg1, arg2)`
#[derive(Debug, Clone)]
pub struct FunctionCall {
    name: String,
    args: Vec<Expr>,
    kind: FunctionKind,
    distinct: bool,
}

impl FunctionCall {
    /// Scalar function call. Dotted names (`point.distance`) are namespaced.
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
            kind: FunctionKind::Scalar,
            distinct: false,
        }
    }

    pub fn aggregation(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            kind: FunctionKind::Aggregation,
            ..Self::new(name, args)
        }
    }

    /// `name(DISTINCT arg)`; only valid on aggregations
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

/// Escape each segment of a namespaced name: `apoc.util.validate`
pub(crate) fn escape_qualified_name(name: &str) -> String {
    name.split('.')
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

impl ToCypher for FunctionCall {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if self.distinct && self.kind == FunctionKind::Scalar {
            return Err(CypherBuildError::DistinctOnScalarFunction(self.name.clone()));
        }
        let args = compile_joined(&self.args, env, ", ")?;
        let distinct = if self.distinct { "DISTINCT " } else { "" };
        Ok(format!(
            "{}({}{})",
            escape_qualified_name(&self.name),
            distinct,
            args
        ))
    }
}
