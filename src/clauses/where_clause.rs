use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::{and, Expr};
use crate::to_cypher::ToCypher;

/// `WHERE predicate`
#[derive(Debug, Clone)]
pub struct WhereClause {
    predicate: Expr,
}

impl WhereClause {
    pub fn new(predicate: impl Into<Expr>) -> Self {
        Self {
            predicate: predicate.into(),
        }
    }

    pub fn predicate(&self) -> &Expr {
        &self.predicate
    }

    /// AND `predicate` onto an optional existing filter
    pub(crate) fn and_into(existing: Option<WhereClause>, predicate: impl Into<Expr>) -> Option<Self> {
        Some(match existing {
            Some(current) => WhereClause::new(and(current.predicate, predicate)),
            None => WhereClause::new(predicate),
        })
    }
}

impl ToCypher for WhereClause {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        Ok(format!("WHERE {}", self.predicate.to_cypher(env)?))
    }
}
