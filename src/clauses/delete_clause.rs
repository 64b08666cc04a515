use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::Expr;
use crate::to_cypher::{compile_joined, ToCypher};

/// `DELETE a, b` or `DETACH DELETE a, b`
#[derive(Debug, Clone)]
pub struct DeleteClause {
    targets: Vec<Expr>,
    detach: bool,
}

impl DeleteClause {
    pub fn new(targets: Vec<Expr>, detach: bool) -> Self {
        Self { targets, detach }
    }

    pub fn is_detach(&self) -> bool {
        self.detach
    }

    /// Add targets; a detaching delete stays detaching. No targets leaves `existing` as is.
    pub(crate) fn extend(
        existing: Option<DeleteClause>,
        targets: Vec<Expr>,
        detach: bool,
    ) -> Option<DeleteClause> {
        if targets.is_empty() {
            return existing;
        }
        Some(match existing {
            Some(mut current) => {
                current.targets.extend(targets);
                current.detach |= detach;
                current
            }
            None => DeleteClause::new(targets, detach),
        })
    }
}

impl ToCypher for DeleteClause {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let keyword = if self.detach { "DETACH DELETE" } else { "DELETE" };
        if self.targets.is_empty() {
            return Err(CypherBuildError::EmptyClause(keyword));
        }
        Ok(format!(
            "{} {}",
            keyword,
            compile_joined(&self.targets, env, ", ")?
        ))
    }
}
