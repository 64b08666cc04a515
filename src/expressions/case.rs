use super::Expr;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::to_cypher::ToCypher;
use crate::utils::pad_block;

/// `CASE` expression.
///
/// With a comparand (`Case::simple(x)`) each `WHEN` holds a value compared
/// against it; without one (`Case::new()`) each `WHEN` holds a predicate.
#[derive(Debug, Clone, Default)]
pub struct Case {
    comparand: Option<Expr>,
    whens: Vec<(Expr, Expr)>,
    default: Option<Expr>,
}

impl Case {
    /// Generic form: `CASE WHEN predicate THEN ... END`
    pub fn new() -> Self {
        Self::default()
    }

    /// Simple form: `CASE x WHEN value THEN ... END`
    pub fn simple(comparand: impl Into<Expr>) -> Self {
        Self {
            comparand: Some(comparand.into()),
            ..Self::default()
        }
    }

    pub fn when(mut self, condition: impl Into<Expr>, result: impl Into<Expr>) -> Self {
        self.whens.push((condition.into(), result.into()));
        self
    }

    pub fn otherwise(mut self, result: impl Into<Expr>) -> Self {
        self.default = Some(result.into());
        self
    }
}

impl ToCypher for Case {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if self.whens.is_empty() {
            return Err(CypherBuildError::EmptyClause("CASE"));
        }

        let header = match &self.comparand {
            Some(comparand) => format!("CASE {}", comparand.to_cypher(env)?),
            None => "CASE".to_string(),
        };

        let mut branches = Vec::with_capacity(self.whens.len() + 1);
        for (condition, result) in &self.whens {
            branches.push(format!(
                "WHEN {} THEN {}",
                condition.to_cypher(env)?,
                result.to_cypher(env)?
            ));
        }
        if let Some(default) = &self.default {
            branches.push(format!("ELSE {}", default.to_cypher(env)?));
        }

        let body = pad_block(&branches.join("\n"), env.config().indent_width);
        Ok(format!("{}\n{}\nEND", header, body))
    }
}
