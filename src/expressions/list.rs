use super::Expr;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::pattern::Pattern;
use crate::references::Variable;
use crate::to_cypher::{compile_joined, ToCypher};

/// List expression `[a, b, c]`
#[derive(Debug, Clone, Default)]
pub struct ListExpr {
    items: Vec<Expr>,
}

impl ListExpr {
    pub fn new(items: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(mut self, item: impl Into<Expr>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn items(&self) -> &[Expr] {
        &self.items
    }
}

impl From<Vec<Expr>> for ListExpr {
    fn from(items: Vec<Expr>) -> Self {
        Self { items }
    }
}

impl ToCypher for ListExpr {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        Ok(format!("[{}]", compile_joined(&self.items, env, ", ")?))
    }
}

/// `[var IN list WHERE predicate | mapping]`
#[derive(Debug, Clone)]
pub struct ListComprehension {
    variable: Variable,
    list: Expr,
    predicate: Option<Expr>,
    mapping: Option<Expr>,
}

impl ListComprehension {
    pub fn new(variable: impl Into<Variable>, list: impl Into<Expr>) -> Self {
        Self {
            variable: variable.into(),
            list: list.into(),
            predicate: None,
            mapping: None,
        }
    }

    pub fn filter(mut self, predicate: impl Into<Expr>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    pub fn map(mut self, mapping: impl Into<Expr>) -> Self {
        self.mapping = Some(mapping.into());
        self
    }
}

impl ToCypher for ListComprehension {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let mut out = format!(
            "[{} IN {}",
            self.variable.to_cypher(env)?,
            self.list.to_cypher(env)?
        );
        if let Some(predicate) = &self.predicate {
            out.push_str(" WHERE ");
            out.push_str(&predicate.to_cypher(env)?);
        }
        if let Some(mapping) = &self.mapping {
            out.push_str(" | ");
            out.push_str(&mapping.to_cypher(env)?);
        }
        out.push(']');
        Ok(out)
    }
}

/// `[pattern WHERE predicate | mapping]`
#[derive(Debug, Clone)]
pub struct PatternComprehension {
    pattern: Pattern,
    predicate: Option<Expr>,
    mapping: Expr,
}

impl PatternComprehension {
    pub fn new(pattern: Pattern, mapping: impl Into<Expr>) -> Self {
        Self {
            pattern,
            predicate: None,
            mapping: mapping.into(),
        }
    }

    pub fn filter(mut self, predicate: impl Into<Expr>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }
}

impl ToCypher for PatternComprehension {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let mut out = format!("[{}", self.pattern.to_cypher(env)?);
        if let Some(predicate) = &self.predicate {
            out.push_str(" WHERE ");
            out.push_str(&predicate.to_cypher(env)?);
        }
        out.push_str(" | ");
        out.push_str(&self.mapping.to_cypher(env)?);
        out.push(']');
        Ok(out)
    }
}
