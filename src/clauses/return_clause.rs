use super::order_by_clause::{Order, OrderByClause};
use super::projection::{Alias, Projection};
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::Expr;
use crate::to_cypher::ToCypher;

/// `RETURN` with optional `ORDER BY`, `SKIP` and `LIMIT`
#[derive(Debug, Clone, Default)]
pub struct Return {
    projection: Projection,
    order_by: OrderByClause,
}

impl Return {
    pub fn new() -> Self {
        Self::default()
    }

    /// `RETURN *`
    pub fn all() -> Self {
        Self::new().star()
    }

    pub fn column(mut self, expr: impl Into<Expr>) -> Self {
        self.projection.push(expr.into(), None);
        self
    }

    pub fn column_as(mut self, expr: impl Into<Expr>, alias: impl Into<Alias>) -> Self {
        self.projection.push(expr.into(), Some(alias.into()));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.projection.set_distinct();
        self
    }

    pub fn star(mut self) -> Self {
        self.projection.set_star();
        self
    }

    pub fn order_by(mut self, expr: impl Into<Expr>, order: Order) -> Self {
        self.order_by.push(expr.into(), order);
        self
    }

    pub fn skip(mut self, skip: impl Into<Expr>) -> Self {
        self.order_by.set_skip(skip.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<Expr>) -> Self {
        self.order_by.set_limit(limit.into());
        self
    }

    /// Number of projected columns, `None` for `RETURN *`
    pub fn column_count(&self) -> Option<usize> {
        self.projection.column_count()
    }
}

impl ToCypher for Return {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let mut lines = vec![self.projection.compile("RETURN", env)?];
        lines.extend(self.order_by.compile(env)?);
        Ok(lines.join("\n"))
    }
}
