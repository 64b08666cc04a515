use super::delete_clause::DeleteClause;
use super::order_by_clause::{Order, OrderByClause};
use super::projection::{Alias, Projection};
use super::return_clause::Return;
use super::where_clause::WhereClause;
use super::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::Expr;
use crate::to_cypher::ToCypher;

/// `WITH` projection, optionally filtered and followed by another `WITH` or `RETURN`
#[derive(Debug, Clone, Default)]
pub struct With {
    projection: Projection,
    order_by: OrderByClause,
    where_clause: Option<WhereClause>,
    delete: Option<DeleteClause>,
    next: Option<Box<Clause>>,
}

impl With {
    pub fn new() -> Self {
        Self::default()
    }

    /// `WITH *`
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

    pub fn and_where(mut self, predicate: impl Into<Expr>) -> Self {
        self.where_clause = WhereClause::and_into(self.where_clause.take(), predicate);
        self
    }

    pub fn delete(mut self, targets: Vec<Expr>) -> Self {
        self.delete = DeleteClause::extend(self.delete.take(), targets, false);
        self
    }

    pub fn detach_delete(mut self, targets: Vec<Expr>) -> Self {
        self.delete = DeleteClause::extend(self.delete.take(), targets, true);
        self
    }

    pub fn with(mut self, with: With) -> Self {
        self.next = Some(Box::new(Clause::With(with)));
        self
    }

    pub fn returning(mut self, ret: Return) -> Self {
        self.next = Some(Box::new(Clause::Return(ret)));
        self
    }

    pub(crate) fn next(&self) -> Option<&Clause> {
        self.next.as_deref()
    }
}

impl ToCypher for With {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let mut lines = vec![self.projection.compile("WITH", env)?];
        lines.extend(self.order_by.compile(env)?);
        if let Some(where_clause) = &self.where_clause {
            lines.push(where_clause.to_cypher(env)?);
        }
        if let Some(delete) = &self.delete {
            lines.push(delete.to_cypher(env)?);
        }
        if let Some(next) = &self.next {
            lines.push(next.to_cypher(env)?);
        }
        Ok(lines.join("\n"))
    }
}
