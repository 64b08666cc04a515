use super::delete_clause::DeleteClause;
use super::remove_clause::{RemoveClause, RemoveItem};
use super::return_clause::Return;
use super::set_clause::{SetClause, SetItem};
use super::where_clause::WhereClause;
use super::with_clause::With;
use super::Clause;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::{Expr, MapExpr};
use crate::pattern::Pattern;
use crate::references::{PropertyRef, Variable};
use crate::to_cypher::{compile_joined, ToCypher};

/// `MATCH` with its filter, update and projection sub-clauses.
///
/// Rendered in the order `MATCH`, `WHERE`, `SET`, `REMOVE`, `DELETE`, then the
/// chained `WITH` or `RETURN`.
#[derive(Debug, Clone)]
pub struct Match {
    patterns: Vec<Pattern>,
    where_clause: Option<WhereClause>,
    set: SetClause,
    remove: RemoveClause,
    delete: Option<DeleteClause>,
    next: Option<Box<Clause>>,
}

impl Match {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            patterns: vec![pattern],
            where_clause: None,
            set: SetClause::default(),
            remove: RemoveClause::default(),
            delete: None,
            next: None,
        }
    }

    /// Add another comma-separated pattern
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Filter the match; repeated calls are ANDed together
    pub fn and_where(mut self, predicate: impl Into<Expr>) -> Self {
        self.where_clause = WhereClause::and_into(self.where_clause.take(), predicate);
        self
    }

    pub fn set(mut self, property: PropertyRef, value: impl Into<Expr>) -> Self {
        self.set.push(SetItem::Property(property, value.into()));
        self
    }

    pub fn set_labels(
        mut self,
        variable: impl Into<Variable>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.set.push(SetItem::Labels(
            variable.into(),
            labels.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// `variable += { ... }`
    pub fn set_properties(mut self, variable: impl Into<Variable>, properties: MapExpr) -> Self {
        self.set
            .push(SetItem::MergeProperties(variable.into(), properties));
        self
    }

    pub fn remove(mut self, property: PropertyRef) -> Self {
        self.remove.push(RemoveItem::Property(property));
        self
    }

    pub fn remove_labels(
        mut self,
        variable: impl Into<Variable>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.remove.push(RemoveItem::Labels(
            variable.into(),
            labels.into_iter().map(Into::into).collect(),
        ));
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

    pub(crate) fn compile(&self, keyword: &str, env: &mut Environment) -> BuildResult<String> {
        if self.patterns.is_empty() {
            return Err(CypherBuildError::EmptyPattern);
        }
        let mut lines = vec![format!(
            "{} {}",
            keyword,
            compile_joined(&self.patterns, env, ", ")?
        )];
        if let Some(where_clause) = &self.where_clause {
            lines.push(where_clause.to_cypher(env)?);
        }
        if let Some(set) = self.set.compile("SET", env)? {
            lines.push(set);
        }
        if !self.remove.is_empty() {
            lines.push(self.remove.to_cypher(env)?);
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

impl ToCypher for Match {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        self.compile("MATCH", env)
    }
}
