use super::match_clause::Match;
use super::return_clause::Return;
use super::with_clause::With;
use super::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::{Expr, MapExpr};
use crate::pattern::Pattern;
use crate::references::{PropertyRef, Variable};
use crate::to_cypher::ToCypher;

/// `OPTIONAL MATCH`, with the same sub-clauses as `Match`
#[derive(Debug, Clone)]
pub struct OptionalMatch(Match);

impl OptionalMatch {
    pub fn new(pattern: Pattern) -> Self {
        Self(Match::new(pattern))
    }

    pub fn pattern(self, pattern: Pattern) -> Self {
        Self(self.0.pattern(pattern))
    }

    pub fn and_where(self, predicate: impl Into<Expr>) -> Self {
        Self(self.0.and_where(predicate))
    }

    pub fn set(self, property: PropertyRef, value: impl Into<Expr>) -> Self {
        Self(self.0.set(property, value))
    }

    pub fn set_labels(
        self,
        variable: impl Into<Variable>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self(self.0.set_labels(variable, labels))
    }

    pub fn set_properties(self, variable: impl Into<Variable>, properties: MapExpr) -> Self {
        Self(self.0.set_properties(variable, properties))
    }

    pub fn remove(self, property: PropertyRef) -> Self {
        Self(self.0.remove(property))
    }

    pub fn remove_labels(
        self,
        variable: impl Into<Variable>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self(self.0.remove_labels(variable, labels))
    }

    pub fn delete(self, targets: Vec<Expr>) -> Self {
        Self(self.0.delete(targets))
    }

    pub fn detach_delete(self, targets: Vec<Expr>) -> Self {
        Self(self.0.detach_delete(targets))
    }

    pub fn with(self, with: With) -> Self {
        Self(self.0.with(with))
    }

    pub fn returning(self, ret: Return) -> Self {
        Self(self.0.returning(ret))
    }

    pub(crate) fn next(&self) -> Option<&Clause> {
        self.0.next()
    }
}

impl From<Match> for OptionalMatch {
    fn from(inner: Match) -> Self {
        Self(inner)
    }
}

impl ToCypher for OptionalMatch {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        self.0.compile("OPTIONAL MATCH", env)
    }
}
