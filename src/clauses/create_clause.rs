use super::return_clause::Return;
use super::set_clause::{SetClause, SetItem};
use super::with_clause::With;
use super::Clause;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::Expr;
use crate::pattern::Pattern;
use crate::references::{PropertyRef, Variable};
use crate::to_cypher::{compile_joined, ToCypher};

/// `CREATE pattern` followed by optional `SET` and a chained `WITH`/`RETURN`
#[derive(Debug, Clone)]
pub struct Create {
    patterns: Vec<Pattern>,
    set: SetClause,
    next: Option<Box<Clause>>,
}

impl Create {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            patterns: vec![pattern],
            set: SetClause::default(),
            next: None,
        }
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
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

impl ToCypher for Create {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if self.patterns.is_empty() {
            return Err(CypherBuildError::EmptyPattern);
        }
        let mut lines = vec![format!(
            "CREATE {}",
            compile_joined(&self.patterns, env, ", ")?
        )];
        if let Some(set) = self.set.compile("SET", env)? {
            lines.push(set);
        }
        if let Some(next) = &self.next {
            lines.push(next.to_cypher(env)?);
        }
        Ok(lines.join("\n"))
    }
}
