use super::return_clause::Return;
use super::set_clause::{SetClause, SetItem};
use super::with_clause::With;
use super::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::Expr;
use crate::pattern::Pattern;
use crate::references::PropertyRef;
use crate::to_cypher::ToCypher;

/// `MERGE pattern` with `ON CREATE SET`, `ON MATCH SET` and `SET` blocks
#[derive(Debug, Clone)]
pub struct Merge {
    pattern: Pattern,
    on_create: SetClause,
    on_match: SetClause,
    set: SetClause,
    next: Option<Box<Clause>>,
}

impl Merge {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            on_create: SetClause::default(),
            on_match: SetClause::default(),
            set: SetClause::default(),
            next: None,
        }
    }

    pub fn on_create_set(mut self, property: PropertyRef, value: impl Into<Expr>) -> Self {
        self.on_create
            .push(SetItem::Property(property, value.into()));
        self
    }

    pub fn on_match_set(mut self, property: PropertyRef, value: impl Into<Expr>) -> Self {
        self.on_match.push(SetItem::Property(property, value.into()));
        self
    }

    pub fn set(mut self, property: PropertyRef, value: impl Into<Expr>) -> Self {
        self.set.push(SetItem::Property(property, value.into()));
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

impl ToCypher for Merge {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let mut lines = vec![format!("MERGE {}", self.pattern.to_cypher(env)?)];
        for (keyword, block) in [
            ("ON CREATE SET", &self.on_create),
            ("ON MATCH SET", &self.on_match),
            ("SET", &self.set),
        ] {
            if let Some(text) = block.compile(keyword, env)? {
                lines.push(text);
            }
        }
        if let Some(next) = &self.next {
            lines.push(next.to_cypher(env)?);
        }
        Ok(lines.join("\n"))
    }
}
