use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::Expr;
use crate::references::{NodeRef, PathRef, RelationshipRef, Variable};
use crate::to_cypher::ToCypher;
use crate::utils::escape_identifier;

/// Output name of a projected column
#[derive(Debug, Clone)]
pub enum Alias {
    /// Fixed column name, escaped if needed
    Name(String),
    /// A variable that later clauses can refer to
    Variable(Variable),
}

impl ToCypher for Alias {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match self {
            Alias::Name(name) => Ok(escape_identifier(name).into_owned()),
            Alias::Variable(variable) => variable.to_cypher(env),
        }
    }
}

impl From<&str> for Alias {
    fn from(name: &str) -> Self {
        Alias::Name(name.to_string())
    }
}

impl From<String> for Alias {
    fn from(name: String) -> Self {
        Alias::Name(name)
    }
}

macro_rules! alias_from_reference {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Alias {
                fn from(reference: $ty) -> Self {
                    Alias::Variable(reference.into())
                }
            }
        )*
    };
}

alias_from_reference!(
    Variable,
    &Variable,
    NodeRef,
    &NodeRef,
    RelationshipRef,
    &RelationshipRef,
    PathRef,
    &PathRef
);

/// Column list shared by `RETURN` and `WITH`
#[derive(Debug, Clone, Default)]
pub struct Projection {
    distinct: bool,
    star: bool,
    columns: Vec<(Expr, Option<Alias>)>,
}

impl Projection {
    pub fn push(&mut self, expr: Expr, alias: Option<Alias>) {
        self.columns.push((expr, alias));
    }

    pub fn set_distinct(&mut self) {
        self.distinct = true;
    }

    pub fn set_star(&mut self) {
        self.star = true;
    }

    /// Number of output columns, unknown when `*` is projected
    pub fn column_count(&self) -> Option<usize> {
        if self.star {
            None
        } else {
            Some(self.columns.len())
        }
    }

    /// `[DISTINCT ]*, expr AS alias, ...` after `keyword`
    pub(crate) fn compile(&self, keyword: &'static str, env: &mut Environment) -> BuildResult<String> {
        if !self.star && self.columns.is_empty() {
            return Err(CypherBuildError::EmptyProjection(keyword));
        }

        let mut items = Vec::with_capacity(self.columns.len() + 1);
        if self.star {
            items.push("*".to_string());
        }
        for (expr, alias) in &self.columns {
            let column = expr.to_cypher(env)?;
            match alias {
                Some(alias) => items.push(format!("{} AS {}", column, alias.to_cypher(env)?)),
                None => items.push(column),
            }
        }

        let distinct = if self.distinct { "DISTINCT " } else { "" };
        Ok(format!("{} {}{}", keyword, distinct, items.join(", ")))
    }
}
