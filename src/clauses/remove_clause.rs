use super::set_clause::render_labels;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::references::{PropertyRef, Variable};
use crate::to_cypher::{compile_joined, ToCypher};

#[derive(Debug, Clone)]
pub enum RemoveItem {
    Property(PropertyRef),
    Labels(Variable, Vec<String>),
}

impl ToCypher for RemoveItem {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match self {
            RemoveItem::Property(property) => property.to_cypher(env),
            RemoveItem::Labels(variable, labels) => Ok(format!(
                "{}{}",
                variable.to_cypher(env)?,
                render_labels(labels, "REMOVE")?
            )),
        }
    }
}

/// `REMOVE this0.a, this0:Label`
#[derive(Debug, Clone, Default)]
pub struct RemoveClause {
    items: Vec<RemoveItem>,
}

impl RemoveClause {
    pub fn push(&mut self, item: RemoveItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ToCypher for RemoveClause {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if self.items.is_empty() {
            return Err(CypherBuildError::EmptyClause("REMOVE"));
        }
        Ok(format!("REMOVE {}", compile_joined(&self.items, env, ", ")?))
    }
}
