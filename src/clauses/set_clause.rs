use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::{Expr, MapExpr};
use crate::references::{PropertyRef, Variable};
use crate::to_cypher::ToCypher;
use crate::utils::{escape_identifier, pad_block};

#[derive(Debug, Clone)]
pub enum SetItem {
    /// `this0.title = $param0`
    Property(PropertyRef, Expr),
    /// `this0:Label1:Label2`
    Labels(Variable, Vec<String>),
    /// `this0 += { ... }`
    MergeProperties(Variable, MapExpr),
    /// `this0 = { ... }`
    ReplaceProperties(Variable, MapExpr),
}

impl ToCypher for SetItem {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match self {
            SetItem::Property(property, value) => Ok(format!(
                "{} = {}",
                property.to_cypher(env)?,
                value.to_cypher(env)?
            )),
            SetItem::Labels(variable, labels) => Ok(format!(
                "{}{}",
                variable.to_cypher(env)?,
                render_labels(labels, "SET")?
            )),
            SetItem::MergeProperties(variable, map) => Ok(format!(
                "{} += {}",
                variable.to_cypher(env)?,
                map.to_cypher(env)?
            )),
            SetItem::ReplaceProperties(variable, map) => Ok(format!(
                "{} = {}",
                variable.to_cypher(env)?,
                map.to_cypher(env)?
            )),
        }
    }
}

/// `:Label1:Label2`; an empty list is an error for the owning `keyword`
pub(crate) fn render_labels(labels: &[String], keyword: &'static str) -> BuildResult<String> {
    if labels.is_empty() {
        return Err(CypherBuildError::EmptyClause(keyword));
    }
    Ok(labels
        .iter()
        .map(|label| format!(":{}", escape_identifier(label)))
        .collect())
}

/// Assignments of a `SET`, `ON CREATE SET` or `ON MATCH SET` block
#[derive(Debug, Clone, Default)]
pub struct SetClause {
    items: Vec<SetItem>,
}

impl SetClause {
    pub fn push(&mut self, item: SetItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `keyword` followed by one assignment per indented line; `None` when empty
    pub(crate) fn compile(
        &self,
        keyword: &str,
        env: &mut Environment,
    ) -> BuildResult<Option<String>> {
        if self.items.is_empty() {
            return Ok(None);
        }
        let items = self
            .items
            .iter()
            .map(|item| item.to_cypher(env))
            .collect::<BuildResult<Vec<_>>>()?;
        let body = pad_block(&items.join(",\n"), env.config().indent_width);
        Ok(Some(format!("{}\n{}", keyword, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::references::{NodeRef, Param};

    #[test]
    fn test_set_block() {
        let mut env = Environment::new();
        let movie = NodeRef::new();
        let mut set = SetClause::default();
        set.push(SetItem::Property(movie.property("title"), Param::new("Matrix").into()));
        set.push(SetItem::Labels(movie.clone().into(), vec!["Classic".to_string()]));
        set.push(SetItem::MergeProperties(
            movie.clone().into(),
            MapExpr::new().set("year", 1999),
        ));
        assert_eq!(
            set.compile("SET", &mut env).unwrap().unwrap(),
            "SET\n    this0.title = $param0,\n    this0:Classic,\n    this0 += { year: 1999 }"
        );
    }

    #[test]
    fn test_empty_set_is_skipped() {
        let mut env = Environment::new();
        assert_eq!(SetClause::default().compile("SET", &mut env).unwrap(), None);
    }

    #[test]
    fn test_replace_properties() {
        let mut env = Environment::new();
        let node = NodeRef::named("n");
        let item = SetItem::ReplaceProperties(node.into(), MapExpr::new());
        assert_eq!(item.to_cypher(&mut env).unwrap(), "n = {}");
    }

    #[test]
    fn test_empty_label_list_is_rejected() {
        let mut env = Environment::new();
        let mut set = SetClause::default();
        set.push(SetItem::Labels(NodeRef::named("n").into(), vec![]));
        assert_eq!(
            set.compile("SET", &mut env).unwrap_err(),
            CypherBuildError::EmptyClause("SET")
        );
    }
}
