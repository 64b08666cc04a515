use super::Expr;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::references::Variable;
use crate::to_cypher::ToCypher;
use crate::utils::escape_identifier;

/// Format already-compiled entries as a map: `{ a: 1, b: 2 }`, or `{}` when empty
pub(crate) fn format_map(entries: &[(&str, String)]) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }
    let body = entries
        .iter()
        .map(|(key, value)| format!("{}: {}", escape_identifier(key), value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {} }}", body)
}

/// Map expression `{ key: expr, ... }`; keys keep insertion order
#[derive(Debug, Clone, Default)]
pub struct MapExpr {
    entries: Vec<(String, Expr)>,
}

impl MapExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing the value of an existing key in place
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Expr>> FromIterator<(K, V)> for MapExpr {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MapExpr::new(), |map, (key, value)| map.set(key, value))
    }
}

impl ToCypher for MapExpr {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let compiled = self
            .entries
            .iter()
            .map(|(key, value)| Ok((key.as_str(), value.to_cypher(env)?)))
            .collect::<BuildResult<Vec<_>>>()?;
        Ok(format_map(&compiled))
    }
}

#[derive(Debug, Clone)]
enum ProjectionItem {
    /// `.key`
    Property(String),
    /// `.*`
    AllProperties,
    /// `key: expr`
    Entry(String, Expr),
}

/// Map projection: `this0 { .title, .*, actors: collect(this1.name) }`
#[derive(Debug, Clone)]
pub struct MapProjection {
    variable: Variable,
    items: Vec<ProjectionItem>,
}

impl MapProjection {
    pub fn new(variable: impl Into<Variable>) -> Self {
        Self {
            variable: variable.into(),
            items: Vec::new(),
        }
    }

    /// Project a property: `.key`
    pub fn property(mut self, key: impl Into<String>) -> Self {
        self.items.push(ProjectionItem::Property(key.into()));
        self
    }

    /// Project every property: `.*`
    pub fn all_properties(mut self) -> Self {
        self.items.push(ProjectionItem::AllProperties);
        self
    }

    /// Computed entry: `key: expr`
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.items.push(ProjectionItem::Entry(key.into(), value.into()));
        self
    }
}

impl ToCypher for MapProjection {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let variable = self.variable.to_cypher(env)?;
        if self.items.is_empty() {
            return Ok(format!("{} {{}}", variable));
        }

        let items = self
            .items
            .iter()
            .map(|item| match item {
                ProjectionItem::Property(key) => Ok(format!(".{}", escape_identifier(key))),
                ProjectionItem::AllProperties => Ok(".*".to_string()),
                ProjectionItem::Entry(key, value) => Ok(format!(
                    "{}: {}",
                    escape_identifier(key),
                    value.to_cypher(env)?
                )),
            })
            .collect::<BuildResult<Vec<_>>>()?;
        Ok(format!("{} {{ {} }}", variable, items.join(", ")))
    }
}
