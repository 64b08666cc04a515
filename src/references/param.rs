use crate::environment::{Environment, RefKey};
use crate::errors::BuildResult;
use crate::to_cypher::ToCypher;
use crate::utils::escape_identifier;
use serde_json::Value;
use std::sync::Arc;

/// A query parameter.
///
/// The value never appears in the query text; the parameter compiles to its
/// placeholder (`$param0`) and the value travels in `CypherResult::params`.
#[derive(Debug, Clone)]
pub struct Param {
    key: RefKey,
    name: Option<Arc<str>>,
    value: Option<Value>,
}

impl Param {
    /// Anonymous parameter with a generated placeholder
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            key: RefKey::fresh(),
            name: None,
            value: Some(value.into()),
        }
    }

    /// Named parameter without a value (`$auth`), bound later by the caller
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            key: RefKey::fresh(),
            name: Some(Arc::from(name.into())),
            value: None,
        }
    }

    /// Named parameter carrying its value
    pub fn named_with_value(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: RefKey::fresh(),
            name: Some(Arc::from(name.into())),
            value: Some(value.into()),
        }
    }

    pub fn key(&self) -> RefKey {
        self.key
    }

    pub fn fixed_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_deferred(&self) -> bool {
        self.value.is_none()
    }
}

impl ToCypher for Param {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let name = env.bind_param(self)?;
        Ok(format!("${}", escape_identifier(&name)))
    }
}
