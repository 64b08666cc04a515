use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::to_cypher::ToCypher;
use std::fmt;
use std::sync::Arc;

type RawCallback = Arc<dyn Fn(&mut Environment) -> BuildResult<String> + Send + Sync>;

#[derive(Clone)]
enum RawBody {
    Text(String),
    Callback(RawCallback),
}

/// Hand-written Cypher, usable both as a clause and as an expression.
///
/// Inside `CALL`, `FOREACH` and `EXISTS` blocks the text is emitted without
/// the block's indentation, so multi-line string literals keep their value.
///
/// The callback form receives the render's `Environment`, so it can refer to
/// names already assigned to references and bind parameters:
///
/// ```
/// use cyphergen::clauses::RawCypher;
/// use cyphergen::references::NodeRef;
/// use cyphergen::ToCypher;
///
/// let node = NodeRef::new();
/// let raw = RawCypher::from_fn(move |env| {
///     let name = node.to_cypher(env)?;
///     let limit = env.bind_value(10)?;
///     Ok(format!("MATCH ({name}) RETURN {name} LIMIT {limit}"))
/// });
/// let result = raw.build().unwrap();
/// assert_eq!(result.cypher, "MATCH (this0) RETURN this0 LIMIT $param0");
/// ```
#[derive(Clone)]
pub struct RawCypher {
    body: RawBody,
}

impl RawCypher {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            body: RawBody::Text(text.into()),
        }
    }

    pub fn from_fn<F>(callback: F) -> Self
    where
        F: Fn(&mut Environment) -> BuildResult<String> + Send + Sync + 'static,
    {
        Self {
            body: RawBody::Callback(Arc::new(callback)),
        }
    }
}

impl fmt::Debug for RawCypher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            RawBody::Text(text) => f.debug_tuple("RawCypher").field(text).finish(),
            RawBody::Callback(_) => f.write_str("RawCypher(<callback>)"),
        }
    }
}

impl ToCypher for RawCypher {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match &self.body {
            RawBody::Text(text) => Ok(text.clone()),
            RawBody::Callback(callback) => callback(env),
        }
    }
}
