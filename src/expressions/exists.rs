use crate::clauses::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::pattern::Pattern;
use crate::to_cypher::ToCypher;
use crate::utils::pad_block;

#[derive(Debug, Clone)]
enum ExistsBody {
    Clause(Box<Clause>),
    Pattern(Pattern),
}

/// Existential sub-query: `EXISTS { MATCH ... WHERE ... }`.
///
/// The body is compiled in a child naming scope; variables from the enclosing
/// statement keep their names inside it.
#[derive(Debug, Clone)]
pub struct Exists {
    body: ExistsBody,
}

impl Exists {
    pub fn new(clause: impl Into<Clause>) -> Self {
        Self {
            body: ExistsBody::Clause(Box::new(clause.into())),
        }
    }

    /// Short form with a bare pattern: `EXISTS { (a)-[:R]->() }`
    pub fn pattern(pattern: Pattern) -> Self {
        Self {
            body: ExistsBody::Pattern(pattern),
        }
    }
}

impl ToCypher for Exists {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let indent = env.config().indent_width;
        let body = env.with_child_scope(|env| match &self.body {
            ExistsBody::Clause(clause) => clause.compile_block(env),
            ExistsBody::Pattern(pattern) => Ok(pad_block(&pattern.to_cypher(env)?, indent)),
        })?;
        Ok(format!("EXISTS {{\n{}\n}}", body))
    }
}
