use super::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::to_cypher::ToCypher;

/// Independently built clauses compiled as one statement.
///
/// All parts share a single `Environment`, so generated names and parameter
/// placeholders stay unique across the combined text.
#[derive(Debug, Clone, Default)]
pub struct CompositeClause {
    clauses: Vec<Clause>,
}

impl CompositeClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, clause: impl Into<Clause>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Merge clauses into one statement, in order
pub fn concat(clauses: Vec<Clause>) -> CompositeClause {
    CompositeClause { clauses }
}

impl ToCypher for CompositeClause {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let mut parts = Vec::with_capacity(self.clauses.len());
        for clause in &self.clauses {
            let text = clause.to_cypher(env)?;
            if !text.is_empty() {
                parts.push(text);
            }
        }
        Ok(parts.join("\n"))
    }
}
