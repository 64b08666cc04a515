use super::Clause;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::Expr;
use crate::references::Variable;
use crate::to_cypher::ToCypher;

/// `FOREACH (variable IN list | update clauses)`
#[derive(Debug, Clone)]
pub struct Foreach {
    variable: Variable,
    list: Expr,
    clauses: Vec<Clause>,
}

impl Foreach {
    pub fn new(variable: impl Into<Variable>, list: impl Into<Expr>) -> Self {
        Self {
            variable: variable.into(),
            list: list.into(),
            clauses: Vec::new(),
        }
    }

    /// Add an update clause to run for each element
    pub fn run(mut self, clause: impl Into<Clause>) -> Self {
        self.clauses.push(clause.into());
        self
    }
}

impl ToCypher for Foreach {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if self.clauses.is_empty() {
            return Err(CypherBuildError::EmptyClause("FOREACH"));
        }
        let header = format!(
            "FOREACH ({} IN {} |",
            self.variable.to_cypher(env)?,
            self.list.to_cypher(env)?
        );
        let body = self
            .clauses
            .iter()
            .map(|clause| clause.compile_block(env))
            .collect::<BuildResult<Vec<_>>>()?;
        Ok(format!("{}\n{}\n)", header, body.join("\n")))
    }
}
