use super::return_clause::Return;
use super::where_clause::WhereClause;
use super::Clause;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::functions::escape_qualified_name;
use crate::expressions::Expr;
use crate::references::Variable;
use crate::to_cypher::{compile_joined, ToCypher};
use crate::utils::escape_identifier;

/// Standalone procedure call: `CALL db.labels() YIELD label AS var0`
#[derive(Debug, Clone)]
pub struct Procedure {
    name: String,
    args: Vec<Expr>,
    void: bool,
    yields: Vec<(String, Option<Variable>)>,
    where_clause: Option<WhereClause>,
    next: Option<Box<Clause>>,
}

impl Procedure {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
            void: false,
            yields: Vec::new(),
            where_clause: None,
            next: None,
        }
    }

    /// Procedure that produces no rows and accepts no `YIELD`
    pub fn void(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            void: true,
            ..Self::new(name, args)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_void(&self) -> bool {
        self.void
    }

    /// `YIELD column`
    pub fn yield_column(mut self, column: impl Into<String>) -> Self {
        self.yields.push((column.into(), None));
        self
    }

    /// `YIELD column AS variable`
    pub fn yield_as(mut self, column: impl Into<String>, variable: impl Into<Variable>) -> Self {
        self.yields.push((column.into(), Some(variable.into())));
        self
    }

    pub fn and_where(mut self, predicate: impl Into<Expr>) -> Self {
        self.where_clause = WhereClause::and_into(self.where_clause.take(), predicate);
        self
    }

    pub fn returning(mut self, ret: Return) -> Self {
        self.next = Some(Box::new(Clause::Return(ret)));
        self
    }

    /// Columns of the chained `RETURN`, or the yielded columns otherwise
    pub(crate) fn projected_columns(&self) -> Option<usize> {
        match &self.next {
            Some(next) => next.projected_columns(),
            None if !self.yields.is_empty() => Some(self.yields.len()),
            None => None,
        }
    }
}

impl ToCypher for Procedure {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if self.void && !self.yields.is_empty() {
            return Err(CypherBuildError::YieldOnVoidProcedure(self.name.clone()));
        }

        let mut call = format!(
            "CALL {}({})",
            escape_qualified_name(&self.name),
            compile_joined(&self.args, env, ", ")?
        );
        if !self.yields.is_empty() {
            let yields = self
                .yields
                .iter()
                .map(|(column, variable)| {
                    let column = escape_identifier(column).into_owned();
                    match variable {
                        Some(variable) => Ok(format!("{} AS {}", column, variable.to_cypher(env)?)),
                        None => Ok(column),
                    }
                })
                .collect::<BuildResult<Vec<_>>>()?;
            call.push_str(" YIELD ");
            call.push_str(&yields.join(", "));
        }

        let mut lines = vec![call];
        if let Some(where_clause) = &self.where_clause {
            lines.push(where_clause.to_cypher(env)?);
        }
        if let Some(next) = &self.next {
            lines.push(next.to_cypher(env)?);
        }
        Ok(lines.join("\n"))
    }
}
