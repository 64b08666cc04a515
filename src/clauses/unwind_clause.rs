use super::delete_clause::DeleteClause;
use super::return_clause::Return;
use super::with_clause::With;
use super::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::Expr;
use crate::references::Variable;
use crate::to_cypher::ToCypher;

/// `UNWIND list AS variable`
#[derive(Debug, Clone)]
pub struct Unwind {
    list: Expr,
    variable: Variable,
    delete: Option<DeleteClause>,
    next: Option<Box<Clause>>,
}

impl Unwind {
    pub fn new(list: impl Into<Expr>, variable: impl Into<Variable>) -> Self {
        Self {
            list: list.into(),
            variable: variable.into(),
            delete: None,
            next: None,
        }
    }

    pub fn delete(mut self, targets: Vec<Expr>) -> Self {
        self.delete = DeleteClause::extend(self.delete.take(), targets, false);
        self
    }

    pub fn detach_delete(mut self, targets: Vec<Expr>) -> Self {
        self.delete = DeleteClause::extend(self.delete.take(), targets, true);
        self
    }

    pub fn with(mut self, with: With) -> Self {
        self.next = Some(Box::new(Clause::With(with)));
        self
    }

    pub fn returning(mut self, ret: Return) -> Self {
        self.next = Some(Box::new(Clause::Return(ret)));
        self
    }

    pub(crate) fn next(&self) -> Option<&Clause> {
        self.next.as_deref()
    }
}

impl ToCypher for Unwind {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let mut lines = vec![format!(
            "UNWIND {} AS {}",
            self.list.to_cypher(env)?,
            self.variable.to_cypher(env)?
        )];
        if let Some(delete) = &self.delete {
            lines.push(delete.to_cypher(env)?);
        }
        if let Some(next) = &self.next {
            lines.push(next.to_cypher(env)?);
        }
        Ok(lines.join("\n"))
    }
}
