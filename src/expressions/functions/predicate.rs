use super::FunctionCall;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::Expr;
use crate::pattern::Pattern;
use crate::references::Variable;
use crate::to_cypher::ToCypher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    Any,
    All,
    None,
    Single,
}

impl PredicateKind {
    pub fn name(&self) -> &'static str {
        match self {
            PredicateKind::Any => "any",
            PredicateKind::All => "all",
            PredicateKind::None => "none",
            PredicateKind::Single => "single",
        }
    }
}

/// List predicate: `any(var0 IN list WHERE predicate)`
#[derive(Debug, Clone)]
pub struct PredicateFunction {
    kind: PredicateKind,
    variable: Variable,
    list: Expr,
    predicate: Expr,
}

impl PredicateFunction {
    pub fn new(
        kind: PredicateKind,
        variable: impl Into<Variable>,
        list: impl Into<Expr>,
        predicate: impl Into<Expr>,
    ) -> Self {
        Self {
            kind,
            variable: variable.into(),
            list: list.into(),
            predicate: predicate.into(),
        }
    }

    pub fn kind(&self) -> PredicateKind {
        self.kind
    }
}

impl ToCypher for PredicateFunction {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        Ok(format!(
            "{}({} IN {} WHERE {})",
            self.kind.name(),
            self.variable.to_cypher(env)?,
            self.list.to_cypher(env)?,
            self.predicate.to_cypher(env)?
        ))
    }
}

pub fn any(
    variable: impl Into<Variable>,
    list: impl Into<Expr>,
    predicate: impl Into<Expr>,
) -> PredicateFunction {
    PredicateFunction::new(PredicateKind::Any, variable, list, predicate)
}

pub fn all(
    variable: impl Into<Variable>,
    list: impl Into<Expr>,
    predicate: impl Into<Expr>,
) -> PredicateFunction {
    PredicateFunction::new(PredicateKind::All, variable, list, predicate)
}

pub fn none(
    variable: impl Into<Variable>,
    list: impl Into<Expr>,
    predicate: impl Into<Expr>,
) -> PredicateFunction {
    PredicateFunction::new(PredicateKind::None, variable, list, predicate)
}

pub fn single(
    variable: impl Into<Variable>,
    list: impl Into<Expr>,
    predicate: impl Into<Expr>,
) -> PredicateFunction {
    PredicateFunction::new(PredicateKind::Single, variable, list, predicate)
}

/// Legacy `exists(pattern)` predicate; see `Exists` for the sub-query form
pub fn exists(pattern: Pattern) -> FunctionCall {
    FunctionCall::new("exists", vec![pattern.into()])
}
