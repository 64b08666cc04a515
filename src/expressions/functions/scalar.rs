use super::FunctionCall;
use crate::expressions::Expr;

/// `coalesce(a, b, ...)`
pub fn coalesce(exprs: impl IntoIterator<Item = impl Into<Expr>>) -> FunctionCall {
    FunctionCall::new("coalesce", exprs.into_iter().map(Into::into).collect())
}

/// `point({ longitude: ..., latitude: ... })`
pub fn point(map: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("point", vec![map.into()])
}

/// Legacy `distance(a, b)` for databases predating `point.distance`
pub fn distance(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("distance", vec![lhs.into(), rhs.into()])
}

/// `point.distance(a, b)`
pub fn point_distance(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("point.distance", vec![lhs.into(), rhs.into()])
}

pub fn labels(node: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("labels", vec![node.into()])
}

pub fn random_uuid() -> FunctionCall {
    FunctionCall::new("randomUUID", vec![])
}

pub fn id(entity: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("id", vec![entity.into()])
}

pub fn element_id(entity: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("elementId", vec![entity.into()])
}

pub fn to_integer(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("toInteger", vec![expr.into()])
}

pub fn to_float(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("toFloat", vec![expr.into()])
}

pub fn to_boolean(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("toBoolean", vec![expr.into()])
}
