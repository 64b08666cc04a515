use super::FunctionCall;
use crate::clauses::RawCypher;
use crate::expressions::Expr;

pub fn count(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::aggregation("count", vec![expr.into()])
}

/// `count(*)`
pub fn count_star() -> FunctionCall {
    FunctionCall::aggregation("count", vec![RawCypher::new("*").into()])
}

pub fn min(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::aggregation("min", vec![expr.into()])
}

pub fn max(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::aggregation("max", vec![expr.into()])
}

pub fn avg(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::aggregation("avg", vec![expr.into()])
}

pub fn sum(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::aggregation("sum", vec![expr.into()])
}

pub fn collect(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::aggregation("collect", vec![expr.into()])
}
