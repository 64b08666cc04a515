use super::FunctionCall;
use crate::expressions::Expr;

pub fn to_lower(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("toLower", vec![expr.into()])
}

pub fn to_upper(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("toUpper", vec![expr.into()])
}

pub fn to_string(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("toString", vec![expr.into()])
}

pub fn trim(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("trim", vec![expr.into()])
}

pub fn ltrim(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("ltrim", vec![expr.into()])
}

pub fn rtrim(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("rtrim", vec![expr.into()])
}

pub fn left(original: impl Into<Expr>, length: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("left", vec![original.into(), length.into()])
}

pub fn right(original: impl Into<Expr>, length: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("right", vec![original.into(), length.into()])
}

pub fn replace(
    original: impl Into<Expr>,
    search: impl Into<Expr>,
    replacement: impl Into<Expr>,
) -> FunctionCall {
    FunctionCall::new(
        "replace",
        vec![original.into(), search.into(), replacement.into()],
    )
}

/// `substring(s, start)` or `substring(s, start, length)`
pub fn substring(
    original: impl Into<Expr>,
    start: impl Into<Expr>,
    length: Option<Expr>,
) -> FunctionCall {
    let mut args = vec![original.into(), start.into()];
    args.extend(length);
    FunctionCall::new("substring", args)
}

pub fn split(original: impl Into<Expr>, delimiter: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("split", vec![original.into(), delimiter.into()])
}
