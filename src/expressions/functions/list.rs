use super::FunctionCall;
use crate::expressions::Expr;

pub fn size(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("size", vec![expr.into()])
}

pub fn head(list: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("head", vec![list.into()])
}

pub fn last(list: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("last", vec![list.into()])
}

pub fn tail(list: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("tail", vec![list.into()])
}

pub fn reverse(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("reverse", vec![expr.into()])
}

pub fn keys(expr: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("keys", vec![expr.into()])
}

/// `range(start, end)` or `range(start, end, step)`
pub fn range(start: impl Into<Expr>, end: impl Into<Expr>, step: Option<Expr>) -> FunctionCall {
    let mut args = vec![start.into(), end.into()];
    args.extend(step);
    FunctionCall::new("range", args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::references::Variable;
    use crate::to_cypher::ToCypher;

    #[test]
    fn test_list_functions() {
        let mut env = Environment::new();
        let list = Variable::named("list");
        assert_eq!(size(&list).to_cypher(&mut env).unwrap(), "size(list)");
        assert_eq!(head(&list).to_cypher(&mut env).unwrap(), "head(list)");
        assert_eq!(last(&list).to_cypher(&mut env).unwrap(), "last(list)");
        assert_eq!(tail(&list).to_cypher(&mut env).unwrap(), "tail(list)");
        assert_eq!(reverse(&list).to_cypher(&mut env).unwrap(), "reverse(list)");
        assert_eq!(keys(&list).to_cypher(&mut env).unwrap(), "keys(list)");
        assert_eq!(range(0, 10, None).to_cypher(&mut env).unwrap(), "range(0, 10)");
        assert_eq!(
            range(0, 10, Some(Expr::from(2))).to_cypher(&mut env).unwrap(),
            "range(0, 10, 2)"
        );
    }
}
