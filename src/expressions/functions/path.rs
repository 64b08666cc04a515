use super::FunctionCall;
use crate::expressions::Expr;

pub fn nodes(path: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("nodes", vec![path.into()])
}

pub fn relationships(path: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("relationships", vec![path.into()])
}

/// Number of relationships in a path
pub fn length(path: impl Into<Expr>) -> FunctionCall {
    FunctionCall::new("length", vec![path.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::references::PathRef;
    use crate::to_cypher::ToCypher;

    #[test]
    fn test_path_functions() {
        let mut env = Environment::new();
        let path = PathRef::new();
        assert_eq!(nodes(&path).to_cypher(&mut env).unwrap(), "nodes(p0)");
        assert_eq!(
            relationships(&path).to_cypher(&mut env).unwrap(),
            "relationships(p0)"
        );
        assert_eq!(length(&path).to_cypher(&mut env).unwrap(), "length(p0)");
    }
}
