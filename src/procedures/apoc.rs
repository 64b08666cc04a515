//! APOC helpers used for runtime assertions.

use crate::clauses::Procedure;
use crate::expressions::{Expr, FunctionCall, ListExpr};

fn validation_args(predicate: Expr, message: &str, params: Vec<Expr>) -> Vec<Expr> {
    vec![predicate, Expr::from(message), ListExpr::from(params).into()]
}

/// `CALL apoc.util.validate(predicate, "message", [params])`
///
/// Fails the query with `message` when `predicate` is true. Void: yields nothing.
pub fn validate(predicate: impl Into<Expr>, message: &str, params: Vec<Expr>) -> Procedure {
    Procedure::void(
        "apoc.util.validate",
        validation_args(predicate.into(), message, params),
    )
}

/// `apoc.util.validatePredicate(predicate, "message", [params])`
///
/// Function form of `validate`, returning `true` when the check passes so it
/// can be combined into a `WHERE`.
pub fn validate_predicate(
    predicate: impl Into<Expr>,
    message: &str,
    params: Vec<Expr>,
) -> FunctionCall {
    FunctionCall::new(
        "apoc.util.validatePredicate",
        validation_args(predicate.into(), message, params),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::{concat, Match};
    use crate::errors::CypherBuildError;
    use crate::expressions::{and, is_null, not};
    use crate::pattern::{NodePattern, Pattern};
    use crate::references::NodeRef;

    #[test]
    fn test_validate_procedure() {
        let node = NodeRef::new();
        let statement = concat(vec![
            Match::new(Pattern::new(NodePattern::new(&node).label("Movie"))).into(),
            validate(is_null(&node), "Forbidden", vec![Expr::from(0)]).into(),
        ]);
        assert_eq!(
            statement.build().unwrap().cypher,
            "MATCH (this0:Movie)\nCALL apoc.util.validate(this0 IS NULL, \"Forbidden\", [0])"
        );
    }

    #[test]
    fn test_validate_is_void() {
        let err = validate(true, "x", vec![]).yield_column("value").build().unwrap_err();
        assert!(matches!(err, CypherBuildError::YieldOnVoidProcedure(_)));
    }

    #[test]
    fn test_validate_predicate_in_where() {
        let node = NodeRef::new();
        let query = Match::new(Pattern::new(&node)).and_where(and(
            node.property("visible"),
            not(validate_predicate(is_null(node.property("owner")), "Forbidden", vec![Expr::from(0)])),
        ));
        assert_eq!(
            query.build().unwrap().cypher,
            "MATCH (this0)\nWHERE this0.visible AND NOT apoc.util.validatePredicate(this0.owner IS NULL, \"Forbidden\", [0])"
        );
    }
}
