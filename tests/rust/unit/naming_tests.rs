//! Variable naming and parameter allocation across a statement

#[cfg(test)]
mod naming_tests {
    use cyphergen::clauses::{concat, Call, Create, Match, Return, Unwind};
    use cyphergen::expressions::{eq, Exists};
    use cyphergen::pattern::{NodePattern, Pattern, RelationshipPattern};
    use cyphergen::references::{NodeRef, Param, PathRef, Variable};
    use cyphergen::{BuildConfig, CypherBuildError, ErrorKind};
    use serde_json::json;

    #[test]
    fn test_placeholders_follow_first_use_order() {
        let movie = NodeRef::new();
        let query = Match::new(Pattern::new(&movie))
            .and_where(eq(movie.property("a"), Param::new("first")))
            .and_where(eq(movie.property("b"), Param::new("second")))
            .returning(Return::new().column(&movie).limit(Param::new(5)));

        let result = query.build().unwrap();
        assert_eq!(result.params["param0"], json!("first"));
        assert_eq!(result.params["param1"], json!("second"));
        assert_eq!(result.params["param2"], json!(5));
    }

    #[test]
    fn test_reused_param_is_bound_once() {
        let movie = NodeRef::new();
        let title = Param::new("Heat");
        let query = Match::new(Pattern::new(&movie))
            .and_where(eq(movie.property("title"), &title))
            .and_where(eq(movie.property("original"), &title));
        let result = query.build().unwrap();
        assert_eq!(
            result.cypher,
            "MATCH (this0)\nWHERE this0.title = $param0 AND this0.original = $param0"
        );
        assert_eq!(result.params.len(), 1);
    }

    #[test]
    fn test_named_reference_continuity_across_statements() {
        let shared = NodeRef::named("this");
        let first = Create::new(Pattern::new(NodePattern::new(&shared).label("A")));
        let second = Match::new(Pattern::new(&NodeRef::named("this")))
            .returning(Return::new().column(NodeRef::named("this")));
        let statement = concat(vec![first.into(), second.into()]);
        assert_eq!(
            statement.build().unwrap().cypher,
            "CREATE (this:A)\nMATCH (this)\nRETURN this"
        );
    }

    #[test]
    fn test_deferred_named_param() {
        let node = NodeRef::new();
        let query = Match::new(Pattern::new(&node))
            .and_where(eq(node.property("owner"), Param::named("jwtSub")));
        let result = query.build().unwrap();
        assert_eq!(result.cypher, "MATCH (this0)\nWHERE this0.owner = $jwtSub");
        assert!(result.params.is_empty());
        assert!(result.deferred_params.contains("jwtSub"));
    }

    #[test]
    fn test_reserved_keyword_name_is_rejected() {
        let query = Return::new().column(Variable::named("return"));
        let err = query.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NamingConflict);
    }

    #[test]
    fn test_named_param_value_conflict() {
        let query = Return::new()
            .column(Param::named_with_value("limit", 1))
            .column(Param::named_with_value("limit", 2));
        assert!(matches!(
            query.build().unwrap_err(),
            CypherBuildError::NamingConflict(_)
        ));
    }

    #[test]
    fn test_subquery_scopes() {
        let outer = NodeRef::new();
        let inner = NodeRef::new();
        let later = NodeRef::new();
        let path = PathRef::new();

        let exists = Exists::new(Match::new(Pattern::new(&outer).related(
            RelationshipPattern::anonymous().rel_type("R"),
            &inner,
        )));
        let statement = concat(vec![
            Match::new(Pattern::new(&outer)).and_where(exists).into(),
            Call::new(Unwind::new(Param::new(vec![1]), Variable::new()).returning(Return::all()))
                .into(),
            Match::new(
                Pattern::new(&outer)
                    .related(RelationshipPattern::anonymous(), &later)
                    .assign_to(&path),
            )
            .returning(Return::new().column(&path))
            .into(),
        ]);

        assert_eq!(
            statement.build().unwrap().cypher,
            "MATCH (this0)\nWHERE EXISTS {\n    MATCH (this0)-[:R]->(this1)\n}\nCALL {\n    UNWIND $param0 AS var2\n    RETURN *\n}\nMATCH p4 = (this0)-[]->(this3)\nRETURN p4"
        );
    }

    #[test]
    fn test_indent_width_from_config() {
        let node = NodeRef::named("n");
        let query = Match::new(Pattern::new(&node)).set(node.property("x"), 1);
        let config = BuildConfig {
            indent_width: 2,
            ..Default::default()
        };
        assert_eq!(
            query.build_with_config(config).unwrap().cypher,
            "MATCH (n)\nSET\n  n.x = 1"
        );
    }
}
