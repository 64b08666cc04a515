//! UNION validation and rendering

#[cfg(test)]
mod union_tests {
    use cyphergen::clauses::{Clause, Match, RawCypher, Return, Union};
    use cyphergen::pattern::{NodePattern, Pattern};
    use cyphergen::references::{NodeRef, Variable};
    use cyphergen::{CypherBuildError, ErrorKind};

    fn names_of(label: &str, name: &Variable) -> Clause {
        let node = NodeRef::new();
        Match::new(Pattern::new(NodePattern::new(&node).label(label)))
            .returning(Return::new().column_as(node.property("name"), name))
            .into()
    }

    #[test]
    fn test_union_of_matching_branches() {
        let name = Variable::named("name");
        let union = Union::new(vec![
            names_of("Actor", &name),
            names_of("Director", &name),
            names_of("Writer", &name),
        ])
        .all();
        let result = union.build().unwrap();
        assert_eq!(result.cypher.matches("UNION ALL").count(), 2);
        assert!(result.cypher.starts_with("MATCH (this0:Actor)"));
        assert!(result.cypher.ends_with("RETURN this2.name AS name"));
    }

    #[test]
    fn test_mismatched_columns_fail_before_rendering() {
        let extra = NodeRef::new();
        let union = Union::new(vec![
            names_of("Actor", &Variable::named("name")),
            Match::new(Pattern::new(&extra))
                .returning(Return::new().column(&extra).column(extra.property("name")))
                .into(),
        ]);
        let err = union.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(
            err,
            CypherBuildError::UnionColumnMismatch {
                branch: 1,
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_zero_branches() {
        let err = Union::new(vec![]).build().unwrap_err();
        assert_eq!(err, CypherBuildError::EmptyUnion);
        assert_eq!(err.kind(), ErrorKind::Structural);
    }

    #[test]
    fn test_raw_branch_is_not_checked() {
        let union = Union::new(vec![
            Return::new().column(1).column(2).into(),
            RawCypher::new("RETURN 3 AS a, 4 AS b").into(),
        ]);
        assert_eq!(
            union.build().unwrap().cypher,
            "RETURN 1, 2\nUNION\nRETURN 3 AS a, 4 AS b"
        );
    }
}
