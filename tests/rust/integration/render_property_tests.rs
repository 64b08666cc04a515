//! Properties that hold for any statement: repeatable output and
//! placeholders that match the parameter map

#[cfg(test)]
mod render_property_tests {
    use cyphergen::clauses::{concat, Clause, Create, Match, Return, With};
    use cyphergen::expressions::{and, eq, functions, gt, or, MapExpr};
    use cyphergen::pattern::{HopRange, NodePattern, Pattern, RelationshipPattern};
    use cyphergen::references::{NodeRef, Param, Variable};
    use regex::Regex;
    use std::collections::BTreeSet;

    fn sample_statement() -> Clause {
        let person = NodeRef::new();
        let friend = NodeRef::new();
        let total = Variable::new();
        let created = NodeRef::new();
        concat(vec![
            Match::new(Pattern::new(NodePattern::new(&person).label("Person")).related(
                RelationshipPattern::anonymous()
                    .rel_type("KNOWS")
                    .length(HopRange::max_only(2)),
                NodePattern::new(&friend).label("Person"),
            ))
            .and_where(or(
                eq(person.property("name"), Param::new("Alice")),
                and(gt(person.property("age"), Param::new(30)), eq(friend.property("city"), Param::new("Oslo"))),
            ))
            .with(With::new().column(&person).column_as(functions::count(&friend), &total))
            .into(),
            Create::new(Pattern::new(
                NodePattern::new(&created)
                    .label("Summary")
                    .properties(MapExpr::new().set("friends", &total).set("source", Param::new("batch"))),
            ))
            .returning(Return::new().column(&created))
            .into(),
        ])
        .into()
    }

    fn placeholders(text: &str) -> BTreeSet<String> {
        let re = Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap();
        re.captures_iter(text).map(|c| c[1].to_string()).collect()
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let statement = sample_statement();
        let first = statement.build().unwrap();
        let second = statement.build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_independent_builds_are_isomorphic() {
        // Separately constructed trees get the same names, since naming is per render
        let first = sample_statement().build().unwrap();
        let second = sample_statement().build().unwrap();
        assert_eq!(first.cypher, second.cypher);
        assert_eq!(first.params, second.params);
    }

    #[test]
    fn test_placeholders_match_param_keys() {
        let result = sample_statement().build().unwrap();
        let in_text = placeholders(&result.cypher);
        let in_map: BTreeSet<String> = result.params.keys().cloned().collect();
        assert_eq!(in_text, in_map);
        assert_eq!(in_map.len(), 4);
    }

    #[test]
    fn test_generated_names_are_distinct() {
        let result = sample_statement().build().unwrap();
        let re = Regex::new(r"\b(this|var)\d+\b").unwrap();
        let names: BTreeSet<&str> = re.find_iter(&result.cypher).map(|m| m.as_str()).collect();
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["this0", "this1", "this3", "var2"]
        );
    }

    #[test]
    fn test_values_never_appear_in_text() {
        let result = sample_statement().build().unwrap();
        assert!(!result.cypher.contains("Alice"));
        assert!(!result.cypher.contains("Oslo"));
        assert!(!result.cypher.contains("batch"));
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = Return::new().column(Param::new(1)).build().unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["cypher"], "RETURN $param0");
        assert_eq!(value["params"]["param0"], 1);
    }
}
