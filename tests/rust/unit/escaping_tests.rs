//! Identifier quoting and string literal escaping

#[cfg(test)]
mod escaping_tests {
    use cyphergen::clauses::{Create, Match, Return};
    use cyphergen::expressions::{eq, MapExpr};
    use cyphergen::pattern::{NodePattern, Pattern, RelationshipPattern};
    use cyphergen::references::{Literal, NodeRef};
    use cyphergen::{Environment, ToCypher};

    /// Reverse the string escaping rules of the Cypher grammar
    fn unescape(literal: &str) -> String {
        let inner = &literal[1..literal.len() - 1];
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => panic!("dangling escape"),
            }
        }
        out
    }

    #[test]
    fn test_quote_and_backslash_literal() {
        let original = r#"say "hi" to C:\temp"#;
        let mut env = Environment::new();
        let text = Literal::from(original).to_cypher(&mut env).unwrap();
        assert_eq!(text, r#""say \"hi\" to C:\\temp""#);
        assert_eq!(unescape(&text), original);
    }

    #[test]
    fn test_labels_and_keys_with_spaces_are_quoted() {
        let node = NodeRef::new();
        let query = Match::new(Pattern::new(
            NodePattern::new(&node).label("Science Fiction").label("Movie"),
        ))
        .and_where(eq(node.property("release date"), 1999))
        .returning(Return::new().column_as(node.property("title"), "movie title"));

        assert_eq!(
            query.build().unwrap().cypher,
            "MATCH (this0:`Science Fiction`:Movie)\nWHERE this0.`release date` = 1999\nRETURN this0.title AS `movie title`"
        );
    }

    #[test]
    fn test_backticks_are_doubled() {
        let node = NodeRef::new();
        let query = Create::new(Pattern::new(
            NodePattern::new(&node)
                .label("We`ird")
                .properties(MapExpr::new().set("2nd", true)),
        ));
        assert_eq!(
            query.build().unwrap().cypher,
            "CREATE (this0:`We``ird` { `2nd`: true })"
        );
    }

    #[test]
    fn test_relationship_types_are_quoted() {
        let pattern = Pattern::new(NodePattern::anonymous()).related(
            RelationshipPattern::anonymous().types(["ACTED_IN", "has-role"]),
            NodePattern::anonymous(),
        );
        let mut env = Environment::new();
        assert_eq!(
            pattern.to_cypher(&mut env).unwrap(),
            "()-[:ACTED_IN|`has-role`]->()"
        );
    }
}
