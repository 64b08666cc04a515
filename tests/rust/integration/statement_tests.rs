//! End-to-end statements combining several clause kinds

#[cfg(test)]
mod statement_tests {
    use cyphergen::clauses::{
        concat, Call, Create, Foreach, Match, Merge, OptionalMatch, Order, Return, Unwind, Use,
        With,
    };
    use cyphergen::expressions::{
        and, eq, functions, gt, in_list, Case, ListComprehension, MapExpr, MapProjection,
        PatternComprehension,
    };
    use cyphergen::pattern::{HopRange, NodePattern, Pattern, RelationshipPattern};
    use cyphergen::procedures::db;
    use cyphergen::references::{NodeRef, Param, RelationshipRef, Variable};
    use serde_json::json;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_person_knows_person() -> anyhow::Result<()> {
        init_logging();
        let a = NodeRef::new();
        let b = NodeRef::new();
        let query = Match::new(Pattern::new(NodePattern::new(&a).label("Person")).related(
            RelationshipPattern::anonymous().rel_type("KNOWS"),
            NodePattern::new(&b).label("Person"),
        ))
        .and_where(eq(a.property("name"), Param::new("Alice")))
        .returning(Return::new().column(&a).column(&b));

        let result = query.build()?;
        assert_eq!(result.cypher.matches("MATCH").count(), 1);
        assert_eq!(result.cypher.matches("->").count(), 1);
        assert_eq!(result.cypher.matches(" = $").count(), 1);
        assert!(result.cypher.ends_with("RETURN this0, this1"));
        assert_eq!(result.params.len(), 1);
        assert_eq!(result.params["param0"], json!("Alice"));
        Ok(())
    }

    #[test]
    fn test_movie_listing_with_projection() {
        init_logging();
        let movie = NodeRef::new();
        let actor = NodeRef::new();
        let acted = RelationshipRef::new();
        let genre = Variable::new();

        let actors = PatternComprehension::new(
            Pattern::new(&movie).related(
                RelationshipPattern::new(&acted).rel_type("ACTED_IN").incoming(),
                NodePattern::new(&actor).label("Person"),
            ),
            MapProjection::new(&actor)
                .property("name")
                .entry("roles", acted.property("roles")),
        );

        let query = Match::new(Pattern::new(NodePattern::new(&movie).label("Movie")))
            .and_where(in_list(Param::new("Drama"), movie.property("genres")))
            .returning(
                Return::new()
                    .column_as(
                        MapProjection::new(&movie)
                            .property("title")
                            .entry("actors", actors)
                            .entry(
                                "genres",
                                ListComprehension::new(&genre, movie.property("genres"))
                                    .map(functions::to_upper(&genre)),
                            ),
                        "movie",
                    )
                    .order_by(movie.property("title"), Order::Asc)
                    .limit(Param::new(10)),
            );

        let result = query.build().unwrap();
        assert_eq!(
            result.cypher,
            "MATCH (this0:Movie)\nWHERE $param0 IN this0.genres\nRETURN this0 { .title, actors: [(this0)<-[this1:ACTED_IN]-(this2:Person) | this2 { .name, roles: this1.roles }], genres: [var3 IN this0.genres | toUpper(var3)] } AS movie\nORDER BY this0.title ASC\nLIMIT $param1"
        );
        assert_eq!(result.params["param1"], json!(10));
    }

    #[test]
    fn test_create_and_connect() {
        let user = NodeRef::new();
        let post = NodeRef::new();
        let input = Variable::new();

        let query = Unwind::new(Param::new(json!([{"title": "Hello"}])), &input).with(
            With::new().column(&input).with(With::all()),
        );
        let create = Create::new(
            Pattern::new(NodePattern::new(&user).label("User"))
                .related(
                    RelationshipPattern::anonymous().rel_type("WROTE"),
                    NodePattern::new(&post).label("Post").properties(
                        MapExpr::new().set("title", input.property("title")),
                    ),
                ),
        )
        .returning(Return::new().column_as(functions::count(&post), "created"));

        let result = concat(vec![query.into(), create.into()]).build().unwrap();
        assert_eq!(
            result.cypher,
            "UNWIND $param0 AS var0\nWITH var0\nWITH *\nCREATE (this1:User)-[:WROTE]->(this2:Post { title: var0.title })\nRETURN count(this2) AS created"
        );
        assert_eq!(result.params["param0"], json!([{"title": "Hello"}]));
    }

    #[test]
    fn test_merge_foreach_and_use() {
        let tag = NodeRef::new();
        let name = Variable::new();
        let foreach = Foreach::new(&name, Param::new(vec!["rust", "graphs"])).run(
            Merge::new(Pattern::new(
                NodePattern::new(&tag)
                    .label("Tag")
                    .properties(MapExpr::new().set("name", &name)),
            ))
            .on_create_set(tag.property("created"), functions::datetime()),
        );
        let query = Use::new("blog", foreach);
        assert_eq!(
            query.build().unwrap().cypher,
            "USE blog\nFOREACH (var0 IN $param0 |\n    MERGE (this1:Tag { name: var0 })\n    ON CREATE SET\n        this1.created = datetime()\n)"
        );
    }

    #[test]
    fn test_fulltext_search_with_optional_match() {
        let start = NodeRef::new();
        let end = NodeRef::new();
        let score = Variable::new();
        let statement = concat(vec![
            db::fulltext_query_nodes("people", Param::new("ali*"), &start, &score).into(),
            OptionalMatch::new(Pattern::new(&start).related(
                RelationshipPattern::anonymous()
                    .rel_type("KNOWS")
                    .undirected()
                    .length(HopRange::range(1, 3)),
                NodePattern::new(&end).label("Person"),
            ))
            .with(
                With::new()
                    .column(&start)
                    .column_as(functions::collect(&end).distinct(), "friends")
                    .and_where(gt(&score, 1))
                    .returning(
                        Return::new().column_as(
                            Case::new()
                                .when(eq(functions::size(Variable::named("friends")), 0), "loner")
                                .otherwise("social"),
                            "kind",
                        ),
                    ),
            )
            .into(),
        ]);

        assert_eq!(
            statement.build().unwrap().cypher,
            "CALL db.index.fulltext.queryNodes(\"people\", $param0) YIELD node AS this0, score AS var1\nOPTIONAL MATCH (this0)-[:KNOWS*1..3]-(this2:Person)\nWITH this0, collect(DISTINCT this2) AS friends\nWHERE var1 > 1\nRETURN CASE\n    WHEN size(friends) = 0 THEN \"loner\"\n    ELSE \"social\"\nEND AS kind"
        );
    }

    #[test]
    fn test_call_subquery_aggregation() {
        let movie = NodeRef::new();
        let review = NodeRef::new();
        let average = Variable::new();
        let statement = concat(vec![
            Match::new(Pattern::new(NodePattern::new(&movie).label("Movie"))).into(),
            Call::new(
                Match::new(Pattern::new(&movie).related(
                    RelationshipPattern::anonymous().rel_type("HAS_REVIEW"),
                    &review,
                ))
                .returning(Return::new().column_as(functions::avg(review.property("score")), &average)),
            )
            .import(&movie)
            .with(
                With::new()
                    .column(&movie)
                    .column(&average)
                    .and_where(and(gt(&average, 3), eq(movie.property("public"), true)))
                    .returning(Return::new().column(movie.property("title")).order_by(&average, Order::Desc)),
            )
            .into(),
        ]);
        assert_eq!(
            statement.build().unwrap().cypher,
            "MATCH (this0:Movie)\nCALL {\n    WITH this0\n    MATCH (this0)-[:HAS_REVIEW]->(this1)\n    RETURN avg(this1.score) AS var2\n}\nWITH this0, var2\nWHERE var2 > 3 AND this0.public = true\nRETURN this0.title\nORDER BY var2 DESC"
        );
    }
}
