//! Reserved words that a caller-named reference may not use verbatim.

use std::collections::HashSet;

/// Check whether `name` is a reserved Cypher keyword (case-insensitive).
pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(name.to_uppercase().as_str())
}

lazy_static::lazy_static! {
    static ref RESERVED_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();

        // ===== CLAUSES =====
        for kw in [
            "MATCH", "OPTIONAL", "WHERE", "RETURN", "WITH", "CREATE", "MERGE", "DELETE",
            "DETACH", "SET", "REMOVE", "UNWIND", "UNION", "CALL", "YIELD", "FOREACH", "USE",
            "LOAD", "CSV", "START",
        ] {
            set.insert(kw);
        }

        // ===== SUB-CLAUSE KEYWORDS =====
        for kw in [
            "ORDER", "BY", "SKIP", "LIMIT", "ASC", "ASCENDING", "DESC", "DESCENDING", "ON",
            "AS", "DISTINCT", "ALL",
        ] {
            set.insert(kw);
        }

        // ===== OPERATORS AND LITERALS =====
        for kw in [
            "AND", "OR", "XOR", "NOT", "IN", "IS", "STARTS", "ENDS", "CONTAINS", "NULL", "TRUE",
            "FALSE", "CASE", "WHEN", "THEN", "ELSE", "END", "EXISTS",
        ] {
            set.insert(kw);
        }

        // ===== SCHEMA =====
        for kw in [
            "CONSTRAINT", "ASSERT", "UNIQUE", "INDEX", "DROP", "ADD", "MANDATORY", "SCALAR",
            "OF", "DO", "FOR", "REQUIRE", "FROM", "TO",
        ] {
            set.insert(kw);
        }

        set
    };
}
