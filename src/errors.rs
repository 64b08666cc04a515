use thiserror::Error;

/// Broad category of a build failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The AST cannot be rendered as valid Cypher.
    Structural,
    /// A literal holds a value with no Cypher serialization.
    UnsupportedValue,
    /// A caller-supplied name clashes with a keyword or a generated name.
    NamingConflict,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CypherBuildError {
    #[error("Pattern is empty (a pattern needs at least one node segment)")]
    EmptyPattern,

    #[error("Malformed pattern: {0}")]
    MalformedPattern(String),

    #[error(
        "Invalid variable-length range: minimum hops ({min}) cannot be greater than maximum hops ({max})"
    )]
    InvalidHopRange { min: u32, max: u32 },

    #[error("UNION requires at least one branch")]
    EmptyUnion,

    #[error("UNION branch {branch} projects {found} columns, expected {expected}")]
    UnionColumnMismatch {
        branch: usize,
        expected: usize,
        found: usize,
    },

    #[error("{0} clause has nothing to project (add a column or use *)")]
    EmptyProjection(&'static str),

    #[error("{0} is empty (it must contain at least one item)")]
    EmptyClause(&'static str),

    #[error("{0} is missing an operand")]
    MissingOperand(&'static str),

    #[error("DISTINCT is only allowed on aggregation functions, not on {0}()")]
    DistinctOnScalarFunction(String),

    #[error("Procedure {0} is void and cannot YIELD columns")]
    YieldOnVoidProcedure(String),

    #[error("Unsupported literal value: {0}")]
    UnsupportedValue(String),

    #[error("Naming conflict: {0}")]
    NamingConflict(String),
}

impl CypherBuildError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CypherBuildError::UnsupportedValue(_) => ErrorKind::UnsupportedValue,
            CypherBuildError::NamingConflict(_) => ErrorKind::NamingConflict,
            CypherBuildError::EmptyPattern
            | CypherBuildError::MalformedPattern(_)
            | CypherBuildError::InvalidHopRange { .. }
            | CypherBuildError::EmptyUnion
            | CypherBuildError::UnionColumnMismatch { .. }
            | CypherBuildError::EmptyProjection(_)
            | CypherBuildError::EmptyClause(_)
            | CypherBuildError::MissingOperand(_)
            | CypherBuildError::DistinctOnScalarFunction(_)
            | CypherBuildError::YieldOnVoidProcedure(_) => ErrorKind::Structural,
        }
    }

    /// Create a MalformedPattern error with the offending segment position
    pub fn malformed_pattern_at(position: usize, message: impl Into<String>) -> Self {
        CypherBuildError::MalformedPattern(format!(
            "{} (segment {})",
            message.into(),
            position
        ))
    }
}

pub type BuildResult<T> = Result<T, CypherBuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(CypherBuildError::EmptyUnion.kind(), ErrorKind::Structural);
        assert_eq!(
            CypherBuildError::InvalidHopRange { min: 3, max: 1 }.kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            CypherBuildError::UnsupportedValue("NaN".into()).kind(),
            ErrorKind::UnsupportedValue
        );
        assert_eq!(
            CypherBuildError::NamingConflict("MATCH".into()).kind(),
            ErrorKind::NamingConflict
        );
    }

    #[test]
    fn test_malformed_pattern_at() {
        let err = CypherBuildError::malformed_pattern_at(2, "expected a node segment");
        assert_eq!(
            err.to_string(),
            "Malformed pattern: expected a node segment (segment 2)"
        );
    }
}
