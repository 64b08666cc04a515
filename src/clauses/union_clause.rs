use super::Clause;
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::to_cypher::ToCypher;

/// Branches joined with `UNION` or `UNION ALL`.
///
/// Every branch must return the same number of columns. Branches whose column
/// count cannot be determined (`RETURN *`, raw text) are not checked.
#[derive(Debug, Clone)]
pub struct Union {
    branches: Vec<Clause>,
    all: bool,
}

impl Union {
    pub fn new(branches: Vec<Clause>) -> Self {
        Self {
            branches,
            all: false,
        }
    }

    /// `UNION ALL`, keeping duplicate rows
    pub fn all(mut self) -> Self {
        self.all = true;
        self
    }

    pub fn branches(&self) -> &[Clause] {
        &self.branches
    }

    /// Check branch count and column counts before anything is rendered
    pub fn validate(&self) -> BuildResult<()> {
        let Some(first) = self.branches.first() else {
            return Err(CypherBuildError::EmptyUnion);
        };

        let expected = first.projected_columns();
        for (branch, clause) in self.branches.iter().enumerate().skip(1) {
            if let (Some(expected), Some(found)) = (expected, clause.projected_columns()) {
                if expected != found {
                    return Err(CypherBuildError::UnionColumnMismatch {
                        branch,
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(())
    }
}

impl ToCypher for Union {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        self.validate()?;
        let separator = if self.all { "\nUNION ALL\n" } else { "\nUNION\n" };
        let branches = self
            .branches
            .iter()
            .map(|branch| branch.to_cypher(env))
            .collect::<BuildResult<Vec<_>>>()?;
        Ok(branches.join(separator))
    }
}
