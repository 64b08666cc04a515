use super::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::functions::escape_qualified_name;
use crate::to_cypher::ToCypher;

/// `USE database` in front of a clause
#[derive(Debug, Clone)]
pub struct Use {
    database: String,
    inner: Box<Clause>,
}

impl Use {
    pub fn new(database: impl Into<String>, inner: impl Into<Clause>) -> Self {
        Self {
            database: database.into(),
            inner: Box::new(inner.into()),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub(crate) fn inner(&self) -> &Clause {
        &self.inner
    }
}

impl ToCypher for Use {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        Ok(format!(
            "USE {}\n{}",
            escape_qualified_name(&self.database),
            self.inner.to_cypher(env)?
        ))
    }
}
