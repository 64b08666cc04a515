use crate::environment::Environment;
use crate::errors::BuildResult;

/// Convert an AST node to Cypher text, allocating names and placeholders
/// from `env` as it goes.
pub trait ToCypher {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String>;
}

impl<T: ToCypher + ?Sized> ToCypher for Box<T> {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        self.as_ref().to_cypher(env)
    }
}

/// Compile every item in order
pub(crate) fn compile_all<T: ToCypher>(
    items: &[T],
    env: &mut Environment,
) -> BuildResult<Vec<String>> {
    items.iter().map(|item| item.to_cypher(env)).collect()
}

/// Compile every item in order and join the results with `separator`
pub(crate) fn compile_joined<T: ToCypher>(
    items: &[T],
    env: &mut Environment,
    separator: &str,
) -> BuildResult<String> {
    Ok(compile_all(items, env)?.join(separator))
}
