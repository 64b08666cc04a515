use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::{Expr, Precedence};
use crate::to_cypher::ToCypher;
use crate::utils::escape_identifier;

/// One step of a property access
#[derive(Debug, Clone)]
pub enum PropertyKey {
    /// `.key`
    Name(String),
    /// `[expr]`, a computed key or a list index
    Dynamic(Expr),
}

/// Property (or index) access on an expression: `this0.name`, `this0["key"]`, `list[0]`
#[derive(Debug, Clone)]
pub struct PropertyRef {
    base: Box<Expr>,
    path: Vec<PropertyKey>,
}

impl PropertyRef {
    pub fn new(base: impl Into<Expr>, key: impl Into<String>) -> Self {
        Self {
            base: Box::new(base.into()),
            path: vec![PropertyKey::Name(key.into())],
        }
    }

    /// `list[index]`
    pub fn index(base: impl Into<Expr>, index: impl Into<Expr>) -> Self {
        Self {
            base: Box::new(base.into()),
            path: vec![PropertyKey::Dynamic(index.into())],
        }
    }

    /// Nested access: `this0.address.city`
    pub fn property(mut self, key: impl Into<String>) -> Self {
        self.path.push(PropertyKey::Name(key.into()));
        self
    }

    /// Computed access: `this0[$param0]`
    pub fn dynamic(mut self, key: impl Into<Expr>) -> Self {
        self.path.push(PropertyKey::Dynamic(key.into()));
        self
    }

    pub fn base(&self) -> &Expr {
        &self.base
    }

    pub fn path(&self) -> &[PropertyKey] {
        &self.path
    }
}

impl ToCypher for PropertyRef {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let base = self.base.to_cypher(env)?;
        let mut out = if self.base.precedence() < Precedence::Atom {
            format!("({})", base)
        } else {
            base
        };

        for key in &self.path {
            match key {
                PropertyKey::Name(name) => {
                    out.push('.');
                    out.push_str(&escape_identifier(name));
                }
                PropertyKey::Dynamic(expr) => {
                    out.push('[');
                    out.push_str(&expr.to_cypher(env)?);
                    out.push(']');
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expressions::{functions, plus};
    use crate::references::{NodeRef, Param, Variable};

    #[test]
    fn test_simple_property() {
        let mut env = Environment::new();
        let movie = NodeRef::new();
        let title = movie.property("title");
        assert_eq!(title.to_cypher(&mut env).unwrap(), "this0.title");
    }

    #[test]
    fn test_nested_and_quoted_property() {
        let mut env = Environment::new();
        let node = NodeRef::named("n");
        let prop = node.property("address").property("postal code");
        assert_eq!(prop.to_cypher(&mut env).unwrap(), "n.address.`postal code`");
    }

    #[test]
    fn test_dynamic_property_and_index() {
        let mut env = Environment::new();
        let node = NodeRef::named("n");
        let prop = PropertyRef::new(node, "tags").dynamic(Param::new(0));
        assert_eq!(prop.to_cypher(&mut env).unwrap(), "n.tags[$param0]");

        let list = Variable::named("list");
        let first = PropertyRef::index(list, 0);
        assert_eq!(first.to_cypher(&mut env).unwrap(), "list[0]");
    }

    #[test]
    fn test_property_of_compound_base_is_parenthesized() {
        let mut env = Environment::new();
        let a = Variable::named("a");
        let b = Variable::named("b");
        let prop = PropertyRef::new(plus(a, b), "x");
        assert_eq!(prop.to_cypher(&mut env).unwrap(), "(a + b).x");

        let head = PropertyRef::new(functions::head(Variable::named("list")), "name");
        assert_eq!(head.to_cypher(&mut env).unwrap(), "head(list).name");
    }
}
