use crate::environment::{Environment, RefKey};
use crate::errors::BuildResult;
use crate::references::PropertyRef;
use crate::to_cypher::ToCypher;
use std::sync::Arc;

/// What a variable refers to; decides the prefix of generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Generic,
    Node,
    Relationship,
    Path,
}

impl VariableKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            VariableKind::Generic => "var",
            VariableKind::Node | VariableKind::Relationship => "this",
            VariableKind::Path => "p",
        }
    }
}

/// A variable in a statement.
///
/// Anonymous variables are named by the `Environment` the first time they are
/// compiled. Named variables always render their given name, which lets
/// independently built statements refer to the same variable.
///
/// Clones share identity: a clone compiles to the same name as the original.
#[derive(Debug, Clone)]
pub struct Variable {
    key: RefKey,
    kind: VariableKind,
    name: Option<Arc<str>>,
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Variable {}

impl Default for Variable {
    fn default() -> Self {
        Self::new()
    }
}

impl Variable {
    pub fn new() -> Self {
        Self::anonymous(VariableKind::Generic)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::named_of_kind(VariableKind::Generic, name)
    }

    pub(crate) fn anonymous(kind: VariableKind) -> Self {
        Self {
            key: RefKey::fresh(),
            kind,
            name: None,
        }
    }

    pub(crate) fn named_of_kind(kind: VariableKind, name: impl Into<String>) -> Self {
        Self {
            key: RefKey::fresh(),
            kind,
            name: Some(Arc::from(name.into())),
        }
    }

    pub fn key(&self) -> RefKey {
        self.key
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// The caller-supplied name, if this is a named variable
    pub fn fixed_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `variable.key`
    pub fn property(&self, key: impl Into<String>) -> PropertyRef {
        PropertyRef::new(self.clone(), key)
    }
}

impl ToCypher for Variable {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        env.name_for(self)
    }
}

macro_rules! typed_reference {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Variable);

        impl $name {
            pub fn new() -> Self {
                Self(Variable::anonymous($kind))
            }

            pub fn named(name: impl Into<String>) -> Self {
                Self(Variable::named_of_kind($kind, name))
            }

            pub fn as_variable(&self) -> &Variable {
                &self.0
            }

            pub fn property(&self, key: impl Into<String>) -> PropertyRef {
                self.0.property(key)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$name> for Variable {
            fn from(reference: $name) -> Variable {
                reference.0
            }
        }

        impl From<&$name> for Variable {
            fn from(reference: &$name) -> Variable {
                reference.0.clone()
            }
        }

        impl ToCypher for $name {
            fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
                env.name_for(&self.0)
            }
        }
    };
}

typed_reference!(
    /// Node variable, generated names start with `this`
    NodeRef,
    VariableKind::Node
);
typed_reference!(
    /// Relationship variable, generated names start with `this`
    RelationshipRef,
    VariableKind::Relationship
);
typed_reference!(
    /// Path variable (`p = (a)-->(b)`), generated names start with `p`
    PathRef,
    VariableKind::Path
);

impl From<&Variable> for Variable {
    fn from(variable: &Variable) -> Variable {
        variable.clone()
    }
}
