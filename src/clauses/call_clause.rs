use super::return_clause::Return;
use super::with_clause::With;
use super::Clause;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::references::Variable;
use crate::to_cypher::{compile_joined, ToCypher};
use crate::utils::pad_block;

/// Sub-query `CALL { ... }`.
///
/// The inner clause is compiled in a child naming scope. Variables listed with
/// `import` are brought in with a leading `WITH`; variables the inner clause
/// returns keep their names after the block.
#[derive(Debug, Clone)]
pub struct Call {
    inner: Box<Clause>,
    imports: Vec<Variable>,
    import_all: bool,
    next: Option<Box<Clause>>,
}

impl Call {
    pub fn new(inner: impl Into<Clause>) -> Self {
        Self {
            inner: Box::new(inner.into()),
            imports: Vec::new(),
            import_all: false,
            next: None,
        }
    }

    pub fn import(mut self, variable: impl Into<Variable>) -> Self {
        self.imports.push(variable.into());
        self
    }

    /// `WITH *` at the start of the block
    pub fn import_all(mut self) -> Self {
        self.import_all = true;
        self
    }

    pub fn with(mut self, with: With) -> Self {
        self.next = Some(Box::new(Clause::With(with)));
        self
    }

    pub fn returning(mut self, ret: Return) -> Self {
        self.next = Some(Box::new(Clause::Return(ret)));
        self
    }

    pub(crate) fn next(&self) -> Option<&Clause> {
        self.next.as_deref()
    }
}

impl ToCypher for Call {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let indent = env.config().indent_width;
        let body = env.with_child_scope(|env| {
            let mut lines = Vec::new();
            if self.import_all {
                lines.push(pad_block("WITH *", indent));
            } else if !self.imports.is_empty() {
                let imports = format!("WITH {}", compile_joined(&self.imports, env, ", ")?);
                lines.push(pad_block(&imports, indent));
            }
            lines.push(self.inner.compile_block(env)?);
            Ok(lines.join("\n"))
        })?;

        let mut out = format!("CALL {{\n{}\n}}", body);
        if let Some(next) = &self.next {
            out.push('\n');
            out.push_str(&next.to_cypher(env)?);
        }
        Ok(out)
    }
}
