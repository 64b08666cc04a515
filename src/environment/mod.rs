//! Per-render naming and parameter allocation.
//!
//! An `Environment` is created for one top-level build, threaded by `&mut`
//! through every nested `to_cypher` call, and consumed into a `CypherResult`
//! once the text is complete.
//!
//! Names are keyed by `RefKey`, a surrogate assigned when a reference is
//! constructed. Clones of a reference share the key and therefore the name,
//! for as long as the Environment lives (including across `concat`ed clauses
//! and variables exported from `CALL { ... }` blocks).
//!
//! Scoping:
//! - Parameter placeholders come from one counter for the whole statement
//! - Each nested block (sub-query, EXISTS) gets its own variable counter,
//!   seeded from the enclosing block; when the block closes, the enclosing
//!   counter resumes after the highest number the block used

pub mod naming;

use crate::config::BuildConfig;
use crate::errors::{BuildResult, CypherBuildError};
use crate::references::{Param, Variable};
use crate::utils::{escape_identifier, is_reserved_keyword};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a reference, assigned at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefKey(u64);

impl RefKey {
    pub(crate) fn fresh() -> Self {
        static NEXT_KEY: AtomicU64 = AtomicU64::new(0);
        RefKey(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

/// Output of a build: query text plus the values its placeholders refer to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherResult {
    pub cypher: String,
    /// Placeholder name (without `$`) → bound value
    pub params: BTreeMap<String, Value>,
    /// Placeholders of named parameters without a value; the caller binds them
    pub deferred_params: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy)]
struct ScopeCounter {
    next: usize,
}

#[derive(Debug)]
pub struct Environment {
    config: BuildConfig,

    /// Reference → assigned (already escaped) name
    names: HashMap<RefKey, String>,
    /// Names produced by the allocator
    generated_names: HashSet<String>,
    /// Names supplied by callers through named references
    fixed_names: HashSet<String>,

    root_scope: ScopeCounter,
    nested_scopes: Vec<ScopeCounter>,

    /// Param reference → placeholder name
    param_names: HashMap<RefKey, String>,
    generated_params: HashSet<String>,
    params: BTreeMap<String, Value>,
    deferred_params: BTreeSet<String>,
    param_counter: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::with_config(BuildConfig::default())
    }
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            config,
            names: HashMap::new(),
            generated_names: HashSet::new(),
            fixed_names: HashSet::new(),
            root_scope: ScopeCounter { next: 0 },
            nested_scopes: Vec::new(),
            param_names: HashMap::new(),
            generated_params: HashSet::new(),
            params: BTreeMap::new(),
            deferred_params: BTreeSet::new(),
            param_counter: 0,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Parameters bound so far
    pub fn params(&self) -> &BTreeMap<String, Value> {
        &self.params
    }

    /// Number of enclosing sub-query blocks at this point of the render
    pub fn scope_depth(&self) -> usize {
        self.nested_scopes.len()
    }

    /// Name of `variable` in this render, allocating it on first use.
    pub fn name_for(&mut self, variable: &Variable) -> BuildResult<String> {
        if let Some(name) = self.names.get(&variable.key()) {
            return Ok(name.clone());
        }

        let name = match variable.fixed_name() {
            Some(fixed) => {
                self.claim_fixed_name(fixed)?;
                escape_identifier(fixed).into_owned()
            }
            None => self.next_variable_name(variable.kind().prefix()),
        };

        log::trace!(
            "Environment: {:?} {:?} named '{}' (scope depth {})",
            variable.kind(),
            variable.key(),
            name,
            self.scope_depth()
        );
        self.names.insert(variable.key(), name.clone());
        Ok(name)
    }

    /// Bind `param` and return its placeholder name (without `$`).
    ///
    /// Binding the same parameter twice returns the same placeholder and does
    /// not add a second map entry.
    pub fn bind_param(&mut self, param: &Param) -> BuildResult<String> {
        if let Some(name) = self.param_names.get(&param.key()) {
            return Ok(name.clone());
        }

        let name = match param.fixed_name() {
            Some(fixed) => self.bind_named_param(fixed, param.value())?,
            None => {
                let name = self.next_param_name();
                let value = param.value().cloned().unwrap_or(Value::Null);
                self.params.insert(name.clone(), value);
                name
            }
        };

        log::trace!("Environment: {:?} bound as ${}", param.key(), name);
        self.param_names.insert(param.key(), name.clone());
        Ok(name)
    }

    /// Bind a fresh anonymous value and return its placeholder text (`$param0`).
    ///
    /// Intended for `RawCypher` callbacks that need to reference a value.
    pub fn bind_value(&mut self, value: impl Into<Value>) -> BuildResult<String> {
        let param = Param::new(value);
        let name = self.bind_param(&param)?;
        Ok(format!("${}", escape_identifier(&name)))
    }

    /// Run `f` inside a nested naming scope.
    pub fn with_child_scope<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> BuildResult<T>,
    ) -> BuildResult<T> {
        let seed = self.current_scope().next;
        self.nested_scopes.push(ScopeCounter { next: seed });
        log::trace!("Environment: entering scope depth {}", self.scope_depth());

        let result = f(self);

        if let Some(child) = self.nested_scopes.pop() {
            let parent = self.current_scope();
            parent.next = parent.next.max(child.next);
        }
        result
    }

    /// Consume the environment into the final build output.
    pub fn finish(self, cypher: String) -> CypherResult {
        CypherResult {
            cypher,
            params: self.params,
            deferred_params: self.deferred_params,
        }
    }

    fn current_scope(&mut self) -> &mut ScopeCounter {
        match self.nested_scopes.last_mut() {
            Some(scope) => scope,
            None => &mut self.root_scope,
        }
    }

    fn next_variable_name(&mut self, prefix: &str) -> String {
        loop {
            let scope = self.current_scope();
            let candidate = naming::generate_name(prefix, scope.next);
            scope.next += 1;

            if !self.fixed_names.contains(&candidate) && !self.generated_names.contains(&candidate)
            {
                self.generated_names.insert(candidate.clone());
                return candidate;
            }
        }
    }

    fn claim_fixed_name(&mut self, fixed: &str) -> BuildResult<()> {
        if fixed.is_empty() {
            return Err(CypherBuildError::NamingConflict(
                "named reference with an empty name".to_string(),
            ));
        }
        if is_reserved_keyword(fixed) {
            return Err(CypherBuildError::NamingConflict(format!(
                "'{}' is a reserved keyword and cannot name a variable",
                fixed
            )));
        }
        if self.generated_names.contains(fixed) {
            return Err(CypherBuildError::NamingConflict(format!(
                "'{}' was already generated for another reference in this statement",
                fixed
            )));
        }
        if self.fixed_names.insert(fixed.to_string()) {
            if let Some((prefix, _)) = naming::parse_generated_name(fixed) {
                if matches!(prefix, "this" | "var" | "p") {
                    log::warn!(
                        "Named reference '{}' uses the generated-name pattern; generated names will skip it",
                        fixed
                    );
                }
            }
        }
        Ok(())
    }

    fn bind_named_param(&mut self, fixed: &str, value: Option<&Value>) -> BuildResult<String> {
        if fixed.is_empty() {
            return Err(CypherBuildError::NamingConflict(
                "named parameter with an empty name".to_string(),
            ));
        }
        if self.generated_params.contains(fixed) {
            return Err(CypherBuildError::NamingConflict(format!(
                "parameter '${}' was already generated for another value",
                fixed
            )));
        }

        match value {
            Some(value) => match self.params.get(fixed) {
                Some(existing) if existing != value => {
                    return Err(CypherBuildError::NamingConflict(format!(
                        "parameter '${}' is bound to two different values",
                        fixed
                    )));
                }
                Some(_) => {}
                None => {
                    self.deferred_params.remove(fixed);
                    self.params.insert(fixed.to_string(), value.clone());
                }
            },
            None => {
                if !self.params.contains_key(fixed) {
                    self.deferred_params.insert(fixed.to_string());
                }
            }
        }
        Ok(fixed.to_string())
    }

    fn next_param_name(&mut self) -> String {
        loop {
            let candidate = naming::generate_param_name(
                &self.config.global_prefix,
                &self.config.param_prefix,
                self.param_counter,
            );
            self.param_counter += 1;

            if !self.params.contains_key(&candidate) && !self.deferred_params.contains(&candidate) {
                self.generated_params.insert(candidate.clone());
                return candidate;
            }
        }
    }
}
