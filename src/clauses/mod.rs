//! Top-level clauses and their attachable sub-clauses.
//!
//! Each clause kind is its own struct carrying exactly the sub-clauses it
//! supports as optional fields; `Clause` is the closed set of kinds that can
//! start (or be chained into) a statement.
//!
//! A statement is compiled with `build()`, which creates a fresh
//! `Environment`, renders the tree and returns text plus parameters:
//!
//! ```
//! use cyphergen::clauses::{Match, Return};
//! use cyphergen::expressions::eq;
//! use cyphergen::pattern::{NodePattern, Pattern};
//! use cyphergen::references::{NodeRef, Param};
//!
//! let movie = NodeRef::new();
//! let query = Match::new(Pattern::new(NodePattern::new(&movie).label("Movie")))
//!     .and_where(eq(movie.property("title"), Param::new("The Matrix")))
//!     .returning(Return::new().column(&movie));
//!
//! let result = query.build().unwrap();
//! assert_eq!(
//!     result.cypher,
//!     "MATCH (this0:Movie)\nWHERE this0.title = $param0\nRETURN this0"
//! );
//! assert_eq!(result.params["param0"], "The Matrix");
//! ```

mod call_clause;
mod composite;
mod create_clause;
mod delete_clause;
mod foreach_clause;
mod match_clause;
mod merge_clause;
mod optional_match_clause;
mod order_by_clause;
mod procedure_call;
mod projection;
mod raw_clause;
mod remove_clause;
mod return_clause;
mod set_clause;
mod union_clause;
mod unwind_clause;
mod use_clause;
mod where_clause;
mod with_clause;

pub use call_clause::Call;
pub use composite::{concat, CompositeClause};
pub use create_clause::Create;
pub use delete_clause::DeleteClause;
pub use foreach_clause::Foreach;
pub use match_clause::Match;
pub use merge_clause::Merge;
pub use optional_match_clause::OptionalMatch;
pub use order_by_clause::{Order, OrderByClause};
pub use procedure_call::Procedure;
pub use projection::{Alias, Projection};
pub use raw_clause::RawCypher;
pub use remove_clause::{RemoveClause, RemoveItem};
pub use return_clause::Return;
pub use set_clause::{SetClause, SetItem};
pub use union_clause::Union;
pub use unwind_clause::Unwind;
pub use use_clause::Use;
pub use where_clause::WhereClause;
pub use with_clause::With;

use crate::config::BuildConfig;
use crate::environment::{CypherResult, Environment};
use crate::errors::BuildResult;
use crate::to_cypher::ToCypher;
use crate::utils::pad_block;

#[derive(Debug, Clone)]
pub enum Clause {
    Match(Match),
    OptionalMatch(OptionalMatch),
    Create(Create),
    Merge(Merge),
    Call(Call),
    Use(Use),
    Return(Return),
    With(With),
    Unwind(Unwind),
    Union(Union),
    Foreach(Foreach),
    Procedure(Procedure),
    Raw(RawCypher),
    Composite(CompositeClause),
}

impl Clause {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Clause::Match(_) => "MATCH",
            Clause::OptionalMatch(_) => "OPTIONAL MATCH",
            Clause::Create(_) => "CREATE",
            Clause::Merge(_) => "MERGE",
            Clause::Call(_) => "CALL",
            Clause::Use(_) => "USE",
            Clause::Return(_) => "RETURN",
            Clause::With(_) => "WITH",
            Clause::Unwind(_) => "UNWIND",
            Clause::Union(_) => "UNION",
            Clause::Foreach(_) => "FOREACH",
            Clause::Procedure(_) => "PROCEDURE",
            Clause::Raw(_) => "RAW",
            Clause::Composite(_) => "COMPOSITE",
        }
    }

    /// Number of columns the statement ends up returning.
    ///
    /// `None` when it is unknown (`RETURN *`, raw text) or nothing is returned.
    pub fn projected_columns(&self) -> Option<usize> {
        match self {
            Clause::Return(ret) => ret.column_count(),
            Clause::With(with) => with.next().and_then(Clause::projected_columns),
            Clause::Match(m) => m.next().and_then(Clause::projected_columns),
            Clause::OptionalMatch(m) => m.next().and_then(Clause::projected_columns),
            Clause::Create(c) => c.next().and_then(Clause::projected_columns),
            Clause::Merge(m) => m.next().and_then(Clause::projected_columns),
            Clause::Call(c) => c.next().and_then(Clause::projected_columns),
            Clause::Unwind(u) => u.next().and_then(Clause::projected_columns),
            Clause::Procedure(p) => p.projected_columns(),
            Clause::Use(u) => u.inner().projected_columns(),
            Clause::Union(u) => u.branches().first().and_then(Clause::projected_columns),
            Clause::Composite(c) => c.clauses().last().and_then(Clause::projected_columns),
            Clause::Foreach(_) | Clause::Raw(_) => None,
        }
    }

    /// Compile as the body of a `CALL`, `FOREACH` or `EXISTS` block.
    ///
    /// Raw text is emitted as written; re-indenting it would alter multi-line
    /// string literals inside it.
    pub(crate) fn compile_block(&self, env: &mut Environment) -> BuildResult<String> {
        let text = self.to_cypher(env)?;
        match self {
            Clause::Raw(_) => Ok(text),
            _ => Ok(pad_block(&text, env.config().indent_width)),
        }
    }

    pub fn build(&self) -> BuildResult<CypherResult> {
        build_statement(self, self.kind_name(), BuildConfig::default())
    }

    pub fn build_with_config(&self, config: BuildConfig) -> BuildResult<CypherResult> {
        build_statement(self, self.kind_name(), config)
    }
}

impl ToCypher for Clause {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match self {
            Clause::Match(c) => c.to_cypher(env),
            Clause::OptionalMatch(c) => c.to_cypher(env),
            Clause::Create(c) => c.to_cypher(env),
            Clause::Merge(c) => c.to_cypher(env),
            Clause::Call(c) => c.to_cypher(env),
            Clause::Use(c) => c.to_cypher(env),
            Clause::Return(c) => c.to_cypher(env),
            Clause::With(c) => c.to_cypher(env),
            Clause::Unwind(c) => c.to_cypher(env),
            Clause::Union(c) => c.to_cypher(env),
            Clause::Foreach(c) => c.to_cypher(env),
            Clause::Procedure(c) => c.to_cypher(env),
            Clause::Raw(c) => c.to_cypher(env),
            Clause::Composite(c) => c.to_cypher(env),
        }
    }
}

/// Render `node` as a complete statement in a fresh Environment
fn build_statement<T: ToCypher + ?Sized>(
    node: &T,
    kind: &'static str,
    config: BuildConfig,
) -> BuildResult<CypherResult> {
    let mut env = Environment::with_config(config);
    let cypher = node.to_cypher(&mut env)?;
    let result = env.finish(cypher);
    log::debug!(
        "Built {} statement: {} chars, {} params, {} deferred",
        kind,
        result.cypher.len(),
        result.params.len(),
        result.deferred_params.len()
    );
    Ok(result)
}

macro_rules! clause_kind {
    ($($ty:ident => $variant:ident, $kind:literal);* $(;)?) => {
        $(
            impl From<$ty> for Clause {
                fn from(clause: $ty) -> Self {
                    Clause::$variant(clause)
                }
            }

            impl $ty {
                /// Compile this clause as a complete statement
                pub fn build(&self) -> BuildResult<CypherResult> {
                    build_statement(self, $kind, BuildConfig::default())
                }

                pub fn build_with_config(&self, config: BuildConfig) -> BuildResult<CypherResult> {
                    build_statement(self, $kind, config)
                }
            }
        )*
    };
}

clause_kind! {
    Match => Match, "MATCH";
    OptionalMatch => OptionalMatch, "OPTIONAL MATCH";
    Create => Create, "CREATE";
    Merge => Merge, "MERGE";
    Call => Call, "CALL";
    Use => Use, "USE";
    Return => Return, "RETURN";
    With => With, "WITH";
    Unwind => Unwind, "UNWIND";
    Union => Union, "UNION";
    Foreach => Foreach, "FOREACH";
    Procedure => Procedure, "PROCEDURE";
    CompositeClause => Composite, "COMPOSITE";
}

impl From<RawCypher> for Clause {
    fn from(raw: RawCypher) -> Self {
        Clause::Raw(raw)
    }
}

impl RawCypher {
    pub fn build(&self) -> BuildResult<CypherResult> {
        build_statement(self, "RAW", BuildConfig::default())
    }
}
