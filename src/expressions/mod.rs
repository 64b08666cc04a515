//! Expression tree.
//!
//! `Expr` is a closed set of node kinds. Every kind reports a `Precedence`,
//! and operators use it to decide when a child needs parentheses: a child is
//! wrapped only when it binds looser than its parent (plus the usual
//! equal-precedence cases for non-associative operators).

mod case;
mod exists;
pub mod functions;
mod list;
mod map;
mod operations;

pub use case::Case;
pub use exists::Exists;
pub use functions::{FunctionCall, FunctionKind, PredicateFunction, PredicateKind};
pub use list::{ListComprehension, ListExpr, PatternComprehension};
pub use map::{MapExpr, MapProjection};
pub(crate) use map::format_map;
pub use operations::{
    and, and_all, contains, divide, ends_with, eq, gt, gte, in_list, is_not_null, is_null, lt,
    lte, matches, minus, modulo, multiply, neq, not, or, or_all, plus, pow, starts_with, xor,
    BooleanOp, BooleanOperation, ComparisonOp, ComparisonOperation, MathOp, MathOperation,
};

use crate::clauses::RawCypher;
use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::pattern::Pattern;
use crate::references::{
    Literal, NodeRef, Param, PathRef, PropertyRef, RelationshipRef, Variable,
};
use crate::to_cypher::ToCypher;

/// Binding strength, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Or,
    Xor,
    And,
    Not,
    Comparison,
    Additive,
    Multiplicative,
    Power,
    Atom,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Variable(Variable),
    Param(Param),
    Literal(Literal),
    Property(PropertyRef),
    Boolean(BooleanOperation),
    Comparison(ComparisonOperation),
    Math(MathOperation),
    Function(FunctionCall),
    PredicateFunction(Box<PredicateFunction>),
    List(ListExpr),
    ListComprehension(Box<ListComprehension>),
    PatternComprehension(Box<PatternComprehension>),
    Map(MapExpr),
    MapProjection(Box<MapProjection>),
    Case(Box<Case>),
    Exists(Box<Exists>),
    /// Pattern used as a predicate: `WHERE (this0)-[:ACTED_IN]->()`
    Pattern(Box<Pattern>),
    Raw(RawCypher),
}

impl Expr {
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Boolean(op) => op.precedence(),
            Expr::Comparison(_) => Precedence::Comparison,
            Expr::Math(op) => op.op().precedence(),
            // Unknown text: treat as the loosest so operators always wrap it
            Expr::Raw(_) => Precedence::Or,
            Expr::Variable(_)
            | Expr::Param(_)
            | Expr::Literal(_)
            | Expr::Property(_)
            | Expr::Function(_)
            | Expr::PredicateFunction(_)
            | Expr::List(_)
            | Expr::ListComprehension(_)
            | Expr::PatternComprehension(_)
            | Expr::Map(_)
            | Expr::MapProjection(_)
            | Expr::Case(_)
            | Expr::Exists(_)
            | Expr::Pattern(_) => Precedence::Atom,
        }
    }

    /// `null` literal
    pub fn null() -> Self {
        Expr::Literal(Literal::Null)
    }

    /// Property access on this expression
    pub fn property(self, key: impl Into<String>) -> PropertyRef {
        PropertyRef::new(self, key)
    }
}

impl ToCypher for Expr {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match self {
            Expr::Variable(v) => v.to_cypher(env),
            Expr::Param(p) => p.to_cypher(env),
            Expr::Literal(l) => l.to_cypher(env),
            Expr::Property(p) => p.to_cypher(env),
            Expr::Boolean(op) => op.to_cypher(env),
            Expr::Comparison(op) => op.to_cypher(env),
            Expr::Math(op) => op.to_cypher(env),
            Expr::Function(f) => f.to_cypher(env),
            Expr::PredicateFunction(f) => f.to_cypher(env),
            Expr::List(l) => l.to_cypher(env),
            Expr::ListComprehension(c) => c.to_cypher(env),
            Expr::PatternComprehension(c) => c.to_cypher(env),
            Expr::Map(m) => m.to_cypher(env),
            Expr::MapProjection(m) => m.to_cypher(env),
            Expr::Case(c) => c.to_cypher(env),
            Expr::Exists(e) => e.to_cypher(env),
            Expr::Pattern(p) => p.to_cypher(env),
            Expr::Raw(r) => r.to_cypher(env),
        }
    }
}

/// Compile `expr`, wrapping it in parentheses when `wrap` is set
pub(crate) fn compile_operand(
    expr: &Expr,
    wrap: bool,
    env: &mut Environment,
) -> BuildResult<String> {
    let text = expr.to_cypher(env)?;
    Ok(if wrap { format!("({})", text) } else { text })
}

macro_rules! expr_from {
    ($($ty:ty => |$v:ident| $body:expr),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from($v: $ty) -> Self {
                    $body
                }
            }
        )*
    };
}

expr_from! {
    Variable => |v| Expr::Variable(v),
    &Variable => |v| Expr::Variable(v.clone()),
    NodeRef => |v| Expr::Variable(v.into()),
    &NodeRef => |v| Expr::Variable(v.into()),
    RelationshipRef => |v| Expr::Variable(v.into()),
    &RelationshipRef => |v| Expr::Variable(v.into()),
    PathRef => |v| Expr::Variable(v.into()),
    &PathRef => |v| Expr::Variable(v.into()),
    Param => |p| Expr::Param(p),
    &Param => |p| Expr::Param(p.clone()),
    Literal => |l| Expr::Literal(l),
    PropertyRef => |p| Expr::Property(p),
    &PropertyRef => |p| Expr::Property(p.clone()),
    bool => |b| Expr::Literal(b.into()),
    i64 => |i| Expr::Literal(i.into()),
    i32 => |i| Expr::Literal(i.into()),
    u32 => |i| Expr::Literal(i.into()),
    f64 => |f| Expr::Literal(f.into()),
    &str => |s| Expr::Literal(s.into()),
    String => |s| Expr::Literal(s.into()),
    BooleanOperation => |op| Expr::Boolean(op),
    ComparisonOperation => |op| Expr::Comparison(op),
    MathOperation => |op| Expr::Math(op),
    FunctionCall => |f| Expr::Function(f),
    PredicateFunction => |f| Expr::PredicateFunction(Box::new(f)),
    ListExpr => |l| Expr::List(l),
    ListComprehension => |c| Expr::ListComprehension(Box::new(c)),
    PatternComprehension => |c| Expr::PatternComprehension(Box::new(c)),
    MapExpr => |m| Expr::Map(m),
    MapProjection => |m| Expr::MapProjection(Box::new(m)),
    Case => |c| Expr::Case(Box::new(c)),
    Exists => |e| Expr::Exists(Box::new(e)),
    Pattern => |p| Expr::Pattern(Box::new(p)),
    RawCypher => |r| Expr::Raw(r),
}
