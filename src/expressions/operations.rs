//! Boolean, comparison and arithmetic operators.

use super::{compile_operand, Expr, Precedence};
use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::to_cypher::ToCypher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    And,
    Or,
    Xor,
    Not,
}

impl BooleanOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            BooleanOp::And => "AND",
            BooleanOp::Or => "OR",
            BooleanOp::Xor => "XOR",
            BooleanOp::Not => "NOT",
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            BooleanOp::Or => Precedence::Or,
            BooleanOp::Xor => Precedence::Xor,
            BooleanOp::And => Precedence::And,
            BooleanOp::Not => Precedence::Not,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BooleanOperation {
    op: BooleanOp,
    operands: Vec<Expr>,
}

impl BooleanOperation {
    pub fn new(op: BooleanOp, operands: Vec<Expr>) -> Self {
        Self { op, operands }
    }

    pub fn op(&self) -> BooleanOp {
        self.op
    }

    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    pub(crate) fn precedence(&self) -> Precedence {
        match (self.op, self.operands.as_slice()) {
            (BooleanOp::Not, _) => Precedence::Not,
            // A single operand renders without the keyword
            (_, [single]) => single.precedence(),
            (op, _) => op.precedence(),
        }
    }

    /// Collect the operands of a chain of the same operator: `(a AND b) AND c` → `[a, b, c]`
    fn flatten<'a>(&'a self, out: &mut Vec<&'a Expr>) {
        for operand in &self.operands {
            match operand {
                Expr::Boolean(inner) if inner.op == self.op => inner.flatten(out),
                other => out.push(other),
            }
        }
    }
}

impl ToCypher for BooleanOperation {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if self.op == BooleanOp::Not {
            let operand = self
                .operands
                .first()
                .ok_or(CypherBuildError::MissingOperand("NOT"))?;
            let text = compile_operand(operand, operand.precedence() < Precedence::Not, env)?;
            return Ok(format!("NOT {}", text));
        }

        let mut leaves = Vec::new();
        self.flatten(&mut leaves);
        match leaves.as_slice() {
            [] => Err(CypherBuildError::MissingOperand(self.op.keyword())),
            [single] => single.to_cypher(env),
            _ => {
                let parent = self.op.precedence();
                let parts = leaves
                    .iter()
                    .map(|leaf| compile_operand(leaf, leaf.precedence() < parent, env))
                    .collect::<BuildResult<Vec<_>>>()?;
                let separator = format!(" {} ", self.op.keyword());
                Ok(parts.join(separator.as_str()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    IsNull,
    IsNotNull,
    In,
    Contains,
    StartsWith,
    EndsWith,
    Matches,
}

impl ComparisonOp {
    pub fn token(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Neq => "<>",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::IsNull => "IS NULL",
            ComparisonOp::IsNotNull => "IS NOT NULL",
            ComparisonOp::In => "IN",
            ComparisonOp::Contains => "CONTAINS",
            ComparisonOp::StartsWith => "STARTS WITH",
            ComparisonOp::EndsWith => "ENDS WITH",
            ComparisonOp::Matches => "=~",
        }
    }

    /// Postfix operators without a right operand
    pub fn is_unary(&self) -> bool {
        matches!(self, ComparisonOp::IsNull | ComparisonOp::IsNotNull)
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonOperation {
    op: ComparisonOp,
    left: Box<Expr>,
    right: Option<Box<Expr>>,
}

impl ComparisonOperation {
    pub fn new(op: ComparisonOp, left: Expr, right: Option<Expr>) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: right.map(Box::new),
        }
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }
}

impl ToCypher for ComparisonOperation {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        // Comparisons do not chain, so equal precedence on either side is wrapped too
        let left = compile_operand(
            &self.left,
            self.left.precedence() <= Precedence::Comparison,
            env,
        )?;
        if self.op.is_unary() {
            return Ok(format!("{} {}", left, self.op.token()));
        }

        let right = self
            .right
            .as_ref()
            .ok_or(CypherBuildError::MissingOperand(self.op.token()))?;
        let right = compile_operand(right, right.precedence() <= Precedence::Comparison, env)?;
        Ok(format!("{} {} {}", left, self.op.token(), right))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Mod,
    Pow,
}

impl MathOp {
    pub fn token(&self) -> &'static str {
        match self {
            MathOp::Plus => "+",
            MathOp::Minus => "-",
            MathOp::Multiply => "*",
            MathOp::Divide => "/",
            MathOp::Mod => "%",
            MathOp::Pow => "^",
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            MathOp::Plus | MathOp::Minus => Precedence::Additive,
            MathOp::Multiply | MathOp::Divide | MathOp::Mod => Precedence::Multiplicative,
            MathOp::Pow => Precedence::Power,
        }
    }

    fn is_associative(&self) -> bool {
        matches!(self, MathOp::Plus | MathOp::Multiply)
    }
}

#[derive(Debug, Clone)]
pub struct MathOperation {
    op: MathOp,
    left: Box<Expr>,
    right: Box<Expr>,
}

impl MathOperation {
    pub fn new(op: MathOp, left: Expr, right: Expr) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn op(&self) -> MathOp {
        self.op
    }
}

impl ToCypher for MathOperation {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let parent = self.op.precedence();

        let left_prec = self.left.precedence();
        let wrap_left = left_prec < parent || (self.op == MathOp::Pow && left_prec == parent);

        // a - (b - c), a / (b * c): only the same associative operator may drop parentheses
        let right_prec = self.right.precedence();
        let same_associative = self.op.is_associative()
            && matches!(self.right.as_ref(), Expr::Math(inner) if inner.op == self.op);
        let wrap_right = right_prec < parent || (right_prec == parent && !same_associative);

        let left = compile_operand(&self.left, wrap_left, env)?;
        let right = compile_operand(&self.right, wrap_right, env)?;
        Ok(format!("{} {} {}", left, self.op.token(), right))
    }
}

fn boolean(op: BooleanOp, operands: Vec<Expr>) -> Expr {
    Expr::Boolean(BooleanOperation::new(op, operands))
}

pub fn and(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    boolean(BooleanOp::And, vec![left.into(), right.into()])
}

pub fn or(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    boolean(BooleanOp::Or, vec![left.into(), right.into()])
}

pub fn xor(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    boolean(BooleanOp::Xor, vec![left.into(), right.into()])
}

pub fn not(operand: impl Into<Expr>) -> Expr {
    boolean(BooleanOp::Not, vec![operand.into()])
}

/// AND of every predicate, or `None` when there are none
pub fn and_all(predicates: impl IntoIterator<Item = Expr>) -> Option<Expr> {
    combine_all(BooleanOp::And, predicates)
}

/// OR of every predicate, or `None` when there are none
pub fn or_all(predicates: impl IntoIterator<Item = Expr>) -> Option<Expr> {
    combine_all(BooleanOp::Or, predicates)
}

fn combine_all(op: BooleanOp, predicates: impl IntoIterator<Item = Expr>) -> Option<Expr> {
    let mut operands: Vec<Expr> = predicates.into_iter().collect();
    match operands.len() {
        0 => None,
        1 => operands.pop(),
        _ => Some(boolean(op, operands)),
    }
}

fn comparison(op: ComparisonOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    Expr::Comparison(ComparisonOperation::new(op, left.into(), Some(right.into())))
}

pub fn eq(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Eq, left, right)
}

pub fn neq(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Neq, left, right)
}

pub fn gt(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Gt, left, right)
}

pub fn gte(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Gte, left, right)
}

pub fn lt(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Lt, left, right)
}

pub fn lte(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Lte, left, right)
}

pub fn is_null(operand: impl Into<Expr>) -> Expr {
    Expr::Comparison(ComparisonOperation::new(
        ComparisonOp::IsNull,
        operand.into(),
        None,
    ))
}

pub fn is_not_null(operand: impl Into<Expr>) -> Expr {
    Expr::Comparison(ComparisonOperation::new(
        ComparisonOp::IsNotNull,
        operand.into(),
        None,
    ))
}

/// `left IN right`
pub fn in_list(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::In, left, right)
}

pub fn contains(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Contains, left, right)
}

pub fn starts_with(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::StartsWith, left, right)
}

pub fn ends_with(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::EndsWith, left, right)
}

/// Regular expression match, `left =~ right`
pub fn matches(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    comparison(ComparisonOp::Matches, left, right)
}

fn math(op: MathOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    Expr::Math(MathOperation::new(op, left.into(), right.into()))
}

pub fn plus(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    math(MathOp::Plus, left, right)
}

pub fn minus(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    math(MathOp::Minus, left, right)
}

pub fn multiply(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    math(MathOp::Multiply, left, right)
}

pub fn divide(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    math(MathOp::Divide, left, right)
}

pub fn modulo(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    math(MathOp::Mod, left, right)
}

pub fn pow(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    math(MathOp::Pow, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::references::{Param, Variable};
    use test_case::test_case;

    fn v(name: &str) -> Expr {
        Variable::named(name).into()
    }

    fn render(expr: Expr) -> String {
        expr.to_cypher(&mut Environment::new()).unwrap()
    }

    #[test]
    fn test_and_with_nested_or_is_parenthesized() {
        let expr = and(eq(v("a"), v("b")), or(v("c"), v("d")));
        assert_eq!(render(expr), "a = b AND (c OR d)");
    }

    #[test]
    fn test_or_with_nested_and_is_not_parenthesized() {
        let expr = or(and(v("a"), v("b")), v("c"));
        assert_eq!(render(expr), "a AND b OR c");
    }

    #[test]
    fn test_same_operator_chains_are_flattened() {
        let expr = and(and(v("a"), v("b")), and(v("c"), and(v("d"), v("e"))));
        assert_eq!(render(expr), "a AND b AND c AND d AND e");
    }

    #[test]
    fn test_xor_between_and_and_or() {
        assert_eq!(render(and(xor(v("a"), v("b")), v("c"))), "(a XOR b) AND c");
        assert_eq!(render(xor(and(v("a"), v("b")), v("c"))), "a AND b XOR c");
        assert_eq!(render(xor(or(v("a"), v("b")), v("c"))), "(a OR b) XOR c");
    }

    #[test]
    fn test_not() {
        assert_eq!(render(not(eq(v("a"), 1))), "NOT a = 1");
        assert_eq!(render(not(and(v("a"), v("b")))), "NOT (a AND b)");
        assert_eq!(render(and(not(v("a")), v("b"))), "NOT a AND b");
        assert_eq!(render(not(not(v("a")))), "NOT NOT a");
    }

    #[test]
    fn test_and_all() {
        assert!(and_all(vec![]).is_none());
        assert_eq!(render(and_all(vec![v("a")]).unwrap()), "a");
        assert_eq!(
            render(and_all(vec![v("a"), or(v("b"), v("c")), v("d")]).unwrap()),
            "a AND (b OR c) AND d"
        );
        assert_eq!(render(or_all(vec![v("a"), v("b")]).unwrap()), "a OR b");
    }

    #[test]
    fn test_single_operand_boolean_uses_operand_precedence() {
        let single_or = BooleanOperation::new(BooleanOp::And, vec![or(v("a"), v("b"))]);
        assert_eq!(render(Expr::Boolean(single_or.clone())), "a OR b");
        assert_eq!(render(and(single_or, v("c"))), "(a OR b) AND c");
    }

    #[test]
    fn test_empty_boolean_is_error() {
        let empty = Expr::Boolean(BooleanOperation::new(BooleanOp::Or, vec![]));
        let err = empty.to_cypher(&mut Environment::new()).unwrap_err();
        assert_eq!(err, CypherBuildError::MissingOperand("OR"));
    }

    #[test_case(ComparisonOp::Eq, "a = b")]
    #[test_case(ComparisonOp::Neq, "a <> b")]
    #[test_case(ComparisonOp::Gt, "a > b")]
    #[test_case(ComparisonOp::Gte, "a >= b")]
    #[test_case(ComparisonOp::Lt, "a < b")]
    #[test_case(ComparisonOp::Lte, "a <= b")]
    #[test_case(ComparisonOp::In, "a IN b")]
    #[test_case(ComparisonOp::Contains, "a CONTAINS b")]
    #[test_case(ComparisonOp::StartsWith, "a STARTS WITH b")]
    #[test_case(ComparisonOp::EndsWith, "a ENDS WITH b")]
    #[test_case(ComparisonOp::Matches, "a =~ b")]
    fn test_binary_comparison_tokens(op: ComparisonOp, expected: &str) {
        let expr = Expr::Comparison(ComparisonOperation::new(op, v("a"), Some(v("b"))));
        assert_eq!(render(expr), expected);
    }

    #[test]
    fn test_null_checks() {
        assert_eq!(render(is_null(v("a"))), "a IS NULL");
        assert_eq!(render(is_not_null(v("a"))), "a IS NOT NULL");
    }

    #[test]
    fn test_comparison_missing_right_operand() {
        let expr = Expr::Comparison(ComparisonOperation::new(ComparisonOp::Gt, v("a"), None));
        let err = expr.to_cypher(&mut Environment::new()).unwrap_err();
        assert_eq!(err, CypherBuildError::MissingOperand(">"));
    }

    #[test]
    fn test_comparison_operands() {
        assert_eq!(render(eq(plus(v("a"), 1), v("b"))), "a + 1 = b");
        assert_eq!(render(eq(eq(v("a"), v("b")), true)), "(a = b) = true");
        assert_eq!(render(eq(or(v("a"), v("b")), true)), "(a OR b) = true");
        assert_eq!(render(is_null(and(v("a"), v("b")))), "(a AND b) IS NULL");
    }

    #[test]
    fn test_arithmetic_precedence() {
        assert_eq!(render(multiply(plus(v("a"), v("b")), v("c"))), "(a + b) * c");
        assert_eq!(render(plus(multiply(v("a"), v("b")), v("c"))), "a * b + c");
        assert_eq!(render(plus(v("a"), multiply(v("b"), v("c")))), "a + b * c");
        assert_eq!(render(pow(v("a"), plus(v("b"), 1))), "a ^ (b + 1)");
    }

    #[test]
    fn test_arithmetic_associativity() {
        assert_eq!(render(plus(plus(v("a"), v("b")), v("c"))), "a + b + c");
        assert_eq!(render(plus(v("a"), plus(v("b"), v("c")))), "a + b + c");
        assert_eq!(render(minus(minus(v("a"), v("b")), v("c"))), "a - b - c");
        assert_eq!(render(minus(v("a"), minus(v("b"), v("c")))), "a - (b - c)");
        assert_eq!(render(plus(v("a"), minus(v("b"), v("c")))), "a + (b - c)");
        assert_eq!(render(divide(v("a"), multiply(v("b"), v("c")))), "a / (b * c)");
        assert_eq!(render(modulo(v("a"), v("b"))), "a % b");
        assert_eq!(render(pow(pow(v("a"), v("b")), v("c"))), "(a ^ b) ^ c");
    }

    #[test]
    fn test_params_inside_operators() {
        let mut env = Environment::new();
        let expr = and(
            gte(v("age"), Param::new(18)),
            starts_with(v("name"), Param::new("A")),
        );
        assert_eq!(
            expr.to_cypher(&mut env).unwrap(),
            "age >= $param0 AND name STARTS WITH $param1"
        );
        assert_eq!(env.params().len(), 2);
    }
}
