//! Parenthesization of nested operators

#[cfg(test)]
mod precedence_tests {
    use cyphergen::expressions::{
        and, divide, eq, gt, minus, multiply, not, or, plus, pow, xor, Expr,
    };
    use cyphergen::references::Variable;
    use cyphergen::{Environment, ToCypher};
    use test_case::test_case;

    fn v(name: &str) -> Expr {
        Variable::named(name).into()
    }

    #[test_case(and(eq(v("a"), v("b")), or(v("c"), v("d"))), "a = b AND (c OR d)" ; "or inside and")]
    #[test_case(or(and(v("a"), v("b")), v("c")), "a AND b OR c" ; "and inside or")]
    #[test_case(or(or(v("a"), v("b")), or(v("c"), v("d"))), "a OR b OR c OR d" ; "or chain flattened")]
    #[test_case(not(or(v("a"), v("b"))), "NOT (a OR b)" ; "not over or")]
    #[test_case(and(xor(v("a"), v("b")), not(v("c"))), "(a XOR b) AND NOT c" ; "xor inside and")]
    #[test_case(gt(plus(v("a"), v("b")), multiply(v("c"), 2)), "a + b > c * 2" ; "arithmetic inside comparison")]
    #[test_case(multiply(minus(v("a"), 1), v("b")), "(a - 1) * b" ; "additive inside multiplicative")]
    #[test_case(divide(v("a"), divide(v("b"), v("c"))), "a / (b / c)" ; "right nested division")]
    #[test_case(pow(multiply(v("a"), v("b")), 2), "(a * b) ^ 2" ; "product inside power")]
    fn test_parenthesization(expr: Expr, expected: &str) {
        let mut env = Environment::new();
        assert_eq!(expr.to_cypher(&mut env).unwrap(), expected);
    }
}
