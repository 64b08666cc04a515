//! Temporal constructors. The no-argument forms return the current instant.

use super::FunctionCall;
use crate::expressions::Expr;

macro_rules! temporal_function {
    ($($now:ident, $from:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $name, "()`")]
            pub fn $now() -> FunctionCall {
                FunctionCall::new($name, vec![])
            }

            #[doc = concat!("`", $name, "(value)` from a string or map")]
            pub fn $from(value: impl Into<Expr>) -> FunctionCall {
                FunctionCall::new($name, vec![value.into()])
            }
        )*
    };
}

temporal_function! {
    date, date_from => "date",
    datetime, datetime_from => "datetime",
    localdatetime, localdatetime_from => "localdatetime",
    localtime, localtime_from => "localtime",
    time, time_from => "time",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::references::Param;
    use crate::to_cypher::ToCypher;

    #[test]
    fn test_temporal_functions() {
        let mut env = Environment::new();
        assert_eq!(datetime().to_cypher(&mut env).unwrap(), "datetime()");
        assert_eq!(date().to_cypher(&mut env).unwrap(), "date()");
        assert_eq!(time().to_cypher(&mut env).unwrap(), "time()");
        assert_eq!(
            date_from(Param::new("2024-01-01")).to_cypher(&mut env).unwrap(),
            "date($param0)"
        );
        assert_eq!(
            localdatetime_from("2024-01-01T10:00").to_cypher(&mut env).unwrap(),
            "localdatetime(\"2024-01-01T10:00\")"
        );
        assert_eq!(localtime().name(), "localtime");
        assert_eq!(localtime_from("10:00").name(), "localtime");
        assert_eq!(datetime_from("x").name(), "datetime");
        assert_eq!(localdatetime().name(), "localdatetime");
        assert_eq!(time_from("x").name(), "time");
    }
}
