use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::format_map;
use crate::to_cypher::{compile_joined, ToCypher};
use crate::utils::escape_string;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Largest integer a double-precision consumer can hold exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// A value written inline into the query text.
///
/// Literals are never turned into parameters; wrap a value in `Param` for that.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Literal>),
    Map(Vec<(String, Literal)>),
    Date(NaiveDate),
    LocalTime(NaiveTime),
    LocalDateTime(NaiveDateTime),
    DateTime(DateTime<FixedOffset>),
    Duration(chrono::Duration),
}

impl Literal {
    /// Convert a JSON value into a literal
    ///
    /// Numbers that fit neither `i64` nor `f64` are rejected.
    pub fn from_json(value: &Value) -> BuildResult<Self> {
        Ok(match value {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Literal::Integer(i)
                } else if n.is_u64() {
                    return Err(CypherBuildError::UnsupportedValue(format!(
                        "integer {} is outside the 64-bit signed range",
                        n
                    )));
                } else if let Some(f) = n.as_f64() {
                    Literal::Float(f)
                } else {
                    return Err(CypherBuildError::UnsupportedValue(format!(
                        "number {} has no Cypher representation",
                        n
                    )));
                }
            }
            Value::String(s) => Literal::String(s.clone()),
            Value::Array(items) => Literal::List(
                items
                    .iter()
                    .map(Literal::from_json)
                    .collect::<BuildResult<Vec<_>>>()?,
            ),
            Value::Object(entries) => Literal::Map(
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), Literal::from_json(v)?)))
                    .collect::<BuildResult<Vec<_>>>()?,
            ),
        })
    }
}

fn render_integer(value: i64, big_int_literals: bool) -> String {
    if big_int_literals && !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
        format!("toInteger(\"{}\")", value)
    } else {
        value.to_string()
    }
}

fn render_float(value: f64) -> BuildResult<String> {
    if !value.is_finite() {
        return Err(CypherBuildError::UnsupportedValue(format!(
            "non-finite float: {}",
            value
        )));
    }
    // Debug formatting keeps the decimal point (1.0, not 1) and switches to
    // exponent form for very large or small magnitudes
    Ok(format!("{:?}", value))
}

impl ToCypher for Literal {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match self {
            Literal::Null => Ok("NULL".to_string()),
            Literal::Boolean(b) => Ok(b.to_string()),
            Literal::Integer(i) => Ok(render_integer(*i, env.config().big_int_literals)),
            Literal::Float(f) => render_float(*f),
            Literal::String(s) => Ok(escape_string(s)),
            Literal::List(items) => Ok(format!("[{}]", compile_joined(items, env, ", ")?)),
            Literal::Map(entries) => {
                let compiled = entries
                    .iter()
                    .map(|(key, value)| Ok((key.as_str(), value.to_cypher(env)?)))
                    .collect::<BuildResult<Vec<_>>>()?;
                Ok(format_map(&compiled))
            }
            Literal::Date(d) => Ok(format!("date(\"{}\")", d.format("%Y-%m-%d"))),
            Literal::LocalTime(t) => Ok(format!("localtime(\"{}\")", t.format("%H:%M:%S%.f"))),
            Literal::LocalDateTime(dt) => Ok(format!(
                "localdatetime(\"{}\")",
                dt.format("%Y-%m-%dT%H:%M:%S%.f")
            )),
            Literal::DateTime(dt) => Ok(format!("datetime(\"{}\")", dt.to_rfc3339())),
            Literal::Duration(d) => {
                let nanos = d.subsec_nanos();
                if nanos == 0 {
                    Ok(format!("duration({{ seconds: {} }})", d.num_seconds()))
                } else {
                    Ok(format!(
                        "duration({{ seconds: {}, nanoseconds: {} }})",
                        d.num_seconds(),
                        nanos
                    ))
                }
            }
        }
    }
}

macro_rules! literal_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::$variant(value.into())
                }
            }
        )*
    };
}

literal_from! {
    bool => Boolean,
    i64 => Integer,
    i32 => Integer,
    u32 => Integer,
    f64 => Float,
    f32 => Float,
    String => String,
    &str => String,
    NaiveDate => Date,
    NaiveTime => LocalTime,
    NaiveDateTime => LocalDateTime,
    DateTime<FixedOffset> => DateTime,
    chrono::Duration => Duration,
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Literal::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Literal::Null)
    }
}
