//! Identifier quoting and string literal escaping for Cypher text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Identifiers that can be emitted without backticks.
static PLAIN_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Quote a label, relationship type, property key or variable name if needed.
///
/// Names made only of `[A-Za-z0-9_]` that do not start with a digit are
/// returned unchanged. Anything else is wrapped in backticks, with embedded
/// backticks doubled.
///
/// # Examples
/// ```
/// use cyphergen::utils::escape_identifier;
/// assert_eq!(escape_identifier("Movie"), "Movie");
/// assert_eq!(escape_identifier("release date"), "`release date`");
/// assert_eq!(escape_identifier("2fast"), "`2fast`");
/// assert_eq!(escape_identifier("a`b"), "`a``b`");
/// ```
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if PLAIN_IDENTIFIER.is_match(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("`{}`", name.replace('`', "``")))
    }
}

/// Render a string as a double-quoted Cypher string literal.
///
/// Escaping rules:
/// - Backslash and double quote are backslash-escaped
/// - `\n`, `\r`, `\t`, backspace and form feed use their short escapes
/// - Any other control character becomes `\uXXXX`
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() && (c as u32) <= 0xFFFF => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
