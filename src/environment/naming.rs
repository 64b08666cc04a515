//! Centralized name generation so that every variable and placeholder in a
//! statement follows one convention.
//!
//! ## Naming Convention
//! - Variables: `{prefix}{counter}` where prefix comes from the reference kind
//!   (`this` for nodes and relationships, `p` for paths, `var` otherwise)
//! - Placeholders: `{global_prefix}{param_prefix}{counter}`
//!
//! Examples:
//! - `("this", 0)` → `"this0"`
//! - `("", "param", 3)` → `"param3"`
//! - `("update_", "param", 0)` → `"update_param0"`

/// Generate a variable name with a sequence counter.
///
/// # Examples
/// ```
/// use cyphergen::environment::naming::generate_name;
///
/// assert_eq!(generate_name("this", 0), "this0");
/// assert_eq!(generate_name("var", 12), "var12");
/// ```
pub fn generate_name(prefix: &str, counter: usize) -> String {
    format!("{}{}", prefix, counter)
}

/// Generate a parameter placeholder name (without the leading `$`).
///
/// # Examples
/// ```
/// use cyphergen::environment::naming::generate_param_name;
///
/// assert_eq!(generate_param_name("", "param", 0), "param0");
/// assert_eq!(generate_param_name("create_", "param", 2), "create_param2");
/// ```
pub fn generate_param_name(global_prefix: &str, param_prefix: &str, counter: usize) -> String {
    format!("{}{}{}", global_prefix, param_prefix, counter)
}

/// Split a generated name back into prefix and counter.
///
/// Returns `None` if the name does not end in digits or has nothing before them.
///
/// # Examples
/// ```
/// use cyphergen::environment::naming::parse_generated_name;
///
/// assert_eq!(parse_generated_name("this12"), Some(("this", 12)));
/// assert_eq!(parse_generated_name("movie"), None);
/// assert_eq!(parse_generated_name("42"), None);
/// ```
pub fn parse_generated_name(name: &str) -> Option<(&str, usize)> {
    let prefix = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if prefix.is_empty() || prefix.len() == name.len() {
        return None;
    }
    let counter = name[prefix.len()..].parse().ok()?;
    Some((prefix, counter))
}
