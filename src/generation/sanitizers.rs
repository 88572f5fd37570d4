//! Sanitizers for values spliced into generated Python text
//!
//! The generator is a text assembler, not a compiler. These helpers only
//! keep caller strings from breaking out of the literal or identifier
//! position they are placed in.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::HttpMethod;

static NON_IDENTIFIER_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("identifier pattern is a valid regex"));

/// Derives a handler function name from an endpoint path
///
/// A single leading slash is stripped and every character outside
/// `[A-Za-z0-9_]` becomes `_`. An empty result falls back to a
/// method-specific name: `root` for GET, `create` for POST and
/// `endpoint` otherwise.
///
/// # Examples
/// ```
/// use fastapi_scaffold::config::HttpMethod;
/// use fastapi_scaffold::generation::sanitizers::path_to_identifier;
///
/// assert_eq!(path_to_identifier("/items/{id}", HttpMethod::Get), "items__id_");
/// assert_eq!(path_to_identifier("/", HttpMethod::Post), "create");
/// ```
pub fn path_to_identifier(path: &str, method: HttpMethod) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let identifier = NON_IDENTIFIER_CHARS.replace_all(trimmed, "_");

    if identifier.is_empty() {
        match method {
            HttpMethod::Get => "root".to_string(),
            HttpMethod::Post => "create".to_string(),
            _ => "endpoint".to_string(),
        }
    } else {
        identifier.into_owned()
    }
}

/// Escapes a value for use inside a double-quoted Python string literal
pub fn escape_python_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
