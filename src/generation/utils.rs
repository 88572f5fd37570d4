//! String utilities shared by the generators

/// Converts a string to snake_case
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
/// Characters other than alphanumerics, `-`, `_` and spaces are dropped.
///
/// # Examples
/// ```
/// use fastapi_scaffold::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("CRUD-API"), "crud_api");
/// assert_eq!(to_snake_case("InventoryService"), "inventory_service");
/// assert_eq!(to_snake_case("my shop api"), "my_shop_api");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_numeric();
        } else if (ch == '-' || ch == '_' || ch == ' ') && !result.is_empty() {
            if !result.ends_with('_') {
                result.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Joins document sections with one blank line, skipping empty ones
///
/// Each section is stripped of leading blank lines and trailing whitespace
/// first. The result always ends with exactly one newline.
pub fn join_sections<I, S>(sections: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let body = sections
        .into_iter()
        .map(|section| section.as_ref().trim_start_matches(['\n', '\r']).trim_end().to_string())
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    finish_text(&body)
}

/// Normalizes trailing whitespace to a single newline
pub fn finish_text(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}
