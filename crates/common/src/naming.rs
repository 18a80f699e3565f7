//! Naming utilities
//!
//! Deterministic, pure helpers that turn raw schema, property and parameter
//! names into identifier-safe synthetic type names.

/// Keywords that cannot be used as bare Rust identifiers
pub const RUST_RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Derive the synthetic name of a nested type from its parent's name
///
/// # Examples
/// ```
/// use service_model_generator_common::naming::synthesize;
///
/// assert_eq!(synthesize("Widget", "id"), "WidgetId");
/// assert_eq!(synthesize("Widget", "api-version"), "WidgetApiVersion");
/// ```
pub fn synthesize(parent_name: &str, property_name: &str) -> String {
    format!("{}{}", parent_name, to_upper_camel_case(property_name))
}

/// Apply the container/element plural heuristic
///
/// A container name ending in `s` keeps its name and its element drops the
/// trailing `s`. Any other container name is reused for the element and the
/// container gains an `s`. Irregular plurals come out wrong (`Status` gives
/// the element `Statu`); generated type names depend on this exact behaviour.
///
/// Returns the element name; `container_name` is rewritten in place.
pub fn pluralize_container(container_name: &mut String) -> String {
    if let Some(element_name) = container_name.strip_suffix('s') {
        element_name.to_string()
    } else {
        let element_name = container_name.clone();
        container_name.push('s');
        element_name
    }
}

/// Uppercase the first character
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a name to UpperCamelCase
///
/// Separators (anything that is not alphanumeric) split words; the first
/// character of each word is uppercased and the rest is kept as written, so
/// existing camel humps survive (`apiVersion` → `ApiVersion`).
pub fn to_upper_camel_case(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(upper_first)
        .collect()
}

/// Convert a name to lowerCamelCase
///
/// A leading acronym is lowercased as a whole (`URLPath` → `urlPath`,
/// `ID` → `id`).
pub fn to_lower_camel_case(s: &str) -> String {
    let upper = to_upper_camel_case(s);
    let chars: Vec<char> = upper.chars().collect();

    let leading_upper = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lower_count = match leading_upper {
        0 => 0,
        n if n == chars.len() => n,
        1 => 1,
        // The last capital of an acronym starts the next word when a
        // lowercase letter follows it
        n if chars[n].is_lowercase() => n - 1,
        n => n,
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i < lower_count {
                c.to_lowercase().collect::<String>()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Convert PascalCase or camelCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            // Word boundary after a lowercase letter or digit, or at the last
            // capital of an acronym (HTTPServer -> http_server)
            let should_add_underscore = i > 0
                && (chars[i - 1].is_lowercase()
                    || chars[i - 1].is_ascii_digit()
                    || (i + 1 < chars.len() && chars[i + 1].is_lowercase()));

            if should_add_underscore && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else if ch.is_alphanumeric() {
            result.push(ch);
        } else if !result.is_empty() && !result.ends_with('_') {
            result.push('_');
        }
    }

    result.trim_matches('_').to_string()
}

/// Replace characters that cannot appear in an identifier
///
/// Invalid characters become `_`; a leading digit gets a `_` prefix; an
/// empty input becomes `_`.
pub fn sanitize_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}

/// Suffix `_` to a name that collides with a reserved word
pub fn escape_reserved_word(name: &str, reserved_words: &[&str]) -> String {
    if reserved_words.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// Name of an enumeration case for a literal value
pub fn enumeration_case_name(value: &str) -> String {
    sanitize_identifier(&to_upper_camel_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize() {
        assert_eq!(synthesize("Widget", "id"), "WidgetId");
        assert_eq!(synthesize("Widget", "count"), "WidgetCount");
        assert_eq!(synthesize("GetWidgetRequest", "X-Request-Id"), "GetWidgetRequestXRequestId");
    }

    #[test]
    fn test_pluralize_regular_name() {
        let mut name = "WidgetTag".to_string();
        let element = pluralize_container(&mut name);
        assert_eq!(name, "WidgetTags");
        assert_eq!(element, "WidgetTag");
    }

    #[test]
    fn test_pluralize_name_already_plural() {
        let mut name = "Tags".to_string();
        let element = pluralize_container(&mut name);
        assert_eq!(name, "Tags");
        assert_eq!(element, "Tag");
    }

    #[test]
    fn test_pluralize_false_plural_is_preserved() {
        // Irregular plural handling is intentionally naive
        let mut name = "Status".to_string();
        let element = pluralize_container(&mut name);
        assert_eq!(name, "Status");
        assert_eq!(element, "Statu");
    }

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(to_upper_camel_case("id"), "Id");
        assert_eq!(to_upper_camel_case("apiVersion"), "ApiVersion");
        assert_eq!(to_upper_camel_case("in_progress"), "InProgress");
        assert_eq!(to_upper_camel_case("x-request-id"), "XRequestId");
        assert_eq!(to_upper_camel_case("2xx"), "2xx");
        assert_eq!(to_upper_camel_case(""), "");
    }

    #[test]
    fn test_lower_camel_case() {
        assert_eq!(to_lower_camel_case("name"), "name");
        assert_eq!(to_lower_camel_case("X-Request-Id"), "xRequestId");
        assert_eq!(to_lower_camel_case("URLPath"), "urlPath");
        assert_eq!(to_lower_camel_case("ID"), "id");
        assert_eq!(to_lower_camel_case("page_size"), "pageSize");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("PodName"), "pod_name");
        assert_eq!(to_snake_case("getWidget"), "get_widget");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("IOError"), "io_error");
        assert_eq!(to_snake_case("v1_api"), "v1_api");
        assert_eq!(to_snake_case("__test__"), "test");
        assert_eq!(to_snake_case("some-resource"), "some_resource");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("valid_name"), "valid_name");
        assert_eq!(sanitize_identifier("a.b-c"), "a_b_c");
        assert_eq!(sanitize_identifier("3d"), "_3d");
        assert_eq!(sanitize_identifier(""), "_");
    }

    #[test]
    fn test_escape_reserved_word() {
        assert_eq!(escape_reserved_word("type", RUST_RESERVED_WORDS), "type_");
        assert_eq!(escape_reserved_word("kind", RUST_RESERVED_WORDS), "kind");
    }

    #[test]
    fn test_enumeration_case_name() {
        assert_eq!(enumeration_case_name("in-progress"), "InProgress");
        assert_eq!(enumeration_case_name("404"), "_404");
    }
}
