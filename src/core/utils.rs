//! Identifier transformations for generated Rust code

/// Rust keywords (strict and reserved) that cannot be used as bare identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Converts an OpenAPI identifier to snake_case.
///
/// Word boundaries are a lowercase letter or digit followed by an uppercase
/// letter, and any non-alphanumeric character. Runs of separators collapse to
/// a single underscore and leading/trailing separators are dropped.
///
/// # Examples
/// ```
/// use openapi_testgen::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("createChat"), "create_chat");
/// assert_eq!(to_snake_case("list-models"), "list_models");
/// assert_eq!(to_snake_case("get HTTP Response"), "get_http_response");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                push_separator(&mut out);
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch.is_alphanumeric() {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        } else {
            push_separator(&mut out);
            prev_lower = false;
        }
    }

    out.trim_end_matches('_').to_string()
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}

/// Turns an arbitrary OpenAPI name into a usable Rust binding or method name.
///
/// Keywords get a trailing underscore, names starting with a digit get a
/// leading one, and names with no alphanumeric content become `param`.
pub fn rust_identifier(s: &str) -> String {
    let snake = to_snake_case(s);

    if snake.is_empty() {
        return "param".to_string();
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{snake}");
    }
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        return format!("{snake}_");
    }
    snake
}
