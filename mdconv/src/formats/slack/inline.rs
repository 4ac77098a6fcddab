//! Chat-markup delimiters
//!
//! Every delimiter the renderer emits is defined here. Callers pass text that is
//! already rendered and trimmed; these helpers only wrap it.

/// Bullet used for every unordered list item, whatever marker the source used.
pub const BULLET: &str = "•";

pub fn bold(text: &str) -> String {
    format!("*{text}*")
}

pub fn italic(text: &str) -> String {
    format!("_{text}_")
}

pub fn strike(text: &str) -> String {
    format!("~{text}~")
}

pub fn inline_code(text: &str) -> String {
    format!("`{text}`")
}

pub fn code_block(text: &str) -> String {
    format!("```\n{text}\n```")
}

/// The destination is inserted verbatim, without escaping.
pub fn link(url: &str, title: &str) -> String {
    format!("<{url}|{title}>")
}

pub fn quote(text: &str) -> String {
    format!("> {text}")
}

/// Prefix for the list item at `number` (1-based).
pub fn bullet() -> &'static str {
    BULLET
}

pub fn ordinal(number: usize) -> String {
    format!("{number}.")
}

pub fn list_marker(ordered: bool, number: usize) -> String {
    if ordered {
        ordinal(number)
    } else {
        bullet().to_string()
    }
}
