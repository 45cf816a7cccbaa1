//! Markup-safe rendering.

/// Line break token substituted for `\n`.
pub const LINE_BREAK: &str = "<br />";

/// Escapes `&`, `<`, `>`, `"`, and `'` as HTML entities.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes rendered text and turns its line breaks into [`LINE_BREAK`].
#[must_use]
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace('\n', LINE_BREAK)
}
