//! HTML helpers shared by the renderers.

/// Escape the characters that are special inside HTML text and
/// double-quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap already-rendered HTML in a link to `href`.
pub fn link(href: &str, inner_html: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape_html(href), inner_html)
}
