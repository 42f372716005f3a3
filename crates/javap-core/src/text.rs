//! Previewing input text in traces, dumps and diagnostics.

/// Escape control characters and quotes so `text` fits on one line.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Escaped, quoted preview of at most `max_chars` characters of `text`.
///
/// Truncated previews end with an ellipsis after the closing quote.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => format!("\"{}\"…", escape(&text[..cut])),
        None => format!("\"{}\"", escape(text)),
    }
}
