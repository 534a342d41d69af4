//! String helper for log lines and error details.

/// Take the first `max_chars` characters, collapsing newlines so the result
/// fits on one line.
pub fn one_line_preview(s: &str, max_chars: usize) -> String {
    let mut preview: String = s
        .chars()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if s.chars().count() > max_chars {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_collapses_newlines() {
        assert_eq!(one_line_preview("a\nb\r\nc", 20), "a b  c");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(one_line_preview("こんにちは", 2), "こん...");
        assert_eq!(one_line_preview("short", 5), "short");
    }
}
