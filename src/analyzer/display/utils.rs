//! String width helpers for terminal panels

/// Visible width of a string, ignoring ANSI colour codes
pub fn visual_width(s: &str) -> usize {
    strip_ansi_escapes::strip_str(s).chars().count()
}

/// Truncate to a visible width, appending "..." when shortened
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let plain = strip_ansi_escapes::strip_str(s);
    if plain.chars().count() <= max_width {
        return s.to_string();
    }
    let kept: String = plain.chars().take(max_width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Terminal width with a fallback for non-interactive output
pub fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width_basic() {
        assert_eq!(visual_width("hello"), 5);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_visual_width_with_ansi() {
        assert_eq!(visual_width("\x1b[31mhello\x1b[0m"), 5);
        assert_eq!(visual_width("\x1b[1;32mtest\x1b[0m"), 4);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello world", 5), "he...");
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
    }
}
