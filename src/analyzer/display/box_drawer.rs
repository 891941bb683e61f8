//! Boxed text panels for terminal output

use crate::analyzer::display::utils::{terminal_width, truncate_to_width, visual_width};
use colored::*;
use textwrap::WordSplitter;

const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 100;

/// A titled panel with an optional subtitle in the bottom border
pub struct BoxDrawer {
    title: String,
    subtitle: Option<String>,
    lines: Vec<String>,
}

impl BoxDrawer {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            lines: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Label on the left, value right-aligned
    pub fn add_pair(&mut self, label: &str, value: &str) {
        self.lines.push(format!("{}\t{}", label, value));
    }

    /// Widest content a panel can hold on this terminal
    pub fn max_content_width() -> usize {
        Self::max_width() - 4
    }

    fn max_width() -> usize {
        MAX_WIDTH.min(terminal_width()).max(MIN_WIDTH)
    }

    /// Add `text` wrapped to the panel width. `marker` leads the first row;
    /// continuation rows are indented to line up with the text.
    pub fn add_wrapped(&mut self, marker: &str, text: &str, paint: impl Fn(&str) -> String) {
        let indent = " ".repeat(visual_width(marker) + 1);
        let width = Self::max_content_width().saturating_sub(indent.len()).max(1);
        let options = textwrap::Options::new(width).word_splitter(WordSplitter::NoHyphenation);
        for (i, row) in textwrap::wrap(text, options).iter().enumerate() {
            let lead = if i == 0 {
                format!("{} ", marker)
            } else {
                indent.clone()
            };
            self.lines.push(format!("{}{}", lead, paint(row)));
        }
    }

    fn width(&self) -> usize {
        let content = self
            .lines
            .iter()
            .map(|l| visual_width(&l.replace('\t', "  ")))
            .max()
            .unwrap_or(0);
        let title = visual_width(&self.title) + 6;
        let subtitle = self.subtitle.as_deref().map(visual_width).unwrap_or(0) + 6;
        (content + 4)
            .max(title)
            .max(subtitle)
            .clamp(MIN_WIDTH, Self::max_width())
    }

    pub fn draw(&self) -> String {
        let width = self.width();
        let inner = width - 4;
        let mut out = Vec::with_capacity(self.lines.len() + 2);

        let title_len = visual_width(&self.title);
        out.push(format!(
            "┌─ {} {}┐",
            self.title.bright_cyan().bold(),
            "─".repeat(width.saturating_sub(title_len + 5))
        ));

        for line in &self.lines {
            out.push(format!("│ {} │", self.fit(line, inner)));
        }

        match &self.subtitle {
            Some(sub) => {
                let sub_len = visual_width(sub);
                out.push(format!(
                    "└{} {} ─┘",
                    "─".repeat(width.saturating_sub(sub_len + 5)),
                    sub.dimmed()
                ));
            }
            None => out.push(format!("└{}┘", "─".repeat(width - 2))),
        }

        out.join("\n")
    }

    fn fit(&self, line: &str, inner: usize) -> String {
        let line = match line.split_once('\t') {
            Some((label, value)) => {
                let gap = inner.saturating_sub(visual_width(label) + visual_width(value));
                format!("{}{}{}", label, " ".repeat(gap.max(2)), value)
            }
            None => line.to_string(),
        };
        let line = truncate_to_width(&line, inner);
        let pad = inner.saturating_sub(visual_width(&line));
        format!("{}{}", line, " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_lines_have_equal_width() {
        colored::control::set_override(false);
        let mut panel = BoxDrawer::new("Session Statistics").with_subtitle("SECURITY");
        panel.add_pair("CRITICAL:", "2");
        panel.add_line("a much longer line of content than the title");
        let drawn = panel.draw();
        let widths: Vec<usize> = drawn.lines().map(visual_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
        assert!(drawn.contains("Session Statistics"));
        assert!(drawn.contains("SECURITY"));
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let mut panel = BoxDrawer::new("t");
        panel.add_line("x".repeat(500));
        let drawn = panel.draw();
        assert!(drawn.lines().all(|l| visual_width(l) <= MAX_WIDTH));
        assert!(drawn.contains("..."));
    }

    #[test]
    fn test_wrapped_text_keeps_every_word() {
        colored::control::set_override(false);
        let words: Vec<String> = (0..60).map(|i| format!("word{}", i)).collect();
        let text = words.join(" ");
        let mut panel = BoxDrawer::new("t");
        panel.add_wrapped("-", &text, |s| s.to_string());
        let drawn = panel.draw();

        assert!(!drawn.contains("..."));
        let rows: Vec<&str> = drawn.lines().collect();
        assert!(rows.len() > 3);
        assert!(rows[1].starts_with("│ - word0 "));
        assert!(rows[2].starts_with("│   word"));
        for word in &words {
            assert!(drawn.contains(word.as_str()), "missing {}", word);
        }
        let widths: Vec<usize> = rows.iter().map(|l| visual_width(l)).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }
}
