//! Rule framework for the heuristic linter.
//!
//! Rules are plain substring checks over single lines:
//!
//! - `LineRule` - checked against every evaluated line; each match emits an issue
//! - `FileRule` - aggregate rules; emit one file-level issue when *no*
//!   evaluated line satisfies the presence check
//!
//! Rules never short-circuit each other. A line may match any number of
//! line rules and every match is reported.

use crate::analyzer::types::{Category, Issue, Severity};
use std::path::Path;

pub mod compose;
pub mod dockerfile;

/// The view of one line that rules are evaluated against.
#[derive(Debug, Clone)]
pub struct LineContext<'a> {
    /// Trimmed line content.
    pub content: &'a str,
    /// Uppercased trimmed content.
    pub upper: String,
    /// 1-indexed line number.
    pub line_num: usize,
    /// Zero-based index into `lines`.
    pub index: usize,
    /// Every raw line of the file.
    pub lines: &'a [String],
}

impl<'a> LineContext<'a> {
    /// Build the context for `lines[index]`, or `None` if the line is blank
    /// or a comment and must be skipped.
    pub fn at(lines: &'a [String], index: usize) -> Option<Self> {
        let content = lines.get(index)?.trim();
        if content.is_empty() || content.starts_with('#') {
            return None;
        }
        Some(Self {
            content,
            upper: content.to_uppercase(),
            line_num: index + 1,
            index,
            lines,
        })
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.content.contains(needle)
    }

    pub fn upper_contains(&self, needle: &str) -> bool {
        self.upper.contains(needle)
    }

    /// The raw line after this one, clamped to the last line of the file.
    pub fn next_line_or_self(&self) -> &'a str {
        let last = self.lines.len().saturating_sub(1);
        let next = (self.index + 1).min(last);
        self.lines.get(next).map(String::as_str).unwrap_or(self.content)
    }
}

/// A per-line rule.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    pub name: &'static str,
    pub severity: Severity,
    pub category: Category,
    pub message: &'static str,
    pub suggestion: &'static str,
    pub matches: fn(&LineContext<'_>) -> bool,
}

impl LineRule {
    /// Check a line and produce an issue on match.
    pub fn check(&self, path: &Path, ctx: &LineContext<'_>) -> Option<Issue> {
        if !(self.matches)(ctx) {
            return None;
        }
        Some(Issue::new(
            self.severity,
            self.category,
            path,
            ctx.line_num,
            ctx.content,
            self.message,
            self.suggestion,
        ))
    }
}

/// A file-level rule keyed on the absence of an instruction.
#[derive(Debug, Clone, Copy)]
pub struct FileRule {
    pub name: &'static str,
    pub severity: Severity,
    pub category: Category,
    pub message: &'static str,
    pub suggestion: &'static str,
    pub present: fn(&LineContext<'_>) -> bool,
}

impl FileRule {
    /// Issue emitted when the whole file never satisfied `present`.
    pub fn missing(&self, path: &Path) -> Issue {
        Issue::global(
            self.severity,
            self.category,
            path,
            self.message,
            self.suggestion,
        )
    }
}

/// Accumulated presence flags for a set of file rules.
#[derive(Debug, Clone)]
pub struct FileRuleState {
    seen: Vec<bool>,
}

impl FileRuleState {
    pub fn new(rules: &[FileRule]) -> Self {
        Self {
            seen: vec![false; rules.len()],
        }
    }

    pub fn observe(&mut self, rules: &[FileRule], ctx: &LineContext<'_>) {
        for (seen, rule) in self.seen.iter_mut().zip(rules) {
            if !*seen && (rule.present)(ctx) {
                *seen = true;
            }
        }
    }

    pub fn seen(&self, index: usize) -> bool {
        self.seen.get(index).copied().unwrap_or(false)
    }

    /// Issues for every rule whose instruction never appeared, in table order.
    pub fn finalize(&self, rules: &[FileRule], path: &Path) -> Vec<Issue> {
        rules
            .iter()
            .zip(&self.seen)
            .filter(|(_, seen)| !**seen)
            .map(|(rule, _)| {
                log::debug!("{}: {} (no matching instruction)", path.display(), rule.name);
                rule.missing(path)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let lines = lines(&["", "   ", "# comment", "   # indented", "FROM alpine"]);
        assert!(LineContext::at(&lines, 0).is_none());
        assert!(LineContext::at(&lines, 1).is_none());
        assert!(LineContext::at(&lines, 2).is_none());
        assert!(LineContext::at(&lines, 3).is_none());
        let ctx = LineContext::at(&lines, 4).unwrap();
        assert_eq!(ctx.line_num, 5);
        assert_eq!(ctx.upper, "FROM ALPINE");
    }

    #[test]
    fn test_content_is_trimmed() {
        let lines = lines(&["   RUN echo hi   "]);
        let ctx = LineContext::at(&lines, 0).unwrap();
        assert_eq!(ctx.content, "RUN echo hi");
    }

    #[test]
    fn test_next_line_clamps_at_end() {
        let lines = lines(&["services:", "  environment:"]);
        let first = LineContext::at(&lines, 0).unwrap();
        assert_eq!(first.next_line_or_self(), "  environment:");
        let last = LineContext::at(&lines, 1).unwrap();
        assert_eq!(last.next_line_or_self(), "  environment:");
    }

    #[test]
    fn test_file_rule_state_tracks_presence() {
        let rules = dockerfile::FILE_RULES;
        let lines = lines(&["USER app"]);
        let mut state = FileRuleState::new(rules);
        state.observe(rules, &LineContext::at(&lines, 0).unwrap());
        assert!(state.seen(0));
        assert!(!state.seen(1));
        let issues = state.finalize(rules, Path::new("Dockerfile"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "No Healthcheck.");
    }
}
