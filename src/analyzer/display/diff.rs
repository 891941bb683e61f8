//! Before/after preview of suggested fixes
//!
//! Each line-level issue is shown as a small diff: the matched line as
//! removed, the suggestion as added. File-level issues have no line to
//! replace and are left out. Nothing is written back to disk.

use crate::analyzer::display::box_drawer::BoxDrawer;
use crate::analyzer::types::Issue;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

/// Render the diff panel for one issue.
pub fn render_fix(issue: &Issue) -> String {
    let title = format!("{} : Line {}", issue.file_name(), issue.line_num);
    let mut panel = BoxDrawer::new(&title).with_subtitle(issue.category.as_str());

    let diff = TextDiff::from_lines(issue.content.as_str(), issue.suggestion.as_str());
    for change in diff.iter_all_changes() {
        let value = change.value().trim_end();
        match change.tag() {
            ChangeTag::Delete => {
                panel.add_wrapped(&"-".red().bold().to_string(), value, |s| s.red().to_string())
            }
            ChangeTag::Insert => {
                panel.add_wrapped(&"+".green().bold().to_string(), value, |s| s.green().to_string())
            }
            ChangeTag::Equal => panel.add_wrapped(" ", value, str::to_string),
        }
    }

    panel.draw()
}

/// Render previews for every issue with a concrete line, in discovery order.
pub fn render_fix_preview<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> String {
    issues
        .into_iter()
        .filter(|issue| issue.line_num > 0)
        .map(render_fix)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::types::{Category, Severity};

    fn sudo_issue() -> Issue {
        Issue::new(
            Severity::Critical,
            Category::Security,
            "/srv/app/Dockerfile",
            4,
            "RUN sudo apt-get update",
            "Sudo used in build.",
            "Remove 'sudo'. Build as root, drop privileges later.",
        )
    }

    #[test]
    fn test_render_fix_shows_before_and_after() {
        let out = strip_ansi_escapes::strip_str(render_fix(&sudo_issue()));
        assert!(out.contains("Dockerfile : Line 4"));
        assert!(out.contains("SECURITY"));
        assert!(out.contains("- RUN sudo apt-get update"));
        assert!(out.contains("+ Remove 'sudo'. Build as root, drop privileges later."));
        let minus = out.find("- RUN").unwrap();
        let plus = out.find("+ Remove").unwrap();
        assert!(minus < plus);
    }

    #[test]
    fn test_global_issues_are_skipped() {
        let global = Issue::global(
            Severity::High,
            Category::Security,
            "Dockerfile",
            "Running as Root.",
            "Add 'USER <uid>' instruction.",
        );
        assert!(render_fix_preview([&global]).is_empty());
        let both = [global, sudo_issue()];
        let out = render_fix_preview(&both);
        assert!(out.contains("Line 4"));
        assert!(!out.contains("Line 0"));
    }

    #[test]
    fn test_long_lines_are_wrapped_not_cut() {
        let content = format!(
            "RUN apt-get update && apt-get install -y {} && echo end-of-install",
            (0..30).map(|i| format!("pkg{}", i)).collect::<Vec<_>>().join(" ")
        );
        let issue = Issue::new(
            Severity::Medium,
            Category::Performance,
            "Dockerfile",
            2,
            content.as_str(),
            "APT Lists not cleaned.",
            "Add '&& rm -rf /var/lib/apt/lists/*' to the same RUN command.",
        );
        let out = strip_ansi_escapes::strip_str(render_fix(&issue));
        assert!(!out.contains("..."));
        assert!(out.contains("- RUN apt-get update"));
        assert!(out.contains("pkg29"));
        assert!(out.contains("end-of-install"));
        assert!(out.lines().count() > 4);
    }
}
