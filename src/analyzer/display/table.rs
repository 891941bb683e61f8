//! Severity-sorted issue table.

use crate::analyzer::display::box_drawer::BoxDrawer;
use crate::analyzer::session::ScanSession;
use crate::analyzer::types::Severity;
use colored::*;
use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{Cell, Row, Table};

fn severity_style(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "Fr",
        Severity::High => "Fy",
        _ => "Fb",
    }
}

/// Build the vulnerability table: severity, `file:line`, message, suggestion.
pub fn issue_table(session: &ScanSession) -> Table {
    let mut table = Table::new();
    table.set_format(*FORMAT_BOX_CHARS);
    table.set_titles(Row::new(vec![
        Cell::new("Sev").style_spec("b"),
        Cell::new("File").style_spec("b"),
        Cell::new("Issue Detected").style_spec("b"),
        Cell::new("Expert Solution").style_spec("b"),
    ]));

    for issue in session.sorted_issues() {
        let location = format!("{}:{}", session.relative_path(&issue.filepath), issue.line_num);
        table.add_row(Row::new(vec![
            Cell::new(issue.severity.as_str()).style_spec(&format!("b{}", severity_style(issue.severity))),
            Cell::new(&location),
            Cell::new(&issue.message),
            Cell::new(&issue.suggestion).style_spec("Fg"),
        ]));
    }

    table
}

/// Session statistics panel with the final score.
pub fn stats_panel(session: &ScanSession) -> String {
    let stats = session.stats();
    let mut panel = BoxDrawer::new("Session Statistics");
    panel.add_line(format!(
        "{}   {}   {}   {}",
        format!("CRITICAL: {}", stats.critical).bright_red().bold(),
        format!("HIGH: {}", stats.high).bright_yellow().bold(),
        format!("MEDIUM: {}", stats.medium).bright_blue().bold(),
        format!("LOW: {}", stats.low).cyan(),
    ));
    panel.add_pair("Files Scanned:", &stats.files_scanned.to_string());
    panel.add_line("");
    panel.add_pair(
        "FINAL SYSTEM SCORE:",
        &format!("{}/100", session.score()).white().on_blue().bold().to_string(),
    );
    panel.draw()
}

/// Full analysis view: header, table and statistics.
pub fn render_analysis(session: &ScanSession) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "VULNERABILITY REPORT".bright_white().bold()));
    if session.has_issues() {
        out.push_str(&issue_table(session).to_string());
    } else {
        out.push_str(&format!("{}\n", "No issues found.".green()));
    }
    out.push('\n');
    out.push_str(&stats_panel(session));
    out.push('\n');
    out
}
