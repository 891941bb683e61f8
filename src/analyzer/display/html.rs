//! Self-contained HTML audit report.
//!
//! The document carries its styles inline and references no external
//! assets, so the single file can be archived or mailed as is. Every
//! interpolated value is escaped by the template engine.

use crate::analyzer::session::ScanSession;
use crate::analyzer::summary::ScoreBand;
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>DevOps Security Audit Report</title>
    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #1e1e1e; color: #e0e0e0; margin: 0; padding: 20px; }
        .container { max-width: 1200px; margin: 0 auto; }
        .header { display: flex; justify-content: space-between; align-items: center; border-bottom: 2px solid #333; padding-bottom: 20px; margin-bottom: 30px; }
        .logo h1 { margin: 0; color: #00bcd4; text-transform: uppercase; letter-spacing: 2px; }
        .score-card { text-align: right; }
        .score-circle { display: inline-block; width: 60px; height: 60px; border-radius: 50%; background: {{ score_color }}; color: white; text-align: center; line-height: 60px; font-weight: bold; font-size: 24px; }
        .metrics-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 20px; margin-bottom: 30px; }
        .metric-box { background: #252526; padding: 20px; border-radius: 8px; text-align: center; border: 1px solid #333; }
        .metric-count { font-size: 36px; font-weight: bold; margin-bottom: 5px; }
        .critical-text { color: #dc3545; }
        .high-text { color: #fd7e14; }
        .medium-text { color: #ffc107; }
        .low-text { color: #0dcaf0; }
        table { width: 100%; border-collapse: collapse; background: #252526; border-radius: 8px; overflow: hidden; }
        th, td { padding: 15px; text-align: left; border-bottom: 1px solid #333; }
        th { background: #333; color: #fff; text-transform: uppercase; font-size: 12px; letter-spacing: 1px; }
        tr:hover { background: #2a2d2e; }
        .badge { padding: 5px 10px; border-radius: 4px; font-size: 12px; font-weight: bold; color: white; }
        .badge.critical { background: #dc3545; }
        .badge.high { background: #fd7e14; }
        .badge.medium { background: #ffc107; color: black; }
        .badge.low { background: #0dcaf0; color: black; }
        .location { font-family: monospace; color: #bbb; }
        .fix-code { font-family: 'Consolas', monospace; color: #a6e22e; background: #111; padding: 5px 10px; border-radius: 4px; }
        .footer { margin-top: 50px; text-align: center; color: #666; font-size: 12px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="logo">
                <h1>The Architect's Console</h1>
                <p>Infrastructure Security Audit</p>
            </div>
            <div class="score-card">
                <span>System Health Score</span>
                <div class="score-circle">{{ score }}</div>
            </div>
        </div>

        <div class="metrics-grid">
            <div class="metric-box">
                <div class="metric-count critical-text">{{ stats.critical }}</div>
                <div>Critical</div>
            </div>
            <div class="metric-box">
                <div class="metric-count high-text">{{ stats.high }}</div>
                <div>High</div>
            </div>
            <div class="metric-box">
                <div class="metric-count medium-text">{{ stats.medium }}</div>
                <div>Medium</div>
            </div>
            <div class="metric-box">
                <div class="metric-count low-text">{{ stats.low }}</div>
                <div>Low</div>
            </div>
        </div>

        <table>
            <thead>
                <tr>
                    <th>Severity</th>
                    <th>Category</th>
                    <th>File Location</th>
                    <th>Issue Detected</th>
                    <th>Recommended Fix</th>
                </tr>
            </thead>
            <tbody>
{% for row in rows %}
                <tr>
                    <td><span class="badge {{ row.class }}">{{ row.severity }}</span></td>
                    <td>{{ row.category }}</td>
                    <td class="location">{{ row.location }}</td>
                    <td>{{ row.message }}</td>
                    <td class="fix-code">{{ row.suggestion }}</td>
                </tr>
{% endfor %}
            </tbody>
        </table>

        <div class="footer">
            Generated by DevOps Architect Console &bull; {{ generated_at }}
        </div>
    </div>
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct ReportRow {
    class: &'static str,
    severity: &'static str,
    category: &'static str,
    location: String,
    message: String,
    suggestion: String,
}

/// Render the report document for the current session.
pub fn render_html(session: &ScanSession, generated_at: &str) -> Result<String> {
    let stats = session.stats();
    let score = session.score();

    let rows: Vec<ReportRow> = session
        .sorted_issues()
        .into_iter()
        .map(|issue| ReportRow {
            class: badge_class(issue.severity.rank()),
            severity: issue.severity.as_str(),
            category: issue.category.as_str(),
            location: format!("{}:{}", session.relative_path(&issue.filepath), issue.line_num),
            message: issue.message.clone(),
            suggestion: issue.suggestion.clone(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("score", &score);
    context.insert("score_color", ScoreBand::of(score).color());
    context.insert("stats", &stats);
    context.insert("rows", &rows);
    context.insert("generated_at", generated_at);

    Ok(Tera::one_off(REPORT_TEMPLATE, &context, true)?)
}

fn badge_class(rank: u8) -> &'static str {
    match rank {
        0 => "critical",
        1 => "high",
        2 => "medium",
        _ => "low",
    }
}

/// Render the report and write it to `path`, replacing any previous file.
pub fn write_html_report(session: &ScanSession, path: &Path) -> Result<()> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = render_html(session, &generated_at)?;
    fs::write(path, html)?;
    log::info!("Wrote HTML report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_for(compose: &str) -> (tempfile::TempDir, ScanSession) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("docker-compose.yml"), compose).unwrap();
        let mut session = ScanSession::default();
        session.discover(dir.path());
        session.analyze();
        (dir, session)
    }

    #[test]
    fn test_report_contains_score_and_counts() {
        let (_dir, session) = session_for("services:\n  app:\n    privileged: true\n");
        let html = render_html(&session, "2026-01-01 00:00:00").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="score-circle">85</div>"#));
        assert!(html.contains(r#"<div class="metric-count critical-text">1</div>"#));
        assert!(html.contains(r#"<span class="badge critical">CRITICAL</span>"#));
        assert!(html.contains("docker-compose.yml:3"));
        assert!(html.contains("border-radius: 50%; background: #28a745;"));
        assert!(html.contains("2026-01-01 00:00:00"));
    }

    #[test]
    fn test_report_is_self_contained() {
        let (_dir, session) = session_for("services:\n");
        let html = render_html(&session, "now").unwrap();
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn test_report_escapes_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a&b")).unwrap();
        fs::write(dir.path().join("a&b/docker-compose.yml"), "privileged: true\n").unwrap();
        let mut session = ScanSession::default();
        session.discover(dir.path());
        session.analyze();
        let html = render_html(&session, "now").unwrap();
        assert!(html.contains("a&amp;b"));
        assert!(!html.contains("a&b"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let (dir, session) = session_for("services:\n");
        let out = dir.path().join("audit_report.html");
        fs::write(&out, "stale").unwrap();
        write_html_report(&session, &out).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("System Health Score"));
        assert!(!written.contains("stale"));
    }
}
