//! JSON view of a scan session

use crate::analyzer::session::ScanSession;
use crate::analyzer::summary::ScanStats;
use crate::analyzer::types::Issue;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonIssue<'a> {
    #[serde(flatten)]
    issue: &'a Issue,
    location: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    root: String,
    score: u32,
    stats: ScanStats,
    issues: Vec<JsonIssue<'a>>,
}

/// Severity-sorted issues with stats and score, as pretty JSON
pub fn display_json_view_to_string(session: &ScanSession) -> serde_json::Result<String> {
    let report = JsonReport {
        root: session.root_path().display().to_string(),
        score: session.score(),
        stats: session.stats(),
        issues: session
            .sorted_issues()
            .into_iter()
            .map(|issue| JsonIssue {
                location: format!("{}:{}", session.relative_path(&issue.filepath), issue.line_num),
                issue,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_view() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Dockerfile"), "FROM alpine\nRUN sudo ls\n").unwrap();
        let mut session = ScanSession::default();
        session.discover(dir.path());
        session.analyze();

        let json: serde_json::Value =
            serde_json::from_str(&display_json_view_to_string(&session).unwrap()).unwrap();
        assert_eq!(json["score"], 100 - 15 - 5);
        assert_eq!(json["stats"]["critical"], 1);
        assert_eq!(json["stats"]["files_scanned"], 1);
        let issues = json["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0]["severity"], "CRITICAL");
        assert_eq!(issues[0]["location"], "Dockerfile:2");
        assert_eq!(issues[0]["content"], "RUN sudo ls");
    }
}
