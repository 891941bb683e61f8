use crate::analyzer::display::{display_json_view_to_string, render_analysis};
use crate::analyzer::session::ScanSession;
use crate::analyzer::types::Severity;
use crate::cli::{OutputFormat, SeverityThreshold};
use crate::config::ScanConfig;
use colored::*;
use std::path::Path;

const NO_FILES_MESSAGE: &str = "No files loaded! Run the Spider Scan first.";

fn nothing_found_message(path: &Path) -> String {
    format!("No Dockerfiles or Compose files found under {}.", path.display())
}

/// Analyze the discovered files and print the table view.
///
/// Returns `false` when there was nothing to analyze.
pub fn run_analysis(session: &mut ScanSession) -> bool {
    if !session.has_files() {
        println!("{}", NO_FILES_MESSAGE.red().bold());
        return false;
    }

    analyze_quietly(session, true);
    println!("{}", render_analysis(session));
    true
}

fn analyze_quietly(session: &mut ScanSession, show_progress: bool) {
    let pb = if show_progress {
        super::spinner("Applying security rules...")
    } else {
        None
    };
    session.analyze();
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Scan and analyze `path`.
///
/// Returns whether an issue at or above `fail_on` was found.
pub fn handle_analyze(
    path: &Path,
    format: OutputFormat,
    fail_on: Option<SeverityThreshold>,
    config: ScanConfig,
) -> crate::Result<bool> {
    let mut session = ScanSession::new(config);
    session.discover(path);

    match format {
        OutputFormat::Table if !session.has_files() => {
            println!("{}", nothing_found_message(path).red().bold());
        }
        OutputFormat::Table => {
            run_analysis(&mut session);
        }
        OutputFormat::Json => {
            analyze_quietly(&mut session, false);
            println!("{}", display_json_view_to_string(&session)?);
        }
    }

    Ok(fail_on
        .map(Severity::from)
        .is_some_and(|threshold| exceeds_threshold(&session, threshold)))
}

fn exceeds_threshold(session: &ScanSession, threshold: Severity) -> bool {
    session.issues().iter().any(|issue| issue.severity >= threshold)
}
