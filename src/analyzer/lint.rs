//! Line-by-line evaluation of Dockerfiles and Compose files.
//!
//! This module ties the rule tables to file contents. Evaluation is pure:
//! it takes lines and returns issues. Reading a file that cannot be opened
//! or decoded yields `None`, and the caller skips it silently.

use crate::analyzer::rules::{FileRuleState, LineContext, compose, dockerfile};
use crate::analyzer::types::{FileKind, Issue};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of evaluating a Dockerfile.
#[derive(Debug, Clone, Default)]
pub struct BuildFileEvaluation {
    /// Line issues in line order, followed by file-level issues.
    pub issues: Vec<Issue>,
    /// A `USER` instruction was seen somewhere in the file.
    pub saw_privilege_drop: bool,
    /// A `HEALTHCHECK` instruction was seen somewhere in the file.
    pub saw_healthcheck: bool,
}

/// Issues produced for one successfully read file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: FileKind,
    pub issues: Vec<Issue>,
}

/// Evaluate the lines of a Dockerfile.
pub fn evaluate_build_file(path: &Path, lines: &[String]) -> BuildFileEvaluation {
    let mut issues = Vec::new();
    let mut presence = FileRuleState::new(dockerfile::FILE_RULES);

    for index in 0..lines.len() {
        let Some(ctx) = LineContext::at(lines, index) else {
            continue;
        };
        presence.observe(dockerfile::FILE_RULES, &ctx);
        issues.extend(
            dockerfile::LINE_RULES
                .iter()
                .filter_map(|rule| rule.check(path, &ctx)),
        );
    }

    issues.extend(presence.finalize(dockerfile::FILE_RULES, path));

    BuildFileEvaluation {
        issues,
        saw_privilege_drop: presence.seen(dockerfile::PRIVILEGE_DROP),
        saw_healthcheck: presence.seen(dockerfile::HEALTHCHECK),
    }
}

/// Evaluate the lines of a Docker Compose file.
pub fn evaluate_compose_file(path: &Path, lines: &[String]) -> Vec<Issue> {
    (0..lines.len())
        .filter_map(|index| LineContext::at(lines, index))
        .flat_map(|ctx| {
            compose::LINE_RULES
                .iter()
                .filter_map(|rule| rule.check(path, &ctx))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Read a whole file as UTF-8 lines. The handle is closed before returning.
pub fn read_lines(path: &Path) -> Option<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content.lines().map(str::to_string).collect()),
        Err(err) => {
            log::debug!("Skipping unreadable file {}: {}", path.display(), err);
            None
        }
    }
}

/// Read and lint a Dockerfile; `None` if it could not be read.
pub fn lint_build_file(path: &Path) -> Option<FileReport> {
    let lines = read_lines(path)?;
    let evaluation = evaluate_build_file(path, &lines);
    log::debug!(
        "{}: {} issue(s), USER={}, HEALTHCHECK={}",
        path.display(),
        evaluation.issues.len(),
        evaluation.saw_privilege_drop,
        evaluation.saw_healthcheck
    );
    Some(FileReport {
        path: path.to_path_buf(),
        kind: FileKind::BuildFile,
        issues: evaluation.issues,
    })
}

/// Read and lint a Compose file; `None` if it could not be read.
pub fn lint_compose_file(path: &Path) -> Option<FileReport> {
    let lines = read_lines(path)?;
    let issues = evaluate_compose_file(path, &lines);
    log::debug!("{}: {} issue(s)", path.display(), issues.len());
    Some(FileReport {
        path: path.to_path_buf(),
        kind: FileKind::ComposeFile,
        issues,
    })
}

/// Lint a file with the rule table for its kind.
pub fn lint_file(path: &Path, kind: FileKind) -> Option<FileReport> {
    match kind {
        FileKind::BuildFile => lint_build_file(path),
        FileKind::ComposeFile => lint_compose_file(path),
    }
}
