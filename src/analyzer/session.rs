//! Scan session state.
//!
//! A session is created by the caller and passed to every operation; there
//! is no process-wide scanner. `discover` resets the whole session, and
//! `analyze` replaces the issue list with a fresh pass over the discovered
//! files.

use crate::analyzer::discovery::{Discovery, discover};
use crate::analyzer::lint::{FileReport, lint_file};
use crate::analyzer::summary::{ScanStats, score, sort_by_severity};
use crate::analyzer::types::{Issue, file_name_of};
use crate::config::ScanConfig;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ScanSession {
    config: ScanConfig,
    root_path: PathBuf,
    discovery: Discovery,
    issues: Vec<Issue>,
    files_scanned: usize,
}

impl ScanSession {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            root_path: PathBuf::from("."),
            discovery: Discovery::default(),
            issues: Vec::new(),
            files_scanned: 0,
        }
    }

    /// Drop all scan state; the root path and config are kept.
    pub fn reset(&mut self) {
        self.discovery = Discovery::default();
        self.issues.clear();
        self.files_scanned = 0;
    }

    /// Reset the session and discover files under `root`.
    pub fn discover(&mut self, root: impl AsRef<Path>) -> &Discovery {
        self.root_path = root.as_ref().to_path_buf();
        self.reset();
        self.discovery = discover(&self.root_path, &self.config);
        &self.discovery
    }

    /// Evaluate every discovered file, replacing any previous results.
    ///
    /// Files are linted in parallel; reports are collected in discovery
    /// order so the issue list is deterministic.
    pub fn analyze(&mut self) -> ScanStats {
        let files: Vec<(&Path, _)> = self.discovery.files().collect();
        let reports: Vec<Option<FileReport>> = files
            .par_iter()
            .map(|(path, kind)| lint_file(path, *kind))
            .collect();

        self.issues.clear();
        self.files_scanned = 0;
        for report in reports.into_iter().flatten() {
            self.files_scanned += 1;
            self.issues.extend(report.issues);
        }

        log::info!(
            "Analyzed {} file(s), {} issue(s)",
            self.files_scanned,
            self.issues.len()
        );
        self.stats()
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    pub fn build_files(&self) -> &[PathBuf] {
        &self.discovery.build_files
    }

    pub fn compose_files(&self) -> &[PathBuf] {
        &self.discovery.compose_files
    }

    pub fn warnings(&self) -> &[String] {
        &self.discovery.warnings
    }

    /// Issues in discovery order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issues sorted by severity, discovery order kept within a severity.
    pub fn sorted_issues(&self) -> Vec<&Issue> {
        sort_by_severity(&self.issues)
    }

    /// Issues that point at a concrete line.
    pub fn fixable_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.is_global())
    }

    pub fn stats(&self) -> ScanStats {
        ScanStats::from_issues(&self.issues, self.files_scanned)
    }

    pub fn score(&self) -> u32 {
        score(&self.stats())
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn has_files(&self) -> bool {
        !self.discovery.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Path relative to the scan root, or the base name if it is not under it.
    pub fn relative_path(&self, path: &Path) -> String {
        relative_to(path, &self.root_path)
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// Path of `path` relative to `root` with forward slashes, falling back to
/// the base name.
pub fn relative_to(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => {
            relative.to_string_lossy().replace('\\', "/")
        }
        _ => file_name_of(path),
    }
}
