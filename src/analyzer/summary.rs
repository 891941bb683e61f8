//! Aggregation of findings into severity counts and a health score.

use crate::analyzer::types::{Issue, Severity};
use serde::Serialize;

/// Per-severity counts for a scan session.
///
/// Always built from the issue list so the counts cannot drift from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub files_scanned: usize,
}

impl ScanStats {
    pub fn from_issues(issues: &[Issue], files_scanned: usize) -> Self {
        let mut stats = Self {
            files_scanned,
            ..Self::default()
        };
        for issue in issues {
            match issue.severity {
                Severity::Critical => stats.critical += 1,
                Severity::High => stats.high += 1,
                Severity::Medium => stats.medium += 1,
                Severity::Low => stats.low += 1,
                Severity::Info => {}
            }
        }
        stats
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

const CRITICAL_WEIGHT: u64 = 15;
const HIGH_WEIGHT: u64 = 5;
const MEDIUM_WEIGHT: u64 = 2;

/// Health score in `0..=100`: `100 - 15*critical - 5*high - 2*medium`,
/// floored at 0. Low findings carry no weight.
pub fn score(stats: &ScanStats) -> u32 {
    let penalty = (stats.critical as u64)
        .saturating_mul(CRITICAL_WEIGHT)
        .saturating_add((stats.high as u64).saturating_mul(HIGH_WEIGHT))
        .saturating_add((stats.medium as u64).saturating_mul(MEDIUM_WEIGHT));
    100u64.saturating_sub(penalty) as u32
}

/// Colour band of a score, as used by the HTML report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        if score > 80 {
            Self::Good
        } else if score > 50 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#28a745",
            Self::Fair => "#ffc107",
            Self::Poor => "#dc3545",
        }
    }
}

/// Stable sort by severity rank; discovery order is kept within a rank.
pub fn sort_by_severity<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Vec<&'a Issue> {
    let mut sorted: Vec<&Issue> = issues.into_iter().collect();
    sorted.sort_by_key(|issue| issue.severity.rank());
    sorted
}
