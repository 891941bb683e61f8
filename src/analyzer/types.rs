//! Core types for the scanner:
//! - `Severity` - how urgent a finding is
//! - `Category` - informational grouping of a finding
//! - `Issue` - a single finding produced by the rule engine
//! - `FileKind` - which rule table applies to a discovered file

use crate::error::ConfigError;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Severity levels for findings.
///
/// Ordered from most severe to least severe:
/// `Critical > High > Medium > Low > Info`
///
/// `Info` only reserves the last display rank; no rule emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Every severity in display order.
    pub const ALL: [Severity; 5] = [
        Self::Critical,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::Info,
    ];

    /// Parse a severity from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Get the string representation used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Info => "INFO",
        }
    }

    /// Display rank: 0 for the most severe.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Info => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::InvalidSeverity(s.to_string()))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower rank is more severe, so reverse for Critical > Info
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Category of a finding. Not used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Security,
    Performance,
    BestPractice,
    Reliability,
}

impl Category {
    /// Parse a category from a string (case-insensitive, `-` or `_`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "security" => Some(Self::Security),
            "performance" => Some(Self::Performance),
            "best_practice" => Some(Self::BestPractice),
            "reliability" => Some(Self::Reliability),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "SECURITY",
            Self::Performance => "PERFORMANCE",
            Self::BestPractice => "BEST_PRACTICE",
            Self::Reliability => "RELIABILITY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::InvalidCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Content recorded for file-level findings.
pub const GLOBAL_CONTENT: &str = "Global";

/// A single finding. Never mutated once the rule engine creates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub filepath: PathBuf,
    /// 1-indexed line number, or 0 for a file-level finding.
    pub line_num: usize,
    /// The trimmed line that matched, or `"Global"`.
    pub content: String,
    pub message: String,
    pub suggestion: String,
}

impl Issue {
    /// Create a line-level issue.
    pub fn new(
        severity: Severity,
        category: Category,
        filepath: impl Into<PathBuf>,
        line_num: usize,
        content: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            filepath: filepath.into(),
            line_num,
            content: content.into(),
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a file-level issue (line 0, content "Global").
    pub fn global(
        severity: Severity,
        category: Category,
        filepath: impl Into<PathBuf>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(
            severity,
            category,
            filepath,
            0,
            GLOBAL_CONTENT,
            message,
            suggestion,
        )
    }

    pub fn is_global(&self) -> bool {
        self.line_num == 0
    }

    /// Base name of the file, for compact titles.
    pub fn file_name(&self) -> String {
        file_name_of(&self.filepath)
    }
}

/// Base name of a path, or the whole path when it has none.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Which rule table a discovered file is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A container build file (`Dockerfile`, `*.Dockerfile`).
    BuildFile,
    /// A multi-service orchestration file (`docker-compose.yml`/`.yaml`).
    ComposeFile,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BuildFile => "DOCKER",
            Self::ComposeFile => "COMPOSE",
        }
    }
}
