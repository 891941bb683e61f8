use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

/// File discovery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names whose subtrees are never entered.
    pub ignore_dirs: Vec<String>,
    /// Follow symbolic links while walking.
    pub follow_links: bool,
}

/// HTML export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report file, overwritten on every export.
    pub output_file: PathBuf,
    /// Open the report in the default browser after writing it.
    pub open_browser: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: vec![
                ".git".to_string(),
                "node_modules".to_string(),
                "venv".to_string(),
                "__pycache__".to_string(),
            ],
            follow_links: false,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("audit_report.html"),
            open_browser: true,
        }
    }
}
