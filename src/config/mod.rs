pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, ReportConfig, ScanConfig};

const CONFIG_FILE_NAME: &str = ".docker-detective.toml";

/// Get the global config file path (~/.docker-detective.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (project/.docker-detective.toml)
pub fn local_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Load configuration.
///
/// An explicit `--config` file must exist and parse. Otherwise the local
/// config in the scan root is tried first, then the global one; a file that
/// fails to parse is logged and skipped.
pub fn load_config(explicit: Option<&Path>, project_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)?;
        return Ok(parse_config(&content)?);
    }

    let candidates = project_path
        .map(local_config_path)
        .into_iter()
        .chain(global_config_path());

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match fs::read_to_string(&candidate) {
            Ok(content) => match parse_config(&content) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", candidate.display());
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring {}: {}", candidate.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", candidate.display(), e),
        }
    }

    Ok(Config::default())
}

/// Parse a TOML configuration string.
pub fn parse_config(content: &str) -> std::result::Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.scan.ignore_dirs,
            vec![".git", "node_modules", "venv", "__pycache__"]
        );
        assert!(!config.scan.follow_links);
        assert_eq!(config.report.output_file, PathBuf::from("audit_report.html"));
        assert!(config.report.open_browser);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[report]\nopen_browser = false\n").unwrap();
        assert!(!config.report.open_browser);
        assert_eq!(config.report.output_file, PathBuf::from("audit_report.html"));
        assert_eq!(config.scan, ScanConfig::default());
    }

    #[test]
    fn test_ignore_dirs_override() {
        let config = parse_config("[scan]\nignore_dirs = [\"vendor\"]\n").unwrap();
        assert_eq!(config.scan.ignore_dirs, vec!["vendor"]);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(matches!(
            parse_config("[scan\nignore_dirs = 3"),
            Err(ConfigError::ParsingFailed(_))
        ));
    }

    #[test]
    fn test_local_config_is_preferred() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            local_config_path(dir.path()),
            "[report]\noutput_file = \"out.html\"\n",
        )
        .unwrap();
        let config = load_config(None, Some(dir.path())).unwrap();
        assert_eq!(config.report.output_file, PathBuf::from("out.html"));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing), None).is_err());
    }
}
