//! Naive service map for Compose files.
//!
//! This does not parse YAML. A trimmed line is taken as a service candidate
//! when it holds exactly one `:`, is not a list item, and names none of the
//! well-known service attributes.

use crate::analyzer::lint::read_lines;
use std::path::{Path, PathBuf};

const ATTRIBUTE_KEYS: [&str; 5] = ["image", "build", "ports", "volumes", "environment"];

/// Candidate services found in one compose file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMap {
    pub path: PathBuf,
    pub services: Vec<String>,
}

/// Whether a trimmed line looks like a service key, returning its name.
pub fn service_name(line: &str) -> Option<String> {
    let line = line.trim();
    if !line.contains(':') || line.split(':').count() != 2 {
        return None;
    }
    if line.starts_with('-') || line.contains("version") {
        return None;
    }
    if ATTRIBUTE_KEYS.iter().any(|key| line.contains(key)) {
        return None;
    }
    Some(line.replace(':', ""))
}

/// Build the service map for a compose file. Unreadable files map to no services.
pub fn map_services(path: &Path) -> ServiceMap {
    let services = read_lines(path)
        .map(|lines| lines.iter().filter_map(|l| service_name(l)).collect())
        .unwrap_or_default();
    ServiceMap {
        path: path.to_path_buf(),
        services,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name() {
        assert_eq!(service_name("  web:"), Some("web".to_string()));
        assert_eq!(service_name("services:"), Some("services".to_string()));
        assert_eq!(service_name("image: nginx"), None);
        assert_eq!(service_name("version: '3.8'"), None);
        assert_eq!(service_name("- \"80:80\""), None);
        assert_eq!(service_name("ports:"), None);
        assert_eq!(service_name("no colon here"), None);
        // more than one colon
        assert_eq!(service_name("image: nginx:latest"), None);
    }

    #[test]
    fn test_map_services() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docker-compose.yml");
        std::fs::write(
            &path,
            "version: '3'\nservices:\n  web:\n    image: nginx:1.25\n    ports:\n      - \"80:80\"\n  db:\n    image: postgres\n",
        )
        .unwrap();
        let map = map_services(&path);
        assert_eq!(map.services, vec!["services", "web", "db"]);
    }

    #[test]
    fn test_unreadable_file_has_no_services() {
        let map = map_services(Path::new("/no/such/docker-compose.yml"));
        assert!(map.services.is_empty());
    }
}
