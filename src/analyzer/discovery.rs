//! # Discovery
//!
//! Recursively walks a root directory and classifies Docker infrastructure
//! files:
//! - build files: `Dockerfile` or any name ending in `.Dockerfile`
//! - compose files: `docker-compose.yml` or `docker-compose.yaml`
//!
//! Subtrees whose directory name is in the ignore set are never entered.
//! Inaccessible entries are skipped and reported as warnings.

use crate::analyzer::types::FileKind;
use crate::config::ScanConfig;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const BUILD_FILE_NAME: &str = "Dockerfile";
const BUILD_FILE_SUFFIX: &str = ".Dockerfile";
const COMPOSE_FILE_NAMES: [&str; 2] = ["docker-compose.yml", "docker-compose.yaml"];

/// Files found under a root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub build_files: Vec<PathBuf>,
    pub compose_files: Vec<PathBuf>,
    /// Non-fatal problems met while walking (e.g. permission denied).
    pub warnings: Vec<String>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.build_files.is_empty() && self.compose_files.is_empty()
    }

    pub fn total(&self) -> usize {
        self.build_files.len() + self.compose_files.len()
    }

    /// All files with their kind: build files first, then compose files.
    pub fn files(&self) -> impl Iterator<Item = (&Path, FileKind)> {
        self.build_files
            .iter()
            .map(|p| (p.as_path(), FileKind::BuildFile))
            .chain(
                self.compose_files
                    .iter()
                    .map(|p| (p.as_path(), FileKind::ComposeFile)),
            )
    }
}

/// Classify a file name.
pub fn classify(file_name: &str) -> Option<FileKind> {
    if file_name == BUILD_FILE_NAME || file_name.ends_with(BUILD_FILE_SUFFIX) {
        Some(FileKind::BuildFile)
    } else if COMPOSE_FILE_NAMES.contains(&file_name) {
        Some(FileKind::ComposeFile)
    } else {
        None
    }
}

fn is_ignored(entry: &DirEntry, ignore_dirs: &[String]) -> bool {
    // The root itself is always walked, whatever its name
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore_dirs.iter().any(|d| d == name))
}

/// Walk `root` and collect build and compose files in sorted walk order.
pub fn discover(root: &Path, config: &ScanConfig) -> Discovery {
    let mut discovery = Discovery::default();

    let walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored(e, &config.ignore_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let location = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                let warning = format!("Could not access {}: {}", location, err);
                log::warn!("{}", warning);
                discovery.warnings.push(warning);
                continue;
            }
        };

        // Symlinked files are scanned; symlinked directories are only
        // entered when `follow_links` is set.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let Some(kind) = entry.file_name().to_str().and_then(classify) else {
            continue;
        };

        log::debug!("Discovered {:?}: {}", kind, entry.path().display());
        match kind {
            FileKind::BuildFile => discovery.build_files.push(entry.into_path()),
            FileKind::ComposeFile => discovery.compose_files.push(entry.into_path()),
        }
    }

    log::info!(
        "Discovered {} Dockerfile(s) and {} Compose file(s) under {}",
        discovery.build_files.len(),
        discovery.compose_files.len(),
        root.display()
    );

    discovery
}
