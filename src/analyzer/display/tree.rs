//! Reconnaissance tree of discovered files and the compose service map.

use crate::analyzer::session::ScanSession;
use crate::analyzer::topology::ServiceMap;
use crate::analyzer::types::{FileKind, file_name_of};
use colored::*;
use std::path::Path;

fn branch(last: bool) -> &'static str {
    if last { "└──" } else { "├──" }
}

fn root_label(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    file_name_of(&resolved)
}

/// Tree of discovered files under the session root.
pub fn render_discovery(session: &ScanSession) -> String {
    let mut out = format!("{}\n", root_label(session.root_path()).bold());
    let files: Vec<_> = session.discovery().files().collect();
    for (i, (path, kind)) in files.iter().enumerate() {
        let rel = session.relative_path(path);
        let label = match kind {
            FileKind::BuildFile => format!("[{}] {}", kind.label(), rel.cyan()),
            FileKind::ComposeFile => format!("[{}] {}", kind.label(), rel.magenta()),
        };
        out.push_str(&format!("{} {}\n", branch(i + 1 == files.len()), label));
    }
    out.push_str(&format!(
        "\n{}\n",
        format!(
            "Found {} Dockerfiles and {} Compose files.",
            session.build_files().len(),
            session.compose_files().len()
        )
        .green()
        .bold()
    ));
    out
}

/// One tree per compose file listing candidate services.
pub fn render_topology(maps: &[ServiceMap]) -> String {
    let mut out = String::new();
    for map in maps {
        out.push_str(&format!("[COMPOSE] {}\n", file_name_of(&map.path).magenta().bold()));
        for (i, service) in map.services.iter().enumerate() {
            out.push_str(&format!(
                "{} [SVC] {}\n",
                branch(i + 1 == map.services.len()),
                service.green().bold()
            ));
        }
        out.push('\n');
    }
    out
}
