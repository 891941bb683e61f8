use crate::analyzer::display::render_topology;
use crate::analyzer::session::ScanSession;
use crate::analyzer::topology::{ServiceMap, map_services};
use crate::config::ScanConfig;
use colored::*;
use std::path::Path;

/// Print the candidate service map of every discovered compose file.
pub fn show_topology(session: &ScanSession) -> Vec<ServiceMap> {
    println!("{}", "INFRASTRUCTURE TOPOLOGY MAP".bright_cyan().bold());

    if session.compose_files().is_empty() {
        println!("{}", "No compose files found. Cannot map topology.".dimmed());
        return Vec::new();
    }

    let maps: Vec<ServiceMap> = session
        .compose_files()
        .iter()
        .map(|path| map_services(path))
        .collect();
    println!("{}", render_topology(&maps));
    maps
}

pub fn handle_topology(path: &Path, config: ScanConfig) -> crate::Result<()> {
    let mut session = ScanSession::new(config);
    session.discover(path);
    show_topology(&session);
    Ok(())
}
