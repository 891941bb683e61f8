use crate::analyzer::display::render_discovery;
use crate::analyzer::session::ScanSession;
use crate::config::ScanConfig;
use colored::*;
use std::path::Path;

/// Discover files under `path` into the session and print the tree.
pub fn run_scan(session: &mut ScanSession, path: &Path) {
    println!("{} {}", "Scanning:".bold(), path.display());

    let pb = super::spinner("Crawling directory tree...");
    session.discover(path);
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    for warning in session.warnings() {
        println!("{}", format!("Warning: {}", warning).yellow());
    }
    println!("{}", render_discovery(session));
}

pub fn handle_scan(path: &Path, config: ScanConfig) -> crate::Result<()> {
    let mut session = ScanSession::new(config);
    run_scan(&mut session, path);
    Ok(())
}
