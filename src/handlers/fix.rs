use crate::analyzer::display::render_fix_preview;
use crate::analyzer::session::ScanSession;
use crate::config::ScanConfig;
use colored::*;
use std::path::Path;

/// Print a before/after panel for each line-level issue. Nothing is written to disk.
pub fn show_fix_preview(session: &ScanSession) {
    println!("{}", "AUTO-FIX PREVIEW".bright_yellow().bold());

    if session.fixable_issues().next().is_none() {
        println!("{}", "No issues to fix. Run analysis first.".dimmed());
        return;
    }
    println!("{}", render_fix_preview(session.fixable_issues()));
}

pub fn handle_fix(path: &Path, config: ScanConfig) -> crate::Result<()> {
    let mut session = ScanSession::new(config);
    session.discover(path);
    session.analyze();
    show_fix_preview(&session);
    Ok(())
}
