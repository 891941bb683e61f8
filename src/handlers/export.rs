use crate::analyzer::display::write_html_report;
use crate::analyzer::session::ScanSession;
use crate::config::{ReportConfig, ScanConfig};
use colored::*;
use std::path::{Path, PathBuf};

/// Where the report goes and whether to open it afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub output_file: PathBuf,
    pub open_browser: bool,
}

impl ExportOptions {
    /// Report settings from config, with command-line overrides applied
    pub fn from_config(report: &ReportConfig, output: Option<PathBuf>, no_open: bool) -> Self {
        Self {
            output_file: output.unwrap_or_else(|| report.output_file.clone()),
            open_browser: report.open_browser && !no_open,
        }
    }
}

/// Write the HTML report for the session.
///
/// Returns the written path, or `None` when the session holds no data.
pub fn export_report(session: &ScanSession, options: &ExportOptions) -> crate::Result<Option<PathBuf>> {
    if !session.has_issues() && session.files_scanned() == 0 {
        println!("{}", "No data to export. Run a scan first.".red());
        return Ok(None);
    }

    println!("{}", "Generating HTML Report...".bright_yellow().bold());
    write_html_report(session, &options.output_file)?;
    println!(
        "{}",
        format!("Report exported successfully: {}", options.output_file.display())
            .green()
            .bold()
    );

    if options.open_browser {
        if let Err(e) = open::that(&options.output_file) {
            log::warn!("Could not open browser automatically: {}", e);
            println!("Open {} manually to view the report.", options.output_file.display());
        }
    }

    Ok(Some(options.output_file.clone()))
}

pub fn handle_export(path: &Path, config: ScanConfig, options: ExportOptions) -> crate::Result<()> {
    let mut session = ScanSession::new(config);
    session.discover(path);
    session.analyze();
    export_report(&session, &options)?;
    Ok(())
}
