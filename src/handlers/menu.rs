//! Interactive console.
//!
//! One session lives for the whole loop and every action works on it, so an
//! analysis sees the files of the last Spider Scan and an export sees the
//! last analysis.

use super::analyze::run_analysis;
use super::export::{ExportOptions, export_report};
use super::fix::show_fix_preview;
use super::scan::run_scan;
use super::topology::show_topology;
use crate::analyzer::session::ScanSession;
use crate::config::ScanConfig;
use colored::*;
use inquire::ui::{Color, IndexPrefix, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SpiderScan,
    DeepAnalysis,
    TopologyMapper,
    AutoFixPreview,
    ExportReport,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::SpiderScan,
        MenuAction::DeepAnalysis,
        MenuAction::TopologyMapper,
        MenuAction::AutoFixPreview,
        MenuAction::ExportReport,
        MenuAction::Exit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::SpiderScan => "Spider Scan         Recursive file discovery",
            MenuAction::DeepAnalysis => "Deep Analysis       Security, performance and best-practice rules",
            MenuAction::TopologyMapper => "Topology Mapper     Visualize Compose services",
            MenuAction::AutoFixPreview => "Auto-Fix Preview    Before/after fixes",
            MenuAction::ExportReport => "Export Report       HTML dashboard",
            MenuAction::Exit => "Exit",
        };
        f.write_str(label)
    }
}

fn menu_render_config() -> RenderConfig<'static> {
    RenderConfig::default()
        .with_highlighted_option_prefix(Styled::new("▸ ").with_fg(Color::LightCyan))
        .with_option_index_prefix(IndexPrefix::Simple)
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightCyan)))
}

fn print_banner() {
    println!();
    println!("{}", "DOCKER DETECTIVE".bright_cyan().bold());
    println!("{}", format!("Infrastructure Security Audit v{}", crate::VERSION).dimmed());
    println!("{}", "-".repeat(60).blue().dimmed());
}

/// Ask for the scan root. `None` when the prompt was cancelled.
fn prompt_scan_path() -> crate::Result<Option<PathBuf>> {
    match Text::new("Enter target directory:")
        .with_default(".")
        .with_render_config(menu_render_config())
        .prompt()
    {
        Ok(path) => Ok(Some(PathBuf::from(path.trim()))),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn handle_menu(config: ScanConfig, export: ExportOptions) -> crate::Result<()> {
    let mut session = ScanSession::new(config);

    loop {
        print_banner();
        let selection = Select::new("Main Operations", MenuAction::ALL.to_vec())
            .with_render_config(menu_render_config())
            .with_page_size(MenuAction::ALL.len())
            .prompt();

        let action = match selection {
            Ok(action) => action,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                println!("\n{}", "Force Quit Detected.".red().bold());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match action {
            MenuAction::SpiderScan => {
                if let Some(path) = prompt_scan_path()? {
                    run_scan(&mut session, &path);
                }
            }
            MenuAction::DeepAnalysis => {
                run_analysis(&mut session);
            }
            MenuAction::TopologyMapper => {
                show_topology(&session);
            }
            MenuAction::AutoFixPreview => show_fix_preview(&session),
            MenuAction::ExportReport => {
                export_report(&session, &export)?;
            }
            MenuAction::Exit => {
                println!("{}", "Exiting... Stay Secure.".red().bold());
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_action_once() {
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(labels.len(), 6);
        assert!(labels[0].starts_with("Spider Scan"));
        assert_eq!(labels.last().map(String::as_str), Some("Exit"));
    }
}
