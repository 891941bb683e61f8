//! # Docker Detective
//!
//! A command-line auditor for container build files (Dockerfiles) and
//! orchestration files (Docker Compose). It walks a directory tree, applies
//! a fixed set of heuristic rules line by line, and reports findings with a
//! 0-100 health score.
//!
//! ## Features
//!
//! - **Discovery**: recursive traversal with configurable ignored directories
//! - **Rule Engine**: line-level and file-level heuristics for both file kinds
//! - **Scoring**: per-severity counts folded into a single health number
//! - **Reports**: issue table, fix preview, topology map, JSON and HTML output
//!
//! ## Example
//!
//! ```rust,no_run
//! use docker_detective::analyzer::ScanSession;
//!
//! let mut session = ScanSession::default();
//! session.discover("./infra");
//! let stats = session.analyze();
//! println!("{} critical, score {}", stats.critical, session.score());
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::{Issue, ScanSession, ScanStats, Severity};
pub use error::{DetectiveError, Result};
use cli::Commands;
use config::Config;
use handlers::ExportOptions;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one command. Returns the process exit code.
pub fn run_command(command: Option<Commands>, config: Config) -> Result<i32> {
    let Config { scan, report } = config;

    match command {
        Some(Commands::Scan { path }) => handlers::handle_scan(&path, scan).map(|_| 0),
        Some(Commands::Analyze { path, format, fail_on }) => {
            let failed = handlers::handle_analyze(&path, format, fail_on, scan)?;
            Ok(if failed { 1 } else { 0 })
        }
        Some(Commands::Fix { path }) => handlers::handle_fix(&path, scan).map(|_| 0),
        Some(Commands::Topology { path }) => handlers::handle_topology(&path, scan).map(|_| 0),
        Some(Commands::Export { path, output, no_open }) => {
            let options = ExportOptions::from_config(&report, output, no_open);
            handlers::handle_export(&path, scan, options).map(|_| 0)
        }
        Some(Commands::Menu) | None => {
            let options = ExportOptions::from_config(&report, None, false);
            handlers::handle_menu(scan, options).map(|_| 0)
        }
    }
}
