use crate::analyzer::types::Severity;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docker-detective")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Audit Dockerfiles and Compose files for security and best-practice issues")]
#[command(long_about = "Scans a directory tree for Dockerfiles and Docker Compose files, applies a fixed set of heuristic security, performance and best-practice rules, and reports the findings with a 0-100 health score. Run without a subcommand for the interactive console.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover Dockerfiles and Compose files and show them as a tree
    Scan {
        /// Directory to scan
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Scan and analyze, printing the issue table and health score
    Analyze {
        /// Directory to scan
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Exit with status 1 when an issue at or above this severity exists
        #[arg(long, value_enum, value_name = "SEVERITY")]
        fail_on: Option<SeverityThreshold>,
    },

    /// Scan and analyze, then preview a fix for every line-level issue
    Fix {
        /// Directory to scan
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Map candidate services in every Compose file
    Topology {
        /// Directory to scan
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Scan and analyze, then write the HTML audit report
    Export {
        /// Directory to scan
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,

        /// Report file (overrides the configured output file)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not open the report in a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Start the interactive console
    Menu,
}

impl Commands {
    /// Scan root named by the command, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Commands::Scan { path }
            | Commands::Analyze { path, .. }
            | Commands::Fix { path }
            | Commands::Topology { path }
            | Commands::Export { path, .. } => Some(path.as_path()),
            Commands::Menu => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityThreshold {
    Low,
    Medium,
    High,
    Critical,
}

impl From<SeverityThreshold> for Severity {
    fn from(threshold: SeverityThreshold) -> Self {
        match threshold {
            SeverityThreshold::Low => Severity::Low,
            SeverityThreshold::Medium => Severity::Medium,
            SeverityThreshold::High => Severity::High,
            SeverityThreshold::Critical => Severity::Critical,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
