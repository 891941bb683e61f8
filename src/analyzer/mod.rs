//! # Analyzer Module
//!
//! Scanning of container build files and orchestration files:
//! - `discovery` walks the tree and classifies files
//! - `rules` holds the line-level and file-level heuristics
//! - `lint` applies the rules to one file
//! - `summary` folds issues into counts and a health score
//! - `session` owns the state of one scan
//! - `topology` maps candidate services in compose files
//! - `display` renders the results

pub mod discovery;
pub mod display;
pub mod lint;
pub mod rules;
pub mod session;
pub mod summary;
pub mod topology;
pub mod types;

pub use discovery::{Discovery, classify, discover};
pub use lint::{BuildFileEvaluation, FileReport, evaluate_build_file, evaluate_compose_file, lint_file};
pub use session::ScanSession;
pub use summary::{ScanStats, ScoreBand, score, sort_by_severity};
pub use topology::{ServiceMap, map_services};
pub use types::{Category, FileKind, Issue, Severity};
