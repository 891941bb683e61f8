// Handler modules
pub mod analyze;
pub mod export;
pub mod fix;
pub mod menu;
pub mod scan;
pub mod topology;

// Re-export all handler functions
pub use analyze::{handle_analyze, run_analysis};
pub use export::{ExportOptions, export_report, handle_export};
pub use fix::{handle_fix, show_fix_preview};
pub use menu::handle_menu;
pub use scan::{handle_scan, run_scan};
pub use topology::{handle_topology, show_topology};

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a long step, hidden when info logging already reports progress.
pub(crate) fn spinner(message: &str) -> Option<ProgressBar> {
    if log::log_enabled!(log::Level::Info) {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}
