//! # Display Module
//!
//! Presentation of scan results: the severity-sorted table, the discovery
//! and topology trees, the fix preview, JSON output and the HTML report.

mod box_drawer;
mod diff;
mod html;
mod json_view;
mod table;
mod tree;
mod utils;

pub use box_drawer::BoxDrawer;
pub use diff::{render_fix, render_fix_preview};
pub use html::{render_html, write_html_report};
pub use json_view::display_json_view_to_string;
pub use table::{issue_table, render_analysis, stats_panel};
pub use tree::{render_discovery, render_topology};
pub use utils::{terminal_width, truncate_to_width, visual_width};
