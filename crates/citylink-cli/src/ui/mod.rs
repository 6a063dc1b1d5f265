//! Terminal output: report tables on stdout, status messages on stderr.
//!
//! Tables and route reports are plain text so they can be piped or diffed.
//! Status messages (`Saving ...`, strategy fallbacks) go to stderr and are
//! colored only when the terminal supports it.
//!
//! # Examples
//!
//! ```no_run
//! use citylink_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Saving out-cities.txt...");
//! ui::warning("Greedy walk stalled; retrying with the shortest strategy");
//! ```

mod format;
mod messages;

pub use format::{ClosureSummary, JsonReport, closure_table, neighbor_table, route_report};
pub use messages::{info, warning};

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether status messages are colored.
///
/// `--no-color` wins, then `NO_COLOR` / `FORCE_COLOR`, then terminal detection.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    COLORS.store(enabled, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
