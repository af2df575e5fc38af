//! Output of the audit.
//!
//! - [`json`] - The report document on stdout
//! - [`terminal`] - Progress lines on stderr

mod json;
mod terminal;

pub use json::write_report;
pub use terminal::{print_banner, print_count, print_done, print_step, print_usage};
