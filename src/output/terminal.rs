//! Progress output on stderr.
//!
//! stdout carries only the report, so everything here uses `eprintln!`.

use colored::Colorize;
use std::fmt::Display;

pub fn print_banner(project_id: &str, audit_time: &str) {
    eprintln!("🔍 {}", "Semantic Layer Infrastructure Audit".bold());
    eprintln!("   Project: {project_id}");
    eprintln!("   Time: {audit_time}");
    eprintln!();
}

pub fn print_step(icon: &str, message: &str) {
    eprintln!("{icon} {message}");
}

/// `   Found 3 datasets`
pub fn print_count(count: usize, what: &str) {
    eprintln!("   Found {count} {what}");
}

pub fn print_done() {
    eprintln!("\n✅ {}", "Audit complete".green());
}

pub fn print_usage(error: &impl Display) {
    eprintln!("{}", error.to_string().red());
    eprintln!(
        "Usage: export {var}='your-project-id' && {bin} > audit-results.json",
        var = crate::config::PROJECT_ENV_VAR,
        bin = env!("CARGO_PKG_NAME")
    );
}
