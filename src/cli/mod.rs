//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Print the banner to stderr before a generation run.
pub fn print_banner() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        "warpgen".bold(),
        "· requesting a free WARP credential...".dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
