use crate::rewriter::FileOutcome;
use colored::Colorize;
use std::io::Write;

/// Print the dry-run banner shown before any report lines.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_dry_run_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}",
        "[DRY-RUN] Story files that would be rewritten:".yellow()
    )
}

/// Print the report line for one file.
///
/// The line is written uncolored so it stays byte-exact when piped.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_outcome(writer: &mut impl Write, outcome: &FileOutcome) -> std::io::Result<()> {
    writeln!(writer, "{outcome}")
}

/// Print a fatal error on stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "Error:".red().bold());
}

/// Print a `[VERBOSE]` diagnostic on stderr.
pub fn print_verbose(message: &str) {
    eprintln!("{} {message}", "[VERBOSE]".dimmed());
}
