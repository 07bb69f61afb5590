//! Console output for the CLI.

use console::style;
use hyphen_normalizer::io::reports::{change_marker, render, ReportFormat};
use hyphen_normalizer::{FileOutcome, RunSummary};

/// Announce a modified file as soon as it has been processed.
///
/// JSON output owns stdout, so the announcement goes to stderr there.
pub fn print_change(outcome: &FileOutcome, dry_run: bool, format: ReportFormat) {
    let marker = change_marker(dry_run);
    let marker = if dry_run {
        style(marker).yellow()
    } else {
        style(marker).green()
    };
    match format {
        ReportFormat::Pretty => println!("{} {}", marker, outcome.path.display()),
        ReportFormat::Json => eprintln!("{} {}", marker.for_stderr(), outcome.path.display()),
    }
}

/// Print the end-of-run report.
pub fn print_summary(summary: &RunSummary, format: ReportFormat) -> anyhow::Result<()> {
    let report = render(summary, format)?;
    match format {
        ReportFormat::Pretty => print!("{report}"),
        ReportFormat::Json => println!("{report}"),
    }
    Ok(())
}
