//! Rendering of the run summary.

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::core::pipeline::RunSummary;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Pretty,
    /// JSON document
    Json,
}

/// Render `summary` in the requested format.
pub fn render(summary: &RunSummary, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Pretty => Ok(render_pretty(summary)),
        ReportFormat::Json => render_json(summary),
    }
}

/// Marker printed in front of each modified file.
pub fn change_marker(dry_run: bool) -> &'static str {
    if dry_run {
        "[WOULD CHANGE]"
    } else {
        "[CHANGED]"
    }
}

/// The text summary block printed after the per-file lines.
pub fn render_pretty(summary: &RunSummary) -> String {
    let mut out = String::new();

    if summary.files_scanned == 0 {
        out.push_str(&format!(
            "No *{} files found under {}\n",
            summary.extension,
            summary.root.display()
        ));
    }

    out.push_str("\nSummary:\n");
    out.push_str(&format!("  Files scanned:   {}\n", summary.files_scanned));
    out.push_str(&format!("  Files modified:  {}\n", summary.files_modified));

    if summary.hits.is_empty() {
        out.push_str("  No normalization needed.\n");
    } else {
        out.push_str("  Replacements/removals:\n");
        for entry in summary.hits.sorted() {
            let code = crate::core::charset::code_point(entry.ch);
            out.push_str(&format!(
                "    {:<8} {:<11} count={}\n",
                code,
                entry.class.label(),
                entry.count
            ));
        }
    }

    if summary.dry_run {
        out.push_str("  (dry run: no files written)\n");
    }

    out
}

/// JSON rendering of the whole summary.
pub fn render_json(summary: &RunSummary) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
