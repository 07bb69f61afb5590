//! The scan → normalize → write-back pipeline.
//!
//! Files are processed strictly one at a time. The [`RunSummary`] is an owned
//! accumulator threaded through [`process`]; the first error aborts the run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::core::config::{NormalizeConfig, SoftHyphenMode};
use crate::core::errors::Result;
use crate::core::file_discovery::enumerate;
use crate::core::file_utils::{read_to_string_strict, write_atomic};
use crate::core::normalizer::{normalize_text, HitCounts};

/// Aggregate counters for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Root that was scanned
    pub root: PathBuf,
    /// Suffix that was matched
    pub extension: String,
    /// Whether writes were suppressed
    pub dry_run: bool,
    /// Number of files matched by the suffix
    pub files_scanned: usize,
    /// Number of files whose content changed
    pub files_modified: usize,
    /// Changed files in processing order
    pub changed_files: Vec<PathBuf>,
    /// Matched characters across modified files
    pub hits: HitCounts,
}

impl RunSummary {
    /// Empty summary for `config`
    pub fn new(config: &NormalizeConfig) -> Self {
        Self {
            root: config.root.clone(),
            extension: config.extension.clone(),
            dry_run: config.dry_run,
            ..Self::default()
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The file
    pub path: PathBuf,
    /// Whether normalization changed its content
    pub changed: bool,
    /// Whether the new content was written to disk
    pub written: bool,
    /// Characters matched in this file
    pub hits: HitCounts,
}

/// Normalize one file, writing it back unless `dry_run` is set.
///
/// Counts are merged into `summary` only when the content changed.
pub fn process(
    path: &Path,
    soft_hyphen: SoftHyphenMode,
    dry_run: bool,
    summary: &mut RunSummary,
) -> Result<FileOutcome> {
    let original = read_to_string_strict(path)?;
    let (normalized, hits) = normalize_text(&original, soft_hyphen);
    summary.files_scanned += 1;

    if normalized == original {
        debug!("No change: {}", path.display());
        return Ok(FileOutcome {
            path: path.to_path_buf(),
            changed: false,
            written: false,
            hits: HitCounts::new(),
        });
    }

    summary.files_modified += 1;
    summary.hits.merge(&hits);
    summary.changed_files.push(path.to_path_buf());

    if dry_run {
        info!(
            "Would normalize {} ({} occurrences)",
            path.display(),
            hits.total()
        );
    } else {
        write_atomic(path, &normalized)?;
        info!("Normalized {} ({} occurrences)", path.display(), hits.total());
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        changed: true,
        written: !dry_run,
        hits,
    })
}

/// Run the whole pipeline, calling `on_change` for each modified file as it
/// is processed.
pub fn run_with<F>(config: &NormalizeConfig, mut on_change: F) -> Result<RunSummary>
where
    F: FnMut(&FileOutcome),
{
    config.validate()?;

    let files = enumerate(&config.root, &config.extension)?;
    let mut summary = RunSummary::new(config);

    for file in &files {
        let outcome = process(file, config.soft_hyphen, config.dry_run, &mut summary)?;
        if outcome.changed {
            on_change(&outcome);
        }
    }

    info!(
        "Run complete: {} scanned, {} modified{}",
        summary.files_scanned,
        summary.files_modified,
        if config.dry_run { " (dry run)" } else { "" }
    );
    Ok(summary)
}

/// Run the whole pipeline.
pub fn run(config: &NormalizeConfig) -> Result<RunSummary> {
    run_with(config, |_| {})
}
