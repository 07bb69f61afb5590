//! Recursive discovery of files matching a name suffix.
//!
//! The walk is sorted by file name so the same tree always yields the same
//! order. Symlinked directories are not descended into; a symlink whose
//! target is a regular file is returned like any other file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::core::errors::{NormalizeError, Result};

/// Discover every regular file under `root` whose name ends with `extension`.
pub fn enumerate(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root)
        .map_err(|err| NormalizeError::enumeration(root, "cannot access root", err))?;

    if !metadata.is_dir() {
        return Err(NormalizeError::config_field(
            format!("root is not a directory: {}", root.display()),
            "root",
        ));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    let mut collected = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| {
            let message = match err.path() {
                Some(path) => format!("failed to walk {}", path.display()),
                None => "failed to walk directory".to_string(),
            };
            NormalizeError::enumeration(root, message, err)
        })?;

        if !is_regular_file(&entry) {
            continue;
        }

        if matches_extension(entry.path(), extension) {
            collected.push(entry.into_path());
        }
    }

    collected.sort();
    log_discovery_results(root, extension, &collected);
    Ok(collected)
}

/// Regular files, and symlinks resolving to one. Dangling links are skipped.
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file());
    }
    entry.file_type().is_file()
}

/// Suffix match on the file name, leading separator included.
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

fn log_discovery_results(root: &Path, extension: &str, collected: &[PathBuf]) {
    info!(
        "File discovery completed: {} *{} files under {}",
        collected.len(),
        extension,
        root.display()
    );
    for path in collected {
        debug!("  Found: {}", path.display());
    }
}
