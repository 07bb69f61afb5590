//! File utilities for strict reads and atomic write-back.
//!
//! Reads never fall back to lossy decoding: a file that is not valid UTF-8 is
//! an error. Writes go to a hidden sibling temp file that is renamed over the
//! original, so the original is either untouched or fully replaced.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::core::errors::{NormalizeError, Result, ResultExt};

/// Read a whole file as UTF-8, failing on any invalid sequence.
pub fn read_to_string_strict(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    String::from_utf8(bytes).map_err(|err| NormalizeError::decode(path, err))
}

/// Replace the contents of `path` with `content` atomically.
///
/// When `path` is a symlink the file it points to is replaced and the link is
/// left in place. The original file's permissions are carried over to the
/// replacement. If any step before the rename fails the temp file is removed
/// on drop.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_target(path)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut temp = Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|err| NormalizeError::write(path, "failed to create temporary file", err))?;
    debug!("Writing {} via {}", target.display(), temp.path().display());

    fill_temp(&mut temp, &target, content)?;

    temp.persist(&target).map_err(|err| {
        NormalizeError::write(path, "failed to replace original file", err.error)
    })?;
    Ok(())
}

/// The file actually holding the content: links are resolved.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let is_link = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(path.to_path_buf());
    }

    let target = fs::canonicalize(path)
        .map_err(|err| NormalizeError::write(path, "failed to resolve symlink", err))?;
    debug!("Resolved {} -> {}", path.display(), target.display());
    Ok(target)
}

fn fill_temp(temp: &mut NamedTempFile, path: &Path, content: &str) -> Result<()> {
    let permissions = fs::metadata(path)
        .context("Failed to read original file metadata")?
        .permissions();

    temp.write_all(content.as_bytes())
        .map_err(|err| NormalizeError::write(path, "failed to write temporary file", err))?;
    temp.as_file()
        .sync_all()
        .map_err(|err| NormalizeError::write(path, "failed to flush temporary file", err))?;
    fs::set_permissions(temp.path(), permissions)
        .map_err(|err| NormalizeError::write(path, "failed to copy permissions", err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn leftover_temp_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn test_read_valid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.tex");
        fs::write(&file_path, "micro\u{00AD}scopic 🦀").unwrap();

        let content = read_to_string_strict(&file_path).unwrap();
        assert_eq!(content, "micro\u{00AD}scopic 🦀");
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.tex");
        fs::write(&file_path, b"caf\xe9").unwrap();

        let err = read_to_string_strict(&file_path).unwrap_err();
        assert!(matches!(err, NormalizeError::Decode { .. }));
        assert_eq!(err.path(), Some(file_path.as_path()));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_to_string_strict(&temp_dir.path().join("gone.tex")).unwrap_err();
        assert!(matches!(err, NormalizeError::Io { .. }));
    }

    #[test]
    fn test_write_atomic_replaces_content_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("paper.tex");
        fs::write(&file_path, "a\u{2013}b").unwrap();

        write_atomic(&file_path, "a-b").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "a-b");
        assert!(leftover_temp_files(temp_dir.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("paper.tex");
        fs::write(&file_path, "x\u{200B}y").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&file_path, "xy").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_through_symlink_keeps_link() {
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("shared.tex");
        fs::write(&target, "micro\u{00AD}scopic").unwrap();

        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("shared.tex");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        write_atomic(&link, "micro-scopic").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&link).unwrap(), target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "micro-scopic");
        assert!(leftover_temp_files(outside.path()).is_empty());
        assert!(leftover_temp_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_write_atomic_missing_original_leaves_no_temp() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("vanished.tex");

        assert!(write_atomic(&file_path, "content").is_err());
        assert!(!file_path.exists());
        assert!(leftover_temp_files(temp_dir.path()).is_empty());
    }
}
