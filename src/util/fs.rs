//! Filesystem utilities.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write `contents` to a hidden temporary file inside `dir`.
///
/// The file is deleted when dropped unless it is moved into place with
/// [`commit_staged`].
pub fn stage_file(dir: &Path, contents: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(".recipe-")
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;

    file.write_all(contents.as_bytes())
        .and_then(|_| file.flush())
        .with_context(|| format!("failed to write temporary file in {}", dir.display()))?;

    Ok(file)
}

/// Rename staged files onto their targets, in order.
///
/// If any rename fails, targets already replaced by this call are removed so
/// that no partial set of outputs is left behind.
pub fn commit_staged(files: Vec<(NamedTempFile, PathBuf)>) -> Result<()> {
    let mut committed: Vec<PathBuf> = Vec::new();

    for (staged, target) in files {
        if let Err(e) = staged.persist(&target) {
            for path in &committed {
                if let Err(err) = fs::remove_file(path) {
                    tracing::warn!("failed to remove {}: {}", path.display(), err);
                }
            }
            return Err(e.error)
                .with_context(|| format!("failed to write file: {}", target.display()));
        }
        committed.push(target);
    }

    Ok(())
}
