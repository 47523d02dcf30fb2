//! Artifact copying
//!
//! Mirrors a run's `metrics.json` and its plot images from a result
//! directory into `<artifacts_root>/<run_id>/`. Only the top level of the
//! source directory is scanned. Existing files of the same name are
//! overwritten, so copying the same source twice leaves the same tree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Name of the experiment result file inside a source directory.
pub const METRICS_FILE: &str = "metrics.json";

/// Extensions treated as plot images.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "svg", "jpg", "jpeg"];

/// True if `file_name` ends in one of [`IMAGE_EXTENSIONS`] (ASCII
/// case-insensitive).
#[must_use]
pub fn is_image(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|image| ext.eq_ignore_ascii_case(image))
        })
}

/// Check that `run_id` names exactly one directory below the artifact root.
///
/// # Errors
///
/// [`Error::UnsafeRunId`] for empty IDs, `.`/`..`, or IDs containing a path
/// separator.
pub fn validate_run_id(run_id: &str) -> Result<()> {
    let unsafe_id = run_id.is_empty()
        || run_id == "."
        || run_id == ".."
        || run_id.contains(['/', '\\']);
    if unsafe_id {
        return Err(Error::UnsafeRunId(run_id.to_string()));
    }
    Ok(())
}

/// Copy a run's artifacts into `<artifacts_root>/<run_id>/`.
///
/// # Returns
///
/// The copied file names: `metrics.json` first (when present), then the
/// image files in name order.
///
/// # Errors
///
/// [`Error::UnsafeRunId`] if the run ID is not a plain directory name, or
/// [`Error::Io`] if the source cannot be listed or a copy fails.
pub fn copy_artifacts(
    source_dir: impl AsRef<Path>,
    artifacts_root: impl AsRef<Path>,
    run_id: &str,
) -> Result<Vec<String>> {
    validate_run_id(run_id)?;
    let source_dir = source_dir.as_ref();
    let target_dir = artifacts_root.as_ref().join(run_id);
    fs::create_dir_all(&target_dir)?;

    let mut copied = Vec::new();

    let metrics = source_dir.join(METRICS_FILE);
    if metrics.is_file() {
        copy_one(&metrics, &target_dir, METRICS_FILE)?;
        copied.push(METRICS_FILE.to_string());
    }

    for (name, path) in list_images(source_dir)? {
        copy_one(&path, &target_dir, &name)?;
        copied.push(name);
    }

    Ok(copied)
}

fn copy_one(source: &Path, target_dir: &Path, name: &str) -> Result<()> {
    let target = target_dir.join(name);
    let bytes = fs::copy(source, &target)?;
    debug!("copied {} -> {} ({bytes} bytes)", source.display(), target.display());
    Ok(())
}

/// Top-level, non-hidden image files of `dir`, sorted by name.
fn list_images(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        // Non-UTF-8 names cannot be linked from a page
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') || !is_image(&name) {
            continue;
        }
        images.push((name, entry.path()));
    }
    images.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(images)
}
