//! Directory helpers.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensures that a directory exists, creating it and its parents if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, or if `path` exists
/// but is not a directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Ensures that the parent directory of a file path exists.
///
/// Paths without a parent component (a bare file name) need nothing created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
