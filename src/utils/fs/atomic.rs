//! Atomic file write operations using temp-and-rename strategy.
//!
//! The template store is rewritten in full on every change, so a crash
//! halfway through a write must never leave a truncated file behind.

use crate::utils::fs::dirs::ensure_parent_dir;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
///
/// # Examples
///
/// ```rust,no_run
/// use flashprompt::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// safe_write(Path::new("prompts.json"), "[]")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Creates the parent directory if needed
/// 2. Writes the content to a temporary file in the same directory
/// 3. Syncs the temporary file to disk
/// 4. Renames it over the target path
///
/// Readers see either the old content or the new content, never a partial
/// write.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the temporary
/// file cannot be written or synced, or the final rename fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write temp file for: {}", path.display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
