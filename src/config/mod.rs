//! Configuration management for FlashPrompt.
//!
//! There is one settings file, the global user configuration (see [`global`]).
//! It only decides where the template store lives; everything else has fixed
//! defaults.
//!
//! # Store location
//!
//! [`resolve_store_path`] picks the store file, in this order:
//!
//! 1. an explicit path (`--store` / `FLASHPROMPT_STORE`)
//! 2. `<save_directory>/prompts.json` from the settings file
//! 3. `prompts.json` in the platform's local data directory

mod global;

pub use global::{GlobalConfig, GlobalConfigManager};

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::store::TemplateStore;

/// Decide which store file to use.
///
/// # Errors
///
/// Returns an error if neither an explicit path nor a save directory is set
/// and the local data directory cannot be determined.
pub fn resolve_store_path(explicit: Option<PathBuf>, config: &GlobalConfig) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned()),
        None => TemplateStore::default_path(config)?,
    };
    debug!(path = %path.display(), "Resolved template store");
    Ok(path)
}
