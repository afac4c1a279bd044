//! User settings for FlashPrompt.
//!
//! Settings live in a small TOML file:
//!
//! - **Unix/macOS**: `~/.flashprompt/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\flashprompt\config.toml`
//!
//! The `--config` flag (or `FLASHPROMPT_CONFIG`) points at a different file.
//! A missing file is not an error; it simply yields the defaults.
//!
//! ```toml
//! # Directory holding prompts.json
//! save_directory = "~/Documents/prompts"
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use flashprompt::config::GlobalConfigManager;
//! use std::path::PathBuf;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut manager = GlobalConfigManager::new()?;
//!
//! let config = manager.get_mut().await?;
//! config.set_save_directory(Some(PathBuf::from("~/prompts")));
//!
//! manager.save().await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Persisted user settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Directory that holds the template store file.
    ///
    /// Kept exactly as the user entered it; a leading `~` is expanded when
    /// read through [`save_directory`](Self::save_directory). When unset the
    /// store goes to the platform's local data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    save_directory: Option<String>,
}

impl GlobalConfig {
    /// Load settings from `path`, or the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path).await
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (permissions, not found, etc.)
    /// - The file contains invalid TOML syntax
    /// - The TOML structure doesn't match the expected schema
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Save settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directories cannot be created
    /// - The file cannot be written
    /// - Serialization to TOML fails
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Default settings file location.
    ///
    /// - **Windows**: `%LOCALAPPDATA%\flashprompt\config.toml`
    /// - **Unix/macOS**: `~/.flashprompt/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or, on Windows, local data) directory
    /// cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join(APP_DIR_NAME)
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(format!(".{APP_DIR_NAME}"))
        };

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Configured save directory with `~` expanded.
    #[must_use]
    pub fn save_directory(&self) -> Option<PathBuf> {
        self.save_directory
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).into_owned()))
    }

    /// Save directory exactly as written in the file.
    #[must_use]
    pub fn raw_save_directory(&self) -> Option<&str> {
        self.save_directory.as_deref()
    }

    /// Set or clear the save directory.
    pub fn set_save_directory(&mut self, dir: Option<PathBuf>) {
        self.save_directory = dir.map(|dir| dir.to_string_lossy().into_owned());
    }
}

/// Lazily loaded, cached settings bound to one file path.
pub struct GlobalConfigManager {
    config: Option<GlobalConfig>,
    path: PathBuf,
}

impl GlobalConfigManager {
    /// Manager for the default settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the default configuration path cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config: None,
            path: GlobalConfig::default_path()?,
        })
    }

    /// Manager for a settings file at a custom path.
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self {
            config: None,
            path,
        }
    }

    /// Path of the managed settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_loaded(&mut self) -> Result<&mut GlobalConfig> {
        let config = match self.config.take() {
            Some(config) => config,
            None => GlobalConfig::load_or_default(&self.path).await?,
        };
        Ok(self.config.insert(config))
    }

    /// Settings, loading them on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn get(&mut self) -> Result<&GlobalConfig> {
        Ok(self.ensure_loaded().await?)
    }

    /// Mutable settings, loading them on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn get_mut(&mut self) -> Result<&mut GlobalConfig> {
        self.ensure_loaded().await
    }

    /// Write the cached settings to disk. Does nothing if they were never loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self) -> Result<()> {
        if let Some(config) = &self.config {
            config.save_to(&self.path).await?;
        }
        Ok(())
    }
}
