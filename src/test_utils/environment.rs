//! Isolated store and settings for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::store::TemplateStore;

/// A temporary directory with its own template store and settings file.
///
/// Nothing outside the directory is read or written as long as commands get
/// [`global_args`](Self::global_args).
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub store_path: PathBuf,
    pub config_path: PathBuf,
}

impl TestEnvironment {
    /// Create an empty environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let store_path = temp_dir.path().join("data").join("prompts.json");
        let config_path = temp_dir.path().join("config").join("config.toml");

        Ok(Self {
            temp_dir,
            store_path,
            config_path,
        })
    }

    /// Create an environment whose store already holds `templates`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn with_templates(templates: &[(&str, &str)]) -> Result<Self> {
        let env = Self::new()?;
        let mut store = env.store();
        for (name, body) in templates {
            store.save(name, body)?;
        }
        Ok(env)
    }

    /// Root of the environment.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `--store` and `--config` arguments pointing into this environment.
    #[must_use]
    pub fn global_args(&self) -> Vec<String> {
        vec![
            "--store".to_string(),
            self.store_path.display().to_string(),
            "--config".to_string(),
            self.config_path.display().to_string(),
        ]
    }

    /// Open the environment's store fresh from disk.
    #[must_use]
    pub fn store(&self) -> TemplateStore {
        TemplateStore::open(&self.store_path)
    }

    /// Body of the stored template `name`, if any.
    #[must_use]
    pub fn template_body(&self, name: &str) -> Option<String> {
        self.store().get_by_name(name).map(|t| t.body.clone())
    }

    /// Template names in store order.
    #[must_use]
    pub fn template_names(&self) -> Vec<String> {
        self.store().names().map(str::to_string).collect()
    }

    /// Write a file relative to the environment root and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be written.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write test file: {}", path.display()))?;
        Ok(path)
    }

    /// Raw contents of the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file does not exist.
    pub fn read_store_file(&self) -> Result<String> {
        fs::read_to_string(&self.store_path)
            .with_context(|| format!("Failed to read {}", self.store_path.display()))
    }
}
