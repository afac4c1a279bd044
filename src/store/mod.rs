//! JSON-file template store.
//!
//! Templates live in a single `prompts.json` file holding an array of records
//! in save order:
//!
//! ```json
//! [
//!   {
//!     "name": "greeting",
//!     "template": "Dear {{name}}, welcome to {{place}}."
//!   }
//! ]
//! ```
//!
//! The whole file is rewritten atomically on every change.
//!
//! # Failure policy
//!
//! Reading never fails: a missing, empty or corrupt file opens as an empty
//! store (with a warning in the log) so the tool stays usable. Writing does
//! fail, with the file path in the error context.
//!
//! # Names
//!
//! [`save`](TemplateStore::save) appends without checking names, matching the
//! plain record-store contract. The CLI goes through
//! [`insert_unique`](TemplateStore::insert_unique) and
//! [`replace`](TemplateStore::replace), which treat the name as a unique key
//! and report [`FlashError::TemplateExists`] instead of creating a duplicate.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::GlobalConfig;
use crate::constants::{APP_DIR_NAME, STORE_FILE_NAME};
use crate::core::FlashError;
use crate::template::Template;
use crate::utils::fs::safe_write;
use crate::utils::find_similar_names;

/// Template records backed by a JSON file.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Open the store at `path`, creating an empty file if there is none.
    ///
    /// Never fails. If the directory or file cannot be created, or the file
    /// cannot be read or parsed, the store starts empty and the problem is
    /// logged; a later write reports the underlying error.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if !path.exists() {
            if let Err(e) = safe_write(&path, "[]") {
                warn!(path = %path.display(), error = %e, "Could not create template store");
            }
        }

        let templates = Self::load(&path);
        debug!(path = %path.display(), count = templates.len(), "Opened template store");

        Self {
            path,
            templates,
        }
    }

    /// Resolve the store file location.
    ///
    /// `<save_directory>/prompts.json` if the config names a save directory,
    /// otherwise `prompts.json` inside the platform's local data directory
    /// (`~/.local/share/flashprompt` on Linux, `%LOCALAPPDATA%\flashprompt` on
    /// Windows).
    ///
    /// # Errors
    ///
    /// Returns an error if no save directory is configured and the local data
    /// directory cannot be determined.
    pub fn default_path(config: &GlobalConfig) -> Result<PathBuf> {
        if let Some(dir) = config.save_directory() {
            return Ok(dir.join(STORE_FILE_NAME));
        }

        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?;
        Ok(data_dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
    }

    fn load(path: &Path) -> Vec<Template> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read template store");
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Template store is corrupt, starting empty");
            Vec::new()
        })
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.templates)
            .context("Failed to serialize templates")?;
        safe_write(&self.path, &content)
            .with_context(|| format!("Failed to write template store: {}", self.path.display()))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All templates in save order.
    #[must_use]
    pub fn list_all(&self) -> &[Template] {
        &self.templates
    }

    /// Template names in save order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    /// First template with the given name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Like [`get_by_name`](Self::get_by_name), but a miss is an error that
    /// carries the closest existing names.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::TemplateNotFound`] if there is no such template.
    pub fn require(&self, name: &str) -> Result<&Template, FlashError> {
        self.get_by_name(name).ok_or_else(|| self.not_found(name))
    }

    fn not_found(&self, name: &str) -> FlashError {
        FlashError::TemplateNotFound {
            name: name.to_string(),
            similar: find_similar_names(name, &self.names().collect::<Vec<_>>()),
        }
    }

    /// Append a record and persist. Existing records with the same name are
    /// left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written.
    pub fn save(&mut self, name: &str, body: &str) -> Result<()> {
        self.templates.push(Template {
            name: name.to_string(),
            body: body.to_string(),
        });
        self.persist()
    }

    /// Append `template` unless its name is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::TemplateExists`] if the name is taken, or an error
    /// if the store file cannot be written.
    pub fn insert_unique(&mut self, template: Template) -> Result<()> {
        if self.get_by_name(&template.name).is_some() {
            return Err(FlashError::TemplateExists {
                name: template.name,
            }
            .into());
        }
        self.save(&template.name, &template.body)
    }

    /// Replace the template called `old_name` with `template` in one write.
    ///
    /// This is the update and rename flow: all records named `old_name` are
    /// removed and `template` is appended. The conflict check runs before
    /// anything is removed, so a failed rename leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// - [`FlashError::TemplateNotFound`] if `old_name` does not exist
    /// - [`FlashError::TemplateExists`] if `template.name` differs from
    ///   `old_name` and is already taken
    /// - an I/O error if the store file cannot be written
    pub fn replace(&mut self, old_name: &str, template: Template) -> Result<()> {
        if self.get_by_name(old_name).is_none() {
            return Err(self.not_found(old_name).into());
        }
        if template.name != old_name && self.get_by_name(&template.name).is_some() {
            return Err(FlashError::TemplateExists {
                name: template.name,
            }
            .into());
        }

        let previous = self.templates.clone();
        self.templates.retain(|t| t.name != old_name);
        self.templates.push(template);

        if let Err(e) = self.persist() {
            self.templates = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Remove every template named `name` and persist.
    ///
    /// Returns how many records were removed; removing a name that does not
    /// exist is not an error and does not touch the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written.
    pub fn delete_by_name(&mut self, name: &str) -> Result<usize> {
        let before = self.templates.len();
        self.templates.retain(|t| t.name != name);
        let removed = before - self.templates.len();

        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }
}
