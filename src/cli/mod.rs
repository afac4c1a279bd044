//! Command-line interface for FlashPrompt.
//!
//! Each subcommand lives in its own module as a `clap` argument struct with an
//! `execute` method. All of them are thin callers of the [`template`] engine
//! and the [`store`]; none of them re-implement extraction, reconciliation or
//! rendering.
//!
//! # Commands
//!
//! - `list` - template names in save order
//! - `add` - save a new template
//! - `show` - a template's body and placeholders
//! - `render` - fill in placeholders, print the result, optionally copy it
//! - `edit` - change a template's body or name, with a reconciliation preview
//! - `remove` - delete a template
//! - `config` - inspect and change settings
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: debug logging
//! - `--quiet` / `-q`: errors only
//! - `--config` / `-c`: settings file (default `~/.flashprompt/config.toml`)
//! - `--store`: template store file, overriding the configured location
//!
//! [`template`]: crate::template
//! [`store`]: crate::store

mod add;
pub mod common;
mod config;
mod edit;
mod list;
mod remove;
mod render;
mod show;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::GlobalConfigManager;
use crate::constants::{CONFIG_PATH_ENV, STORE_PATH_ENV};
use common::CommandContext;

/// Settings derived from the global flags, handed to every command.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_level: String,

    /// Settings file override
    pub config_path: Option<PathBuf>,

    /// Store file override
    pub store_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings manager for the selected settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the default location
    /// cannot be determined.
    pub fn config_manager(&self) -> Result<GlobalConfigManager> {
        match &self.config_path {
            Some(path) => Ok(GlobalConfigManager::with_path(path.clone())),
            None => GlobalConfigManager::new(),
        }
    }
}

/// Save reusable prompt templates and fill in their `{{placeholders}}`.
#[derive(Parser)]
#[command(
    name = "flashprompt",
    about = "Save prompt templates and fill in their {{placeholders}}",
    version,
    long_about = "FlashPrompt stores named prompt templates. Placeholders written as {{name}} \
                  become input fields; rendering substitutes the values and can copy the result \
                  to the clipboard."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the settings file
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the template store file
    #[arg(long, global = true, env = STORE_PATH_ENV, value_name = "PATH")]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved templates
    List(list::ListCommand),

    /// Save a new template
    Add(add::AddCommand),

    /// Show a template and its placeholders
    Show(show::ShowCommand),

    /// Fill in a template and print the result
    Render(render::RenderCommand),

    /// Change a template's body or name
    Edit(edit::EditCommand),

    /// Delete a template
    Remove(remove::RemoveCommand),

    /// Inspect and change settings
    Config(config::ConfigCommand),
}

impl Cli {
    /// Run the selected command.
    ///
    /// # Errors
    ///
    /// Returns whatever error the command produced.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "flashprompt=debug"
        } else if self.quiet {
            "error"
        } else {
            "flashprompt=warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
            store_path: self.store.clone(),
        }
    }

    /// Run the selected command with an explicit [`CliConfig`].
    ///
    /// # Errors
    ///
    /// Returns whatever error the command produced.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::List(cmd) => cmd.execute(&CommandContext::load(&config).await?),
            Commands::Add(cmd) => cmd.execute(&mut CommandContext::load(&config).await?).await,
            Commands::Show(cmd) => cmd.execute(&CommandContext::load(&config).await?),
            Commands::Render(cmd) => cmd.execute(&CommandContext::load(&config).await?).await,
            Commands::Edit(cmd) => cmd.execute(&mut CommandContext::load(&config).await?).await,
            Commands::Remove(cmd) => cmd.execute(&mut CommandContext::load(&config).await?).await,
            Commands::Config(cmd) => cmd.execute(&config).await,
        }
    }
}
