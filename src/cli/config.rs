//! Inspect and change settings.
//!
//! ```text
//! flashprompt config show            # settings file, save directory, store file
//! flashprompt config path            # settings file path only
//! flashprompt config set-dir ~/notes # keep prompts.json in ~/notes
//! flashprompt config clear-dir       # back to the platform data directory
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use super::CliConfig;
use crate::config::resolve_store_path;

/// `flashprompt config`
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current settings (default)
    Show,

    /// Print the settings file path
    Path,

    /// Store templates in DIR/prompts.json
    SetDir {
        /// Directory for the template store; `~` is allowed
        dir: PathBuf,
    },

    /// Forget the save directory and use the default location
    ClearDir,
}

impl ConfigCommand {
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        match self.command {
            Some(ConfigSubcommands::Show) | None => Self::show(cli).await,
            Some(ConfigSubcommands::Path) => Self::show_path(cli),
            Some(ConfigSubcommands::SetDir {
                dir,
            }) => Self::set_dir(cli, Some(absolutize(&dir)?)).await,
            Some(ConfigSubcommands::ClearDir) => Self::set_dir(cli, None).await,
        }
    }

    async fn show(cli: &CliConfig) -> Result<()> {
        let mut manager = cli.config_manager()?;
        let path = manager.path().to_path_buf();
        let config = manager.get().await?;
        let store_path = resolve_store_path(cli.store_path.clone(), config)?;

        println!("{} {}", "Settings file:".bold(), path.display());
        match config.raw_save_directory() {
            Some(dir) => println!("{} {}", "Save directory:".bold(), dir),
            None => println!("{} {}", "Save directory:".bold(), "(default)".bright_black()),
        }
        println!("{} {}", "Template store:".bold(), store_path.display());
        Ok(())
    }

    fn show_path(cli: &CliConfig) -> Result<()> {
        println!("{}", cli.config_manager()?.path().display());
        Ok(())
    }

    async fn set_dir(cli: &CliConfig, dir: Option<PathBuf>) -> Result<()> {
        let mut manager = cli.config_manager()?;
        manager.get_mut().await?.set_save_directory(dir.clone());
        manager.save().await?;

        match dir {
            Some(dir) => {
                info!(dir = %dir.display(), "Set save directory");
                println!("{} Save directory set to {}", "✓".green(), dir.display());
            }
            None => {
                info!("Cleared save directory");
                println!("{} Save directory cleared", "✓".green());
            }
        }
        Ok(())
    }
}

/// Make a relative directory absolute against the working directory.
///
/// Paths starting with `~` are kept as written and expanded on use.
fn absolutize(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() || dir.starts_with("~") {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.join(dir))
}
