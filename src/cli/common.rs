//! Helpers shared by the command implementations.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader, Stdin};
use tracing::debug;

use super::CliConfig;
use crate::config::resolve_store_path;
use crate::core::FlashError;
use crate::store::TemplateStore;

/// Output format for commands that print structured data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON for scripting
    Json,
}

/// Everything a template command needs: the store the settings point at.
pub struct CommandContext {
    pub store: TemplateStore,
}

impl CommandContext {
    /// Load settings and open the template store they point at.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed, or
    /// the store location cannot be determined.
    pub async fn load(cli: &CliConfig) -> Result<Self> {
        let mut settings = cli.config_manager()?;
        let store_path = resolve_store_path(cli.store_path.clone(), settings.get().await?)?;
        let store = TemplateStore::open(store_path);

        Ok(Self {
            store,
        })
    }
}

/// Line-oriented reader over stdin, shared by all prompts of one command.
///
/// A single buffered reader is kept so lines piped in ahead of time are not
/// lost between prompts.
pub struct Prompter {
    reader: BufReader<Stdin>,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }

    /// Print `label` to stderr and read one line.
    ///
    /// The trailing newline is stripped; everything else is kept as typed.
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read.
    pub async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        eprint!("{label}");
        std::io::stderr().flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await.context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` means no.
    ///
    /// With `assume_yes` the question is skipped. Without a terminal there is
    /// nobody to ask, so the caller must pass `assume_yes` explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::ConfirmationRequired`] when stdin is not a
    /// terminal and `assume_yes` is false.
    pub async fn confirm(&mut self, question: &str, action: &str, assume_yes: bool) -> Result<bool> {
        if assume_yes {
            return Ok(true);
        }
        if !std::io::stdin().is_terminal() {
            return Err(FlashError::ConfirmationRequired {
                action: action.to_string(),
            }
            .into());
        }

        let answer = self.ask(&format!("{} ", format!("{question} [y/N]:").yellow())).await?;
        let answer = answer.unwrap_or_default().trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Resolve template text from `--body`, `--file` or, when `allow_stdin` is
/// set and neither flag is given, standard input.
///
/// Returns `None` when no source was given and stdin is not allowed.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub async fn read_body(
    body: Option<String>,
    file: Option<PathBuf>,
    allow_stdin: bool,
) -> Result<Option<String>> {
    if let Some(body) = body {
        return Ok(Some(body));
    }

    if let Some(file) = file {
        debug!(path = %file.display(), "Reading template body from file");
        let content = tokio::fs::read_to_string(&file)
            .await
            .with_context(|| format!("Failed to read template file: {}", file.display()))?;
        return Ok(Some(content));
    }

    if !allow_stdin {
        return Ok(None);
    }

    if std::io::stdin().is_terminal() {
        eprintln!("{}", "Enter the template body, then press Ctrl-D:".bright_black());
    }
    let mut content = String::new();
    tokio::io::stdin()
        .read_to_string(&mut content)
        .await
        .context("Failed to read template body from stdin")?;
    Ok(Some(content))
}

/// Parse a `NAME=VALUE` assignment.
///
/// The name is trimmed; the value is kept verbatim and may itself contain `=`.
///
/// # Errors
///
/// Returns [`FlashError::InvalidAssignment`] if there is no `=` or the name
/// is empty.
pub fn parse_assignment(input: &str) -> Result<(String, String), FlashError> {
    let invalid = || FlashError::InvalidAssignment {
        input: input.to_string(),
    };

    let (name, value) = input.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok((name.to_string(), value.to_string()))
}
