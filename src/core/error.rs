//! Error handling for FlashPrompt
//!
//! This module provides the error types and user-facing error reporting for the
//! FlashPrompt CLI. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`FlashError`] - Enumerated error types for every failure FlashPrompt reports
//! - [`ErrorContext`] - Wrapper that adds details and a suggestion for display
//!
//! Note that the template engine itself never fails: extraction and rendering
//! are total. The errors here come from the edges around it (validation before
//! a save, the store, the clipboard, the config file, and CLI argument parsing).
//!
//! # Examples
//!
//! ```rust,no_run
//! use flashprompt::core::{FlashError, user_friendly_error};
//!
//! fn lookup() -> anyhow::Result<()> {
//!     Err(FlashError::TemplateNotFound {
//!         name: "greting".to_string(),
//!         similar: vec!["greeting".to_string()],
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = lookup() {
//!     let ctx = user_friendly_error(e);
//!     ctx.display(); // error: Template 'greting' not found / suggestion: Did you mean 'greeting'?
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for FlashPrompt operations.
///
/// # Error Categories
///
/// ## Validation (checked before the store is touched)
/// - [`EmptyName`](FlashError::EmptyName), [`EmptyBody`](FlashError::EmptyBody)
/// - [`InvalidPlaceholderName`](FlashError::InvalidPlaceholderName)
/// - [`InvalidAssignment`](FlashError::InvalidAssignment)
///
/// ## Store
/// - [`TemplateNotFound`](FlashError::TemplateNotFound)
/// - [`TemplateExists`](FlashError::TemplateExists)
///
/// ## Editing session
/// - [`UnknownField`](FlashError::UnknownField)
/// - [`NotEditing`](FlashError::NotEditing)
/// - [`UnfilledPlaceholders`](FlashError::UnfilledPlaceholders)
///
/// ## Environment
/// - [`ClipboardUnavailable`](FlashError::ClipboardUnavailable)
/// - [`ConfirmationRequired`](FlashError::ConfirmationRequired)
/// - [`ConfigError`](FlashError::ConfigError)
/// - [`IoError`](FlashError::IoError)
#[derive(Error, Debug)]
pub enum FlashError {
    /// No template with the given name exists in the store.
    #[error("Template '{name}' not found")]
    TemplateNotFound {
        /// The name that was looked up
        name: String,
        /// Existing template names close to `name`
        similar: Vec<String>,
    },

    /// A template with the given name already exists.
    ///
    /// Names are unique keys: saving or renaming onto a taken name is refused
    /// instead of creating a second record.
    #[error("Template '{name}' already exists")]
    TemplateExists {
        /// The conflicting name
        name: String,
    },

    /// The template name is empty (after trimming whitespace).
    #[error("Template name must not be empty")]
    EmptyName,

    /// The template body is empty (after trimming whitespace).
    #[error("Template body must not be empty")]
    EmptyBody,

    /// A placeholder name that would not match `{{identifier}}` syntax.
    #[error("Invalid placeholder name: '{name}'")]
    InvalidPlaceholderName {
        /// The rejected name
        name: String,
    },

    /// A value was supplied for a field the template does not have.
    #[error("Template has no placeholder named '{name}'")]
    UnknownField {
        /// The unknown field name
        name: String,
        /// Existing field names close to `name`
        similar: Vec<String>,
    },

    /// The template body was changed while the session was not editing.
    #[error("Template body is read-only outside of an edit")]
    NotEditing,

    /// `--strict` rendering found placeholders without a value.
    #[error("Placeholders without a value: {}", names.join(", "))]
    UnfilledPlaceholders {
        /// Unfilled placeholder names in first-occurrence order
        names: Vec<String>,
    },

    /// A `--set` argument that is not of the form `NAME=VALUE`.
    #[error("Invalid value assignment '{input}', expected NAME=VALUE")]
    InvalidAssignment {
        /// The raw argument
        input: String,
    },

    /// The system clipboard could not be opened or written.
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable {
        /// Reason reported by the clipboard backend
        reason: String,
    },

    /// A destructive action needs confirmation but stdin is not a terminal.
    #[error("Confirmation required to {action}")]
    ConfirmationRequired {
        /// What would have been confirmed (e.g. "remove template 'greeting'")
        action: String,
    },

    /// Global configuration is invalid or unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Any other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for FlashError {
    fn clone(&self) -> Self {
        match self {
            Self::TemplateNotFound {
                name,
                similar,
            } => Self::TemplateNotFound {
                name: name.clone(),
                similar: similar.clone(),
            },
            Self::TemplateExists {
                name,
            } => Self::TemplateExists {
                name: name.clone(),
            },
            Self::EmptyName => Self::EmptyName,
            Self::EmptyBody => Self::EmptyBody,
            Self::InvalidPlaceholderName {
                name,
            } => Self::InvalidPlaceholderName {
                name: name.clone(),
            },
            Self::UnknownField {
                name,
                similar,
            } => Self::UnknownField {
                name: name.clone(),
                similar: similar.clone(),
            },
            Self::NotEditing => Self::NotEditing,
            Self::UnfilledPlaceholders {
                names,
            } => Self::UnfilledPlaceholders {
                names: names.clone(),
            },
            Self::InvalidAssignment {
                input,
            } => Self::InvalidAssignment {
                input: input.clone(),
            },
            Self::ClipboardUnavailable {
                reason,
            } => Self::ClipboardUnavailable {
                reason: reason.clone(),
            },
            Self::ConfirmationRequired {
                action,
            } => Self::ConfirmationRequired {
                action: action.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // io::Error is not Clone
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper that adds a suggestion and details for CLI display.
///
/// # Examples
///
/// ```rust,no_run
/// use flashprompt::core::{ErrorContext, FlashError};
///
/// let context = ErrorContext::new(FlashError::EmptyName)
///     .with_suggestion("Pass a name as the first argument: flashprompt add <NAME>")
///     .with_details("Templates are looked up by name");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying FlashPrompt error
    pub error: FlashError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: FlashError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error (shown in green).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error (shown in yellow).
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// Recognizes [`FlashError`] (also when wrapped in `anyhow` context),
/// [`std::io::Error`] and TOML parse errors. Anything else is reported with
/// its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(flash_error) = error.downcast_ref::<FlashError>() {
        return create_error_context(flash_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(FlashError::IoError(std::io::Error::new(
                    io_error.kind(),
                    io_error.to_string(),
                )))
                .with_suggestion(
                    "Check the permissions of the template store and config directory",
                )
                .with_details(chain_message(&error));
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(FlashError::IoError(std::io::Error::new(
                    io_error.kind(),
                    io_error.to_string(),
                )))
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(chain_message(&error));
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(FlashError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Fix the TOML syntax in the config file, or delete it to start from defaults")
        .with_details("Run 'flashprompt config path' to see which config file is used");
    }

    ErrorContext::new(FlashError::Other {
        message: chain_message(&error),
    })
}

/// Render an error and its cause chain as one message.
fn chain_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn did_you_mean(similar: &[String]) -> Option<String> {
    match similar {
        [] => None,
        [one] => Some(format!("Did you mean '{one}'?")),
        many => Some(format!(
            "Did you mean one of: {}?",
            many.iter().map(|s| format!("'{s}'")).collect::<Vec<_>>().join(", ")
        )),
    }
}

/// Attach suggestions and details to a specific [`FlashError`].
fn create_error_context(error: FlashError) -> ErrorContext {
    match &error {
        FlashError::TemplateNotFound {
            similar,
            ..
        } => {
            let suggestion = did_you_mean(similar)
                .unwrap_or_else(|| "Run 'flashprompt list' to see saved templates".to_string());
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        FlashError::TemplateExists {
            name,
        } => {
            let suggestion = format!(
                "Choose another name, or change the existing one with 'flashprompt edit {name}'"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Template names are unique keys in the store")
        }

        FlashError::EmptyName => ErrorContext::new(error)
            .with_suggestion("Pass a non-empty name: flashprompt add <NAME> --body <TEXT>"),

        FlashError::EmptyBody => ErrorContext::new(error).with_suggestion(
            "Provide the template text with --body, --file, or on stdin",
        ),

        FlashError::InvalidPlaceholderName {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Placeholder names may only contain letters, digits and underscores")
            .with_details("Placeholders are written {{identifier}}"),

        FlashError::UnknownField {
            similar,
            ..
        } => {
            let suggestion = did_you_mean(similar).unwrap_or_else(|| {
                "Run 'flashprompt show <NAME>' to list the template's placeholders".to_string()
            });
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        FlashError::UnfilledPlaceholders {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Supply values with --set NAME=VALUE or use --interactive")
            .with_details("--strict refuses to render placeholders that have no value"),

        FlashError::InvalidAssignment {
            ..
        } => ErrorContext::new(error).with_suggestion("Use --set name=value"),

        FlashError::ClipboardUnavailable {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run without --copy and pipe the output instead")
            .with_details("No clipboard is available in headless sessions"),

        FlashError::ConfirmationRequired {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Re-run with --yes (or --force for remove) to skip the prompt"),

        _ => ErrorContext::new(error),
    }
}
