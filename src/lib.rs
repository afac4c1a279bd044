//! FlashPrompt - reusable prompt templates with `{{placeholder}}` fields.
//!
//! A template is a named body of text. Every `{{name}}` in it is a
//! placeholder that becomes an input field; rendering substitutes the field
//! values literally and the result can be copied to the clipboard.
//!
//! # Architecture Overview
//!
//! - The [`template`] engine is pure and synchronous: extraction, rendering,
//!   the field reconciliation policy and the viewing/editing session.
//! - [`store`], [`clipboard`] and [`config`] are the thin surfaces around it:
//!   a JSON file, the system clipboard and a TOML settings file.
//! - [`cli`] wires them together as `flashprompt` subcommands.
//!
//! # Core Modules
//!
//! - [`template`] - placeholder extraction, rendering, bindings and sessions
//! - [`store`] - `prompts.json` persistence
//! - [`clipboard`] - clipboard sinks for rendered output
//! - [`config`] - user settings (`~/.flashprompt/config.toml`)
//! - [`core`] - error types and user-facing error formatting
//! - [`cli`] - command-line interface
//! - [`utils`] - atomic file writes and name suggestions
//!
//! # Example
//!
//! ```
//! use flashprompt::template::{EditSession, Template};
//!
//! let tmpl = Template::new("greeting", "Dear {{name}}, welcome to {{place}}.")?;
//! let mut session = EditSession::open(tmpl);
//! assert_eq!(session.bindings().names().collect::<Vec<_>>(), vec!["name", "place"]);
//!
//! session.on_field_value_changed("name", "Alice")?;
//! session.on_field_value_changed("place", "Wonderland")?;
//! assert_eq!(session.preview(), "Dear Alice, welcome to Wonderland.");
//! # Ok::<(), flashprompt::core::FlashError>(())
//! ```

// Placeholder engine
pub mod template;

// Surfaces
pub mod clipboard;
pub mod config;
pub mod store;

// Supporting modules
pub mod cli;
pub mod constants;
pub mod core;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
