//! Core types shared across FlashPrompt.
//!
//! - [`FlashError`] - strongly typed errors for every failure mode
//! - [`ErrorContext`] - user-facing wrapper with details and a suggestion
//! - [`user_friendly_error`] - convert any `anyhow::Error` for CLI display

pub mod error;

pub use error::{ErrorContext, FlashError, user_friendly_error};
