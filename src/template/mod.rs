//! The placeholder engine.
//!
//! Everything FlashPrompt does with a template goes through this module:
//!
//! - [`extractor`] - find `{{name}}` placeholders, ordered and deduplicated
//! - [`renderer`] - literal substitution of values, missing values render empty
//! - [`bindings`] - the ordered name → value set and its reconciliation policy
//! - [`session`] - the viewing/editing state machine that ties them together
//! - [`model`] - the persisted [`Template`] record and its input validation
//!
//! The engine is synchronous and does no I/O. Extraction and rendering are
//! total functions; only input validation and unknown field names produce
//! errors.

pub mod bindings;
pub mod extractor;
pub mod model;
pub mod renderer;
pub mod session;

pub use bindings::{FieldBinding, FieldBindings, ReconcileReport};
pub use extractor::{
    PlaceholderOccurrence, extract_placeholders, is_valid_placeholder_name,
    placeholder_occurrences, placeholder_token,
};
pub use model::Template;
pub use renderer::{ValueSource, render, unbound_placeholders};
pub use session::{EditSession, SessionMode};
