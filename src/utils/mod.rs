//! Cross-platform utilities and helpers
//!
//! - [`fs`] - File system operations with atomic writes
//! - [`suggest`] - "Did you mean" lookups for mistyped names

pub mod fs;
pub mod suggest;

pub use fs::{atomic_write, ensure_dir, safe_write};
pub use suggest::find_similar_names;
