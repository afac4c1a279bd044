//! File system utilities.
//!
//! - [`atomic`] - temp-and-rename writes for the template store
//! - [`dirs`] - directory creation helpers

pub mod atomic;
pub mod dirs;

pub use atomic::{atomic_write, safe_write};
pub use dirs::{ensure_dir, ensure_parent_dir};
