//! Global constants used throughout the FlashPrompt codebase.
//!
//! File names, directory names and environment variables that more than one
//! module needs to agree on live here so they are defined exactly once.

/// Name of the per-user application directory.
///
/// Used as `~/.flashprompt` on Unix-like systems and as
/// `%LOCALAPPDATA%\flashprompt` on Windows.
pub const APP_DIR_NAME: &str = "flashprompt";

/// File name of the template store inside the save directory.
pub const STORE_FILE_NAME: &str = "prompts.json";

/// File name of the global configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that overrides the global config file location.
pub const CONFIG_PATH_ENV: &str = "FLASHPROMPT_CONFIG";

/// Environment variable that overrides the template store location.
pub const STORE_PATH_ENV: &str = "FLASHPROMPT_STORE";

/// Maximum number of "did you mean" suggestions shown for an unknown name.
pub const MAX_NAME_SUGGESTIONS: usize = 3;

/// Maximum Levenshtein distance, as a percentage of the target length, for a
/// name to count as a suggestion.
pub const SIMILARITY_THRESHOLD_PERCENT: usize = 50;
