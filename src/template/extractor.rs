//! Placeholder extraction from template bodies.
//!
//! A placeholder is two literal opening braces, one or more ASCII word
//! characters (`[A-Za-z0-9_]`), and two literal closing braces:
//! `{{identifier}}`. Everything else is literal text. There are no escapes and
//! no nesting; surplus braces simply stay in the output.
//!
//! # Examples
//!
//! ```
//! use flashprompt::template::extract_placeholders;
//!
//! let names = extract_placeholders("Hello {{name}}, your {{role}} starts {{date}}");
//! assert_eq!(names, vec!["name", "role", "date"]);
//!
//! // Duplicates collapse, first occurrence wins
//! assert_eq!(extract_placeholders("{{a}}-{{b}}-{{a}}"), vec!["a", "b"]);
//!
//! // Malformed syntax is not a placeholder
//! assert!(extract_placeholders("{{not closed").is_empty());
//! assert!(extract_placeholders("{not}}").is_empty());
//! ```

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::FlashError;

/// `\w` is Unicode-aware in the regex crate, so the ASCII class is spelled out.
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is a valid regex")
});

/// One `{{name}}` occurrence in a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderOccurrence<'a> {
    /// The identifier between the braces
    pub name: &'a str,
    /// Byte range of the whole token, braces included
    pub span: Range<usize>,
}

/// Iterate over every placeholder occurrence in `body`, left to right.
///
/// Matches never overlap. Repeated names are reported every time they occur.
pub fn placeholder_occurrences(body: &str) -> impl Iterator<Item = PlaceholderOccurrence<'_>> {
    PLACEHOLDER_PATTERN.captures_iter(body).filter_map(|cap| {
        let whole = cap.get(0)?;
        let name = cap.get(1)?;
        Some(PlaceholderOccurrence {
            name: name.as_str(),
            span: whole.range(),
        })
    })
}

/// Extract the placeholder names of a template body.
///
/// Names come back in order of first occurrence with duplicates removed. The
/// function is total: text without placeholders yields an empty vector.
#[must_use]
pub fn extract_placeholders(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholder_occurrences(body)
        .filter(|occurrence| seen.insert(occurrence.name))
        .map(|occurrence| occurrence.name.to_string())
        .collect()
}

/// Check whether `name` is a valid placeholder identifier.
#[must_use]
pub fn is_valid_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Format the `{{name}}` token for a placeholder.
///
/// Used when inserting a variable into a template being written.
///
/// # Errors
///
/// Returns [`FlashError::InvalidPlaceholderName`] if `name` contains anything
/// other than ASCII letters, digits and underscores, since the resulting token
/// would not be recognized as a placeholder.
pub fn placeholder_token(name: &str) -> Result<String, FlashError> {
    let name = name.trim();
    if !is_valid_placeholder_name(name) {
        return Err(FlashError::InvalidPlaceholderName {
            name: name.to_string(),
        });
    }
    Ok(format!("{{{{{name}}}}}"))
}
