//! Literal placeholder substitution.
//!
//! Rendering replaces every `{{name}}` occurrence with the value bound to
//! `name` and leaves everything else byte-for-byte intact. It is plain text
//! replacement, not a formatting language:
//!
//! - `%`, `$`, single braces and format-specifier-like text pass through
//!   unchanged, both in the template's literal text and in substituted values
//! - substituted values are never re-scanned, so a value containing
//!   `{{other}}` is emitted as-is
//! - a placeholder with no binding renders as the empty string
//!
//! Rendering therefore never fails.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use flashprompt::template::render;
//!
//! let mut values = HashMap::new();
//! values.insert("name".to_string(), "100% {cool}".to_string());
//! assert_eq!(render("Hi {{name}}", &values), "Hi 100% {cool}");
//!
//! let mut values = HashMap::new();
//! values.insert("x".to_string(), "A".to_string());
//! assert_eq!(render("{{x}}{{y}}", &values), "A");
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use super::extractor::placeholder_occurrences;

/// A lookup from placeholder name to its current value.
///
/// Implemented for the standard maps and for
/// [`FieldBindings`](super::FieldBindings), so the renderer can be driven by a
/// live session or by a plain mapping.
pub trait ValueSource {
    /// The value bound to `name`, if any.
    fn value_of(&self, name: &str) -> Option<&str>;
}

impl<S: std::hash::BuildHasher> ValueSource for HashMap<String, String, S> {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ValueSource for BTreeMap<String, String> {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn value_of(&self, name: &str) -> Option<&str> {
        (**self).value_of(name)
    }
}

/// Render `body` with the values from `values`.
///
/// Missing bindings substitute the empty string.
#[must_use]
pub fn render<V: ValueSource + ?Sized>(body: &str, values: &V) -> String {
    let mut output = String::with_capacity(body.len());
    let mut last = 0;

    for occurrence in placeholder_occurrences(body) {
        output.push_str(&body[last..occurrence.span.start]);
        if let Some(value) = values.value_of(occurrence.name) {
            output.push_str(value);
        }
        last = occurrence.span.end;
    }

    output.push_str(&body[last..]);
    output
}

/// Placeholder names in `body` that have no binding or an empty value.
///
/// Names are reported once each, in first-occurrence order. This does not
/// change how [`render`] behaves; callers use it to warn about, or refuse,
/// output with blanks in it.
#[must_use]
pub fn unbound_placeholders<V: ValueSource + ?Sized>(body: &str, values: &V) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholder_occurrences(body)
        .filter(|occurrence| seen.insert(occurrence.name))
        .filter(|occurrence| values.value_of(occurrence.name).is_none_or(str::is_empty))
        .map(|occurrence| occurrence.name.to_string())
        .collect()
}
