//! The persisted template record.

use serde::{Deserialize, Serialize};

use super::extractor::extract_placeholders;
use crate::core::FlashError;

/// A named template body.
///
/// Serialized as `{"name": ..., "template": ...}`, the record shape of the
/// store file.
///
/// # Examples
///
/// ```
/// use flashprompt::template::Template;
///
/// let tmpl = Template::new("greeting", "Dear {{name}}, welcome to {{place}}.").unwrap();
/// assert_eq!(tmpl.placeholders(), vec!["name", "place"]);
///
/// assert!(Template::new("  ", "body").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique lookup key
    pub name: String,

    /// Template text with `{{placeholder}}` tokens
    #[serde(rename = "template")]
    pub body: String,
}

impl Template {
    /// Validate user input and build a template.
    ///
    /// Both name and body are trimmed of surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// - [`FlashError::EmptyName`] if the trimmed name is empty
    /// - [`FlashError::EmptyBody`] if the trimmed body is empty
    pub fn new(name: impl AsRef<str>, body: impl AsRef<str>) -> Result<Self, FlashError> {
        let name = name.as_ref().trim();
        let body = body.as_ref().trim();

        if name.is_empty() {
            return Err(FlashError::EmptyName);
        }
        if body.is_empty() {
            return Err(FlashError::EmptyBody);
        }

        Ok(Self {
            name: name.to_string(),
            body: body.to_string(),
        })
    }

    /// Placeholder names of the body, in first-occurrence order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<String> {
        extract_placeholders(&self.body)
    }
}
