//! Field bindings and the reconciliation policy.
//!
//! [`FieldBindings`] is the ordered name → value set behind an input form.
//! Its keys must always equal the placeholder names of the body being edited,
//! in first-occurrence order. [`FieldBindings::reconcile`] re-establishes that
//! after every body change:
//!
//! 1. names already bound keep their value
//! 2. new names are added with an empty value
//! 3. names no longer in the body are dropped
//! 4. field order follows the new name list
//!
//! # Examples
//!
//! ```
//! use flashprompt::template::{FieldBindings, extract_placeholders};
//!
//! let mut bindings = FieldBindings::default();
//! bindings.reconcile(&extract_placeholders("{{a}}{{b}}"));
//! bindings.set("a", "1").unwrap();
//! bindings.set("b", "2").unwrap();
//!
//! let report = bindings.reconcile(&extract_placeholders("{{b}}{{c}}"));
//! assert_eq!(report.removed, vec!["a"]);
//! assert_eq!(report.added, vec!["c"]);
//! assert_eq!(bindings.get("b"), Some("2"));
//! assert_eq!(bindings.get("c"), Some(""));
//! assert_eq!(bindings.names().collect::<Vec<_>>(), vec!["b", "c"]);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::renderer::ValueSource;
use crate::core::FlashError;
use crate::utils::find_similar_names;

/// One input field: a placeholder name and its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Placeholder name
    pub name: String,
    /// Current value, empty until the user types something
    pub value: String,
}

/// Ordered, duplicate-free set of field bindings.
///
/// Serializes as a JSON array of `{name, value}` objects so the display order
/// survives a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldBindings {
    fields: Vec<FieldBinding>,
}

/// What a call to [`FieldBindings::reconcile`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Names that were created with an empty value
    pub added: Vec<String>,
    /// Names that were dropped together with their values
    pub removed: Vec<String>,
    /// Names that survived with their value untouched
    pub kept: Vec<String>,
}

impl ReconcileReport {
    /// True if the key set did not change.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl FieldBindings {
    /// Create empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the key set in line with `names`, preserving surviving values.
    ///
    /// `names` is expected to be the output of
    /// [`extract_placeholders`](super::extract_placeholders); if it contains a
    /// name twice only the first occurrence counts. Reconciling against the
    /// same names twice is a no-op.
    pub fn reconcile(&mut self, names: &[String]) -> ReconcileReport {
        let previous_order: Vec<String> = self.names().map(str::to_string).collect();
        let mut previous: HashMap<String, String> =
            self.fields.drain(..).map(|field| (field.name, field.value)).collect();

        let mut report = ReconcileReport::default();

        for name in names {
            if self.get(name).is_some() {
                continue;
            }
            match previous.remove(name) {
                Some(value) => {
                    report.kept.push(name.clone());
                    self.fields.push(FieldBinding {
                        name: name.clone(),
                        value,
                    });
                }
                None => {
                    report.added.push(name.clone());
                    self.fields.push(FieldBinding {
                        name: name.clone(),
                        value: String::new(),
                    });
                }
            }
        }

        // Whatever is left in `previous` was dropped; report it in old display order
        report.removed =
            previous_order.into_iter().filter(|name| previous.contains_key(name)).collect();
        report
    }

    /// Current value of `name`, or `None` if there is no such field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|field| field.name == name).map(|field| field.value.as_str())
    }

    /// Update the value of an existing field.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::UnknownField`] if `name` is not a field. Fields are
    /// only ever created by [`reconcile`](Self::reconcile), so a stray name can
    /// never break the key-set invariant.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FlashError> {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.value = value.into();
            return Ok(());
        }

        Err(FlashError::UnknownField {
            name: name.to_string(),
            similar: find_similar_names(name, &self.names().collect::<Vec<_>>()),
        })
    }

    /// The field that should receive initial focus: the first one, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.fields.first().map(|field| field.name.as_str())
    }

    /// Field names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Fields in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldBinding> {
        self.fields.iter()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the bound body has no placeholders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ValueSource for FieldBindings {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<'a> IntoIterator for &'a FieldBindings {
    type Item = &'a FieldBinding;
    type IntoIter = std::slice::Iter<'a, FieldBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
