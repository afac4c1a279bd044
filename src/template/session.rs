//! Editing session over one template.
//!
//! An [`EditSession`] owns the field bindings and the body buffer of one opened
//! template and keeps the preview in sync with both. It has two states:
//!
//! ```text
//!            start_editing()
//!   Viewing ─────────────────▶ Editing ──┐ on_template_body_changed()
//!      ▲                          │  ◀───┘
//!      └──── save() / discard() ──┘
//! ```
//!
//! - In `Viewing` the body is read-only; field values are editable.
//! - In `Editing` every body change re-reconciles the fields and re-renders.
//! - `save` commits the draft; `discard` reverts to the committed body and
//!   reconciles against it again, since fields may have come and gone while
//!   editing.
//!
//! Both entry points, [`on_template_body_changed`](EditSession::on_template_body_changed)
//! and [`on_field_value_changed`](EditSession::on_field_value_changed), end in
//! the same refresh step, the only place the field set is derived from a body.
//!
//! # Examples
//!
//! ```
//! use flashprompt::template::{EditSession, Template};
//!
//! let tmpl = Template::new("greeting", "Dear {{name}}, welcome to {{place}}.").unwrap();
//! let mut session = EditSession::open(tmpl);
//! assert_eq!(session.primary_field(), Some("name"));
//!
//! session.on_field_value_changed("name", "Alice").unwrap();
//! session.on_field_value_changed("place", "Wonderland").unwrap();
//! assert_eq!(session.preview(), "Dear Alice, welcome to Wonderland.");
//! ```

use serde::Serialize;
use tracing::debug;

use super::bindings::{FieldBindings, ReconcileReport};
use super::extractor::extract_placeholders;
use super::model::Template;
use super::renderer::render;
use crate::core::FlashError;

/// State of an [`EditSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Body read-only, values editable, live preview
    Viewing,
    /// Body editable; each change re-reconciles the fields
    Editing,
}

/// Live state behind one opened template.
#[derive(Debug, Clone)]
pub struct EditSession {
    committed: Template,
    draft: Option<String>,
    bindings: FieldBindings,
    preview: String,
}

impl EditSession {
    /// Open `template` in [`SessionMode::Viewing`] with empty field values.
    #[must_use]
    pub fn open(template: Template) -> Self {
        let mut session = Self {
            committed: template,
            draft: None,
            bindings: FieldBindings::new(),
            preview: String::new(),
        };
        session.refresh();
        session
    }

    /// Current state.
    #[must_use]
    pub const fn mode(&self) -> SessionMode {
        if self.draft.is_some() {
            SessionMode::Editing
        } else {
            SessionMode::Viewing
        }
    }

    /// The last committed template.
    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.committed
    }

    /// The body the fields and preview are derived from: the draft while
    /// editing, the committed body otherwise.
    #[must_use]
    pub fn current_body(&self) -> &str {
        self.draft.as_deref().unwrap_or(&self.committed.body)
    }

    /// Rendered preview for the current body and values.
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Current field bindings, in display order.
    #[must_use]
    pub const fn bindings(&self) -> &FieldBindings {
        &self.bindings
    }

    /// Field that should receive initial focus.
    #[must_use]
    pub fn primary_field(&self) -> Option<&str> {
        self.bindings.primary()
    }

    /// True while editing with a draft that differs from the committed body.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft.as_deref().is_some_and(|draft| draft != self.committed.body)
    }

    /// Enter [`SessionMode::Editing`]. Does nothing if already editing.
    pub fn start_editing(&mut self) {
        if self.draft.is_none() {
            debug!(template = %self.committed.name, "Started editing");
            self.draft = Some(self.committed.body.clone());
            self.refresh();
        }
    }

    /// Replace the draft body and re-derive fields and preview.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::NotEditing`] in [`SessionMode::Viewing`].
    pub fn on_template_body_changed(
        &mut self,
        body: impl Into<String>,
    ) -> Result<ReconcileReport, FlashError> {
        let Some(draft) = self.draft.as_mut() else {
            return Err(FlashError::NotEditing);
        };
        *draft = body.into();
        Ok(self.refresh())
    }

    /// Update one field value and re-render.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::UnknownField`] if the current body has no such
    /// placeholder. The bindings are left untouched in that case.
    pub fn on_field_value_changed(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FlashError> {
        self.bindings.set(name, value)?;
        self.refresh();
        Ok(())
    }

    /// Commit the draft as the template body and return to viewing.
    ///
    /// Surrounding whitespace of the draft is trimmed. In
    /// [`SessionMode::Viewing`] this does nothing. Returns the committed
    /// template.
    pub fn save(&mut self) -> &Template {
        if let Some(draft) = self.draft.take() {
            self.committed.body = draft.trim().to_string();
            debug!(template = %self.committed.name, "Saved template body");
            self.refresh();
        }
        &self.committed
    }

    /// Drop the draft, revert to the committed body and return to viewing.
    ///
    /// Values of fields that exist in the committed body are kept. In
    /// [`SessionMode::Viewing`] this does nothing.
    pub fn discard(&mut self) -> ReconcileReport {
        if self.draft.take().is_some() {
            debug!(template = %self.committed.name, "Discarded template edit");
            self.refresh()
        } else {
            ReconcileReport::default()
        }
    }

    /// Reconcile the fields against the current body, then re-render.
    fn refresh(&mut self) -> ReconcileReport {
        let names = extract_placeholders(self.current_body());
        let report = self.bindings.reconcile(&names);
        if !report.is_unchanged() {
            debug!(added = ?report.added, removed = ?report.removed, "Reconciled fields");
        }
        self.preview = render(self.current_body(), &self.bindings);
        report
    }
}
