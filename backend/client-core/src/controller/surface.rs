//! Abstraction over the rendering surface the controller drives.
//!
//! The original front-end reached straight into the document for its fields,
//! labels, and status element. Here those targets are an injected interface
//! of named accessors, so the controller runs against any presentation layer
//! (a terminal, a GUI, a test fake) without knowing how anything is drawn.

use crate::controller::status::StatusKind;

/// The three text buffers owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Plaintext,
    Password,
    Ciphertext,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 3] = [Field::Plaintext, Field::Password, Field::Ciphertext];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Plaintext => "plaintext",
            Field::Password => "password",
            Field::Ciphertext => "ciphertext",
        }
    }
}

/// Presentation targets the controller reads and writes.
///
/// Implementations must tolerate calls from the auto-clear task, which runs
/// on the same runtime but outside the originating event handler.
pub trait Surface: Send + Sync {
    /// Current contents of a field.
    fn field(&self, field: Field) -> String;

    /// Overwrite a field.
    fn set_field(&self, field: Field, value: &str);

    /// Update the human-readable mode label.
    fn set_mode_label(&self, label: &str);

    /// Update the action trigger's label.
    fn set_action_label(&self, label: &str);

    /// Whether a status display is attached. When this returns `false` the
    /// notifier drops messages instead of calling the methods below.
    fn has_status_display(&self) -> bool {
        true
    }

    /// Overwrite the status text (empty string clears it).
    fn set_status_text(&self, text: &str);

    /// Apply a kind marker to the status display.
    fn add_status_kind(&self, kind: StatusKind);

    /// Remove a kind marker if present; no-op otherwise.
    fn remove_status_kind(&self, kind: StatusKind);
}
