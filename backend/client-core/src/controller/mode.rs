//! Exclusive encrypt/decrypt mode and its labels.

use crate::controller::surface::Surface;

use std::sync::{Arc, Mutex};

/// Transformation direction. Exactly one is active for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Capitalized mode name, shown on both the mode label and the action
    /// trigger.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Encrypt => "Encrypt",
            Mode::Decrypt => "Decrypt",
        }
    }
}

/// Owns the current [`Mode`] and keeps the mode-dependent labels in sync.
///
/// Toggling never touches the form fields or the status message.
pub struct ModeController {
    surface: Arc<dyn Surface>,
    mode: Mutex<Mode>,
}

impl ModeController {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            surface,
            mode: Mutex::new(Mode::default()),
        }
    }

    /// Read the active mode.
    pub fn current(&self) -> Mode {
        self.mode.lock().map(|mode| *mode).unwrap_or_default()
    }

    /// Set the mode from the toggle control's checked state and push the
    /// capitalized mode name to both labels. Cannot fail; repeated identical
    /// toggles are idempotent.
    pub fn toggle(&self, is_encrypt_checked: bool) {
        let next = if is_encrypt_checked {
            Mode::Encrypt
        } else {
            Mode::Decrypt
        };

        if let Ok(mut mode) = self.mode.lock() {
            *mode = next;
        }

        self.push_labels(next);
    }

    /// Push the current mode's labels to the surface. Called once at
    /// construction so the presentation starts consistent.
    pub fn sync_labels(&self) {
        self.push_labels(self.current());
    }

    fn push_labels(&self, mode: Mode) {
        self.surface.set_mode_label(mode.label());
        self.surface.set_action_label(mode.label());
    }
}
