//! The interaction controller.
//!
//! Everything the user can do - toggle the mode, run a transform, copy the
//! result, clear the form - flows through [`CipherController`]. The controller
//! is constructed once per session and owns the five cooperating components,
//! each wired to the same injected [`Surface`] and the same [`StatusNotifier`].
//! There is no ambient global state.

pub mod clipboard;
pub mod fields;
pub mod mode;
pub mod status;
pub mod surface;
pub mod transform;

pub use clipboard::{ClipboardBackend, ClipboardExporter};
pub use fields::FieldResetter;
pub use mode::{Mode, ModeController};
pub use status::{StatusKind, StatusNotifier};
pub use surface::{Field, Surface};
pub use transform::TransformHandler;

use crate::transform_client::TransformClient;

use std::sync::Arc;

/// Session-scoped controller owning mode, status, and the action handlers.
pub struct CipherController {
    mode: ModeController,
    transform: TransformHandler,
    clipboard: ClipboardExporter,
    fields: FieldResetter,
}

impl CipherController {
    /// Wire up a controller over `surface`, talking to `client`, with the
    /// default clipboard backends.
    pub fn new(surface: Arc<dyn Surface>, client: TransformClient) -> Self {
        let status = StatusNotifier::new(Arc::clone(&surface));
        let clipboard = ClipboardExporter::new(Arc::clone(&surface), status.clone());
        Self::assemble(surface, client, status, clipboard)
    }

    /// Wire up a controller with injected clipboard backends. Used by tests
    /// and by surfaces that bring their own clipboard integration.
    pub fn with_clipboard_backends(
        surface: Arc<dyn Surface>,
        client: TransformClient,
        primary: Box<dyn ClipboardBackend>,
        fallback: Box<dyn ClipboardBackend>,
    ) -> Self {
        let status = StatusNotifier::new(Arc::clone(&surface));
        let clipboard = ClipboardExporter::with_backends(
            Arc::clone(&surface),
            status.clone(),
            primary,
            fallback,
        );
        Self::assemble(surface, client, status, clipboard)
    }

    fn assemble(
        surface: Arc<dyn Surface>,
        client: TransformClient,
        status: StatusNotifier,
        clipboard: ClipboardExporter,
    ) -> Self {
        let mode = ModeController::new(Arc::clone(&surface));
        mode.sync_labels();

        let transform = TransformHandler::new(Arc::clone(&surface), status.clone(), client);
        let fields = FieldResetter::new(surface);

        Self {
            mode,
            transform,
            clipboard,
            fields,
        }
    }

    /// Current transformation direction.
    pub fn mode(&self) -> Mode {
        self.mode.current()
    }

    /// Switch the mode; `true` selects Encrypt, `false` Decrypt.
    pub fn toggle_mode(&self, is_encrypt_checked: bool) {
        self.mode.toggle(is_encrypt_checked);
    }

    /// Validate the form and run the mode-appropriate transform round trip.
    pub async fn run_action(&self) {
        self.transform.run_action(self.mode.current()).await;
    }

    /// Copy the mode-appropriate output field to the system clipboard.
    pub fn copy_current(&self) {
        self.clipboard.copy_current(self.mode.current());
    }

    /// Clear all three form fields.
    pub fn clear_fields(&self) {
        self.fields.clear_fields();
    }
}
