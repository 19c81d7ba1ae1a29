//! The transform action: validate, request, reconcile.

use crate::controller::mode::Mode;
use crate::controller::status::{StatusKind, StatusNotifier};
use crate::controller::surface::{Field, Surface};
use crate::error::transform_client::TransformClientError;
use crate::transform_client::TransformClient;

use common::RedactedPassword;

use std::sync::Arc;

use log::{error, warn};

const STATUS_PASSWORD_REQUIRED: &str = "Please enter password";
const STATUS_PLAINTEXT_REQUIRED: &str = "Please enter plaintext";
const STATUS_CIPHERTEXT_REQUIRED: &str = "Please enter ciphertext";
const STATUS_ENCRYPTING: &str = "Encrypting...";
const STATUS_DECRYPTING: &str = "Decrypting...";
const STATUS_ENCRYPTED: &str = "Encrypted ✓";
const STATUS_DECRYPTED: &str = "Decrypted ✓";
const STATUS_ENCRYPT_FAILED: &str = "Encryption failed";
const STATUS_DECRYPT_FAILED: &str = "Decryption failed";
const STATUS_TRANSPORT_FAILED: &str = "Network or server error";

/// Runs the mode-appropriate transform round trip and routes the outcome to
/// the status notifier and the opposite form field.
pub struct TransformHandler {
    surface: Arc<dyn Surface>,
    status: StatusNotifier,
    client: TransformClient,
}

impl TransformHandler {
    pub fn new(surface: Arc<dyn Surface>, status: StatusNotifier, client: TransformClient) -> Self {
        Self {
            surface,
            status,
            client,
        }
    }

    /// Validate the form for `mode`, then perform the round trip.
    ///
    /// Validation failures report an Error status and send nothing. On
    /// success the transformed text lands in the opposite field; on any
    /// failure the fields are left untouched. Overlapping invocations are
    /// not deduplicated; whichever settles last wins the status and field
    /// writes.
    pub async fn run_action(&self, mode: Mode) {
        let plaintext = self.surface.field(Field::Plaintext);
        let password = RedactedPassword::new(self.surface.field(Field::Password));
        let ciphertext = self.surface.field(Field::Ciphertext);

        // Password first, then the mode's input field.
        if password.is_empty() {
            self.status
                .set_status(STATUS_PASSWORD_REQUIRED, StatusKind::Error);
            return;
        }
        match mode {
            Mode::Encrypt if plaintext.is_empty() => {
                self.status
                    .set_status(STATUS_PLAINTEXT_REQUIRED, StatusKind::Error);
                return;
            }
            Mode::Decrypt if ciphertext.is_empty() => {
                self.status
                    .set_status(STATUS_CIPHERTEXT_REQUIRED, StatusKind::Error);
                return;
            }
            _ => {}
        }

        let busy = match mode {
            Mode::Encrypt => STATUS_ENCRYPTING,
            Mode::Decrypt => STATUS_DECRYPTING,
        };
        self.status.set_status(busy, StatusKind::Info);

        let result = match mode {
            Mode::Encrypt => self.client.encrypt(&plaintext, &password).await,
            Mode::Decrypt => self.client.decrypt(&ciphertext, &password).await,
        };

        match result {
            Ok(output) => {
                let (target, done) = match mode {
                    Mode::Encrypt => (Field::Ciphertext, STATUS_ENCRYPTED),
                    Mode::Decrypt => (Field::Plaintext, STATUS_DECRYPTED),
                };
                self.surface.set_field(target, &output);
                self.status.set_status(done, StatusKind::Success);
            }
            Err(TransformClientError::Server {
                message, status, ..
            }) => {
                warn!("transform rejected by server with HTTP {status}");
                let fallback = match mode {
                    Mode::Encrypt => STATUS_ENCRYPT_FAILED,
                    Mode::Decrypt => STATUS_DECRYPT_FAILED,
                };
                let text = message.unwrap_or_else(|| fallback.to_string());
                self.status.set_status(&text, StatusKind::Error);
            }
            Err(err) => {
                error!("transform request failed: {err}");
                self.status
                    .set_status(STATUS_TRANSPORT_FAILED, StatusKind::Error);
            }
        }
    }
}
