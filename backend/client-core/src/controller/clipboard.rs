//! Copy-to-clipboard with a fallback path.

use crate::controller::mode::Mode;
use crate::controller::status::{StatusKind, StatusNotifier};
use crate::controller::surface::{Field, Surface};
use crate::error::clipboard::ClipboardError;

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;
use std::process::{Command, Stdio};
use std::sync::Arc;

use log::{error, warn};

const STATUS_NOTHING_TO_COPY: &str = "Nothing to copy";
const STATUS_COPIED: &str = "Copied ✓";
const STATUS_COPY_FAILED: &str = "Copy failed";

/// A destination the exporter can write text into.
pub trait ClipboardBackend: Send + Sync {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Primary path: the system clipboard via arboard.
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Fallback path: pipe the text through a platform clipboard utility.
///
/// The spawned child is reaped on every path, including when the pipe write
/// fails, so no zombie is left behind.
pub struct CommandClipboard {
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandClipboard {
    pub fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    /// The conventional utility for the build target.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", &[])
        } else if cfg!(target_os = "windows") {
            Self::new("clip", &[])
        } else {
            Self::new("xclip", &["-selection", "clipboard"])
        }
    }
}

impl ClipboardBackend for CommandClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Command {
                message: format!("failed to spawn {}: {}", self.program, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Err(std::io::Error::other("child stdin not captured")),
        };

        // Reap the child before inspecting the write outcome.
        let wait_result = child.wait();

        write_result.map_err(|e| ClipboardError::Command {
            message: format!("failed to write to {}: {}", self.program, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match wait_result {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(ClipboardError::Command {
                message: format!("{} exited with {}", self.program, status),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(ClipboardError::Command {
                message: format!("failed to wait for {}: {}", self.program, e),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Copies the mode-appropriate output field to the clipboard.
pub struct ClipboardExporter {
    surface: Arc<dyn Surface>,
    status: StatusNotifier,
    primary: Box<dyn ClipboardBackend>,
    fallback: Box<dyn ClipboardBackend>,
}

impl ClipboardExporter {
    /// Default backends: arboard first, platform utility as fallback.
    pub fn new(surface: Arc<dyn Surface>, status: StatusNotifier) -> Self {
        Self::with_backends(
            surface,
            status,
            Box::new(SystemClipboard),
            Box::new(CommandClipboard::platform_default()),
        )
    }

    pub fn with_backends(
        surface: Arc<dyn Surface>,
        status: StatusNotifier,
        primary: Box<dyn ClipboardBackend>,
        fallback: Box<dyn ClipboardBackend>,
    ) -> Self {
        Self {
            surface,
            status,
            primary,
            fallback,
        }
    }

    /// Copy the output of the current mode: the ciphertext field when
    /// encrypting, the plaintext field when decrypting, trimmed either way.
    ///
    /// An empty source reports an error without touching either backend. A
    /// primary failure falls through to the fallback; only when both fail is
    /// the action reported as failed.
    pub fn copy_current(&self, mode: Mode) {
        let source = match mode {
            Mode::Encrypt => Field::Ciphertext,
            Mode::Decrypt => Field::Plaintext,
        };
        let text = self.surface.field(source).trim().to_string();

        if text.is_empty() {
            self.status
                .set_status(STATUS_NOTHING_TO_COPY, StatusKind::Error);
            return;
        }

        match self.primary.write(&text) {
            Ok(()) => self.status.set_status(STATUS_COPIED, StatusKind::Success),
            Err(primary_error) => {
                warn!("primary clipboard write failed, trying fallback: {primary_error}");
                match self.fallback.write(&text) {
                    Ok(()) => self.status.set_status(STATUS_COPIED, StatusKind::Success),
                    Err(fallback_error) => {
                        error!("clipboard fallback failed: {fallback_error}");
                        self.status
                            .set_status(STATUS_COPY_FAILED, StatusKind::Error);
                    }
                }
            }
        }
    }
}
