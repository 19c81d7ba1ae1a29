//! Transient, classified status messages with debounced auto-clear.

use crate::controller::surface::Surface;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::warn;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Non-Error messages disappear on their own after this long.
pub const AUTO_CLEAR_DELAY: Duration = Duration::from_millis(3000);

/// Classification applied to a visible status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [StatusKind::Info, StatusKind::Success, StatusKind::Error];

    /// Marker name as applied to the status display.
    pub fn marker(&self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Owns the single visible status message and its one pending auto-clear.
///
/// Every call replaces whatever was displayed before, and cancels any
/// scheduled clear before deciding whether to schedule a new one. An earlier
/// clear can therefore never fire after a later message was set. Error
/// messages are sticky: they stay until the next call replaces them.
#[derive(Clone)]
pub struct StatusNotifier {
    surface: Arc<dyn Surface>,
    pending_clear: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl StatusNotifier {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            surface,
            pending_clear: Arc::new(Mutex::new(None)),
        }
    }

    /// Clear the visible status immediately.
    pub fn clear(&self) {
        self.set_status("", StatusKind::Info);
    }

    /// Display `message` with `kind`, replacing the prior message.
    ///
    /// An empty `message` clears the display and applies no marker. When no
    /// status display is attached the call is dropped with a warning and
    /// never raises.
    pub fn set_status(&self, message: &str, kind: StatusKind) {
        if !self.surface.has_status_display() {
            warn!("status display not attached; dropping message: {message}");
            return;
        }

        self.surface.set_status_text(message);

        for marker in StatusKind::ALL {
            self.surface.remove_status_kind(marker);
        }
        if !message.is_empty() {
            self.surface.add_status_kind(kind);
        }

        self.cancel_pending_clear();

        if !message.is_empty() && kind != StatusKind::Error {
            let surface = Arc::clone(&self.surface);
            let handle = tokio::spawn(async move {
                sleep(AUTO_CLEAR_DELAY).await;
                surface.set_status_text("");
                // An error marker applied by a racing later message is left
                // alone; only the auto-clearable kinds come off.
                surface.remove_status_kind(StatusKind::Info);
                surface.remove_status_kind(StatusKind::Success);
            });

            if let Ok(mut pending) = self.pending_clear.lock() {
                *pending = Some(handle);
            }
        }
    }

    /// Abort the scheduled auto-clear if one exists. Idempotent.
    fn cancel_pending_clear(&self) {
        if let Ok(mut pending) = self.pending_clear.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}
