//! Shared fixtures for controller integration tests.
//!
//! The collaborator service is stubbed with wiremock; the presentation layer
//! is an in-memory `Surface` recording everything the controller writes.

use client_core::controller::{CipherController, Field, StatusKind, Surface};
use client_core::transform_client::TransformClient;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Request timeout for tests; short so transport-failure tests finish fast.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory surface recording fields, labels, and status mutations.
pub struct RecordingSurface {
    fields: Mutex<HashMap<Field, String>>,
    mode_label: Mutex<String>,
    action_label: Mutex<String>,
    status_text: Mutex<String>,
    status_kinds: Mutex<Vec<StatusKind>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            fields: Mutex::new(HashMap::new()),
            mode_label: Mutex::new(String::new()),
            action_label: Mutex::new(String::new()),
            status_text: Mutex::new(String::new()),
            status_kinds: Mutex::new(Vec::new()),
        }
    }

    pub fn status_text(&self) -> String {
        self.status_text.lock().unwrap().clone()
    }

    pub fn status_kinds(&self) -> Vec<StatusKind> {
        self.status_kinds.lock().unwrap().clone()
    }
}

impl Surface for RecordingSurface {
    fn field(&self, field: Field) -> String {
        self.fields
            .lock()
            .unwrap()
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn set_field(&self, field: Field, value: &str) {
        self.fields.lock().unwrap().insert(field, value.to_string());
    }

    fn set_mode_label(&self, label: &str) {
        *self.mode_label.lock().unwrap() = label.to_string();
    }

    fn set_action_label(&self, label: &str) {
        *self.action_label.lock().unwrap() = label.to_string();
    }

    fn set_status_text(&self, text: &str) {
        *self.status_text.lock().unwrap() = text.to_string();
    }

    fn add_status_kind(&self, kind: StatusKind) {
        let mut kinds = self.status_kinds.lock().unwrap();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    fn remove_status_kind(&self, kind: StatusKind) {
        self.status_kinds.lock().unwrap().retain(|k| *k != kind);
    }
}

/// Build a controller over a fresh recording surface, pointed at `base_url`.
pub fn controller_for(base_url: &str) -> (CipherController, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::new());
    let client = TransformClient::with_timeout(base_url, TEST_TIMEOUT)
        .expect("test base URL should parse");
    let controller = CipherController::new(Arc::clone(&surface) as Arc<dyn Surface>, client);
    (controller, surface)
}
