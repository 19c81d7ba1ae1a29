//! Shared test fakes for controller unit tests.

use crate::controller::status::StatusKind;
use crate::controller::surface::{Field, Surface};

use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`Surface`] recording every field, label, and status mutation.
///
/// Kind markers behave like the original display's class list: a set with
/// no duplicates, removable one at a time.
pub(crate) struct TestSurface {
    fields: Mutex<HashMap<Field, String>>,
    mode_label: Mutex<String>,
    action_label: Mutex<String>,
    status_text: Mutex<String>,
    status_kinds: Mutex<Vec<StatusKind>>,
    display_attached: bool,
}

impl TestSurface {
    pub(crate) fn new() -> Self {
        Self {
            fields: Mutex::new(HashMap::new()),
            mode_label: Mutex::new(String::new()),
            action_label: Mutex::new(String::new()),
            status_text: Mutex::new(String::new()),
            status_kinds: Mutex::new(Vec::new()),
            display_attached: true,
        }
    }

    /// A surface whose status display is missing.
    pub(crate) fn without_status_display() -> Self {
        Self {
            display_attached: false,
            ..Self::new()
        }
    }

    pub(crate) fn with_field(self, field: Field, value: &str) -> Self {
        self.set_field(field, value);
        self
    }

    pub(crate) fn mode_label(&self) -> String {
        self.mode_label.lock().unwrap().clone()
    }

    pub(crate) fn action_label(&self) -> String {
        self.action_label.lock().unwrap().clone()
    }

    pub(crate) fn status_text(&self) -> String {
        self.status_text.lock().unwrap().clone()
    }

    pub(crate) fn status_kinds(&self) -> Vec<StatusKind> {
        self.status_kinds.lock().unwrap().clone()
    }
}

impl Surface for TestSurface {
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

    fn has_status_display(&self) -> bool {
        self.display_attached
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
