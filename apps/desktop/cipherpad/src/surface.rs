//! Terminal implementation of the controller's rendering surface.

use client_core::controller::{Field, StatusKind, Surface};

use std::collections::HashMap;
use std::sync::Mutex;

/// A [`Surface`] backed by in-memory buffers, echoing changes to stdout.
///
/// The controller treats this exactly like any other presentation layer:
/// it reads and writes fields, pushes labels, and drives the status display.
/// Status output is printed when the kind marker is applied, which happens
/// after the text is set, so the line carries both.
pub struct TerminalSurface {
    fields: Mutex<HashMap<Field, String>>,
    mode_label: Mutex<String>,
    action_label: Mutex<String>,
    status_text: Mutex<String>,
    status_kinds: Mutex<Vec<StatusKind>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            fields: Mutex::new(HashMap::new()),
            mode_label: Mutex::new(String::new()),
            action_label: Mutex::new(String::new()),
            status_text: Mutex::new(String::new()),
            status_kinds: Mutex::new(Vec::new()),
        }
    }

    pub fn mode_label(&self) -> String {
        self.mode_label.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn action_label(&self) -> String {
        self.action_label
            .lock()
            .map(|l| l.clone())
            .unwrap_or_default()
    }

    pub fn status_line(&self) -> String {
        let text = self.status_text.lock().map(|t| t.clone()).unwrap_or_default();
        let kinds = self
            .status_kinds
            .lock()
            .map(|k| k.clone())
            .unwrap_or_default();
        match kinds.first() {
            Some(kind) if !text.is_empty() => format!("[{}] {}", kind.marker(), text),
            _ => text,
        }
    }

    fn echo_field(field: Field, value: &str) {
        // Never echo the password back to the terminal.
        if field == Field::Password {
            println!("password = {}", "*".repeat(value.chars().count()));
        } else {
            println!("{} = {}", field.name(), value);
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn field(&self, field: Field) -> String {
        self.fields
            .lock()
            .map(|fields| fields.get(&field).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn set_field(&self, field: Field, value: &str) {
        if let Ok(mut fields) = self.fields.lock() {
            fields.insert(field, value.to_string());
        }
        Self::echo_field(field, value);
    }

    fn set_mode_label(&self, label: &str) {
        if let Ok(mut mode_label) = self.mode_label.lock() {
            if *mode_label != label {
                println!("mode: {label}");
            }
            *mode_label = label.to_string();
        }
    }

    fn set_action_label(&self, label: &str) {
        if let Ok(mut action_label) = self.action_label.lock() {
            *action_label = label.to_string();
        }
    }

    fn set_status_text(&self, text: &str) {
        if let Ok(mut status_text) = self.status_text.lock() {
            *status_text = text.to_string();
        }
    }

    fn add_status_kind(&self, kind: StatusKind) {
        if let Ok(mut kinds) = self.status_kinds.lock() {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        println!("{}", self.status_line());
    }

    fn remove_status_kind(&self, kind: StatusKind) {
        if let Ok(mut kinds) = self.status_kinds.lock() {
            kinds.retain(|k| *k != kind);
        }
    }
}
