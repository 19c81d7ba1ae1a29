//! Form reset.

use crate::controller::surface::{Field, Surface};

use std::sync::Arc;

/// Clears all three form fields. No status side effect, cannot fail.
pub struct FieldResetter {
    surface: Arc<dyn Surface>,
}

impl FieldResetter {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self { surface }
    }

    pub fn clear_fields(&self) {
        for field in Field::ALL {
            self.surface.set_field(field, "");
        }
    }
}
