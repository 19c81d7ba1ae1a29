// Unit tests for the field resetter

use crate::controller::fields::FieldResetter;
use crate::controller::surface::{Field, Surface};
use crate::tests::helpers::TestSurface;

use std::sync::Arc;

/// **VALUE**: Verifies clear_fields empties all three fields regardless of prior
/// content.
///
/// **WHY THIS MATTERS**: The clear action is the user's "start over" escape
/// hatch. A field that survives the reset (the password especially) is exactly
/// the kind of leftover that causes a confusing next run.
///
/// **BUG THIS CATCHES**: Would catch a resetter that iterates a stale field list
/// and misses one of the three buffers.
#[test]
fn given_populated_fields_when_cleared_then_all_three_are_empty() {
    // GIVEN: All three fields populated
    let surface = Arc::new(
        TestSurface::new()
            .with_field(Field::Plaintext, "hello")
            .with_field(Field::Password, "pw")
            .with_field(Field::Ciphertext, "XYZ"),
    );
    let resetter = FieldResetter::new(Arc::clone(&surface) as Arc<dyn Surface>);

    // WHEN: Clearing
    resetter.clear_fields();

    // THEN: Every field is empty
    for field in Field::ALL {
        assert_eq!(surface.field(field), "", "{} should be empty", field.name());
    }
}

/// **VALUE**: Verifies clearing is idempotent and has no status side effect.
///
/// **WHY THIS MATTERS**: The contract says clear touches fields and nothing
/// else; a status write here would stomp feedback from an in-flight transform.
///
/// **BUG THIS CATCHES**: Would catch a resetter that reports its own outcome
/// through the notifier.
#[test]
fn given_empty_fields_when_cleared_again_then_still_empty_and_status_untouched() {
    // GIVEN: An empty form with a visible status
    let surface = Arc::new(TestSurface::new());
    surface.set_status_text("Encrypting...");
    let resetter = FieldResetter::new(Arc::clone(&surface) as Arc<dyn Surface>);

    // WHEN: Clearing twice
    resetter.clear_fields();
    resetter.clear_fields();

    // THEN: Fields empty, status untouched
    for field in Field::ALL {
        assert_eq!(surface.field(field), "");
    }
    assert_eq!(surface.status_text(), "Encrypting...");
}
