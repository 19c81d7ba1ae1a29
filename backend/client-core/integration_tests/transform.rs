use crate::helpers::controller_for;

use client_core::controller::{Field, StatusKind, Surface};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the encrypt happy path end to end: request body, opposite
/// field write, and success status.
///
/// **WHY THIS MATTERS**: This is the tool's primary flow. The controller must
/// serialize exactly `{plaintext, password}`, and the returned token must land
/// in the ciphertext field - not back in the plaintext field it came from.
///
/// **BUG THIS CATCHES**: Would catch swapped request fields, a response parsed
/// from the wrong key, or the result written to the wrong field.
#[tokio::test]
async fn given_valid_encrypt_form_when_action_runs_then_ciphertext_field_and_success_status() {
    // GIVEN: A collaborator expecting the exact encrypt body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/encrypt"))
        .and(body_json(json!({"plaintext": "hello", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ciphertext": "XYZ"})))
        .expect(1)
        .mount(&server)
        .await;

    // GIVEN: A filled encrypt form
    let (controller, surface) = controller_for(&server.uri());
    surface.set_field(Field::Plaintext, "hello");
    surface.set_field(Field::Password, "pw");

    // WHEN: Running the action
    controller.run_action().await;

    // THEN: The token landed in the ciphertext field with a Success status
    assert_eq!(surface.field(Field::Ciphertext), "XYZ");
    assert_eq!(surface.status_text(), "Encrypted ✓");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Success]);
}

/// **VALUE**: Verifies the decrypt happy path writes the recovered plaintext.
///
/// **WHY THIS MATTERS**: Decrypt is the mirror flow with its own endpoint, body
/// shape, and target field; the two must not share a code path by accident.
///
/// **BUG THIS CATCHES**: Would catch decrypt requests hitting /encrypt, or the
/// recovered plaintext overwriting the ciphertext field.
#[tokio::test]
async fn given_valid_decrypt_form_when_action_runs_then_plaintext_field_and_success_status() {
    // GIVEN: A collaborator expecting the exact decrypt body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/decrypt"))
        .and(body_json(json!({"ciphertext": "XYZ", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"plaintext": "hello"})))
        .expect(1)
        .mount(&server)
        .await;

    // GIVEN: A filled decrypt form
    let (controller, surface) = controller_for(&server.uri());
    controller.toggle_mode(false);
    surface.set_field(Field::Ciphertext, "XYZ");
    surface.set_field(Field::Password, "pw");

    // WHEN: Running the action
    controller.run_action().await;

    // THEN: The plaintext landed with a Success status
    assert_eq!(surface.field(Field::Plaintext), "hello");
    assert_eq!(surface.status_text(), "Decrypted ✓");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Success]);
}

/// **VALUE**: Verifies a missing password sends NO request and reports the
/// password-required message.
///
/// **WHY THIS MATTERS**: Validation is the only guard between a half-filled form
/// and a pointless round trip. The zero-request expectation proves the guard
/// runs before the network call, not after.
///
/// **BUG THIS CATCHES**: Would catch validation moved after request dispatch, or
/// the password check dropped for one of the modes.
#[tokio::test]
async fn given_empty_password_when_action_runs_then_no_request_and_password_error() {
    // GIVEN: A collaborator that must never be called
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // GIVEN: Plaintext but no password
    let (controller, surface) = controller_for(&server.uri());
    surface.set_field(Field::Plaintext, "hello");

    // WHEN: Running the action
    controller.run_action().await;

    // THEN: Error status, and the mock's expect(0) verifies on drop
    assert_eq!(surface.status_text(), "Please enter password");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Error]);
}

/// **VALUE**: Verifies the mode-specific input checks: encrypt needs plaintext,
/// decrypt needs ciphertext.
///
/// **WHY THIS MATTERS**: Each mode validates its own input field; checking the
/// wrong one would let empty requests through in one direction while blocking
/// valid ones in the other.
///
/// **BUG THIS CATCHES**: Would catch the plaintext/ciphertext presence checks
/// being swapped between modes.
#[tokio::test]
async fn given_missing_mode_input_when_action_runs_then_mode_specific_error_and_no_request() {
    // GIVEN: A collaborator that must never be called
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (controller, surface) = controller_for(&server.uri());
    surface.set_field(Field::Password, "pw");

    // WHEN: Encrypting with no plaintext
    controller.run_action().await;

    // THEN: The encrypt-specific message
    assert_eq!(surface.status_text(), "Please enter plaintext");

    // WHEN: Decrypting with no ciphertext
    controller.toggle_mode(false);
    controller.run_action().await;

    // THEN: The decrypt-specific message
    assert_eq!(surface.status_text(), "Please enter ciphertext");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Error]);
}

/// **VALUE**: Verifies a protocol failure surfaces the server-supplied error
/// text and leaves the fields untouched.
///
/// **WHY THIS MATTERS**: "bad password" from the server is the only server text
/// the user ever sees verbatim; losing it leaves them guessing why decryption
/// failed. And a failed decrypt must never scribble on the plaintext field.
///
/// **BUG THIS CATCHES**: Would catch discarding the error body, or clearing /
/// overwriting fields on the failure path.
#[tokio::test]
async fn given_server_rejection_with_error_body_then_server_text_shown_fields_untouched() {
    // GIVEN: A collaborator rejecting the decrypt
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/decrypt"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad password"})))
        .expect(1)
        .mount(&server)
        .await;

    // GIVEN: A decrypt form with pre-existing plaintext content
    let (controller, surface) = controller_for(&server.uri());
    controller.toggle_mode(false);
    surface.set_field(Field::Plaintext, "previous content");
    surface.set_field(Field::Ciphertext, "XYZ");
    surface.set_field(Field::Password, "pw");

    // WHEN: Running the action
    controller.run_action().await;

    // THEN: The server's text is displayed and the plaintext is unchanged
    assert_eq!(surface.status_text(), "bad password");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Error]);
    assert_eq!(surface.field(Field::Plaintext), "previous content");
}

/// **VALUE**: Verifies a protocol failure WITHOUT an error body falls back to
/// the generic per-mode failure message.
///
/// **WHY THIS MATTERS**: Servers under stress return empty or non-JSON error
/// pages; the controller must still produce a readable outcome instead of
/// showing nothing or crashing on the body parse.
///
/// **BUG THIS CATCHES**: Would catch the missing-body case being routed to the
/// transport error path or panicking on the decode.
#[tokio::test]
async fn given_server_rejection_without_body_when_action_runs_then_generic_mode_failure_shown() {
    // GIVEN: A collaborator failing with an empty 500
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/encrypt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (controller, surface) = controller_for(&server.uri());
    surface.set_field(Field::Plaintext, "hello");
    surface.set_field(Field::Password, "pw");

    // WHEN: Running the action
    controller.run_action().await;

    // THEN: The generic encrypt failure message is shown
    assert_eq!(surface.status_text(), "Encryption failed");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Error]);
}

/// **VALUE**: Verifies a transport-level failure reports the generic network
/// error.
///
/// **WHY THIS MATTERS**: When the collaborator is down there is no response to
/// interpret; the user still needs a terminal outcome rather than a spinner
/// stuck on "Encrypting...".
///
/// **BUG THIS CATCHES**: Would catch the reqwest error path leaking a raw error
/// string to the user or leaving the busy status in place.
#[tokio::test]
async fn given_unreachable_server_when_action_runs_then_network_error_status() {
    // GIVEN: A base URL whose server has gone away. A pooled server from
    // MockServer::start() keeps listening after drop, so use a non-pooled one
    // that actually shuts down.
    let server = MockServer::builder().start().await;
    let dead_url = server.uri();
    drop(server);

    let (controller, surface) = controller_for(&dead_url);
    surface.set_field(Field::Plaintext, "hello");
    surface.set_field(Field::Password, "pw");

    // WHEN: Running the action
    controller.run_action().await;

    // THEN: The generic transport message is shown
    assert_eq!(surface.status_text(), "Network or server error");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Error]);
}

/// **VALUE**: Verifies a 2xx response missing the expected success field is
/// treated as a failure, not a silent empty write.
///
/// **WHY THIS MATTERS**: The original front-end would have written `undefined`
/// into the output field here. The redesign treats a success response without
/// the promised field as an error and leaves the fields alone.
///
/// **BUG THIS CATCHES**: Would catch lenient response parsing that defaults the
/// missing field to an empty string.
#[tokio::test]
async fn given_success_response_missing_field_when_action_runs_then_network_error_and_no_write() {
    // GIVEN: A collaborator answering 200 with the wrong shape
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/encrypt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (controller, surface) = controller_for(&server.uri());
    surface.set_field(Field::Plaintext, "hello");
    surface.set_field(Field::Password, "pw");

    // WHEN: Running the action
    controller.run_action().await;

    // THEN: Transport-class error, ciphertext field untouched
    assert_eq!(surface.status_text(), "Network or server error");
    assert_eq!(surface.status_kinds(), vec![StatusKind::Error]);
    assert_eq!(surface.field(Field::Ciphertext), "");
}

/// **VALUE**: Verifies clear_fields empties the form even right after a
/// completed round trip populated it.
///
/// **WHY THIS MATTERS**: The reset must hold regardless of prior content,
/// including content the controller itself just wrote.
///
/// **BUG THIS CATCHES**: Would catch the resetter missing a field the transform
/// handler writes through a different path.
#[tokio::test]
async fn given_completed_transform_when_fields_cleared_then_all_empty() {
    // GIVEN: A completed encrypt round trip
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/encrypt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ciphertext": "XYZ"})))
        .mount(&server)
        .await;

    let (controller, surface) = controller_for(&server.uri());
    surface.set_field(Field::Plaintext, "hello");
    surface.set_field(Field::Password, "pw");
    controller.run_action().await;
    assert_eq!(surface.field(Field::Ciphertext), "XYZ");

    // WHEN: Clearing the form
    controller.clear_fields();

    // THEN: All three fields are empty
    for field in Field::ALL {
        assert_eq!(surface.field(field), "");
    }
}
