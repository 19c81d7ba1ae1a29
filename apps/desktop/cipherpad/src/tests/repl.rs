// Unit tests for the REPL command parser

use crate::repl::{Command, parse};

use client_core::controller::Field;

/// **VALUE**: Verifies every keyword parses to its command, including the
/// encrypt/decrypt mapping of the mode command.
///
/// **WHY THIS MATTERS**: The parser is the only translation between what the
/// user types and what the controller does. `mode encrypt` mapping to the wrong
/// boolean would invert the tool.
///
/// **BUG THIS CATCHES**: Would catch a keyword typo in the match arms or a
/// flipped `Mode(bool)` mapping.
#[test]
fn given_valid_commands_when_parsed_then_each_maps_to_its_variant() {
    assert_eq!(parse("mode encrypt"), Ok(Command::Mode(true)));
    assert_eq!(parse("mode decrypt"), Ok(Command::Mode(false)));
    assert_eq!(parse("run"), Ok(Command::Run));
    assert_eq!(parse("copy"), Ok(Command::Copy));
    assert_eq!(parse("clear"), Ok(Command::Clear));
    assert_eq!(parse("show"), Ok(Command::Show));
    assert_eq!(parse("help"), Ok(Command::Help));
    assert_eq!(parse("quit"), Ok(Command::Quit));
    assert_eq!(parse("exit"), Ok(Command::Quit));
}

/// **VALUE**: Verifies field setters keep the rest of the line verbatim,
/// including internal spaces, and tolerate an empty value.
///
/// **WHY THIS MATTERS**: Plaintext is arbitrary user text. A parser that
/// tokenized the value would silently truncate "hello world" to "hello" before
/// encryption - corrupting data without any error.
///
/// **BUG THIS CATCHES**: Would catch splitting the value on whitespace or
/// rejecting empty setters (which are how a user empties a single field).
#[test]
fn given_field_setters_when_parsed_then_value_is_rest_of_line_verbatim() {
    assert_eq!(
        parse("plaintext hello world"),
        Ok(Command::Set(Field::Plaintext, String::from("hello world")))
    );
    assert_eq!(
        parse("password p w 123"),
        Ok(Command::Set(Field::Password, String::from("p w 123")))
    );
    assert_eq!(
        parse("ciphertext"),
        Ok(Command::Set(Field::Ciphertext, String::new()))
    );
}

/// **VALUE**: Verifies unknown input and malformed mode arguments produce usage
/// hints, while blank lines stay silent.
///
/// **WHY THIS MATTERS**: An interactive loop that panics or exits on a typo is
/// unusable; one that prints a hint for every empty line is annoying.
///
/// **BUG THIS CATCHES**: Would catch unknown keywords falling through to a
/// field-setter arm, or blank lines producing a visible error.
#[test]
fn given_invalid_input_when_parsed_then_usage_hint_or_silence() {
    assert!(parse("encrypt now").is_err());
    assert!(parse("mode sideways").is_err());

    let blank = parse("   ");
    assert_eq!(blank, Err(String::new()), "blank input gives a silent error");
}
