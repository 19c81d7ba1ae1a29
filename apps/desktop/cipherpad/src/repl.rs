//! Line-command front-end driving the controller.
//!
//! One command per line. Field setters take the rest of the line verbatim,
//! so plaintext may contain spaces.

use crate::error::CipherpadError;
use crate::surface::TerminalSurface;

use client_core::controller::{CipherController, Field, Surface};

use common::ErrorLocation;

use std::panic::Location;

use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

const USAGE: &str = "\
commands:
  mode encrypt|decrypt   select the transformation direction
  plaintext <text>       set the plaintext field
  password <text>        set the password field
  ciphertext <text>      set the ciphertext field
  run                    run the current mode's transform
  copy                   copy the current mode's output to the clipboard
  clear                  clear all three fields
  show                   print the form and mode
  help                   print this help
  quit                   exit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `true` selects Encrypt, mirroring the toggle control's checked state.
    Mode(bool),
    Set(Field, String),
    Run,
    Copy,
    Clear,
    Show,
    Help,
    Quit,
}

/// Parse one input line. Returns a usage hint for anything unrecognized.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    };

    match keyword {
        "mode" => match rest {
            "encrypt" => Ok(Command::Mode(true)),
            "decrypt" => Ok(Command::Mode(false)),
            _ => Err(String::from("usage: mode encrypt|decrypt")),
        },
        "plaintext" => Ok(Command::Set(Field::Plaintext, rest.to_string())),
        "password" => Ok(Command::Set(Field::Password, rest.to_string())),
        "ciphertext" => Ok(Command::Set(Field::Ciphertext, rest.to_string())),
        "run" => Ok(Command::Run),
        "copy" => Ok(Command::Copy),
        "clear" => Ok(Command::Clear),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command '{other}' - try 'help'")),
    }
}

/// Execute one command. Returns `false` when the loop should stop.
pub async fn dispatch(
    controller: &CipherController,
    surface: &TerminalSurface,
    command: Command,
) -> bool {
    debug!("dispatching {command:?}");
    match command {
        Command::Mode(is_encrypt) => controller.toggle_mode(is_encrypt),
        Command::Set(field, value) => surface.set_field(field, &value),
        Command::Run => controller.run_action().await,
        Command::Copy => controller.copy_current(),
        Command::Clear => controller.clear_fields(),
        Command::Show => print_form(controller, surface),
        Command::Help => println!("{USAGE}"),
        Command::Quit => return false,
    }
    true
}

fn print_form(controller: &CipherController, surface: &TerminalSurface) {
    println!("mode: {}", controller.mode().label());
    for field in Field::ALL {
        let value = surface.field(field);
        if field == Field::Password {
            println!("  password: {}", "*".repeat(value.chars().count()));
        } else {
            println!("  {}: {}", field.name(), value);
        }
    }
    let status = surface.status_line();
    if !status.is_empty() {
        println!("  status: {status}");
    }
}

/// Read stdin line by line until quit or end of input.
pub async fn run(
    controller: &CipherController,
    surface: &TerminalSurface,
) -> Result<(), CipherpadError> {
    println!("{USAGE}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = lines.next_line().await.map_err(|e| CipherpadError::App {
            message: format!("Failed to read input: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let Some(line) = line else {
            break;
        };

        match parse(&line) {
            Ok(command) => {
                if !dispatch(controller, surface, command).await {
                    break;
                }
            }
            Err(hint) if hint.is_empty() => {}
            Err(hint) => println!("{hint}"),
        }
    }

    Ok(())
}
