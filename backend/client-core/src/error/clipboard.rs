use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClipboardError {
    /// The system clipboard could not be opened at all.
    #[error("Clipboard Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// The clipboard was opened but the write was rejected.
    #[error("Clipboard Write Error: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },

    /// The fallback clipboard utility could not be spawned or exited non-zero.
    #[error("Clipboard Command Error: {message} {location}")]
    Command {
        message: String,
        location: ErrorLocation,
    },
}
