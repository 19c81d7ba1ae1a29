use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced by the application shell.
///
/// Core errors are flattened to strings here; the structured detail has
/// already been logged at the point of failure.
#[derive(Debug, Error)]
pub enum CipherpadError {
    /// Error from this app's own wiring (directories, logger, terminal).
    #[error("Cipherpad Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (config, transform client).
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}
