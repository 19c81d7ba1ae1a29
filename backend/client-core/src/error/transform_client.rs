use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TransformClientError {
    /// The round trip itself failed: connect error, timeout, or a body that
    /// could not be decoded as the expected success shape.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The server answered with a non-success status. `message` carries the
    /// server-supplied `error` text when the body had one.
    #[error("Server Error: HTTP {status} {location}")]
    Server {
        message: Option<String>,
        status: HttpStatusCode,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for TransformClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        TransformClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for TransformClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        TransformClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
