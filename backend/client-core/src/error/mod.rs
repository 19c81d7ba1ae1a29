pub mod clipboard;
pub mod config;
pub mod transform_client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    TransformClient(#[from] transform_client::TransformClientError),

    #[error(transparent)]
    Clipboard(#[from] clipboard::ClipboardError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
