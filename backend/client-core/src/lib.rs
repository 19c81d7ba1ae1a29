pub mod config;
pub mod controller;
pub mod error;
pub mod transform_client;

#[cfg(test)]
mod tests;

pub const TRANSFORM_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const TRANSFORM_SERVER_DEFAULT_PORT: u16 = 5000;
pub const TRANSFORM_SERVER_BASE_URL: &str = const_format::concatcp!(
    "http://",
    TRANSFORM_SERVER_HOSTNAME,
    ":",
    TRANSFORM_SERVER_DEFAULT_PORT
);
