//! Secure password handling with redacted Debug output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// A password that never exposes its value in logs or debug output.
///
/// The controller reads the password field into this type the moment it
/// leaves the presentation layer; from there the only way to see the value
/// is an explicit [`as_str`](RedactedPassword::as_str) call at the request
/// construction site.
#[derive(Clone)]
pub struct RedactedPassword {
    inner: String,
}

impl RedactedPassword {
    /// Wrap a raw password value.
    pub fn new(password: String) -> Self {
        Self { inner: password }
    }

    /// Get the actual value for transmission.
    ///
    /// # Security Note
    /// Only call this when building the outbound request body.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the password length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the password is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedPassword([REDACTED])")
    }
}

impl fmt::Display for RedactedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED PASSWORD]")
    }
}

impl Drop for RedactedPassword {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedPassword {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from(
                "RedactedPassword cannot be serialized - use as_str() explicitly",
            ),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
