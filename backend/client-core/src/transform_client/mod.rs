//! HTTP client for the transform collaborator service.
//!
//! The collaborator exposes two JSON endpoints: `POST /encrypt` and
//! `POST /decrypt`. This client owns the request/response shapes and maps
//! every failure into [`TransformClientError`]: transport and decode problems
//! become `Http`, a non-success status becomes `Server` carrying whatever
//! `error` text the body supplied.

use crate::error::transform_client::TransformClientError;

use common::{ErrorLocation, HttpStatusCode, RedactedPassword};

use std::panic::Location;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const ENCRYPT_ENDPOINT: &str = "encrypt";
const DECRYPT_ENDPOINT: &str = "decrypt";

#[derive(Debug, Deserialize)]
struct EncryptResponse {
    ciphertext: String,
}

#[derive(Debug, Deserialize)]
struct DecryptResponse {
    plaintext: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone)]
pub struct TransformClient {
    base_url: Url,
    client: Client,
}

impl TransformClient {
    pub fn new(base_url_str: &str) -> Result<Self, TransformClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(
        base_url_str: &str,
        timeout: Duration,
    ) -> Result<Self, TransformClientError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    /// Encrypt `plaintext` under `password`.
    ///
    /// Returns the transportable ciphertext token on success.
    pub async fn encrypt(
        &self,
        plaintext: &str,
        password: &RedactedPassword,
    ) -> Result<String, TransformClientError> {
        let url = self.base_url.join(ENCRYPT_ENDPOINT)?;

        let body = serde_json::json!({
            "plaintext": plaintext,
            "password": password.as_str(),
        });

        let response = self.client.post(url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let parsed: EncryptResponse = response.json().await?;
        Ok(parsed.ciphertext)
    }

    /// Decrypt a ciphertext token under `password`.
    ///
    /// Returns the recovered plaintext on success.
    pub async fn decrypt(
        &self,
        ciphertext: &str,
        password: &RedactedPassword,
    ) -> Result<String, TransformClientError> {
        let url = self.base_url.join(DECRYPT_ENDPOINT)?;

        let body = serde_json::json!({
            "ciphertext": ciphertext,
            "password": password.as_str(),
        });

        let response = self.client.post(url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let parsed: DecryptResponse = response.json().await?;
        Ok(parsed.plaintext)
    }

    /// Turn a non-success response into a `Server` error, salvaging the
    /// server-supplied `error` text when the body has one.
    async fn server_error(response: reqwest::Response) -> TransformClientError {
        let status = HttpStatusCode::from(response.status().as_u16());
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error);

        TransformClientError::Server {
            message,
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
