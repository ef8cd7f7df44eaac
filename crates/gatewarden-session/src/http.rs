//! http implementation of the validation transport.
//!
//! ## Validation flow
//!
//! 1. `GET {base_url}/validate` with `Authorization: Bearer <token>`
//! 2. non-2xx status fails the validation
//! 3. the permission list is read from a response header as a
//!    comma-separated list; a missing header means no permissions

use async_trait::async_trait;
use gatewarden_types::AuthConfig;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::error::Error;
use crate::transport::{Validation, ValidationTransport};

/// validation transport backed by the authentication service's http api.
#[derive(Debug, Clone)]
pub struct HttpValidator {
    base_url: String,
    permissions_header: String,
    client: reqwest::Client,
}

impl HttpValidator {
    /// create a validator from the auth service configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            permissions_header: config.permissions_header.clone(),
            client,
        })
    }
}

#[async_trait]
impl ValidationTransport for HttpValidator {
    async fn validate(&self, token: &str) -> Result<Validation, Error> {
        let response = self
            .client
            .get(format!("{}/validate", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "auth service rejected session token");
            return Err(Error::Status(status));
        }

        let permissions = response
            .headers()
            .get(self.permissions_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Validation { permissions })
    }
}
