//! HTTP implementation of the admin directory.
//!
//! Talks to the backend's three admin-directory endpoints. This is the only
//! wire-level interface the admin has, and callers treat it as best-effort:
//! compose it with [`super::FallbackDirectory`] to fall back to local data.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::models::AdminUser;

use super::{AdminDirectory, DirectoryStats, GatewayError};

/// Directory endpoint paths.
const USERS_PATH: &str = "/api/admin/users";
const STATS_PATH: &str = "/api/admin/users/stats";
const TAGS_PATH: &str = "/api/admin/users/tags";

/// Remote admin directory client.
#[derive(Clone)]
pub struct RemoteDirectory {
    client: Client,
    base_url: Url,
    api_token: SecretString,
}

impl std::fmt::Debug for RemoteDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteDirectory")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Response envelope the directory wraps its payloads in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

impl RemoteDirectory {
    /// Create a new directory client.
    #[must_use]
    pub fn new(base_url: Url, api_token: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_token,
        }
    }

    /// Build a client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &crate::config::RemoteDirectoryConfig) -> Self {
        Self::new(config.base_url.clone(), config.api_token.clone())
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| GatewayError::MalformedResponse {
                endpoint: path.to_string(),
                message: format!("bad endpoint url: {e}"),
            })?;

        let response = self
            .client
            .get(url)
            .bearer_auth(self.api_token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        let envelope: Envelope<T> =
            response
                .json()
                .await
                .map_err(|e| GatewayError::MalformedResponse {
                    endpoint: path.to_string(),
                    message: e.to_string(),
                })?;

        debug!(endpoint = path, "directory fetch ok");
        Ok(envelope.data)
    }
}

impl AdminDirectory for RemoteDirectory {
    #[instrument(skip(self))]
    async fn fetch_admins(&self) -> Result<Vec<AdminUser>, GatewayError> {
        self.get(USERS_PATH).await
    }

    #[instrument(skip(self))]
    async fn fetch_stats(&self) -> Result<DirectoryStats, GatewayError> {
        self.get(STATS_PATH).await
    }

    #[instrument(skip(self))]
    async fn fetch_tags(&self) -> Result<Vec<String>, GatewayError> {
        self.get(TAGS_PATH).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let directory = RemoteDirectory::new(
            Url::parse("https://backend.jadeshopping.example").unwrap(),
            SecretString::from("real-token-value"),
        );
        let debug = format!("{directory:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("real-token-value"));
    }
}
