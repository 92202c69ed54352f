//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `JADE_SNAPSHOT_PATH` - Path for the local session snapshot (default: jade-admin-snapshot.json)
//! - `JADE_PAGE_SIZE` - Default records per page on list screens (default: 20)
//! - `JADE_LOW_STOCK_PAGE_SIZE` - Records per page on the low-stock panel (default: 10)
//! - `JADE_REMOTE_DIRECTORY_URL` - Base URL of the remote admin directory
//! - `JADE_REMOTE_API_TOKEN` - Bearer token for the remote directory
//!
//! The two remote-directory variables must be set together; with neither
//! set the application runs on built-in fixture data.

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_SNAPSHOT_PATH: &str = "jade-admin-snapshot.json";
const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_LOW_STOCK_PAGE_SIZE: usize = 10;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Where the session snapshot is persisted.
    pub snapshot_path: PathBuf,
    /// Default page size for list screens.
    pub page_size: usize,
    /// Page size for the dashboard's low-stock panel.
    pub low_stock_page_size: usize,
    /// Remote admin directory, when configured.
    pub remote_directory: Option<RemoteDirectoryConfig>,
}

/// Remote admin directory configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct RemoteDirectoryConfig {
    /// Base URL of the directory service.
    pub base_url: Url,
    /// Bearer token presented on every request.
    pub api_token: SecretString,
}

impl std::fmt::Debug for RemoteDirectoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteDirectoryConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl RemoteDirectoryConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let base_url = get_optional_env("JADE_REMOTE_DIRECTORY_URL");
        let api_token = get_optional_env("JADE_REMOTE_API_TOKEN");

        match (base_url, api_token) {
            (Some(url), Some(token)) => {
                let base_url = url.parse::<Url>().map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "JADE_REMOTE_DIRECTORY_URL".to_string(),
                        e.to_string(),
                    )
                })?;
                validate_secret_strength(&token, "JADE_REMOTE_API_TOKEN")?;
                Ok(Some(Self {
                    base_url,
                    api_token: SecretString::from(token),
                }))
            }
            (None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "JADE_REMOTE_*".to_string(),
                "Both JADE_REMOTE_DIRECTORY_URL and JADE_REMOTE_API_TOKEN must be set together"
                    .to_string(),
            )),
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed or the remote API
    /// token fails placeholder validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let snapshot_path =
            PathBuf::from(get_env_or_default("JADE_SNAPSHOT_PATH", DEFAULT_SNAPSHOT_PATH));
        let page_size = get_page_size("JADE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let low_stock_page_size =
            get_page_size("JADE_LOW_STOCK_PAGE_SIZE", DEFAULT_LOW_STOCK_PAGE_SIZE)?;
        let remote_directory = RemoteDirectoryConfig::from_env()?;

        Ok(Self {
            snapshot_path,
            page_size,
            low_stock_page_size,
            remote_directory,
        })
    }

    /// Returns a reference to the remote directory configuration, if
    /// available.
    ///
    /// Returns `None` when the remote variables were not set, which keeps
    /// the application on fixture data.
    #[must_use]
    pub const fn remote_directory(&self) -> Option<&RemoteDirectoryConfig> {
        self.remote_directory.as_ref()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            low_stock_page_size: DEFAULT_LOW_STOCK_PAGE_SIZE,
            remote_directory: None,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a page-size variable, rejecting zero.
fn get_page_size(key: &str, default: usize) -> Result<usize, ConfigError> {
    let Some(raw) = get_optional_env(key) else {
        return Ok(default);
    };
    let parsed = raw
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if parsed == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be at least 1".to_string(),
        ));
    }
    Ok(parsed)
}

/// Validate that a secret is not an obvious placeholder.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }
    Ok(())
}
