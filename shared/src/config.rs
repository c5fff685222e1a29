//! Environment-based configuration
//!
//! Credentials and endpoints for the two external services are read once at
//! process start and handed to the service clients as plain values.
//!
//! ## Configuration Sources
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Required Keys
//! - `SHOPIFY_API_KEY`: Admin API access token for the shop
//! - `AUTH_NET_URL`: Authorize.net JSON API endpoint
//! - `AUTH_NET_NAME`: API login id
//! - `AUTH_NET_KEY`: transaction key
//!
//! ## Optional Keys
//! - `SHOPIFY_API_VERSION`: Admin API version (default `2020-10`)
//! - `HTTP_TIMEOUT_MS`: per-request timeout in milliseconds (default 30000)

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

pub const SHOPIFY_API_KEY: &str = "SHOPIFY_API_KEY";
pub const SHOPIFY_API_VERSION: &str = "SHOPIFY_API_VERSION";
pub const AUTH_NET_URL: &str = "AUTH_NET_URL";
pub const AUTH_NET_NAME: &str = "AUTH_NET_NAME";
pub const AUTH_NET_KEY: &str = "AUTH_NET_KEY";
pub const HTTP_TIMEOUT_MS: &str = "HTTP_TIMEOUT_MS";

pub const DEFAULT_SHOPIFY_API_VERSION: &str = "2020-10";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

/// Order platform (Shopify Admin API) settings
#[derive(Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub access_token: String,
    pub api_version: String,
}

/// Payment gateway (Authorize.net) settings
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub merchant_name: String,
    pub transaction_key: String,
}

/// Complete process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub platform: PlatformConfig,
    pub gateway: GatewayConfig,
    pub http_timeout: Duration,
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("access_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("merchant_name", &self.merchant_name)
            .field("transaction_key", &"<redacted>")
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment, reading `./.env` first
    pub fn from_env() -> SharedResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenv::dotenv();
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    /// Load configuration from an explicit dotenv file.
    ///
    /// The file is read without mutating the process environment; variables
    /// already set in the environment win over file values.
    pub fn from_env_file(path: &Path) -> SharedResult<Self> {
        let env_file_error = |message: String| SharedError::EnvFile {
            path: path.display().to_string(),
            message,
        };

        let mut file_values = HashMap::new();
        let entries = dotenv::from_path_iter(path).map_err(|e| env_file_error(e.to_string()))?;
        for entry in entries {
            let (key, value) = entry.map_err(|e| env_file_error(e.to_string()))?;
            file_values.insert(key, value);
        }

        Self::from_lookup(|key: &str| {
            std::env::var(key).ok().or_else(|| file_values.get(key).cloned())
        })
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &str| {
            non_empty(key).ok_or_else(|| SharedError::MissingEnv { key: key.to_string() })
        };

        let endpoint = required(AUTH_NET_URL)?;
        url::Url::parse(&endpoint).map_err(|_| SharedError::InvalidConfig {
            field: AUTH_NET_URL.to_string(),
            value: endpoint.clone(),
        })?;

        let http_timeout = match non_empty(HTTP_TIMEOUT_MS) {
            Some(raw) => {
                let millis = raw.parse::<u64>().ok().filter(|ms| *ms > 0).ok_or_else(|| {
                    SharedError::InvalidConfig {
                        field: HTTP_TIMEOUT_MS.to_string(),
                        value: raw.clone(),
                    }
                })?;
                Duration::from_millis(millis)
            }
            None => Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
        };

        Ok(Self {
            platform: PlatformConfig {
                access_token: required(SHOPIFY_API_KEY)?,
                api_version: non_empty(SHOPIFY_API_VERSION)
                    .unwrap_or_else(|| DEFAULT_SHOPIFY_API_VERSION.to_string()),
            },
            gateway: GatewayConfig {
                endpoint,
                merchant_name: required(AUTH_NET_NAME)?,
                transaction_key: required(AUTH_NET_KEY)?,
            },
            http_timeout,
        })
    }
}
