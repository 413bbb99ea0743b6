//! Client configuration

use crate::{ClientError, ClientResult};

/// Where the form loads from and submits to
///
/// # Environment variables
///
/// | Variable | Required | Meaning |
/// |----------|----------|---------|
/// | SOCK_CATALOG_URL | yes | catalog.json URL |
/// | SOCK_AVAILABILITY_URL | yes | availability.json URL |
/// | SOCK_WEBHOOK_URL | for submit | order webhook |
/// | SOCK_HTTP_TIMEOUT_SECS | no | request timeout; transport default when unset |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Catalog document URL
    pub catalog_url: String,

    /// Availability document URL
    pub availability_url: String,

    /// Order webhook URL
    pub webhook_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl ClientConfig {
    pub fn new(catalog_url: impl Into<String>, availability_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            availability_url: availability_url.into(),
            webhook_url: None,
            timeout: None,
        }
    }

    /// Load from `SOCK_*` environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary lookup (env, .env map, tests)
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ClientError::Config(format!("{key} must be set")))
        };

        let timeout = match lookup("SOCK_HTTP_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("SOCK_HTTP_TIMEOUT_SECS is not a number: {raw}"))
            })?),
            None => None,
        };

        Ok(Self {
            catalog_url: required("SOCK_CATALOG_URL")?,
            availability_url: required("SOCK_AVAILABILITY_URL")?,
            webhook_url: lookup("SOCK_WEBHOOK_URL").filter(|value| !value.trim().is_empty()),
            timeout,
        })
    }

    /// Set the webhook URL
    pub fn with_webhook(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Webhook URL, or a config error when submitting without one
    pub fn require_webhook(&self) -> ClientResult<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| ClientError::Config("SOCK_WEBHOOK_URL must be set to submit".into()))
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}
