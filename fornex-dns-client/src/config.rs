//! Client configuration
//!
//! Settings are supplied by the caller. Nothing here reads the process
//! environment; a host tool that wants `FORNEX_API_KEY`-style variables
//! resolves them itself and passes the values in.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FornexError, Result};
use crate::utils::log_sanitizer::redact;
use crate::utils::serde_ext::duration_from_secs;

/// Default Fornex API root.
pub const DEFAULT_BASE_URL: &str = "https://fornex.com/api";

/// Overall per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

/// Connection settings for [`FornexClient`](crate::FornexClient).
///
/// Deserializable so a host can embed it in its own config file:
///
/// ```toml
/// api_key = "..."
/// base_url = "https://fornex.com/api"   # optional
/// timeout_secs = 60                     # optional
/// ```
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Static API key sent as `Authorization: Api-Key <key>`.
    pub api_key: String,
    /// API root without trailing slash. Empty means [`DEFAULT_BASE_URL`].
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overall per-request timeout.
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "duration_from_secs"
    )]
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with surrounding whitespace and trailing slashes removed.
    ///
    /// Empty input falls back to [`DEFAULT_BASE_URL`].
    pub fn normalized_base_url(&self) -> String {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed.to_string()
        }
    }

    /// Reject settings that can never produce a working client.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(FornexError::InvalidConfig {
                field: "api_key".to_string(),
                detail: "API key must not be empty".to_string(),
            });
        }

        let base_url = self.normalized_base_url();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(FornexError::InvalidConfig {
                field: "base_url".to_string(),
                detail: format!("expected an http(s) URL, got '{base_url}'"),
            });
        }

        if self.timeout.is_zero() {
            return Err(FornexError::InvalidConfig {
                field: "timeout".to_string(),
                detail: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
