//! Fornex DNS client

mod api;
mod http;

use std::fmt;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{FornexError, Result};
use crate::utils::log_sanitizer::redact;

/// Authorization scheme expected by the Fornex API.
pub(crate) const AUTH_SCHEME: &str = "Api-Key";

/// Fornex DNS API client.
///
/// An immutable value: the key, base URL and timeout are fixed at
/// construction. Cloning is cheap and shares the underlying connection pool.
/// All operations live on the [`DnsApi`](crate::DnsApi) trait.
#[derive(Clone)]
pub struct FornexClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl fmt::Debug for FornexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FornexClient")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FornexClient {
    /// Client for `base_url`, or the default Fornex endpoint when `None`/empty.
    ///
    /// ```rust,no_run
    /// use fornex_dns_client::{DnsApi, FornexClient};
    ///
    /// # async fn example() -> fornex_dns_client::Result<()> {
    /// let client = FornexClient::new("your-api-key", None)?;
    /// for domain in client.list_domains().await? {
    ///     println!("{}", domain.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>, base_url: Option<&str>) -> Result<Self> {
        let mut config = ClientConfig::new(api_key);
        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }
        Self::from_config(config)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FornexError::InvalidConfig {
                field: "http_client".to_string(),
                detail: format!("failed to initialize HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url(),
            api_key: config.api_key,
        })
    }

    /// API root in use, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ============ Paths ============

/// Percent-encode a domain name for use as a path segment.
fn segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

pub(crate) fn domains_path() -> String {
    "/dns/domain/".to_string()
}

pub(crate) fn domain_path(name: &str) -> String {
    format!("/dns/domain/{}/", segment(name))
}

pub(crate) fn entries_path(domain: &str) -> String {
    format!("/dns/domain/{}/entry_set/", segment(domain))
}

pub(crate) fn entry_path(domain: &str, id: u64) -> String {
    format!("/dns/domain/{}/entry_set/{id}/", segment(domain))
}
