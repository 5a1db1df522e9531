//! # fornex-dns-client
//!
//! A typed async client for the [Fornex](https://fornex.com/) DNS API, built
//! for infrastructure-as-code tools that reconcile DNS domains and records.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fornex_dns_client::{DnsApi, Entry, FornexClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FornexClient::new("your-api-key", None)?;
//!
//!     // List domains
//!     for domain in client.list_domains().await? {
//!         println!("{} {:?}", domain.name, domain.tags);
//!     }
//!
//!     // Create a record; ttl and priority stay absent unless set
//!     let created = client
//!         .create_entry("example.com", &Entry::new("www", "A", "192.0.2.1"))
//!         .await?;
//!
//!     // Update sends the complete desired state
//!     if let Some(id) = created.id {
//!         let desired = Entry::new("www", "A", "192.0.2.2").with_ttl(600);
//!         client.update_entry("example.com", id, &desired).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Lookups
//!
//! The API has no single-item read endpoints. [`DnsApi::get_domain`] and
//! [`DnsApi::get_entry`] list the whole collection and scan it, so each call
//! costs one list request and O(n) work.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, FornexError>`](FornexError):
//!
//! - [`FornexError::Api`] — any non-2xx response, with status and raw body
//! - [`FornexError::NetworkError`] / [`FornexError::Timeout`] — no response
//! - [`FornexError::DomainNotFound`] / [`FornexError::EntryNotFound`] — lookup miss
//! - [`FornexError::ParseError`] — malformed JSON in a 2xx response
//!
//! Nothing is retried.

mod client;
mod config;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::FornexClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use error::{FornexError, Result};
pub use traits::DnsApi;
pub use types::{CreateDomainRequest, Domain, Entry, EntryType, UnknownEntryType};
