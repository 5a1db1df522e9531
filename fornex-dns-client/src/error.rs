use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Fornex API operations.
///
/// Variants fall into four groups:
/// - network-level failures ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)),
///   which never carry a status code;
/// - [`Api`](Self::Api), any response outside `200..=299`, carrying the status and
///   the raw body verbatim;
/// - logical not-found ([`DomainNotFound`](Self::DomainNotFound),
///   [`EntryNotFound`](Self::EntryNotFound)), raised only by list-then-scan lookups
///   after the list call itself succeeded;
/// - local encode/decode and configuration failures.
///
/// All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum FornexError {
    /// Request construction, connection or body-read failure.
    #[error("[fornex] Network error: {detail}")]
    NetworkError {
        /// Underlying transport error text.
        detail: String,
    },

    /// The per-request timeout elapsed. Network-level, like [`NetworkError`](Self::NetworkError).
    #[error("[fornex] Request timeout: {detail}")]
    Timeout {
        /// Underlying transport error text.
        detail: String,
    },

    /// The API answered with a status outside `200..=299`.
    ///
    /// The body is kept as opaque text; no attempt is made to parse the
    /// remote error schema.
    #[error("[fornex] API error (status: {status}, body: {body})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// No domain with this exact name exists in the account listing.
    #[error("[fornex] Domain '{domain}' not found")]
    DomainNotFound {
        /// Domain name that was looked up.
        domain: String,
    },

    /// No entry with this id exists in the domain's entry listing.
    #[error("[fornex] Entry {entry_id} not found in domain '{domain}'")]
    EntryNotFound {
        /// Domain whose entries were listed.
        domain: String,
        /// Entry id that was looked up.
        entry_id: u64,
    },

    /// A 2xx response body was not valid JSON for the expected type.
    #[error("[fornex] Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("[fornex] Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client could not be constructed from the given settings.
    #[error("[fornex] Invalid config '{field}': {detail}")]
    InvalidConfig {
        /// Name of the offending setting.
        field: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl FornexError {
    /// HTTP status of an [`Api`](Self::Api) error, `None` for every other variant.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// Whether a list-then-scan lookup found no match.
    ///
    /// An API 404 is deliberately not included: it stays an [`Api`](Self::Api) error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DomainNotFound { .. } | Self::EntryNotFound { .. }
        )
    }
}

/// Convenience type alias for `Result<T, FornexError>`.
pub type Result<T> = std::result::Result<T, FornexError>;
