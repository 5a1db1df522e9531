use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::serde_ext::null_as_default;

// ============ Domain Types ============

/// A DNS zone as returned by the Fornex API.
///
/// `name` is the key for every domain-scoped endpoint and never changes for
/// the lifetime of the zone. Everything else is read-only and populated by
/// the API; a freshly created domain may come back with only `name` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
    /// Creation timestamp, opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Last modification timestamp, opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Entries embedded in the zone listing, when the API includes them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub entry_set: Vec<Entry>,
    /// Account tags attached to the zone, in API order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Body of `POST /dns/domain/`.
///
/// The IP is only accepted here; the API never returns it on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDomainRequest {
    pub name: String,
    pub ip: String,
}

// ============ Entry Types ============

/// A single DNS record inside a domain.
///
/// `ttl` and `priority` are tri-state on the wire: a present number, or an
/// absent field. `None` is never written as `null` or `0`, and both a missing
/// field and an explicit `null` read back as `None`.
///
/// Update calls send the whole value: there is no merge with the stored
/// record, so build the complete desired state before calling
/// [`DnsApi::update_entry`](crate::DnsApi::update_entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Assigned by the API on creation. Omitted from request bodies when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Record name relative to the zone (`"www"`, `"@"`).
    pub host: String,
    /// Record type as sent on the wire (`"A"`, `"MX"`, ...). See [`EntryType`].
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record data.
    pub value: String,
    /// MX/SRV priority.
    #[serde(
        rename = "prio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<u16>,
}

impl Entry {
    /// New entry without id, TTL or priority.
    pub fn new(
        host: impl Into<String>,
        entry_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            host: host.into(),
            entry_type: entry_type.into(),
            ttl: None,
            value: value.into(),
            priority: None,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Typed view of [`entry_type`](Self::entry_type), `None` for types outside the supported set.
    pub fn parsed_type(&self) -> Option<EntryType> {
        self.entry_type.parse().ok()
    }
}

/// Record types accepted by the Fornex DNS API.
///
/// The client itself does not validate [`Entry::entry_type`]; this enum is
/// for callers that want to check input before sending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Certificate Authority Authorization record.
    Caa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
}

impl EntryType {
    /// All supported types, in API documentation order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::Aaaa,
        Self::Caa,
        Self::Cname,
        Self::Mx,
        Self::Ns,
        Self::Srv,
        Self::Txt,
    ];

    /// Uppercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
        }
    }

    /// Whether the API uses `prio` for this type.
    pub fn uses_priority(self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`EntryType::from_str`] for a type outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported record type: {0}")]
pub struct UnknownEntryType(pub String);

impl FromStr for EntryType {
    type Err = UnknownEntryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEntryType(s.to_string()))
    }
}

impl From<EntryType> for String {
    fn from(t: EntryType) -> Self {
        t.as_str().to_string()
    }
}
