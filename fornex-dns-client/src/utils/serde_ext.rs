//! Serde helpers
//!
//! The API may send `null` for collections it has nothing to report on
//! (`tags`, `entry_set`). `#[serde(default)]` only covers a missing key, so
//! these fields also go through [`null_as_default`].

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a whole number of seconds as a [`Duration`].
pub fn duration_from_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
