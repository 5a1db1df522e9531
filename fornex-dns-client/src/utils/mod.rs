//! Utility modules.

/// Log sanitization utilities to keep response bodies and secrets out of logs.
pub mod log_sanitizer;

/// Serde helpers for lenient API payloads.
pub mod serde_ext;
