//! Generic HTTP request handling
//!
//! One request in, one classified outcome out:
//! - `200..=299` → the raw body bytes, unmodified;
//! - any other status → [`FornexError::Api`] with the status and full body text;
//! - no response at all → [`FornexError::NetworkError`] / [`FornexError::Timeout`].
//!
//! Nothing here retries. Every failure goes straight back to the caller.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FornexError, Result};
use crate::utils::log_sanitizer::truncate_bytes_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a fully built request and returns the response body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method, for logs
    /// * `path` - API path, for logs
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<Vec<u8>> {
        log::debug!("[fornex] {method_name} {path}");

        let response = request_builder.send().await.map_err(transport_error)?;

        let status = response.status();
        log::debug!("[fornex] Response Status: {}", status.as_u16());

        // 非 2xx 也要读完整 body，作为诊断信息返回
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(e)
            } else {
                FornexError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!("[fornex] Response Body: {}", truncate_bytes_for_log(&body));

        if !status.is_success() {
            return Err(FornexError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(body: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(body).map_err(|e| FornexError::ParseError {
            detail: e.to_string(),
        })
    }

    /// Serialize a request body to JSON bytes.
    pub fn to_json<B>(body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_vec(body).map_err(|e| FornexError::SerializationError {
            detail: e.to_string(),
        })
    }
}

/// Classify a reqwest failure that happened before a status was available.
fn transport_error(e: reqwest::Error) -> FornexError {
    if e.is_timeout() {
        FornexError::Timeout {
            detail: e.to_string(),
        }
    } else {
        FornexError::NetworkError {
            detail: e.to_string(),
        }
    }
}
