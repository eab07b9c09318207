//! Maps raw catalog responses onto [`NetworkError`].
//!
//! A 429 becomes `RateLimited`, any other failing status becomes `Api` with
//! the body as message, and a body that does not match the expected shape
//! becomes `Parse`. Nothing here retries.

use serde::de::DeserializeOwned;

use crate::error::NetworkError;

/// Pass a 2xx response through; turn anything else into a [`NetworkError`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, NetworkError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = retry_after_secs(&resp);
        tracing::debug!(retry_after_secs, "catalog rate limited the request");
        return Err(NetworkError::RateLimited { retry_after_secs });
    }
    let message = resp.text().await.unwrap_or_default();
    Err(NetworkError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Read the body and decode it as JSON, reporting shape mismatches as
/// [`NetworkError::Parse`] rather than transport errors.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, NetworkError> {
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| NetworkError::Parse(e.to_string()))
}

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// `Retry-After` in delta-seconds form. HTTP-date values and missing headers
/// fall back to a minute.
fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
