//! HTTP plumbing shared by provider implementations.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{RazorbackError, Result};

/// Build a client that applies the given timeout to every request.
///
/// Each provider owns its client; there is no shared global one, so the
/// configured timeout is part of provider construction.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(value) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, value);
    }
    headers
}

/// Map a non-200 HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> RazorbackError {
    match status {
        401 | 403 => RazorbackError::Authentication(body.to_string()),
        _ => RazorbackError::api(status, body),
    }
}
