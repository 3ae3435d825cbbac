//! Backend API Bindings
//!
//! Credentialed JSON fetch wrappers for the REST backend, organized by
//! domain. Every request carries `Content-Type: application/json` and
//! includes cookies so the backend can recognize the session.

mod auth;
mod tasks;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, Request, RequestCredentials, RequestInit, Response};

use crate::config;

// Re-export all public items
pub use auth::*;
pub use tasks::*;

/// Failure modes for a backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response received: connectivity failure or an aborted request
    Network,
    /// Non-success HTTP status
    Status(u16),
    /// Response body did not match the expected shape
    Decode(String),
}

impl ApiError {
    /// True for the statuses that mean the session is gone
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status(401) | Self::Status(403))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network error"),
            Self::Status(code) => write!(f, "unexpected status {code}"),
            Self::Decode(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

/// Build a credentialed JSON request against the configured base URL.
fn build_request(
    method: &str,
    path: &str,
    body: Option<String>,
    signal: Option<&AbortSignal>,
) -> Result<Request, ApiError> {
    let headers = Headers::new().map_err(|_| ApiError::Network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| ApiError::Network)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(headers.as_ref());
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }
    opts.set_signal(signal);

    let url = format!("{}{}", config::api_base_url(), path);
    Request::new_with_str_and_init(&url, &opts).map_err(|_| ApiError::Network)
}

/// Run the request; any non-2xx status becomes `ApiError::Status`.
async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Network)?;
    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|_| ApiError::Network)?;
    let response: Response = response.dyn_into().map_err(|_| ApiError::Network)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise: js_sys::Promise = response
        .json()
        .map_err(|_| ApiError::Decode("missing body".to_string()))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| ApiError::Decode("invalid JSON".to_string()))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode_body<B: Serialize>(body: Option<&B>) -> Result<Option<String>, ApiError> {
    body.map(|value| serde_json::to_string(value).map_err(|e| ApiError::Decode(e.to_string())))
        .transpose()
}

/// Issue a request and decode the JSON response body.
pub(crate) async fn request_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<&B>,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let request = build_request(method, path, encode_body(body)?, signal)?;
    let response = send(&request).await?;
    decode_json(response).await
}

/// Issue a request where only the status matters.
pub(crate) async fn request_unit<B: Serialize>(
    method: &str,
    path: &str,
    body: Option<&B>,
    signal: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let request = build_request(method, path, encode_body(body)?, signal)?;
    send(&request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_statuses() {
        assert!(ApiError::Status(401).is_auth_failure());
        assert!(ApiError::Status(403).is_auth_failure());
        assert!(!ApiError::Status(400).is_auth_failure());
        assert!(!ApiError::Status(500).is_auth_failure());
        assert!(!ApiError::Network.is_auth_failure());
        assert!(!ApiError::Decode("bad".to_string()).is_auth_failure());
    }

    #[test]
    fn test_display_names_the_failure() {
        assert_eq!(ApiError::Network.to_string(), "network error");
        assert_eq!(ApiError::Status(500).to_string(), "unexpected status 500");
    }
}
