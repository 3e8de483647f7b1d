//! REST client helpers for frontend-backend communication.
//!
//! All requests go through the thin wrappers here so every screen maps
//! transport, server and decode failures to the same [`ApiError`].

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure of a single REST call.
///
/// Stores and screens only ever show the `Display` form; the variants exist
/// so the message selection stays in one place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response reached the client.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` prefers the server-supplied JSON
    /// `message` field and falls back to the status code.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response body was not in the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a non-2xx response body.
    pub fn server(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str().map(str::to_owned)))
            .unwrap_or_else(|| format!("server returned HTTP {}", status));
        Self::Server { status, message }
    }
}

/// Get the base URL for API requests.
///
/// Constructed from the current window location, using port 3000 for the
/// backend server. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path like `/products`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::server(resp.status(), &body))
    }
}

/// `GET` a JSON collection or record.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST` a JSON body, ignoring the response payload.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp).await.map(|_| ())
}

/// `PUT` a JSON body, ignoring the response payload.
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp).await.map(|_| ())
}

/// `DELETE` a resource.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_message_field() {
        let err = ApiError::server(500, r#"{"message":"down"}"#);
        assert_eq!(err.to_string(), "down");
    }

    #[test]
    fn server_error_falls_back_to_status() {
        assert_eq!(
            ApiError::server(502, "").to_string(),
            "server returned HTTP 502"
        );
        assert_eq!(
            ApiError::server(500, "<html>oops</html>").to_string(),
            "server returned HTTP 500"
        );
        // a JSON body without a message field also falls back
        assert_eq!(
            ApiError::server(404, r#"{"error":"nope"}"#).to_string(),
            "server returned HTTP 404"
        );
    }

    #[test]
    fn network_and_decode_messages() {
        assert_eq!(
            ApiError::Network("fetch failed".into()).to_string(),
            "network error: fetch failed"
        );
        assert_eq!(
            ApiError::Decode("expected array".into()).to_string(),
            "unexpected response: expected array"
        );
    }
}
