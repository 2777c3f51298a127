//! REST API helpers for communicating with the blogging backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side: stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth failures
//! degrade to a user-visible message without crashing the UI. The
//! transport error, the HTTP status, and any body decode failure all
//! collapse into the error string.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthMode, AuthResponse};
use crate::state::form::AuthFields;

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(backend_url: &str, mode: AuthMode) -> String {
    format!("{backend_url}/api/v1/user/{}", mode.endpoint_path())
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_failed_message(status: u16) -> String {
    format!("auth request failed: {status}")
}

/// Post credentials to `POST {backend_url}/api/v1/user/{signup|signin}`
/// and return the issued JWT.
///
/// The full field record is sent regardless of mode; for signin the
/// `name` field rides along as an empty string.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server
/// responds with a non-2xx status, or the response body lacks a `jwt`.
pub async fn authenticate(
    backend_url: &str,
    mode: AuthMode,
    fields: &AuthFields,
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = auth_endpoint(backend_url, mode);
        let resp = gloo_net::http::Request::post(&url)
            .json(fields)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(auth_failed_message(resp.status()));
        }
        let body: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.jwt)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend_url, mode, fields);
        Err("not available on server".to_owned())
    }
}
