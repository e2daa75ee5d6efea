//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
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

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/tours/1");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET request returning parsed JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await.message);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST request with a JSON body.
///
/// On a non-2xx status the body is read as [`ApiError`], so the caller gets
/// the machine code and the form field of a validation failure.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| network_error(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| network_error(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| network_error(format!("Failed to parse response: {}", e)))
}

fn network_error(message: String) -> ApiError {
    ApiError::new("NETWORK_ERROR", message)
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(error) => error,
        Err(_) => ApiError::new("HTTP_ERROR", format!("Server error: {}", status)),
    }
}
