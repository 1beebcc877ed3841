//! API utilities for frontend-backend communication
//!
//! Все страницы загружают данные одинаково, поэтому запрос, проверка
//! статуса и разбор JSON собраны в одной функции [`fetch_json`].

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
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

/// Build a full API URL from a path (and optional query string)
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET запрос к backend с разбором JSON ответа
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200..=299 => {}
        404 => return Err("Not found".to_string()),
        status => return Err(format!("Server error: HTTP {}", status)),
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
