//! HTTP requests over the browser Fetch API with timeout racing.
//!
//! Every backend call in the application goes through this module: it
//! attaches the bearer credential, races the request against a timeout, and
//! maps HTTP status codes onto the error taxonomy in
//! [`crate::core::error`].

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::ApiError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// Reusable utility for implementing timeout behavior on any JavaScript
/// Promise using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined, which the fetch promise never does
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Building
// =============================================================================

/// Body of an outgoing request.
pub enum RequestBody<'a> {
    Empty,
    /// JSON payload; sets `Content-Type: application/json`.
    Json(String),
    /// Multipart form data; the browser sets the boundary header itself.
    Form(&'a FormData),
}

fn build_request(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: RequestBody<'_>,
) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|_| ApiError::RequestCreationFailed)?;
    if let Some(token) = bearer {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(|_| ApiError::RequestCreationFailed)?;
    }

    match body {
        RequestBody::Empty => {}
        RequestBody::Json(json) => {
            headers
                .set("Content-Type", "application/json")
                .map_err(|_| ApiError::RequestCreationFailed)?;
            opts.set_body(&JsValue::from_str(&json));
        }
        RequestBody::Form(form) => {
            opts.set_body(form.as_ref());
        }
    }
    opts.set_headers(headers.as_ref());

    Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Issue a request and parse the JSON response body.
pub async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: RequestBody<'_>,
) -> Result<T, ApiError> {
    let text = fetch_text(method, url, bearer, body).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::JsonParse(e.to_string()))
}

/// Issue a request where only success matters; the body is discarded.
pub async fn fetch_ack(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: RequestBody<'_>,
) -> Result<(), ApiError> {
    fetch_text(method, url, bearer, body).await.map(|_| ())
}

/// Issue a request and return the response body as text.
///
/// Uses [`race_with_timeout`]; a request outlasting `FETCH_TIMEOUT_MS`
/// resolves to [`ApiError::Timeout`]. Auth and permission statuses are
/// mapped onto their own variants so callers can route them.
async fn fetch_text(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: RequestBody<'_>,
) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let request = build_request(method, url, bearer, body)?;
    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(ApiError::Timeout),
        RaceResult::Error(msg) => Err(ApiError::Network(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| ApiError::ResponseReadFailed)?;

            match resp.status() {
                401 => return Err(ApiError::Unauthorized),
                403 => return Err(ApiError::Forbidden),
                404 => return Err(ApiError::NotFound),
                status if !resp.ok() => return Err(ApiError::Http(status)),
                _ => {}
            }

            let text = JsFuture::from(resp.text().map_err(|_| ApiError::ResponseReadFailed)?)
                .await
                .map_err(|_| ApiError::ResponseReadFailed)?;

            text.as_string().ok_or(ApiError::ResponseReadFailed)
        }
    }
}
