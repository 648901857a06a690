//! Backend API client.
//!
//! One function per endpoint; all requests go through
//! [`crate::utils::fetch`] which handles the bearer header, the timeout
//! race, and status mapping. Query values are percent-encoded with the
//! platform's `encodeURIComponent`.

use serde::Deserialize;
use serde_json::json;
use web_sys::FormData;

use crate::config::API_BASE_URL;
use crate::core::error::ApiError;
use crate::models::{AuthResponse, FileRecord, ListingQuery, User, VerifyResponse};
use crate::utils::fetch::{fetch_ack, fetch_json, RequestBody};

/// The listing endpoint wraps its payload in a `result` field; that is the
/// canonical contract, the bare-array variant is not supported.
#[derive(Deserialize)]
struct ListResponse {
    result: Vec<FileRecord>,
}

#[derive(Deserialize)]
struct ShareLinkResponse {
    url: String,
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// Exchange credentials for a user and token.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = json!({ "email": email, "password": password }).to_string();
    fetch_json(
        "POST",
        &format!("{}/auth/login", API_BASE_URL),
        None,
        RequestBody::Json(body),
    )
    .await
}

/// Create an account and log in with it.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = json!({ "name": name, "email": email, "password": password }).to_string();
    fetch_json(
        "POST",
        &format!("{}/auth/register", API_BASE_URL),
        None,
        RequestBody::Json(body),
    )
    .await
}

/// Check a stored token against the backend, returning the user it
/// belongs to.
pub async fn verify_identity(token: &str) -> Result<User, ApiError> {
    let response: VerifyResponse = fetch_json(
        "GET",
        &format!("{}/auth/me", API_BASE_URL),
        Some(token),
        RequestBody::Empty,
    )
    .await?;
    Ok(response.user)
}

/// Fetch the file listing for a query.
pub async fn list_files(query: &ListingQuery, token: &str) -> Result<Vec<FileRecord>, ApiError> {
    let mut url = format!("{}/files", API_BASE_URL);
    for (i, (key, value)) in query.params().iter().enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        url.push(sep);
        url.push_str(key);
        url.push('=');
        url.push_str(&encode(value));
    }

    let response: ListResponse = fetch_json("GET", &url, Some(token), RequestBody::Empty).await?;
    Ok(response.result)
}

/// Upload a batch of files with shared tags. The single batched response
/// reports all-or-nothing: on success every file in the batch was created.
pub async fn upload_files(
    files: &[web_sys::File],
    tags: &[String],
    token: &str,
) -> Result<Vec<FileRecord>, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::RequestCreationFailed)?;
    for file in files {
        form.append_with_blob_and_filename("documents", file, &file.name())
            .map_err(|_| ApiError::RequestCreationFailed)?;
    }
    let tags_json =
        serde_json::to_string(tags).map_err(|e| ApiError::JsonParse(e.to_string()))?;
    form.append_with_str("tags", &tags_json)
        .map_err(|_| ApiError::RequestCreationFailed)?;

    fetch_json(
        "POST",
        &format!("{}/files/upload", API_BASE_URL),
        Some(token),
        RequestBody::Form(&form),
    )
    .await
}

/// Delete a file.
pub async fn delete_file(id: &str, token: &str) -> Result<(), ApiError> {
    fetch_ack(
        "DELETE",
        &format!("{}/files/delete?file_id={}", API_BASE_URL, encode(id)),
        Some(token),
        RequestBody::Empty,
    )
    .await
}

/// Increment a file's view counter.
pub async fn bump_view_count(id: &str, token: &str) -> Result<(), ApiError> {
    fetch_ack(
        "PATCH",
        &format!(
            "{}/files/update_view_count?file_id={}",
            API_BASE_URL,
            encode(id)
        ),
        Some(token),
        RequestBody::Empty,
    )
    .await
}

/// Share a file with another user by email.
pub async fn share_by_email(file_id: &str, email: &str, token: &str) -> Result<(), ApiError> {
    let body = json!({ "file_id": file_id, "email": email }).to_string();
    fetch_ack(
        "POST",
        &format!("{}/files/share", API_BASE_URL),
        Some(token),
        RequestBody::Json(body),
    )
    .await
}

/// Generate a public share link for a file.
pub async fn generate_share_link(file_id: &str, token: &str) -> Result<String, ApiError> {
    let body = json!({ "file_id": file_id }).to_string();
    let response: ShareLinkResponse = fetch_json(
        "POST",
        &format!("{}/files/share_link", API_BASE_URL),
        Some(token),
        RequestBody::Json(body),
    )
    .await?;
    Ok(response.url)
}

/// Resolve a share token to its file. The bearer token is optional: some
/// links resolve anonymously, others require the viewer to be signed in.
pub async fn fetch_shared_file(
    share_token: &str,
    auth_token: Option<&str>,
) -> Result<FileRecord, ApiError> {
    fetch_json(
        "GET",
        &format!("{}/shared/{}", API_BASE_URL, encode(share_token)),
        auth_token,
        RequestBody::Empty,
    )
    .await
}
