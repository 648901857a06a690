//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages and
//! proper error categorization for each domain:
//!
//! - [`ApiError`] - Network/HTTP errors for backend requests, including the
//!   auth and permission statuses that drive redirects
//! - [`StorageError`] - localStorage operations for the token store
//! - [`ValidationError`] - Client-side upload rejection, never reaches the
//!   network

use std::fmt;

/// Errors from backend requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (unreachable, CORS, etc.)
    Network(String),
    /// Request timed out
    Timeout,
    /// Token rejected or credentials invalid (HTTP 401)
    Unauthorized,
    /// Authenticated but not allowed (HTTP 403)
    Forbidden,
    /// Resource does not exist (HTTP 404)
    NotFound,
    /// Other non-2xx status
    Http(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// JSON parsing error
    JsonParse(String),
}

impl ApiError {
    /// Failures that require re-authentication rather than a retry.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Failures that mean the shared resource is inaccessible, not that
    /// the session is bad.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Forbidden | Self::NotFound)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Unauthorized => write!(f, "Session expired, please sign in again"),
            Self::Forbidden => write!(f, "You do not have permission to view this"),
            Self::NotFound => write!(f, "Not found"),
            Self::Http(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::JsonParse(msg) => write!(f, "JSON parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Token store errors for localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// localStorage not available.
    Unavailable,
    /// Failed to write to localStorage.
    WriteFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "localStorage not available"),
            Self::WriteFailed => write!(f, "failed to save to localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Client-side upload rejection, produced before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No file was selected.
    NoFiles,
    /// A file exceeds the per-file size cap.
    TooLarge { name: String },
    /// A file's MIME type is outside the accepted media categories.
    UnsupportedType { name: String, mime: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFiles => write!(f, "Please select a file to upload"),
            Self::TooLarge { name } => {
                write!(f, "{} is too large (max 100 MB)", name)
            }
            Self::UnsupportedType { name, mime } => {
                write!(f, "{} has an unsupported type ({})", name, mime)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
