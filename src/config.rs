//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in headers and page titles.
pub const APP_NAME: &str = "mediahub";

/// Application version.
#[allow(dead_code)]
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the backend API.
pub const API_BASE_URL: &str = "http://localhost:8080/api";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Quiet interval after the last search keystroke before a listing fetch is
/// issued. Sort and filter changes are discrete selections and bypass this
/// entirely.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage keys for the persisted session.
///
/// The two entries are written and cleared as a pair; a token without its
/// user record (or vice versa) is treated as no session at all.
pub mod storage {
    /// Bearer token for API requests.
    pub const TOKEN_KEY: &str = "token";
    /// Cached user record (JSON), kept in lockstep with the token.
    pub const USER_KEY: &str = "user";
}

// =============================================================================
// Upload Configuration
// =============================================================================

/// Upload constraints enforced client-side before submission.
///
/// Fast-fail UX convenience only; the backend re-validates everything it
/// accepts.
pub mod upload {
    /// Maximum accepted size per file (100 MiB).
    pub const MAX_FILE_BYTES: u64 = 100 * 1024 * 1024;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Duration the "copied" indicator stays visible after a copy-to-clipboard.
pub const COPY_RESET_MS: u32 = 2000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
