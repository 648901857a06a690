//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling.

use wasm_bindgen_futures::JsFuture;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (including the '#' prefix, if present).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// Goes through `location.replace` rather than `history.replaceState`:
/// a same-document fragment navigation still fires `hashchange` (which
/// the router listens for), while the current history entry is swapped
/// out. Useful for redirects that shouldn't appear in back button
/// history.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().replace(hash);
    }
}

// =============================================================================
// Browser Interactions
// =============================================================================

/// Open a URL in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Write text to the system clipboard.
///
/// Resolves to `false` when the clipboard is unavailable or the write is
/// rejected.
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.is_ok()
}
