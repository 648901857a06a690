//! Durable session persistence over localStorage (the token store).
//!
//! The token and the cached user record are one logical unit: both are
//! written or neither is, and a half-present pair reads back as no session.
//! This keeps the in-memory session and the store agreeing about whether a
//! session exists across reloads.

use crate::config::storage::{TOKEN_KEY, USER_KEY};
use crate::core::error::StorageError;
use crate::models::User;
use crate::utils::dom;

/// Load the persisted session, if a complete one exists.
///
/// Returns `None` when either half is missing or the user record fails to
/// parse; a partial pair is cleaned up on sight.
pub fn load() -> Option<(String, User)> {
    let storage = dom::local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user_json = storage.get_item(USER_KEY).ok().flatten();

    match (token, user_json) {
        (Some(token), Some(json)) => match serde_json::from_str::<User>(&json) {
            Ok(user) => Some((token, user)),
            Err(_) => {
                clear();
                None
            }
        },
        (None, None) => None,
        // Half a session is no session; drop the leftover
        _ => {
            clear();
            None
        }
    }
}

/// Persist the session atomically: on any write failure the store is
/// cleared so it never holds half a session.
pub fn save(token: &str, user: &User) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let user_json = serde_json::to_string(user).map_err(|_| StorageError::WriteFailed)?;

    let wrote = storage
        .set_item(TOKEN_KEY, token)
        .and_then(|_| storage.set_item(USER_KEY, &user_json));

    if wrote.is_err() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
        return Err(StorageError::WriteFailed);
    }
    Ok(())
}

/// Remove the persisted session. Has no failure mode.
pub fn clear() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
