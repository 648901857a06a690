//! Session controller.
//!
//! Owns the authentication lifecycle: startup rehydration from the token
//! store, the login/register/verify/logout transitions, and expiry when a
//! protected call reports the token invalid. The in-memory [`Session`] and
//! the token store are kept in agreement at every transition — both are
//! written in the same synchronous section, never across an await point.

use leptos::prelude::*;

use crate::core::api;
use crate::core::error::ApiError;
use crate::models::{AuthResponse, Session, SessionStatus, User};
use crate::utils::storage;

/// Session state managed with Leptos signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct SessionState {
    /// The session record; components react to this signal.
    pub session: RwSignal<Session>,
    /// Whether the held token has been confirmed by the backend in this
    /// process. False after a trust-on-reload rehydration.
    verified: RwSignal<bool>,
    /// Coalesces concurrent `verify` calls into one request.
    verify_in_flight: RwSignal<bool>,
}

impl SessionState {
    /// Create the session at process start: anonymous, or rehydrated from
    /// the token store without a network round-trip.
    pub fn bootstrap() -> Self {
        let (session, verified) = match storage::load() {
            Some((token, user)) => (Session::rehydrated(user, token), false),
            None => (Session::anonymous(), false),
        };
        Self {
            session: RwSignal::new(session),
            verified: RwSignal::new(verified),
            verify_in_flight: RwSignal::new(false),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.session.with(|s| s.status.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn display_name(&self) -> String {
        self.session.with(|s| s.display_name())
    }

    /// True when the session came from the cache and the token has not yet
    /// been confirmed in this process.
    pub fn needs_verification(&self) -> bool {
        self.session.with_untracked(|s| s.is_authenticated()) && !self.verified.get_untracked()
    }

    /// Exchange credentials for a session. On success the token store and
    /// the in-memory session are updated together; on failure the status
    /// carries the message and no credentials are retained.
    pub async fn login(self, email: String, password: String) {
        self.session.update(|s| s.begin_verifying());
        match api::login(&email, &password).await {
            Ok(auth) => self.complete(auth),
            Err(e) => self.session.update(|s| s.fail(credential_error(e))),
        }
    }

    /// Create an account and start a session with it.
    pub async fn register(self, name: String, email: String, password: String) {
        self.session.update(|s| s.begin_verifying());
        match api::register(&name, &email, &password).await {
            Ok(auth) => self.complete(auth),
            Err(e) => self.session.update(|s| s.fail(credential_error(e))),
        }
    }

    /// Confirm the held token against the backend. Safe to call from
    /// multiple mount points: concurrent calls coalesce into one request.
    /// Any failure drops the session and clears the token store.
    pub async fn verify(self) {
        if self.verify_in_flight.get_untracked() {
            return;
        }
        let Some(token) = self.token() else {
            self.expire();
            return;
        };
        self.verify_in_flight.set(true);

        match api::verify_identity(&token).await {
            Ok(user) => {
                self.session.update(|s| s.confirm_user(user));
                self.verified.set(true);
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("identity check failed: {}", e).into(),
                );
                self.expire();
            }
        }
        self.verify_in_flight.set(false);
    }

    /// User-initiated sign-out. Has no failure mode.
    pub fn logout(self) {
        self.expire();
    }

    /// Drop the session and the persisted pair together. Also the landing
    /// point when a protected call reports the token invalid.
    pub fn expire(self) {
        storage::clear();
        self.session.update(|s| s.reset());
        self.verified.set(false);
    }

    fn complete(self, auth: AuthResponse) {
        if let Err(e) = storage::save(&auth.token, &auth.user) {
            // Session stays valid in memory; it just won't survive a reload
            web_sys::console::warn_1(&format!("session not persisted: {}", e).into());
        }
        self.session.update(|s| s.complete_auth(auth.user, auth.token));
        self.verified.set(true);
    }
}

/// Human-readable message for a failed credential exchange.
fn credential_error(error: ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid email or password".to_string(),
        other => other.to_string(),
    }
}
