//! Authentication session state machine.
//!
//! A [`Session`] is the single owned record of who is logged in. It is
//! created once at process start (anonymous, or rehydrated from the token
//! store) and mutated only through the transition methods below, which keep
//! the core invariant: the session is `Authenticated` exactly when both a
//! user and a token are present.

use serde::{Deserialize, Serialize};

/// Authenticated user record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Response payload of the login and register endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Response payload of the identity-check endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyResponse {
    pub user: User,
}

/// Lifecycle phase of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No credentials held.
    #[default]
    Anonymous,
    /// A credential exchange is in flight (login, register).
    Verifying,
    /// User and token are both present.
    Authenticated,
    /// The last credential exchange failed.
    Error(String),
}

/// The authenticated identity and credential held by the running client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub status: SessionStatus,
}

impl Session {
    /// Fresh anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session rehydrated from the token store at startup.
    ///
    /// Trusts the cached user record without a network round-trip; lazy
    /// verification corrects this later if the token turned out stale.
    pub fn rehydrated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            status: SessionStatus::Authenticated,
        }
    }

    /// A credential exchange has started.
    pub fn begin_verifying(&mut self) {
        self.status = SessionStatus::Verifying;
    }

    /// Login or registration succeeded.
    pub fn complete_auth(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.status = SessionStatus::Authenticated;
    }

    /// Identity check succeeded for the token already held.
    pub fn confirm_user(&mut self, user: User) {
        self.user = Some(user);
        if self.token.is_some() {
            self.status = SessionStatus::Authenticated;
        }
    }

    /// A credential exchange failed; no credentials are retained.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.user = None;
        self.token = None;
        self.status = SessionStatus::Error(message.into());
    }

    /// Drop all credentials (logout, expired token, failed verification).
    pub fn reset(&mut self) {
        *self = Self::anonymous();
    }

    /// True when both user and token are held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
            && self.token.is_some()
            && self.status == SessionStatus::Authenticated
    }

    /// Error message from the last failed exchange, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Display name for headers ("guest" when anonymous).
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "guest".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.status, SessionStatus::Anonymous);
        assert_eq!(session.display_name(), "guest");
    }

    #[test]
    fn test_login_success_transition() {
        let mut session = Session::anonymous();
        session.begin_verifying();
        assert_eq!(session.status, SessionStatus::Verifying);

        session.complete_auth(user(), "tok-1".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.display_name(), "Ada");
    }

    #[test]
    fn test_login_failure_retains_nothing() {
        let mut session = Session::anonymous();
        session.begin_verifying();
        session.fail("Invalid email or password");

        assert!(!session.is_authenticated());
        assert_eq!(session.user, None);
        assert_eq!(session.token, None);
        assert_eq!(session.error_message(), Some("Invalid email or password"));
    }

    #[test]
    fn test_rehydrated_is_authenticated() {
        let session = Session::rehydrated(user(), "tok-1".to_string());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::rehydrated(user(), "tok-1".to_string());
        session.reset();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_authenticated_requires_both_fields() {
        // confirm_user without a token must not claim authentication
        let mut session = Session::anonymous();
        session.confirm_user(user());
        assert!(!session.is_authenticated());

        session.token = Some("tok-1".to_string());
        session.confirm_user(user());
        assert!(session.is_authenticated());
    }
}
