//! Per-dialog share workflow state machine.
//!
//! A [`ShareSession`] lives exactly as long as one open share dialog. The
//! link sub-flow issues its generation request at most once per instance:
//! the first activation of the Link tab moves it to `Generating`, and the
//! outcome (`Ready` or `Failed`) is cached for the dialog's lifetime.
//! `Failed` can be re-entered only through an explicit retry. The invite
//! sub-flow is independent and allows repeated sends.

/// The dialog tab currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShareTab {
    /// Invite a user by email (default tab).
    #[default]
    Invite,
    /// Generate and copy a public link.
    Link,
}

/// Lifecycle of the public-link sub-flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    /// The Link tab has never been activated; no network call yet.
    #[default]
    NotRequested,
    /// Generation request in flight.
    Generating,
    /// Link generated and cached for the dialog's lifetime.
    Ready(String),
    /// Generation failed; terminal unless retried.
    Failed,
}

/// Lifecycle of the email-invite sub-flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InviteState {
    #[default]
    Idle,
    Sending,
    /// Last invite delivered, remembering the recipient for the message.
    Sent(String),
    Failed(String),
}

/// State of one open share dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShareSession {
    pub active_tab: ShareTab,
    pub link: LinkState,
    pub invite: InviteState,
}

impl ShareSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs. Returns `true` when the caller must issue the
    /// link-generation request: only on the first activation of the Link
    /// tab. Revisits after `Ready` or `Failed` never re-trigger it.
    pub fn activate_tab(&mut self, tab: ShareTab) -> bool {
        self.active_tab = tab;
        if tab == ShareTab::Link && self.link == LinkState::NotRequested {
            self.link = LinkState::Generating;
            return true;
        }
        false
    }

    /// Explicit retry after a failed generation. Returns `true` when the
    /// caller must issue a new request.
    pub fn retry_link(&mut self) -> bool {
        if self.link == LinkState::Failed {
            self.link = LinkState::Generating;
            return true;
        }
        false
    }

    pub fn link_ready(&mut self, url: String) {
        self.link = LinkState::Ready(url);
    }

    pub fn link_failed(&mut self) {
        self.link = LinkState::Failed;
    }

    pub fn link_url(&self) -> Option<&str> {
        match &self.link {
            LinkState::Ready(url) => Some(url),
            _ => None,
        }
    }

    /// Start an invite attempt. Returns `false` while a previous attempt is
    /// still in flight; completed attempts (sent or failed) do not block
    /// another send.
    pub fn begin_invite(&mut self) -> bool {
        if self.invite == InviteState::Sending {
            return false;
        }
        self.invite = InviteState::Sending;
        true
    }

    pub fn invite_sent(&mut self, email: String) {
        self.invite = InviteState::Sent(email);
    }

    pub fn invite_failed(&mut self, message: String) {
        self.invite = InviteState::Failed(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_without_link_tab_never_generates() {
        let mut share = ShareSession::new();
        assert!(!share.activate_tab(ShareTab::Invite));
        assert!(!share.activate_tab(ShareTab::Invite));
        assert_eq!(share.link, LinkState::NotRequested);
    }

    #[test]
    fn test_link_generates_exactly_once() {
        let mut share = ShareSession::new();
        assert!(share.activate_tab(ShareTab::Link));
        assert_eq!(share.link, LinkState::Generating);

        // Tab switching while in flight or after completion never re-fires
        assert!(!share.activate_tab(ShareTab::Invite));
        assert!(!share.activate_tab(ShareTab::Link));

        share.link_ready("https://share.example/abc".to_string());
        assert!(!share.activate_tab(ShareTab::Invite));
        assert!(!share.activate_tab(ShareTab::Link));
        assert_eq!(share.link_url(), Some("https://share.example/abc"));
    }

    #[test]
    fn test_failed_link_is_terminal_without_retry() {
        let mut share = ShareSession::new();
        assert!(share.activate_tab(ShareTab::Link));
        share.link_failed();

        assert!(!share.activate_tab(ShareTab::Invite));
        assert!(!share.activate_tab(ShareTab::Link));
        assert_eq!(share.link, LinkState::Failed);
    }

    #[test]
    fn test_retry_reenters_generating() {
        let mut share = ShareSession::new();
        assert!(share.activate_tab(ShareTab::Link));
        share.link_failed();

        assert!(share.retry_link());
        assert_eq!(share.link, LinkState::Generating);

        // Retry is only valid from Failed
        assert!(!share.retry_link());
        share.link_ready("https://share.example/abc".to_string());
        assert!(!share.retry_link());
    }

    #[test]
    fn test_invites_are_independent_attempts() {
        let mut share = ShareSession::new();
        assert!(share.begin_invite());
        // No double-send while in flight
        assert!(!share.begin_invite());

        share.invite_sent("a@example.com".to_string());
        assert!(share.begin_invite());
        share.invite_failed("network".to_string());
        assert!(share.begin_invite());
    }

    #[test]
    fn test_invite_does_not_touch_link_state() {
        let mut share = ShareSession::new();
        assert!(share.begin_invite());
        share.invite_sent("a@example.com".to_string());
        assert_eq!(share.link, LinkState::NotRequested);
    }
}
