//! Hash-based routing.
//!
//! URL format: `#/login?redirect=%2Fshared%2Fabc`, `#/register`,
//! `#/shared/{token}`, and `#/` for the dashboard. Hash routing keeps the
//! app servable from static hosting; the browser back/forward buttons work
//! through `hashchange` events.

/// Application routes for hash-based navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Protected dashboard: `#/`.
    Dashboard,
    /// Login entry point, optionally carrying the originally requested
    /// path for post-login return: `#/login?redirect=...`.
    Login { redirect: Option<String> },
    /// Registration form: `#/register`.
    Register,
    /// Public shared-file viewer: `#/shared/{token}`.
    Shared { token: String },
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown paths fall back to the
    /// dashboard, whose guard decides what to do with them.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        match path.trim_end_matches('/') {
            "" => Self::Dashboard,
            "login" => Self::Login {
                redirect: query.and_then(redirect_param),
            },
            "register" => Self::Register,
            other => match other.strip_prefix("shared/") {
                Some(token) if !token.is_empty() => Self::Shared {
                    token: token.to_string(),
                },
                _ => Self::Dashboard,
            },
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Dashboard => "#/".to_string(),
            Self::Login { redirect: None } => "#/login".to_string(),
            Self::Login {
                redirect: Some(path),
            } => format!("#/login?redirect={}", encode_component(path)),
            Self::Register => "#/register".to_string(),
            Self::Shared { token } => format!("#/shared/{}", token),
        }
    }

    /// Login route returning to this route after authentication.
    pub fn login_with_return(&self) -> Self {
        let path = self.to_hash().trim_start_matches('#').to_string();
        Self::Login {
            redirect: (path != "/").then_some(path),
        }
    }

    /// Get current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route (adds a history entry).
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route without adding a history entry.
    ///
    /// Used for guard redirects so the back button does not bounce the
    /// user straight back into the guard.
    pub fn replace(&self) {
        crate::utils::dom::replace_hash(&self.to_hash());
    }
}

/// Extract and decode the `redirect` query parameter.
fn redirect_param(query: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let value = pair.strip_prefix("redirect=")?;
        (!value.is_empty()).then(|| decode_component(value))
    })
}

/// Minimal percent-encoding for the characters that matter inside a hash
/// query value.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn decode_component(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Some(hex) = value.get(i + 1..i + 3) {
                if let Ok(byte) = u8::from_str_radix(hex, 16) {
                    out.push(byte);
                    i += 3;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Dashboard);
        assert_eq!(
            AppRoute::from_hash("#/login"),
            AppRoute::Login { redirect: None }
        );
        assert_eq!(AppRoute::from_hash("#/register"), AppRoute::Register);
        assert_eq!(
            AppRoute::from_hash("#/shared/tok123"),
            AppRoute::Shared {
                token: "tok123".to_string(),
            }
        );
        // Unknown routes land on the dashboard (and its guard)
        assert_eq!(AppRoute::from_hash("#/nope"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#/shared/"), AppRoute::Dashboard);
    }

    #[test]
    fn test_redirect_round_trip() {
        let route = AppRoute::Shared {
            token: "tok123".to_string(),
        };
        let login = route.login_with_return();
        assert_eq!(
            login,
            AppRoute::Login {
                redirect: Some("/shared/tok123".to_string()),
            }
        );
        assert_eq!(login.to_hash(), "#/login?redirect=%2Fshared%2Ftok123");
        assert_eq!(AppRoute::from_hash(&login.to_hash()), login);
    }

    #[test]
    fn test_dashboard_needs_no_return_path() {
        assert_eq!(
            AppRoute::Dashboard.login_with_return(),
            AppRoute::Login { redirect: None }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Dashboard.to_hash(), "#/");
        assert_eq!(
            AppRoute::Login { redirect: None }.to_hash(),
            "#/login"
        );
        assert_eq!(AppRoute::Register.to_hash(), "#/register");
        assert_eq!(
            AppRoute::Shared {
                token: "tok123".to_string(),
            }
            .to_hash(),
            "#/shared/tok123"
        );
    }
}
