//! Credentials of an established web session.

use std::fmt;

/// CSRF token and cookie of a logged-in session.
///
/// Logging in is done outside this crate; the session is only replayed on
/// every request.
#[derive(Clone)]
pub struct Session {
    csrf_token: String,
    cookie: Option<String>,
}

impl Session {
    pub fn new(csrf_token: impl Into<String>, cookie: Option<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
            cookie,
        }
    }

    /// Value of the `X-CSRF-TOKEN` header.
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// Value of the `Cookie` header, if any.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("csrf_token", &"[REDACTED]")
            .field("cookie", &self.cookie.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
