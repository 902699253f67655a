//! Explicit session context handed down to every view.
//!
//! The token is read from browser storage once at startup and written back on
//! login/logout; components receive it through a `Session` value instead of
//! reading storage themselves.

/// Storage key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "intake.token";

/// Prefix of the token synthesized when login succeeds with an empty body.
pub const PLACEHOLDER_TOKEN_PREFIX: &str = "local-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            Self::anonymous()
        } else {
            Self { token: Some(token) }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
}

/// Presence check only. Expired or forged tokens pass here and are caught by
/// the 401 handling of the next API call.
pub fn gate(session: &Session) -> GateDecision {
    if session.is_authenticated() {
        GateDecision::Render
    } else {
        GateDecision::RedirectToLogin
    }
}

/// Token to keep after a successful login response. A body without a token
/// is tolerated by minting a local placeholder from `fallback_id`.
pub fn token_from_login(body_token: Option<String>, fallback_id: &str) -> String {
    body_token
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| format!("{}{}", PLACEHOLDER_TOKEN_PREFIX, fallback_id))
}
