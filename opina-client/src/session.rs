/// The authenticated identity behind a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Backend-assigned user id.
    pub id: String,

    /// The company the user belongs to, if any.
    pub company_id: Option<String>,

    /// The login name.
    pub login: String,
}

/// The current authenticated identity plus its bearer token.
///
/// An explicit object with an init/teardown lifecycle, injected into the
/// authenticated client. The anonymous survey flow does not consume it
/// at all. Nothing here persists itself; callers decide whether and where
/// to store a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    identity: Option<Identity>,
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install credentials after a successful login.
    pub fn authenticate(&mut self, token: impl Into<String>, identity: Identity) {
        self.token = Some(token.into());
        self.identity = Some(identity);
    }

    /// Drop all credentials (logout, or a 401 from the backend).
    pub fn clear(&mut self) {
        self.token = None;
        self.identity = None;
    }

    /// The bearer token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The identity, if authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Check whether both a token and an identity are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.identity.is_some()
    }
}
