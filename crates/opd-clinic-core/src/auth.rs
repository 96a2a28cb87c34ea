//! Authentication gate.
//!
//! Sign-in, sign-up and password flows belong to the external identity
//! provider. The rest of the system only ever needs "is a user
//! authenticated", carried as an opaque token capability that is passed
//! explicitly to whatever needs the gate.

/// Opaque token issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a provider-issued token. The contents are never inspected.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

/// Current session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<AuthToken>,
}

impl Session {
    /// A session with no signed-in user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session backed by a provider token.
    pub fn authenticated(token: AuthToken) -> Self {
        Self { token: Some(token) }
    }

    /// The authorization gate.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Drop the token on sign-out.
    pub fn sign_out(&mut self) {
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_gate() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());

        session = Session::authenticated(AuthToken::new("provider-jwt"));
        assert!(session.is_authenticated());

        session.sign_out();
        assert!(!session.is_authenticated());
    }
}
