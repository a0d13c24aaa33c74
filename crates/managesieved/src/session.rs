//! Per-connection protocol state.
//!
//! A [`Session`] is owned by whoever drives a single client connection. The
//! dispatcher only threads it through to script operations by mutable
//! reference; it never inspects or retains it.

/// Protocol state for one client connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
    tls_active: bool,
}

impl Session {
    /// Creates a fresh, unauthenticated session without TLS.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            user: None,
            tls_active: false,
        }
    }

    /// Name of the authenticated user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Whether a user has authenticated on this connection.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the connection has completed a TLS handshake.
    #[must_use]
    pub const fn is_tls_active(&self) -> bool {
        self.tls_active
    }

    /// Records a successful authentication.
    pub fn authenticate(&mut self, user: impl Into<String>) {
        self.user = Some(user.into());
    }

    /// Drops the authenticated identity, returning it if one was set.
    pub fn unauthenticate(&mut self) -> Option<String> {
        self.user.take()
    }

    /// Marks the connection as protected by TLS.
    pub const fn mark_tls_active(&mut self) {
        self.tls_active = true;
    }
}
