//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The token mirrors the `access_token`
//! localStorage entry; `util::session` is the only writer of that entry.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the session token, the resolved user, and
/// whether browser storage has been read yet.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl AuthState {
    /// A session exists once a token has been stored, even before `/users/me` resolves.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Display label for the signed-in user.
    pub fn display_email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Drop the token and user, leaving the state settled (not loading).
    pub fn signed_out() -> Self {
        Self { token: None, user: None, loading: false }
    }
}
