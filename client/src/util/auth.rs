//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and every logout path must clear the same storage slots.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a guarded route should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no session token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Forget the session locally. The backend issues stateless tokens, so there
/// is nothing to revoke server-side.
pub fn sign_out(auth: RwSignal<AuthState>) {
    super::session::clear_token();
    auth.set(AuthState::signed_out());
}
