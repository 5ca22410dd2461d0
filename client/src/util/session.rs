//! Session token persistence.
//!
//! The backend issues a bearer token on login; it is kept in localStorage
//! under `access_token` and read by `net::api` on every authorized request.
//! Older builds of the console wrote `authToken`, which is still honored on
//! read and always cleared on logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::storage;

pub const TOKEN_KEY: &str = "access_token";
pub const LEGACY_TOKEN_KEY: &str = "authToken";

/// Pick the active token from the current and legacy storage slots.
fn resolve_token(current: Option<String>, legacy: Option<String>) -> Option<String> {
    current
        .into_iter()
        .chain(legacy)
        .map(|token| token.trim().to_owned())
        .find(|token| !token.is_empty())
}

/// Read the stored session token, if any.
pub fn read_token() -> Option<String> {
    resolve_token(storage::get(TOKEN_KEY), storage::get(LEGACY_TOKEN_KEY))
}

/// Persist a freshly issued token.
pub fn store_token(token: &str) {
    storage::set(TOKEN_KEY, token);
    storage::remove(LEGACY_TOKEN_KEY);
}

/// Forget the session in both storage slots.
pub fn clear_token() {
    storage::remove(TOKEN_KEY);
    storage::remove(LEGACY_TOKEN_KEY);
}

/// Drop an expired session and send the browser to the login page.
pub fn expire() {
    clear_token();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let on_login = window.location().pathname().is_ok_and(|path| path == "/login");
            if !on_login {
                let _ = window.location().set_href("/login");
            }
        }
    }
}
