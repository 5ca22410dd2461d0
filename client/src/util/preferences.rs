//! Notification and refresh preferences saved from the settings page.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use super::storage;

const NOTIFICATIONS_KEY: &str = "notifications";
const AUTO_REFRESH_KEY: &str = "autoRefresh";

/// User-togglable console preferences. Both default to on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Whether the backend should email alerts for simulations started here.
    pub notifications: bool,
    /// Whether incident widgets poll for new data.
    pub auto_refresh: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { notifications: true, auto_refresh: true }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(str::trim) {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

fn flag_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Load saved preferences; unset or malformed entries fall back to defaults.
pub fn load() -> Preferences {
    let defaults = Preferences::default();
    Preferences {
        notifications: parse_flag(storage::get(NOTIFICATIONS_KEY).as_deref(), defaults.notifications),
        auto_refresh: parse_flag(storage::get(AUTO_REFRESH_KEY).as_deref(), defaults.auto_refresh),
    }
}

/// Persist both preferences.
pub fn save(prefs: Preferences) {
    storage::set(NOTIFICATIONS_KEY, flag_str(prefs.notifications));
    storage::set(AUTO_REFRESH_KEY, flag_str(prefs.auto_refresh));
}
