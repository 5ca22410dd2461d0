//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` (`theme` = `dark`/`light`)
//! and mirrors it as a `dark`/`light` class on the `<html>` element. Toggle
//! writes back to `localStorage`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage;

const STORAGE_KEY: &str = "theme";

/// Color scheme for the console chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the effective theme: a stored choice wins, then the system
/// preference when the browser reports one, else dark.
fn resolve(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    match system_prefers_dark {
        Some(false) => Theme::Light,
        _ => Theme::Dark,
    }
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> Option<bool> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

/// Read the theme preference from localStorage, falling back to the system setting.
pub fn read_preference() -> Theme {
    let stored = storage::get(STORAGE_KEY);
    #[cfg(feature = "hydrate")]
    {
        resolve(stored.as_deref(), system_prefers_dark())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve(stored.as_deref(), None)
    }
}

/// Apply the theme class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let classes = el.class_list();
        let _ = classes.remove_1(theme.toggled().as_str());
        let _ = classes.add_1(theme.as_str());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to `theme`, apply it, and persist the choice.
pub fn set(theme: Theme) {
    apply(theme);
    storage::set(STORAGE_KEY, theme.as_str());
}

/// Flip the theme and persist the new preference; returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    set(next);
    next
}
