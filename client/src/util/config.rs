//! Backend location for REST calls.
//!
//! The host renders the backend base URL into a `<meta>` tag (see
//! `app::shell`); the browser reads it on each request so a redeploy of the
//! backend only needs a host restart.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when the host did not provide one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

fn resolve_api_base(meta: Option<String>) -> String {
    meta.map(|base| base.trim().trim_end_matches('/').to_owned())
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(feature = "hydrate")]
fn meta_api_base() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", crate::app::API_BASE_META);
    web_sys::window()?
        .document()?
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// The backend base URL without a trailing slash.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        resolve_api_base(meta_api_base())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_api_base(None)
    }
}

/// Absolute URL for a backend path such as `/incidents`.
pub fn api_url(path: &str) -> String {
    join(&api_base(), path)
}
