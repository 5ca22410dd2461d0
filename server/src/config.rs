//! Host configuration parsed from environment variables.
//!
//! Recognized variables:
//! - `PORT`: listen port (default 3000)
//! - `ARGUS_API_BASE`: surveillance backend base URL handed to the browser
//!   (default `http://localhost:8000`)
//! - `ARGUS_FRAMES_DIR`: when set, enables `POST /frames/upload-dev` and stores
//!   uploaded frames under this directory
//! - `ARGUS_COMPRESSION`: gzip responses (default on)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid ARGUS_API_BASE: {0:?} (expected an http:// or https:// URL)")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub port: u16,
    pub api_base: String,
    pub frames_dir: Option<PathBuf>,
    pub compression: bool,
}

impl WebConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or
    /// `ARGUS_API_BASE` is not an HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`WebConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()) {
            None => DEFAULT_PORT,
            Some(raw) if raw.is_empty() => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        let api_base = match lookup("ARGUS_API_BASE").map(|raw| raw.trim().trim_end_matches('/').to_owned()) {
            None => DEFAULT_API_BASE.to_owned(),
            Some(raw) if raw.is_empty() => DEFAULT_API_BASE.to_owned(),
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => raw,
            Some(raw) => return Err(ConfigError::InvalidApiBase(raw)),
        };

        let frames_dir = lookup("ARGUS_FRAMES_DIR")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let compression = lookup("ARGUS_COMPRESSION")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(true);

        Ok(Self { port, api_base, frames_dir, compression })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
