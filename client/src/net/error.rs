//! Typed failures for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages render `ApiError`'s `Display` inline. The backend reports problems as
//! `{"detail": ...}` bodies, either a message string or a validation list;
//! `detail_from_body` flattens both into one readable line.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Why a backend call did not produce a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired, please log in again")]
    Unauthorized,
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

/// Extract the human-readable reason from an error response body.
pub fn detail_from_body(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        match parsed.detail {
            Detail::Message(message) if !message.trim().is_empty() => return message,
            Detail::Validation(issues) if !issues.is_empty() => {
                return issues.into_iter().map(|i| i.msg).collect::<Vec<_>>().join("; ");
            }
            _ => {}
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        format!("request failed: {status}")
    } else {
        trimmed.chars().take(200).collect()
    }
}
