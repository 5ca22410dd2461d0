//! Development frame upload endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console's webcam mode posts one JPEG snapshot at a time to
//! `POST /frames/upload-dev`. This route accepts those uploads and writes
//! them to disk so capture can be exercised without the full surveillance
//! backend. Nothing is analyzed here.
//!
//! ERROR HANDLING
//! ==============
//! Malformed multipart bodies, a missing or non-integer `camera_id`, and a
//! missing `file` part are client errors (400). Filesystem failures are 500.
//! Every error body is `{"detail": "..."}`, the shape the console already
//! understands.

#[cfg(test)]
#[path = "frames_test.rs"]
mod frames_test;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Largest accepted upload body. Webcam JPEG frames are far below this.
pub const MAX_FRAME_BYTES: usize = 10 * 1024 * 1024;

const FALLBACK_FILENAME: &str = "frame.jpg";

#[derive(Debug, thiserror::Error)]
pub enum FrameUploadError {
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("missing form field: {0}")]
    MissingField(&'static str),
    #[error("camera_id must be an integer, got {0:?}")]
    InvalidCameraId(String),
    #[error("failed to store frame: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl FrameUploadError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Multipart(_) | Self::MissingField(_) | Self::InvalidCameraId(_) => StatusCode::BAD_REQUEST,
            Self::Io(_) | Self::Timestamp(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FrameUploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "frame upload failed");
        } else {
            tracing::warn!(error = %self, "frame upload rejected");
        }
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// One decoded upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameUpload {
    pub camera_id: i64,
    /// Client capture time, as sent. Logged only.
    pub timestamp: Option<String>,
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReceipt {
    pub status: &'static str,
    pub path: String,
    pub received_at: String,
}

/// `POST /frames/upload-dev`: multipart `camera_id`, optional `timestamp`, `file`.
pub async fn upload_dev(
    State(frames_dir): State<Arc<PathBuf>>,
    multipart: Multipart,
) -> Result<Json<FrameReceipt>, FrameUploadError> {
    let upload = read_upload(multipart).await?;
    tracing::debug!(
        camera_id = upload.camera_id,
        client_timestamp = upload.timestamp.as_deref().unwrap_or("-"),
        bytes = upload.bytes.len(),
        "frame received"
    );
    let receipt = store_frame(&frames_dir, upload, OffsetDateTime::now_utc()).await?;
    tracing::info!(path = %receipt.path, "frame stored");
    Ok(Json(receipt))
}

async fn read_upload(mut multipart: Multipart) -> Result<FrameUpload, FrameUploadError> {
    let mut camera_id = None;
    let mut timestamp = None;
    let mut file = None;

    let malformed = |e: axum::extract::multipart::MultipartError| FrameUploadError::Multipart(e.body_text());
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("camera_id") => camera_id = Some(field.text().await.map_err(malformed)?),
            Some("timestamp") => timestamp = Some(field.text().await.map_err(malformed)?),
            Some("file") => {
                let filename = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(malformed)?;
                file = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let camera_id = parse_camera_id(camera_id.as_deref())?;
    let (filename, bytes) = file.ok_or(FrameUploadError::MissingField("file"))?;
    Ok(FrameUpload {
        camera_id,
        timestamp: timestamp.filter(|t| !t.trim().is_empty()),
        filename: sanitize_filename(filename.as_deref().unwrap_or_default()),
        bytes,
    })
}

fn parse_camera_id(raw: Option<&str>) -> Result<i64, FrameUploadError> {
    let raw = raw.ok_or(FrameUploadError::MissingField("camera_id"))?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FrameUploadError::InvalidCameraId(raw.to_owned()))
}

/// Reduce a client-supplied name to a safe single path component.
fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() { FALLBACK_FILENAME.to_owned() } else { cleaned.to_owned() }
}

/// Write `upload` to `<root>/camera_<id>/dev_frame_<unix>_<name>`.
///
/// # Errors
///
/// Returns `FrameUploadError::Io` if the directory or file cannot be written.
pub async fn store_frame(
    root: &Path,
    upload: FrameUpload,
    now: OffsetDateTime,
) -> Result<FrameReceipt, FrameUploadError> {
    let camera_dir = root.join(format!("camera_{}", upload.camera_id));
    tokio::fs::create_dir_all(&camera_dir).await?;
    let dest = camera_dir.join(format!("dev_frame_{}_{}", now.unix_timestamp(), upload.filename));
    tokio::fs::write(&dest, &upload.bytes).await?;
    Ok(FrameReceipt { status: "received", path: dest.display().to_string(), received_at: now.format(&Rfc3339)? })
}
