//! Wire DTOs for the surveillance backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON responses. The backend owns every
//! entity; the console only reads them, so fields are tolerant: optional
//! columns default, and SQLite-style 0/1 flags decode as booleans.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A camera registered with the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: i64,
    pub name: String,
    /// Free-form site description, e.g. `"Building A - Front Door"`.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rtsp_url: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_active: bool,
}

/// Evidence clip attached to an incident.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: i64,
    #[serde(default)]
    pub incident_id: Option<i64>,
    pub file_path: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}

/// A detected incident with its evidence clips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub camera_id: i64,
    /// Comma-separated anomaly classes, e.g. `"Fighting, Assault"`.
    pub event_type: String,
    #[serde(default)]
    pub score: Option<f64>,
    /// ISO-8601 timestamp; may or may not carry an offset.
    pub started_at: String,
    #[serde(default)]
    pub ended_at: Option<String>,
    pub status: String,
    /// JSON-encoded `[AnomalyEvent]` log written by the detector, if any.
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub clips: Vec<Clip>,
}

impl Incident {
    /// Decode the anomaly log stored in `note`.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `note` is present but is not an event list.
    pub fn anomaly_events(&self) -> Result<Vec<AnomalyEvent>, serde_json::Error> {
        match self.note.as_deref().map(str::trim) {
            None | Some("") => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw),
        }
    }
}

/// One detector observation: class, confidence, and wall-clock time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyEvent {
    pub event: String,
    pub confidence: f64,
    pub time: String,
}

/// The signed-in account from `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_active: bool,
}

/// Bearer token issued by `POST /token`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Body for `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
}

/// Dataset video picked by `GET /api/videos/random`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomVideo {
    /// Backend-relative URL such as `/datasets/ucf_crime/test/Fighting/Fighting001.mp4`.
    pub video_url: String,
}

/// Body for `POST /api/detect`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectRequest {
    pub video_url: String,
}

/// `POST /api/detect` answers either with a bare event list or an `{events}` wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DetectResponse {
    Events(Vec<AnomalyEvent>),
    Wrapped { events: Vec<AnomalyEvent> },
}

impl DetectResponse {
    pub fn into_events(self) -> Vec<AnomalyEvent> {
        match self {
            Self::Events(events) | Self::Wrapped { events } => events,
        }
    }
}

/// Outcome of `POST /api/simulate/cameras/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub first_prediction: Option<String>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub alert_types: Vec<String>,
    #[serde(default)]
    pub incident_id: Option<i64>,
    #[serde(default)]
    pub clip_id: Option<i64>,
    #[serde(default)]
    pub saved_clip_path: Option<String>,
}

/// Acknowledgement from `POST /frames/upload-dev`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameReceipt {
    pub status: String,
    pub path: String,
    pub received_at: String,
}

/// Accept `true`/`false` as well as the integer 0/1 flags the backend stores.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(int) => Ok(int != 0),
            None => Err(D::Error::custom("expected integer flag")),
        },
        _ => Err(D::Error::custom("expected boolean or integer flag")),
    }
}
