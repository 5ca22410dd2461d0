//! Feed page UI state: camera selection, playback chrome, and analysis results.
//!
//! DESIGN
//! ======
//! Provided through context so the sidebar, video panel, and analysis controls
//! share one selection without prop threading. Kept alive across route
//! changes so returning to `/feed` restores the last view.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::{AnomalyEvent, SimulationResult};

/// Highest zoom step offered by the feed controls.
pub const MAX_ZOOM: u8 = 5;

/// Rotating status lines shown while the stream is playing.
pub const STREAM_STATUSES: [&str; 4] = [
    "Monitoring...",
    "Analyzing frames...",
    "No anomalies detected",
    "Processing video stream...",
];

/// Result of a detect run on a random dataset video.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionRun {
    pub video_url: String,
    pub events: Vec<AnomalyEvent>,
}

/// Counters for the webcam snapshot uploader.
///
/// Each start of capture opens a new `session`. A capture loop keeps running
/// only while it owns the current session, so a loop left over from an earlier
/// start exits on its next tick instead of uploading alongside the new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureStats {
    pub active: bool,
    pub session: u64,
    pub sent: u64,
    pub failed: u64,
    pub last_error: Option<String>,
}

impl CaptureStats {
    /// Open a new session with fresh counters and return its id.
    pub fn begin(&mut self) -> u64 {
        self.session = self.session.wrapping_add(1);
        self.active = true;
        self.sent = 0;
        self.failed = 0;
        self.last_error = None;
        self.session
    }

    /// Switch capture off, whichever session is running.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Mark `session` finished; a newer session is left untouched.
    pub fn end(&mut self, session: u64) {
        if self.session == session {
            self.active = false;
        }
    }

    pub fn owns(&self, session: u64) -> bool {
        self.active && self.session == session
    }

    /// Count one upload attempt from `session`. Results from stale sessions are dropped.
    pub fn record(&mut self, session: u64, outcome: Result<(), String>) {
        if self.session != session {
            return;
        }
        match outcome {
            Ok(()) => {
                self.sent += 1;
                self.last_error = None;
            }
            Err(e) => {
                self.failed += 1;
                self.last_error = Some(e);
            }
        }
    }

    /// Sequence number for the next snapshot file name.
    pub fn next_seq(&self) -> u64 {
        self.sent + self.failed
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub selected_camera: Option<i64>,
    pub streaming: bool,
    pub zoom: u8,
    pub status_tick: usize,
    pub analyzing: bool,
    pub last_result: Option<SimulationResult>,
    pub detecting: bool,
    pub detection: Option<DetectionRun>,
    pub analysis_error: Option<String>,
    pub capture: CaptureStats,
}

impl FeedState {
    /// Switch cameras; results from the previous camera no longer apply.
    pub fn select_camera(&mut self, id: i64) {
        if self.selected_camera != Some(id) {
            self.last_result = None;
            self.analysis_error = None;
        }
        self.selected_camera = Some(id);
    }

    /// Whether the capture loop for `session` on `camera_id` should take another snapshot.
    pub fn capture_continues(&self, session: u64, camera_id: i64) -> bool {
        self.capture.owns(session) && self.selected_camera == Some(camera_id)
    }

    pub fn toggle_stream(&mut self) {
        self.streaming = !self.streaming;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > 0
    }

    /// Pixel size of the simulated stream viewport at the current zoom.
    pub fn viewport_px(&self) -> (u32, u32) {
        let z = u32::from(self.zoom);
        (300 + z * 50, 200 + z * 35)
    }

    /// Status line for the overlay; only rotates while streaming.
    pub fn stream_status(&self) -> &'static str {
        if self.streaming {
            STREAM_STATUSES[self.status_tick % STREAM_STATUSES.len()]
        } else {
            STREAM_STATUSES[0]
        }
    }

    pub fn advance_status(&mut self) {
        if self.streaming {
            self.status_tick = self.status_tick.wrapping_add(1);
        }
    }

    /// Record a finished simulation; a successful run starts the stream view.
    pub fn finish_analysis(&mut self, result: Result<SimulationResult, String>) {
        self.analyzing = false;
        match result {
            Ok(result) => {
                self.last_result = Some(result);
                self.analysis_error = None;
                self.streaming = true;
            }
            Err(e) => self.analysis_error = Some(e),
        }
    }
}

/// One-line summary of a simulation: first prediction, probability, alert classes.
pub fn simulation_summary(result: &SimulationResult) -> String {
    let first = result.first_prediction.as_deref().filter(|p| !p.is_empty()).unwrap_or("N/A");
    let prob = result.probability.map_or_else(|| "\u{2014}".to_owned(), |p| format!("{p:.2}"));
    let alerts = if result.alert_types.is_empty() {
        "None".to_owned()
    } else {
        result.alert_types.join(", ")
    };
    format!("First: {first} \u{2022} Prob: {prob} \u{2022} Alerts: {alerts}")
}
