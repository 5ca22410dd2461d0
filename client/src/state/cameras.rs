//! Camera list helpers for the sidebar: search, status totals, demo fallback.

#[cfg(test)]
#[path = "cameras_test.rs"]
mod cameras_test;

use crate::net::types::Camera;

/// Cameras whose name or location contains `term`, case-insensitively.
/// A blank term keeps every camera.
pub fn filter_cameras<'a>(cameras: &'a [Camera], term: &str) -> Vec<&'a Camera> {
    let needle = term.trim().to_lowercase();
    cameras
        .iter()
        .filter(|cam| {
            needle.is_empty()
                || cam.name.to_lowercase().contains(&needle)
                || cam
                    .location
                    .as_deref()
                    .is_some_and(|loc| loc.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Totals shown under the camera list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl CameraStats {
    pub fn from_cameras(cameras: &[Camera]) -> Self {
        let active = cameras.iter().filter(|cam| cam.is_active).count();
        Self { total: cameras.len(), active, inactive: cameras.len() - active }
    }
}

fn demo(id: i64, name: &str, location: &str, is_active: bool) -> Camera {
    Camera { id, name: name.to_owned(), location: Some(location.to_owned()), rtsp_url: None, is_active }
}

/// Placeholder cameras shown when the backend camera list cannot be loaded.
pub fn fallback_cameras() -> Vec<Camera> {
    vec![
        demo(1, "Main Entrance", "Building A - Front Door", true),
        demo(2, "Parking Lot", "Building A - Parking Area", true),
        demo(3, "Hallway", "Building A - Floor 1", true),
        demo(4, "Emergency Exit", "Building A - Side Door", false),
    ]
}

/// Active demo cameras offered from the empty state.
pub fn demo_cameras() -> Vec<Camera> {
    fallback_cameras().into_iter().filter(|cam| cam.is_active).collect()
}
