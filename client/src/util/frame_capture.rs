//! Webcam snapshot capture for the development frame upload endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The feed page can stream the operator's local camera into a `<video>`
//! element and periodically copy the current frame onto an off-screen canvas,
//! encode it as JPEG, and post it to `/frames/upload-dev`. Capture and upload
//! run strictly one after another with no buffering. A failed upload is
//! logged and skipped.

#[cfg(test)]
#[path = "frame_capture_test.rs"]
mod frame_capture_test;

/// Delay between snapshots while capture is running.
pub const CAPTURE_INTERVAL_MS: u64 = 2_000;

/// Encoding used for uploaded snapshots.
pub const FRAME_MIME: &str = "image/jpeg";

/// Upload file name for the `seq`-th snapshot from `camera_id`.
pub fn frame_filename(camera_id: i64, seq: u64) -> String {
    format!("camera_{camera_id}_frame_{seq:06}.jpg")
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast as _, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamTrack};

    fn js_message(e: &JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{e:?}"))
    }

    /// Ask for the local camera and attach it to `video`.
    pub async fn start_camera(video: &HtmlVideoElement) -> Result<MediaStream, String> {
        let devices = web_sys::window()
            .ok_or_else(|| "no window".to_owned())?
            .navigator()
            .media_devices()
            .map_err(|e| js_message(&e))?;
        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        constraints.set_audio(&JsValue::FALSE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| js_message(&e))?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(|e| js_message(&e))?
            .dyn_into::<MediaStream>()
            .map_err(|_| "camera returned no stream".to_owned())?;
        video.set_src_object(Some(&stream));
        if let Ok(play) = video.play() {
            let _ = JsFuture::from(play).await;
        }
        Ok(stream)
    }

    /// Stop every track of `stream`. `video` is detached only while it still
    /// shows `stream`, so a newer session's preview stays up.
    pub fn stop_camera(video: &HtmlVideoElement, stream: &MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        if video.src_object().as_ref() == Some(stream) {
            video.set_src_object(None);
        }
    }

    /// Copy the current video frame onto `canvas` and encode it.
    pub async fn snapshot(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) -> Result<Blob, String> {
        let (width, height) = (video.video_width(), video.video_height());
        if width == 0 || height == 0 {
            return Err("camera not ready".to_owned());
        }
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| "2d context unavailable".to_owned())?;
        ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
            .map_err(|e| js_message(&e))?;

        let (tx, rx) = futures::channel::oneshot::channel::<Option<Blob>>();
        let callback = wasm_bindgen::closure::Closure::once_into_js(move |value: JsValue| {
            let _ = tx.send(value.dyn_into::<Blob>().ok());
        });
        canvas
            .to_blob_with_type(callback.unchecked_ref(), super::FRAME_MIME)
            .map_err(|e| js_message(&e))?;
        rx.await
            .ok()
            .flatten()
            .ok_or_else(|| "frame encoding failed".to_owned())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{snapshot, start_camera, stop_camera};
