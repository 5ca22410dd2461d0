//! Video panel for the selected camera: stream chrome, analysis, and webcam capture.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console never decodes backend video. The "stream" is a sized
//! placeholder driven by `FeedState`; analysis is delegated to the backend
//! (`/api/simulate/cameras/{id}` and `/api/detect`). The optional webcam mode
//! previews the operator's local camera and forwards snapshots to
//! `/frames/upload-dev` one at a time.

use leptos::prelude::*;

use crate::state::feed::{FeedState, simulation_summary};
use crate::util::format;
use crate::util::preferences::Preferences;

#[cfg(feature = "hydrate")]
const STATUS_ROTATE_SECS: u64 = 3;

#[component]
pub fn VideoFeed() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(STATUS_ROTATE_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                feed.update(FeedState::advance_status);
            }
        });
        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            // A running capture loop sees this on its next tick and releases the webcam.
            feed.update(|f| f.capture.stop());
        });
    }

    let on_toggle_stream = move |_| feed.update(FeedState::toggle_stream);
    let on_zoom_in = move |_| feed.update(FeedState::zoom_in);
    let on_zoom_out = move |_| feed.update(FeedState::zoom_out);

    let on_analyze = move |_| {
        let state = feed.get_untracked();
        let Some(camera_id) = state.selected_camera else {
            return;
        };
        if state.analyzing {
            return;
        }
        feed.update(|f| f.analyzing = true);
        let send_email = prefs.get_untracked().notifications;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::simulate_camera(camera_id, send_email).await;
            if let Err(e) = &result {
                leptos::logging::warn!("simulation failed for camera {camera_id}: {e}");
            }
            feed.update(|f| f.finish_analysis(result.map_err(|e| e.to_string())));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (camera_id, send_email);
    };

    let on_detect = move |_| {
        if feed.get_untracked().detecting {
            return;
        }
        feed.update(|f| {
            f.detecting = true;
            f.analysis_error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = async {
                let video = crate::net::api::random_video().await?;
                let events = crate::net::api::detect_anomalies(&video.video_url).await?;
                Ok::<_, crate::net::error::ApiError>(crate::state::feed::DetectionRun {
                    video_url: video.video_url,
                    events,
                })
            }
            .await;
            feed.update(|f| {
                f.detecting = false;
                match outcome {
                    Ok(run) => f.detection = Some(run),
                    Err(e) => {
                        leptos::logging::warn!("detection failed: {e}");
                        f.analysis_error = Some(e.to_string());
                    }
                }
            });
        });
    };

    let on_toggle_capture = move |_| {
        if feed.get_untracked().capture.active {
            feed.update(|f| f.capture.stop());
            // Release the webcam now rather than on the loop's next tick.
            #[cfg(feature = "hydrate")]
            if let Some(video) = video_ref.get_untracked() {
                if let Some(media) = video.src_object() {
                    crate::util::frame_capture::stop_camera(&video, &media);
                }
            }
            return;
        }
        let Some(camera_id) = feed.get_untracked().selected_camera else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked()) else {
                return;
            };
            let Some(session) = feed.try_update(|f| f.capture.begin()) else {
                return;
            };
            leptos::task::spawn_local(run_capture(camera_id, session, feed, video, canvas));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (camera_id, video_ref, canvas_ref);
    };

    let zoom_label = move || format!("Zoom: {}x", feed.get().zoom);
    let viewport_style = move || {
        let (w, h) = feed.get().viewport_px();
        format!("width: {w}px; height: {h}px;")
    };

    view! {
        <Show
            when=move || feed.get().selected_camera.is_some()
            fallback=|| {
                view! {
                    <div class="video-feed video-feed--empty">
                        <div class="video-feed__icon">"📹"</div>
                        <p>"Please select a camera from the sidebar"</p>
                        <p class="video-feed__hint">"Choose a camera to start monitoring"</p>
                    </div>
                }
            }
        >
            <div class="video-feed">
                <div class="video-feed__stage">
                    <Show
                        when=move || feed.get().streaming
                        fallback=|| {
                            view! {
                                <div class="video-feed__paused">
                                    <div class="video-feed__icon">"⏸️"</div>
                                    <p>"Stream Paused"</p>
                                    <p class="video-feed__hint">"Click play to start monitoring"</p>
                                </div>
                            }
                        }
                    >
                        <div class="video-feed__viewport" style=viewport_style>
                            <div class="video-feed__icon">"📹"</div>
                            <p>{move || format!("Camera {}", feed.get().selected_camera.unwrap_or_default())}</p>
                            <p class="video-feed__hint">"Live Stream"</p>
                            <span class="video-feed__live">"LIVE"</span>
                        </div>
                    </Show>
                    <video
                        class="video-feed__webcam"
                        class:video-feed__webcam--active=move || feed.get().capture.active
                        node_ref=video_ref
                        autoplay=true
                        muted=true
                        playsinline=true
                    ></video>
                    <canvas class="video-feed__snapshot" node_ref=canvas_ref aria-hidden="true"></canvas>
                </div>

                <div class="video-feed__status">
                    <h3>{move || format!("Camera {}", feed.get().selected_camera.unwrap_or_default())}</h3>
                    <p>{move || feed.get().stream_status()}</p>
                    <Show when=move || {
                        let capture = feed.get().capture;
                        capture.active || capture.sent > 0
                    }>
                        <p class="video-feed__capture">
                            {move || {
                                let capture = feed.get().capture;
                                format!("Frames sent: {} \u{2022} failed: {}", capture.sent, capture.failed)
                            }}
                        </p>
                    </Show>
                    <Show when=move || feed.get().capture.last_error.is_some()>
                        <p class="text-bad">{move || feed.get().capture.last_error.unwrap_or_default()}</p>
                    </Show>
                </div>

                <div class="video-feed__zoom">{zoom_label}</div>

                <div class="video-feed__controls">
                    <button
                        class="btn"
                        class:btn--danger=move || feed.get().streaming
                        class:btn--ok=move || !feed.get().streaming
                        on:click=on_toggle_stream
                    >
                        {move || if feed.get().streaming { "⏸️ Pause" } else { "▶️ Play" }}
                    </button>
                    <button class="btn" disabled=move || !feed.get().can_zoom_out() on:click=on_zoom_out>
                        "🔍- Zoom Out"
                    </button>
                    <button class="btn" disabled=move || !feed.get().can_zoom_in() on:click=on_zoom_in>
                        "🔍+ Zoom In"
                    </button>
                    <button class="btn btn--accent" disabled=move || feed.get().analyzing on:click=on_analyze>
                        {move || if feed.get().analyzing { "Analyzing…" } else { "Analyze Random Clip" }}
                    </button>
                    <button class="btn btn--accent" disabled=move || feed.get().detecting on:click=on_detect>
                        {move || if feed.get().detecting { "Detecting…" } else { "Detect Random Video" }}
                    </button>
                    <button class="btn" on:click=on_toggle_capture>
                        {move || if feed.get().capture.active { "Stop Webcam" } else { "Send Webcam Frames" }}
                    </button>
                </div>

                <Show when=move || feed.get().last_result.is_some()>
                    <div class="video-feed__result">
                        {move || feed.get().last_result.as_ref().map(simulation_summary).unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || feed.get().analysis_error.is_some()>
                    <div class="video-feed__result video-feed__result--error">
                        {move || feed.get().analysis_error.unwrap_or_default()}
                    </div>
                </Show>
                <DetectionResults/>
            </div>
        </Show>
    }
}

/// Event list from the most recent detect run.
#[component]
fn DetectionResults() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    move || {
        feed.get().detection.map(|run| {
            let rows = if run.events.is_empty() {
                vec![view! { <li>"No anomalies detected."</li> }.into_any()]
            } else {
                run.events
                    .into_iter()
                    .map(|ev| {
                        view! {
                            <li>
                                <strong>{ev.event}</strong>
                                {format!(" (Conf: {:.2}) @ {}", ev.confidence, format::time_of_day(&ev.time))}
                            </li>
                        }
                        .into_any()
                    })
                    .collect::<Vec<_>>()
            };
            view! {
                <div class="video-feed__detections">
                    <h4>{format!("Detections for {}", run.video_url)}</h4>
                    <ul class="anomaly-log-list">{rows}</ul>
                </div>
            }
        })
    }
}

/// Start the webcam and upload a snapshot every `CAPTURE_INTERVAL_MS` while
/// `session` stays current on `camera_id`.
///
/// Only the elements handed in and the app-level `feed` signal are touched
/// after an await, so the panel may unmount mid-loop.
#[cfg(feature = "hydrate")]
async fn run_capture(
    camera_id: i64,
    session: u64,
    feed: RwSignal<FeedState>,
    video: web_sys::HtmlVideoElement,
    canvas: web_sys::HtmlCanvasElement,
) {
    use crate::util::frame_capture::{self, CAPTURE_INTERVAL_MS};

    let media = match frame_capture::start_camera(&video).await {
        Ok(media) => media,
        Err(e) => {
            leptos::logging::warn!("webcam unavailable: {e}");
            feed.update(|f| {
                f.capture.record(session, Err(format!("Webcam unavailable: {e}")));
                f.capture.end(session);
            });
            return;
        }
    };
    leptos::logging::log!("frame capture session {session} started for camera {camera_id}");

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(CAPTURE_INTERVAL_MS)).await;
        if !feed.with_untracked(|f| f.capture_continues(session, camera_id)) {
            break;
        }
        let seq = feed.with_untracked(|f| f.capture.next_seq());
        let outcome = match frame_capture::snapshot(&video, &canvas).await {
            Ok(blob) => {
                let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
                let filename = frame_capture::frame_filename(camera_id, seq);
                crate::net::api::upload_frame(camera_id, &timestamp, &filename, &blob)
                    .await
                    .map(|receipt| log::debug!("frame {seq} stored at {}", receipt.path))
                    .map_err(|e| e.to_string())
            }
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            leptos::logging::warn!("frame {seq} upload failed: {e}");
        }
        feed.update(|f| f.capture.record(session, outcome));
    }

    frame_capture::stop_camera(&video, &media);
    feed.update(|f| f.capture.end(session));
    leptos::logging::log!("frame capture session {session} stopped for camera {camera_id}");
}
