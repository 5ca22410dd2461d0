//! Incident detail page with evidence clip downloads and the anomaly log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/incidents/:id`. The incident is fetched once per id. Clips are
//! downloaded through the authorized API client (the clip endpoint needs the
//! bearer token, so a plain link would not work) and handed to the browser as
//! a blob download.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures replace the page body with the error. Download failures are
//! shown above the clip list and leave the other clips usable. A `note` that
//! is not an event list is logged and the log section is hidden.

#[cfg(test)]
#[path = "incident_detail_test.rs"]
mod incident_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::{AnomalyEvent, Clip, Incident};
use crate::state::remote::Remote;
use crate::util::format;

fn parse_incident_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Whether the route still points at incident `id` when its response lands.
#[cfg(any(test, feature = "hydrate"))]
fn still_requested(id: i64, raw: Option<String>) -> bool {
    parse_incident_id(raw) == Some(id)
}

/// Events decoded from the incident note; malformed notes yield none.
fn anomaly_log(incident: &Incident) -> Vec<AnomalyEvent> {
    match incident.anomaly_events() {
        Ok(events) => events,
        Err(e) => {
            leptos::logging::warn!("incident {} has an unreadable anomaly log: {e}", incident.id);
            Vec::new()
        }
    }
}

/// Last path component of a stored clip, for display.
fn clip_label(clip: &Clip) -> String {
    clip.file_path
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .map_or_else(|| format!("Clip {}", clip.id), str::to_owned)
}

#[component]
pub fn IncidentDetailPage() -> impl IntoView {
    let params = use_params_map();
    let incident = RwSignal::new(Remote::<Incident>::Loading);

    Effect::new(move || {
        let Some(id) = parse_incident_id(params.with(|p| p.get("id"))) else {
            incident.set(Remote::Failed("Invalid incident id.".to_owned()));
            return;
        };
        incident.set(Remote::Loading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::incident(id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("failed to fetch incident {id}: {e}");
            }
            // Navigation may have moved to another incident or left the page.
            if params.try_with_untracked(|p| still_requested(id, p.get("id"))) == Some(true) {
                let _ = incident.try_set(result.into());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="page-container incident-detail-page">
            <A href="/incidents">"← Back to incidents"</A>
            {move || match incident.get() {
                Remote::Loading => {
                    view! {
                        <div class="loading-container">
                            <div class="spinner"></div>
                            <span>"Loading incident..."</span>
                        </div>
                    }
                        .into_any()
                }
                Remote::Failed(message) => {
                    view! { <div class="card error-card">{format!("Failed to load incident: {message}")}</div> }
                        .into_any()
                }
                Remote::Ready(detail) => view! { <IncidentDetail incident=detail/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn IncidentDetail(incident: Incident) -> impl IntoView {
    let events = anomaly_log(&incident);
    let incident_id = incident.id;
    let ended = incident.ended_at.as_deref().map_or_else(|| "Ongoing".to_owned(), format::date_time);

    view! {
        <div class="card incident-detail">
            <h2>{format!("Incident #{} \u{2022} {}", incident.id, incident.event_type)}</h2>
            <dl class="detail-grid">
                <dt>"Camera"</dt>
                <dd>{format!("Camera {}", incident.camera_id)}</dd>
                <dt>"Status"</dt>
                <dd>{incident.status.clone()}</dd>
                <dt>"Score"</dt>
                <dd>{format::score(incident.score)}</dd>
                <dt>"Started"</dt>
                <dd>{format::date_time(&incident.started_at)}</dd>
                <dt>"Ended"</dt>
                <dd>{ended}</dd>
            </dl>
        </div>

        <ClipDownloads incident_id=incident_id clips=incident.clips/>

        {(!events.is_empty())
            .then(|| {
                view! {
                    <div class="card">
                        <h3>"Anomaly Log"</h3>
                        <ul class="anomaly-log-list">
                            {events
                                .into_iter()
                                .map(|ev| {
                                    view! {
                                        <li>
                                            <span class="anomaly-log__time">{format::time_of_day(&ev.time)}</span>
                                            <strong>{ev.event}</strong>
                                            <span class="muted">{format!("Conf: {:.2}", ev.confidence)}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            })}
    }
}

#[component]
fn ClipDownloads(incident_id: i64, clips: Vec<Clip>) -> impl IntoView {
    let downloading = RwSignal::new(Vec::<i64>::new());
    let error = RwSignal::new(None::<String>);

    let start_download = move |clip_id: i64| {
        if downloading.with(|ids| ids.contains(&clip_id)) {
            return;
        }
        downloading.update(|ids| ids.push(clip_id));
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::download_clip(clip_id).await {
                Ok(download) => {
                    let filename = download
                        .filename
                        .unwrap_or_else(|| crate::util::download::fallback_clip_filename(incident_id, clip_id));
                    crate::util::download::save_bytes(&filename, &download.bytes)
                }
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = outcome {
                leptos::logging::warn!("clip {clip_id} download failed: {e}");
                let _ = error.try_set(Some(format!("Failed to download clip {clip_id}: {e}")));
            }
            let _ = downloading.try_update(|ids| ids.retain(|id| *id != clip_id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = incident_id;
    };

    view! {
        <div class="card">
            <h3>"Evidence Clips"</h3>
            <Show when=move || error.get().is_some()>
                <p class="text-bad">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {if clips.is_empty() {
                view! { <p class="muted">"No clips saved for this incident."</p> }.into_any()
            } else {
                view! {
                    <ul class="clip-list">
                        {clips
                            .into_iter()
                            .map(|clip| {
                                let clip_id = clip.id;
                                let label = clip_label(&clip);
                                let uploaded = clip.uploaded_at.as_deref().map(format::date_time).unwrap_or_default();
                                let busy = move || downloading.with(|ids| ids.contains(&clip_id));
                                view! {
                                    <li class="clip-row">
                                        <div>
                                            <div class="clip-row__name">{label}</div>
                                            <div class="muted">{uploaded}</div>
                                        </div>
                                        <button
                                            class="btn btn--primary"
                                            disabled=busy
                                            on:click=move |_| start_download(clip_id)
                                        >
                                            {move || if busy() { "Downloading..." } else { "Download" }}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}
