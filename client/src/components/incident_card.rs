//! Summary card for one incident, linking to its detail page.

use leptos::prelude::*;

use crate::net::types::Incident;
use crate::util::format;

/// Card used by the incident list and the recent-incidents widget.
/// `compact` drops the status and clip count for the narrow widget.
#[component]
pub fn IncidentCard(incident: Incident, #[prop(optional)] compact: bool) -> impl IntoView {
    let href = format!("/incidents/{}", incident.id);
    let clip_count = incident.clips.len();
    let status_class = format!("incident-status incident-status--{}", incident.status.to_ascii_lowercase());

    view! {
        <a href=href class="incident-card">
            <div class="incident-card__head">
                <span class="incident-card__type">{incident.event_type.clone()}</span>
                <span class="incident-card__score">{format!("Score: {}", format::score(incident.score))}</span>
            </div>
            <div class="incident-card__meta">
                <span>{format!("#{} \u{2022} Camera {}", incident.id, incident.camera_id)}</span>
                <span>{format::date_time(&incident.started_at)}</span>
            </div>
            {(!compact)
                .then(|| {
                    view! {
                        <div class="incident-card__foot">
                            <span class=status_class>{incident.status.clone()}</span>
                            <span>{format!("{clip_count} clip(s)")}</span>
                        </div>
                    }
                })}
        </a>
    }
}
