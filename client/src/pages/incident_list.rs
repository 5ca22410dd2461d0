//! Incident list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the newest incidents once on mount. The backend orders them by
//! start time; the page renders them as returned.

use leptos::prelude::*;

use crate::components::incident_card::IncidentCard;
use crate::net::types::Incident;
use crate::state::remote::Remote;

#[component]
pub fn IncidentListPage() -> impl IntoView {
    let incidents = RwSignal::new(Remote::<Vec<Incident>>::Loading);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::incidents(crate::net::api::DEFAULT_INCIDENT_LIMIT).await;
            if let Err(e) = &result {
                leptos::logging::warn!("failed to fetch incidents: {e}");
            }
            // The page may have been left while the request was in flight.
            let _ = incidents.try_set(result.into());
        });
    });

    view! {
        <div class="page-container incident-list-page">
            <div class="page-head">
                <h2>"Incidents"</h2>
                <span class="muted">
                    {move || incidents.get().ready().map(|list| format!("{} shown", list.len())).unwrap_or_default()}
                </span>
            </div>
            {move || match incidents.get() {
                Remote::Loading => {
                    view! {
                        <div class="loading-container">
                            <div class="spinner"></div>
                            <span>"Loading incidents..."</span>
                        </div>
                    }
                        .into_any()
                }
                Remote::Failed(message) => {
                    view! { <div class="card error-card">{format!("Failed to load incidents: {message}")}</div> }
                        .into_any()
                }
                Remote::Ready(list) if list.is_empty() => {
                    view! {
                        <div class="card empty-card">
                            <h3>"No incidents yet"</h3>
                            <p>"Incidents appear here when the detector flags activity on a camera."</p>
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(list) => {
                    view! {
                        <div class="incident-grid">
                            {list
                                .into_iter()
                                .map(|incident| view! { <IncidentCard incident=incident/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
