//! Feed-side widget showing the newest incidents.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads once on mount and, while the auto-refresh preference is on, polls
//! `/incidents` on a fixed interval. The poll loop stops when the widget
//! unmounts.

#[cfg(test)]
#[path = "recent_incidents_test.rs"]
mod recent_incidents_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::incident_card::IncidentCard;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::Incident;
use crate::state::remote::Remote;

/// Number of incidents the widget shows.
pub const RECENT_LIMIT: u32 = 5;

#[cfg(feature = "hydrate")]
const REFRESH_SECS: u64 = 15;

#[component]
pub fn RecentIncidents() -> impl IntoView {
    let incidents = RwSignal::new(Remote::<Vec<Incident>>::Loading);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load(incidents));
    });

    #[cfg(feature = "hydrate")]
    {
        let prefs = expect_context::<RwSignal<crate::util::preferences::Preferences>>();
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !prefs.get_untracked().auto_refresh {
                    continue;
                }
                load(incidents).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="recent-incidents">
            <div class="recent-incidents__head">
                <h3>"Recent Incidents"</h3>
                <A href="/incidents">"View all"</A>
            </div>
            {move || match incidents.get() {
                Remote::Loading => view! { <p class="muted">"Loading incidents..."</p> }.into_any(),
                Remote::Failed(message) => {
                    view! { <p class="text-bad">{format!("Failed to load incidents: {message}")}</p> }.into_any()
                }
                Remote::Ready(list) if list.is_empty() => {
                    view! { <p class="muted">"No incidents recorded yet."</p> }.into_any()
                }
                Remote::Ready(list) => {
                    list.into_iter()
                        .map(|incident| view! { <IncidentCard incident=incident compact=true/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}
        </section>
    }
}

#[cfg(feature = "hydrate")]
async fn load(incidents: RwSignal<Remote<Vec<Incident>>>) {
    apply_refresh(incidents, crate::net::api::incidents(RECENT_LIMIT).await);
}

/// Fold a fetch result into the widget, keeping the last good list on failure.
/// A no-op once the widget has unmounted.
#[cfg(any(test, feature = "hydrate"))]
fn apply_refresh(incidents: RwSignal<Remote<Vec<Incident>>>, result: Result<Vec<Incident>, ApiError>) {
    if let Err(e) = &result {
        leptos::logging::warn!("failed to refresh recent incidents: {e}");
    }
    let _ = incidents.try_update(|current| *current = std::mem::take(current).refreshed(result));
}
