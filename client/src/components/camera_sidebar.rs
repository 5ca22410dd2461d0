//! Camera list with search, selection, and status totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/cameras` once on mount and writes the chosen camera into the
//! shared `FeedState`. When the backend list cannot be loaded the sidebar
//! falls back to demo cameras so the feed remains explorable.

use leptos::prelude::*;

use crate::net::types::Camera;
use crate::state::cameras::{CameraStats, demo_cameras, filter_cameras};
use crate::state::feed::FeedState;

#[component]
pub fn CameraSidebar() -> impl IntoView {
    let cameras = RwSignal::new(Vec::<Camera>::new());
    let loading = RwSignal::new(true);
    let using_fallback = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (list, fallback) = match crate::net::api::cameras().await {
                Ok(list) => (list, false),
                Err(e) => {
                    leptos::logging::warn!("failed to fetch cameras: {e}");
                    (crate::state::cameras::fallback_cameras(), true)
                }
            };
            // Unmounted while loading: nothing left to fill in.
            if cameras.try_set(list).is_some() {
                return;
            }
            using_fallback.set(fallback);
            loading.set(false);
        });
    });

    let stats = Memo::new(move |_| cameras.with(|list| CameraStats::from_cameras(list)));
    let visible = move || {
        let term = search.get();
        cameras.with(|list| filter_cameras(list, &term).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <aside class="camera-sidebar">
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="camera-sidebar__loading">
                            <div class="spinner"></div>
                            <span>"Loading Cameras..."</span>
                        </div>
                    }
                }
            >
                <div class="camera-sidebar__head">
                    <h2>"Camera Feeds"</h2>
                    <div class="camera-sidebar__search">
                        <input
                            type="text"
                            placeholder="Search cameras..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <span class="camera-sidebar__search-icon">"🔍"</span>
                    </div>
                    <Show when=move || using_fallback.get()>
                        <p class="camera-sidebar__notice">"Backend unavailable; showing demo cameras."</p>
                    </Show>
                </div>

                <div class="camera-sidebar__list">
                    {move || {
                        let list = visible();
                        if list.is_empty() {
                            view! {
                                <div class="camera-sidebar__empty">
                                    <p>"No cameras found. Click below to add demo cameras."</p>
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| {
                                            search.set(String::new());
                                            cameras.set(demo_cameras());
                                        }
                                    >
                                        "Add Demo Cameras"
                                    </button>
                                </div>
                            }
                                .into_any()
                        } else {
                            list.into_iter()
                                .map(|cam| view! { <CameraRow camera=cam/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>

                <div class="camera-sidebar__stats">
                    <div><span>"Total Cameras:"</span><span>{move || stats.get().total}</span></div>
                    <div><span>"Active:"</span><span class="text-ok">{move || stats.get().active}</span></div>
                    <div><span>"Inactive:"</span><span class="text-bad">{move || stats.get().inactive}</span></div>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn CameraRow(camera: Camera) -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let id = camera.id;
    let selected = move || feed.with(|f| f.selected_camera == Some(id));
    let location = camera.location.clone().unwrap_or_default();
    let active = camera.is_active;

    view! {
        <button
            class="camera-row"
            class:camera-row--selected=selected
            on:click=move |_| feed.update(|f| f.select_camera(id))
        >
            <div class="camera-row__text">
                <div class="camera-row__name">{camera.name}</div>
                <div class="camera-row__location">{location}</div>
            </div>
            <div class="camera-row__status">
                <span class="status-dot" class:status-dot--on=active></span>
                <span>{if active { "ON" } else { "OFF" }}</span>
            </div>
        </button>
    }
}
