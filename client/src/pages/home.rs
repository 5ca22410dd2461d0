//! Feed page: camera sidebar, the selected camera's panel, and recent incidents.

use leptos::prelude::*;

use crate::components::camera_sidebar::CameraSidebar;
use crate::components::recent_incidents::RecentIncidents;
use crate::components::video_feed::VideoFeed;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="feed-page">
            <CameraSidebar/>
            <section class="feed-page__main">
                <VideoFeed/>
            </section>
            <aside class="feed-page__side">
                <RecentIncidents/>
            </aside>
        </div>
    }
}
