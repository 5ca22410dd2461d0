//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, home::HomePage, incident_detail::IncidentDetailPage, incident_list::IncidentListPage,
    login::LoginPage, register::RegisterPage, settings::SettingsPage,
};
use crate::state::{auth::AuthState, feed::FeedState};
use crate::util::preferences::Preferences;
use crate::util::theme::Theme;

/// Name of the `<meta>` tag carrying the backend base URL into the browser.
pub const API_BASE_META: &str = "argus-api-base";

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is embedded as a meta tag so the WASM client knows where the
/// surveillance backend lives without a rebuild.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, theme, preference, and feed contexts and sets up
/// client-side routing. Browser storage is only read after mount so the
/// server-rendered markup and the first hydrated frame agree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let theme = RwSignal::new(Theme::default());
    let prefs = RwSignal::new(Preferences::default());
    let feed = RwSignal::new(FeedState::default());

    provide_context(auth);
    provide_context(theme);
    provide_context(prefs);
    provide_context(feed);

    Effect::new(move || {
        let initial = crate::util::theme::read_preference();
        crate::util::theme::apply(initial);
        theme.set(initial);
        prefs.set(crate::util::preferences::load());
    });

    Effect::new(move || {
        let token = crate::util::session::read_token();
        let has_token = token.is_some();
        auth.set(AuthState { token, user: None, loading: false });
        if !has_token {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::current_user().await {
                Ok(user) => auth.update(|a| a.user = Some(user)),
                Err(e) => leptos::logging::warn!("failed to load current user: {e}"),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/argus.css"/>
        <Title text="Argus Core"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/feed"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("feed") view=HomePage/>
                    <Route path=StaticSegment("incidents") view=IncidentListPage/>
                    <Route path=(StaticSegment("incidents"), ParamSegment("id")) view=IncidentDetailPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/feed"/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Layout wrapping every authenticated route: header chrome plus the routed page.
/// Redirects to `/login` once the session has been read and no token exists.
#[component]
fn ProtectedLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="page-container">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-container">
                <Header/>
                <main class="content-container">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
