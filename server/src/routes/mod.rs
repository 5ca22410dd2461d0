//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the Leptos SSR shell for every console route, the compiled
//! `/pkg` assets, a health probe, and (when a frames directory is configured)
//! the development frame upload endpoint. The surveillance API itself lives
//! elsewhere; its base URL is only passed through to the browser.

pub mod frames;


use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Health probe plus the optional frame upload endpoint.
fn api_routes(state: &AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new().route("/healthz", get(healthz));
    if let Some(dir) = &state.config.frames_dir {
        router = router.merge(frames_routes(dir.clone()));
    }
    router.layer(cors)
}

/// `POST /frames/upload-dev`, storing into `frames_dir`.
pub(crate) fn frames_routes(frames_dir: PathBuf) -> Router {
    Router::new()
        .route("/frames/upload-dev", post(frames::upload_dev))
        .layer(DefaultBodyLimit::max(frames::MAX_FRAME_BYTES))
        .with_state(Arc::new(frames_dir))
}

/// Leptos SSR frontend: API routes + SSR console routes + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(argus_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let api_base = state.config.api_base.clone();
            move || argus_ui::app::shell(opts.clone(), api_base.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let mut app = api_routes(&state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());
    if state.config.compression {
        app = app.layer(CompressionLayer::new());
    }
    Ok(app)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
