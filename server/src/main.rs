#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::WebConfig::from_env()?;
    if let Some(dir) = &config.frames_dir {
        tokio::fs::create_dir_all(dir).await?;
        tracing::info!(dir = %dir.display(), "dev frame uploads enabled");
    } else {
        tracing::info!("ARGUS_FRAMES_DIR not set; dev frame uploads disabled");
    }
    tracing::info!(api_base = %config.api_base, "surveillance backend");

    let port = config.port;
    let state = state::AppState::new(config);
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "argus console listening");
    axum::serve(listener, app).await?;
    Ok(())
}
