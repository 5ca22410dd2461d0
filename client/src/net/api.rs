//! REST API helpers for communicating with the surveillance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser, where the session token lives.
//!
//! ERROR HANDLING
//! ==============
//! Every authorized request reads the bearer token from localStorage at send
//! time. A 401 on such a request expires the session (token cleared, browser
//! sent to `/login`); `login` itself is unauthorized, so a 401 there is just
//! a credential error for the form to show. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AnomalyEvent, Camera, Incident, RandomVideo, SimulationResult, Token, User};

/// Default number of incidents the list views request.
pub const DEFAULT_INCIDENT_LIMIT: u32 = 100;

/// Raw evidence clip bytes plus the server-suggested file name.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipDownload {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn incidents_endpoint(limit: u32) -> String {
    format!("/incidents?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn incident_endpoint(id: i64) -> String {
    format!("/incidents/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn clip_endpoint(id: i64) -> String {
    format!("/clips/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn simulate_endpoint(camera_id: i64, send_email: bool) -> String {
    format!("/api/simulate/cameras/{camera_id}?send_email={send_email}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a failed response ends the session. Only requests that carried the
/// bearer token qualify; a 401 from `POST /token` means bad credentials.
#[cfg(any(test, feature = "hydrate"))]
fn expires_session(authorized: bool, status: u16) -> bool {
    authorized && status == 401
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;
    use crate::net::error::detail_from_body;
    use crate::util::{config, session};

    pub(super) fn get(path: &str) -> RequestBuilder {
        authorize(Request::get(&config::api_url(path)))
    }

    pub(super) fn post(path: &str) -> RequestBuilder {
        authorize(Request::post(&config::api_url(path)))
    }

    pub(super) fn post_anonymous(path: &str) -> RequestBuilder {
        Request::post(&config::api_url(path))
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match session::read_token() {
            Some(token) => builder.header("Authorization", &super::bearer_header(&token)),
            None => builder,
        }
    }

    pub(super) fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder.build().map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Send `request`; when `authorized`, a 401 expires the stored session.
    pub(super) async fn send(request: Request, authorized: bool) -> Result<Response, ApiError> {
        let url = request.url();
        let resp = request.send().await.map_err(|e| {
            log::warn!("request to {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        if super::expires_session(authorized, status) {
            log::info!("{url} returned 401; expiring session");
            session::expire();
            return Err(ApiError::Unauthorized);
        }
        let body = resp.text().await.unwrap_or_default();
        let detail = detail_from_body(status, &body);
        log::warn!("{url} returned {status}: {detail}");
        Err(ApiError::Status { status, detail })
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = send(build(builder)?, true).await?;
        decode(resp).await
    }
}

/// Exchange email + password for a bearer token via `POST /token`.
///
/// The backend expects an OAuth2 password form, so the email travels as `username`.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the backend's reason when the
/// credentials are rejected, or a transport/decode error.
pub async fn login(email: &str, password: &str) -> Result<Token, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Network("form encoding unavailable".to_owned()))?;
        form.append("username", email);
        form.append("password", password);
        let request = http::post_anonymous("/token")
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = http::send(request, false).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /users/register`.
///
/// # Errors
///
/// Returns `ApiError::Status` when the backend refuses the registration
/// (for example an email already in use).
pub async fn register(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::Registration { email: email.to_owned(), password: password.to_owned() };
        let request = http::post_anonymous("/users/register")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = http::send(request, false).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user from `GET /users/me`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` (after expiring the session) when the token is stale.
pub async fn current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::fetch_json(http::get("/users/me")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch every registered camera from `GET /cameras`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a camera list.
pub async fn cameras() -> Result<Vec<Camera>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::fetch_json(http::get("/cameras")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the most recent incidents (newest first) from `GET /incidents?limit=N`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not an incident list.
pub async fn incidents(limit: u32) -> Result<Vec<Incident>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::fetch_json(http::get(&incidents_endpoint(limit))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one incident with its clips from `GET /incidents/{id}`.
///
/// # Errors
///
/// Returns `ApiError::Status` with status 404 when the incident does not exist.
pub async fn incident(id: i64) -> Result<Incident, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::fetch_json(http::get(&incident_endpoint(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Download an evidence clip's bytes from `GET /clips/{id}`.
///
/// # Errors
///
/// Returns `ApiError::Status` with 404/410 when the clip row or file is gone.
pub async fn download_clip(id: i64) -> Result<ClipDownload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::build(http::get(&clip_endpoint(id)))?, true).await?;
        let filename = resp
            .headers()
            .get("content-disposition")
            .and_then(|header| crate::util::download::filename_from_content_disposition(&header));
        let bytes = resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ClipDownload { bytes, filename })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend for a random dataset video via `GET /api/videos/random`.
///
/// # Errors
///
/// Returns `ApiError::Status` with 404 when the backend has no dataset videos.
pub async fn random_video() -> Result<RandomVideo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::fetch_json(http::get("/api/videos/random")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Run anomaly detection on a backend-relative video URL via `POST /api/detect`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not an event list.
pub async fn detect_anomalies(video_url: &str) -> Result<Vec<AnomalyEvent>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::DetectRequest { video_url: video_url.to_owned() };
        let builder = http::post("/api/detect");
        let request = builder.json(&payload).map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = http::send(request, true).await?;
        let body: super::types::DetectResponse = http::decode(resp).await?;
        Ok(body.into_events())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_url;
        Err(ApiError::Unavailable)
    }
}

/// Trigger a backend simulation run for `camera_id` via `POST /api/simulate/cameras/{id}`.
///
/// The backend may create an incident, save a clip, and send an email alert
/// when `send_email` is set.
///
/// # Errors
///
/// Returns `ApiError::Status` when the backend cannot run the model.
pub async fn simulate_camera(camera_id: i64, send_email: bool) -> Result<SimulationResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = http::build(http::post(&simulate_endpoint(camera_id, send_email)))?;
        let resp = http::send(request, true).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (camera_id, send_email);
        Err(ApiError::Unavailable)
    }
}

/// Post one captured frame to `POST /frames/upload-dev` as multipart form data.
///
/// # Errors
///
/// Returns an error if the form cannot be assembled or the upload is rejected.
#[cfg(feature = "hydrate")]
pub async fn upload_frame(
    camera_id: i64,
    timestamp: &str,
    filename: &str,
    frame: &web_sys::Blob,
) -> Result<super::types::FrameReceipt, ApiError> {
    let form_error = |_| ApiError::Network("could not build frame form".to_owned());
    let form = web_sys::FormData::new().map_err(form_error)?;
    form.append_with_str("camera_id", &camera_id.to_string()).map_err(form_error)?;
    form.append_with_str("timestamp", timestamp).map_err(form_error)?;
    form.append_with_blob_and_filename("file", frame, filename).map_err(form_error)?;
    let request = http::post("/frames/upload-dev")
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = http::send(request, true).await?;
    http::decode(resp).await
}
