//! Login page: email + password exchanged for a backend bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::state::auth::AuthState;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Inline message for a failed login attempt.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { detail, .. } if !detail.is_empty() => detail.clone(),
        ApiError::Network(_) => "Unable to reach the server. Please try again.".to_owned(),
        _ => "Login failed. Please check your credentials.".to_owned(),
    }
}

fn registered_flag(raw: Option<String>) -> bool {
    matches!(raw.as_deref(), Some("1" | "true"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = move || registered_flag(query.with(|q| q.get("registered")));

    // Leave the login screen as soon as a session exists, whether it was just
    // created here or restored from storage.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/feed", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(token) => {
                    crate::util::session::store_token(&token.access_token);
                    auth.set(AuthState { token: Some(token.access_token), user: None, loading: false });
                    match crate::net::api::current_user().await {
                        Ok(user) => auth.update(|a| a.user = Some(user)),
                        Err(e) => leptos::logging::warn!("logged in but failed to load user: {e}"),
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    let _ = error.try_set(Some(login_error_message(&e)));
                    let _ = busy.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Argus Core"</h1>
                <p class="auth-card__subtitle">"Sign in to the monitoring console"</p>
                <Show when=registered>
                    <p class="auth-message auth-message--ok">"Registration successful. Please log in."</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
