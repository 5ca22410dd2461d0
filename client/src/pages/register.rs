//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Shortest password the form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check the form before calling the backend; returns the trimmed email.
fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter an email address.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate("/login?registered=1", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = password.get();
        let email_value = match validate_registration(&email.get(), &password_value, &confirm.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&email_value, &password_value).await {
                Ok(user) => {
                    leptos::logging::log!("registered account {}", user.email);
                    let _ = registered.try_set(true);
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    let _ = error.try_set(Some(e.to_string()));
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
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Register to access the monitoring console"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="register-password">"Password"</label>
                    <input
                        id="register-password"
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label for="register-confirm">"Confirm Password"</label>
                    <input
                        id="register-confirm"
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
