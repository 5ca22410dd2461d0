//! Top bar for authenticated pages: navigation, theme toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the protected layout so every routed page shares the same
//! session controls. Logout asks for confirmation before dropping the token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::auth::AuthState;
use crate::util::theme::Theme;

/// Header with nav links, theme switch, and a confirmed logout button.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let navigate = use_navigate();
    let show_logout = RwSignal::new(false);
    let logout_confirmed = RwSignal::new(false);

    Effect::new(move || {
        if logout_confirmed.get() {
            crate::util::auth::sign_out(auth);
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_confirm_logout = Callback::new(move |()| {
        show_logout.set(false);
        logout_confirmed.set(true);
    });
    let on_cancel_logout = Callback::new(move |()| show_logout.set(false));

    view! {
        <header class="header">
            <h1>"Argus Core"</h1>

            <nav class="header-nav">
                <A href="/feed">"Feed"</A>
                <A href="/incidents">"Incidents"</A>
                <A href="/about">"About"</A>
                <A href="/settings">"Settings"</A>
            </nav>

            <div class="header-controls">
                <span class="header-user">{move || auth.get().display_email().unwrap_or_default().to_owned()}</span>
                <label class="theme-toggle" title="Toggle theme">
                    <input
                        type="checkbox"
                        prop:checked=move || theme.get().is_dark()
                        on:change=move |_| {
                            let next = crate::util::theme::toggle(theme.get_untracked());
                            theme.set(next);
                        }
                    />
                    <span class="slider">
                        <span class="icon sun">"☀️"</span>
                        <span class="icon moon">"🌙"</span>
                    </span>
                </label>
                <button class="logout-button" title="Logout" on:click=move |_| show_logout.set(true)>
                    "⏻"
                </button>
            </div>
        </header>

        <Show when=move || show_logout.get()>
            <ConfirmDialog
                title="Are you sure?"
                message="You will be signed out of the monitoring console."
                confirm_label="Logout"
                on_confirm=on_confirm_logout
                on_cancel=on_cancel_logout
            />
        </Show>
    }
}
