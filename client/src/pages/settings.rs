//! Settings page: account info, theme, notification and refresh preferences.
//!
//! Theme buttons apply immediately. The two preference toggles edit a draft
//! that only takes effect (and is persisted) on "Save Settings".

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::preferences::{self, Preferences};
use crate::util::theme::{self, Theme};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme_signal = expect_context::<RwSignal<Theme>>();
    let prefs = expect_context::<RwSignal<Preferences>>();

    let draft = RwSignal::new(prefs.get_untracked());
    let saved = RwSignal::new(false);
    let api_base = RwSignal::new(String::new());

    // Preferences load after mount; mirror them into the draft.
    Effect::new(move || {
        let current = prefs.get();
        if !saved.get_untracked() {
            draft.set(current);
        }
    });
    Effect::new(move || api_base.set(crate::util::config::api_base()));

    let choose_theme = move |next: Theme| {
        theme::set(next);
        theme_signal.set(next);
    };

    let on_save = move |_| {
        let chosen = draft.get_untracked();
        preferences::save(chosen);
        prefs.set(chosen);
        saved.set(true);
        leptos::logging::log!("preferences saved: {chosen:?}");
    };

    let user_field = move |pick: fn(&crate::net::types::User) -> String| {
        auth.with(|a| a.user.as_ref().map_or_else(|| "—".to_owned(), pick))
    };

    view! {
        <div class="page-container settings-page">
            <h2>"Settings"</h2>

            <section class="card settings-section">
                <h3>"Account"</h3>
                <dl class="detail-grid">
                    <dt>"Email"</dt>
                    <dd>{move || user_field(|u| u.email.clone())}</dd>
                    <dt>"User ID"</dt>
                    <dd>{move || user_field(|u| u.id.to_string())}</dd>
                    <dt>"Status"</dt>
                    <dd>{move || user_field(|u| if u.is_active { "Active".to_owned() } else { "Inactive".to_owned() })}</dd>
                </dl>
            </section>

            <section class="card settings-section">
                <h3>"Appearance"</h3>
                <div class="button-row">
                    <button
                        class="btn"
                        class:btn--primary=move || theme_signal.get() == Theme::Dark
                        on:click=move |_| choose_theme(Theme::Dark)
                    >
                        "🌙 Dark"
                    </button>
                    <button
                        class="btn"
                        class:btn--primary=move || theme_signal.get() == Theme::Light
                        on:click=move |_| choose_theme(Theme::Light)
                    >
                        "☀️ Light"
                    </button>
                </div>
            </section>

            <section class="card settings-section">
                <h3>"Preferences"</h3>
                <label class="toggle-row">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().notifications
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.notifications = checked);
                            saved.set(false);
                        }
                    />
                    <span>"Email alerts for analyses started from this console"</span>
                </label>
                <label class="toggle-row">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().auto_refresh
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.auto_refresh = checked);
                            saved.set(false);
                        }
                    />
                    <span>"Auto-refresh recent incidents"</span>
                </label>
                <div class="button-row">
                    <button class="btn btn--primary" on:click=on_save>"Save Settings"</button>
                    <Show when=move || saved.get()>
                        <span class="text-ok">"Settings saved successfully!"</span>
                    </Show>
                </div>
            </section>

            <section class="card settings-section">
                <h3>"System"</h3>
                <dl class="detail-grid">
                    <dt>"Version"</dt>
                    <dd>{env!("CARGO_PKG_VERSION")}</dd>
                    <dt>"Backend"</dt>
                    <dd>{move || api_base.get()}</dd>
                    <dt>"Theme"</dt>
                    <dd>{move || theme_signal.get().as_str()}</dd>
                </dl>
            </section>
        </div>
    }
}
