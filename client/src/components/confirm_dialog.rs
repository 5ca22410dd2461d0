//! Modal yes/no dialog.

use leptos::prelude::*;

/// Backdrop-dismissable confirmation dialog. Escape cancels.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] confirm_label: String,
    #[prop(optional, into)] message: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" tabindex="0" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <h3>{title}</h3>
                {message.map(|m| view! { <p class="dialog__message">{m}</p> })}
                <div class="dialog__actions">
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
