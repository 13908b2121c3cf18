//! Dismissible error banner shared by the forms and the user list.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{move || message.get().unwrap_or_default()}</span>
                <button
                    class="error-banner__dismiss"
                    type="button"
                    aria-label="Dismiss"
                    on:click=move |_| message.set(None)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
