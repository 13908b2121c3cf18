//! Light/dark switch in the navbar.

use leptos::prelude::*;

use crate::util::dark_mode::{self, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());

    // Storage and media queries only exist after mount.
    Effect::new(move || {
        let initial = dark_mode::read_preference();
        dark_mode::apply(initial);
        theme.set(initial);
    });

    view! {
        <button
            class="theme-toggle"
            type="button"
            role="switch"
            aria-pressed=move || if theme.get().is_dark() { "true" } else { "false" }
            aria-label=move || theme.get().switch_label()
            on:click=move |_| theme.set(dark_mode::toggle(theme.get_untracked()))
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
