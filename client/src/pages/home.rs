//! Landing page with calls to action and an overview.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::state::auth::use_auth_state;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "User Registration",
        description: "Create new user accounts with validated forms",
    },
    Feature {
        title: "User Management",
        description: "View and manage all registered users",
    },
    Feature {
        title: "Modern UI",
        description: "Responsive design with dark mode support",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomeTab {
    #[default]
    About,
    Features,
    TechStack,
}

impl HomeTab {
    pub const ALL: [Self; 3] = [Self::About, Self::Features, Self::TechStack];

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Features => "Features",
            Self::TechStack => "Tech Stack",
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let authenticated = use_auth_state();
    let tab = RwSignal::new(HomeTab::default());

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Welcome to Task Assessment"</h1>
                <p class="home-page__tagline">"Full-Stack User Management Application"</p>
                <div class="home-page__actions">
                    <Show when=move || !authenticated.get()>
                        <A href="/register" attr:class="button button--primary">"Register User"</A>
                    </Show>
                    <A
                        href="/users"
                        attr:class=move || {
                            if authenticated.get() { "button button--primary" } else { "button button--outline" }
                        }
                    >
                        "View Users"
                    </A>
                </div>
            </section>

            <section class="home-page__tabs">
                <div class="tabs" role="tablist">
                    {HomeTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    type="button"
                                    role="tab"
                                    aria-selected=move || if tab.get() == t { "true" } else { "false" }
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="tabs__panel" role="tabpanel">
                    {move || tab_panel(tab.get())}
                </div>
            </section>

            <section class="home-page__features">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="feature-card">
                                <h3>{f.title}</h3>
                                <p>{f.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}

fn tab_panel(tab: HomeTab) -> AnyView {
    match tab {
        HomeTab::About => view! {
            <div class="tabs__about">
                <p>
                    "A user directory front end written in Rust. Pages render on the server and "
                    "hydrate in the browser; sessions live entirely on the client."
                </p>
                <ul>
                    <li>"Leptos with server rendering and hydration"</li>
                    <li>"Axum host serving the compiled WASM bundle"</li>
                    <li>"Bearer-token sessions kept in browser storage"</li>
                    <li>"Light and dark themes"</li>
                </ul>
            </div>
        }
        .into_any(),
        HomeTab::Features => view! {
            <div class="tabs__features">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="tabs__feature">
                                <h4>{f.title}</h4>
                                <p>{f.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        HomeTab::TechStack => view! {
            <div class="tabs__stack">
                <div>
                    <h4>"Client"</h4>
                    <ul>
                        <li>"Leptos"</li>
                        <li>"leptos_router"</li>
                        <li>"gloo-net"</li>
                        <li>"web-sys"</li>
                    </ul>
                </div>
                <div>
                    <h4>"Host"</h4>
                    <ul>
                        <li>"Axum"</li>
                        <li>"leptos_axum"</li>
                        <li>"tower-http"</li>
                        <li>"tracing"</li>
                    </ul>
                </div>
            </div>
        }
        .into_any(),
    }
}
