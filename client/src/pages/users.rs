//! Protected user directory page.
//!
//! The route guard runs once on mount. Until it settles the page shows a
//! checking placeholder; a visitor without a token sees nothing while the
//! guard replaces the history entry with `/login`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::user_list::UserList;
use crate::util::auth::{GuardState, install_route_guard};

#[component]
pub fn UsersPage() -> impl IntoView {
    let guard = install_route_guard(use_navigate());

    move || match guard.get() {
        GuardState::Checking => view! {
            <div class="users-page users-page--checking">
                <p>"Checking authorization..."</p>
            </div>
        }
        .into_any(),
        GuardState::Redirecting => ().into_any(),
        GuardState::Authorized => view! {
            <div class="users-page">
                <A href="/" attr:class="users-page__back">"← Back to Home"</A>
                <header class="users-page__header">
                    <h1>"User Directory"</h1>
                    <p>"View all registered users in the system"</p>
                </header>
                <UserList/>
            </div>
        }
        .into_any(),
    }
}
