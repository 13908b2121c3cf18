//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is a session observer: its link set follows the token store
//! live, including logins and logouts performed in other tabs. Logging out
//! clears the token, which every other observer hears through the auth bus.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::use_auth_state;
use crate::state::token::TokenStore;
use crate::util::auth::{LOGIN_PATH, replace_options};

pub const BRAND_NAME: &str = "TaskApp";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Links shown for the given auth state, in display order.
pub fn nav_links(authenticated: bool) -> Vec<NavLink> {
    let mut links = vec![NavLink { href: "/", label: "Home" }];
    if authenticated {
        links.push(NavLink { href: "/users", label: "Users" });
    } else {
        links.push(NavLink { href: "/register", label: "Register" });
        links.push(NavLink { href: LOGIN_PATH, label: "Login" });
    }
    links
}

/// Exact path match; `/users` does not mark `/`.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

/// End the session and go to the login view.
pub fn log_out<F>(store: &TokenStore, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    store.clear_token();
    navigate(LOGIN_PATH, replace_options());
}

#[component]
pub fn Navbar() -> impl IntoView {
    let authenticated = use_auth_state();
    let location = use_location();

    view! {
        <nav class="navbar" aria-label="Main navigation">
            <div class="navbar__left">
                <A href="/" attr:class="navbar__brand">{BRAND_NAME}</A>
                <div class="navbar__links">
                    {move || {
                        let pathname = location.pathname.get();
                        nav_links(authenticated.get())
                            .into_iter()
                            .map(|link| {
                                let active = is_active(&pathname, link.href);
                                let class = if active { "navbar__link navbar__link--active" } else { "navbar__link" };
                                view! {
                                    <A href=link.href exact=true attr:class=class>
                                        {link.label}
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            <div class="navbar__right">
                <Show when=move || authenticated.get()>
                    <LogoutButton/>
                </Show>
                <ThemeToggle/>
            </div>
        </nav>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let navigate = use_navigate();
    let on_logout = move |_| log_out(&TokenStore::browser(), &navigate);

    view! {
        <button class="navbar__logout" type="button" aria-label="Logout" on:click=on_logout>
            "Logout"
        </button>
    }
}
