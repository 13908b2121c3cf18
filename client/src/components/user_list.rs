//! Registered user directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only behind the route guard on `/users`. Loads on mount and again
//! on every Refresh / Try Again press. An expired session is handled inside
//! [`fetch_users`]; this component just stops showing the loading state.

#[cfg(test)]
#[path = "user_list_test.rs"]
mod user_list_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::users::{UserListState, UserListView};
use crate::util::format::format_timestamp;

pub fn users_heading(count: usize) -> String {
    format!("Registered Users ({count})")
}

#[component]
pub fn UserList() -> impl IntoView {
    let state = RwSignal::new(UserListState {
        loading: true,
        ..UserListState::default()
    });
    let reload = RwSignal::new(0_u32);
    let navigate = use_navigate();

    Effect::new(move || {
        reload.track();
        state.update(UserListState::begin_load);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let store = crate::state::token::TokenStore::browser();
                let service = crate::net::api::AuthService::browser();
                let outcome = crate::state::users::fetch_users(&service, &store, &navigate).await;
                state.update(|s| s.apply(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    });

    let refetch = move |_| reload.update(|n| *n = n.wrapping_add(1));

    move || match state.with(UserListState::view) {
        UserListView::Loading => view! {
            <div class="user-list user-list--loading" aria-busy="true">
                <span class="user-list__spinner" aria-hidden="true"></span>
                <span>"Loading users..."</span>
            </div>
        }
        .into_any(),
        UserListView::Error => view! {
            <div class="user-list user-list--error" role="alert">
                <p class="user-list__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                <button class="user-list__retry" type="button" on:click=refetch>
                    "Try Again"
                </button>
            </div>
        }
        .into_any(),
        UserListView::Empty => view! {
            <div class="user-list user-list--empty">
                <p>"No users found"</p>
                <button class="user-list__refresh" type="button" on:click=refetch>
                    "Refresh"
                </button>
            </div>
        }
        .into_any(),
        UserListView::Populated => {
            let users = state.with(|s| s.users.clone());
            view! {
                <div class="user-list">
                    <div class="user-list__header">
                        <h2>{users_heading(users.len())}</h2>
                        <button class="user-list__refresh" type="button" on:click=refetch>
                            "Refresh"
                        </button>
                    </div>
                    <table class="user-list__table">
                        <thead>
                            <tr>
                                <th scope="col">"Name"</th>
                                <th scope="col">"Email"</th>
                                <th scope="col">"Registered"</th>
                            </tr>
                        </thead>
                        <tbody>{users.into_iter().map(user_row).collect_view()}</tbody>
                    </table>
                </div>
            }
            .into_any()
        }
    }
}

fn user_row(user: User) -> impl IntoView {
    let registered = format_timestamp(&user.created_at);
    view! {
        <tr class="user-list__row">
            <td>{user.full_name()}</td>
            <td>{user.email}</td>
            <td>{registered}</td>
        </tr>
    }
}
