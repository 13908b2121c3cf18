//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages read the token store exactly once when they activate and
//! either render their content or replace the current history entry with
//! `/login`. Later changes arrive through the session observer (a sign-out in
//! this or another tab) or through an expired-session response, never through
//! polling.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::token::TokenStore;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Route guard lifecycle for one activation of a protected view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Token not read yet; render a placeholder.
    #[default]
    Checking,
    /// Token present; render the protected content.
    Authorized,
    /// Token absent; render nothing while navigating to the login view.
    Redirecting,
}

impl GuardState {
    /// Transition out of `Checking` from a single token read.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Authorized,
            _ => Self::Redirecting,
        }
    }
}

/// Navigation options that replace the current history entry.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Perform the one-shot guard check, navigating to `/login` when needed.
pub fn run_guard_check<F>(store: &TokenStore, navigate: &F) -> GuardState
where
    F: Fn(&str, NavigateOptions),
{
    let state = GuardState::from_token(store.get_token().as_deref());
    if state == GuardState::Redirecting {
        navigate(LOGIN_PATH, replace_options());
    }
    state
}

/// Apply a session observer report to an active guard. An authorized view
/// whose session ended is sent to `/login`; every other state is unchanged.
pub fn on_session_change<F>(current: GuardState, authenticated: bool, navigate: &F) -> GuardState
where
    F: Fn(&str, NavigateOptions),
{
    if current == GuardState::Authorized && !authenticated {
        navigate(LOGIN_PATH, replace_options());
        return GuardState::Redirecting;
    }
    current
}

/// Tear down the session after a protected request reported it expired.
pub fn expire_session<F>(store: &TokenStore, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    store.clear_token();
    navigate(LOGIN_PATH, replace_options());
}

/// Install the guard on the calling component and expose its state.
///
/// The check runs once after mount; during server rendering the guard stays
/// in `Checking`. A session observer then watches for sign-outs while the
/// view is authorized.
pub fn install_route_guard<F>(navigate: F) -> ReadSignal<GuardState>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let (state, set_state) = signal(GuardState::Checking);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::SessionObserver;

        let observer = StoredValue::new_local(None::<SessionObserver>);
        let navigate = navigate.clone();
        Effect::new(move || {
            if observer.with_value(Option::is_some) {
                return;
            }
            let navigate = navigate.clone();
            let attached = SessionObserver::attach(TokenStore::browser(), move |authenticated| {
                let current = state.get_untracked();
                let next = on_session_change(current, authenticated, &navigate);
                if next != current {
                    set_state.set(next);
                }
            });
            observer.set_value(Some(attached));
        });
        on_cleanup(move || {
            let _ = observer.try_update_value(|slot| {
                if let Some(active) = slot.take() {
                    active.detach();
                }
            });
        });
    }
    Effect::new(move || {
        if state.get_untracked() != GuardState::Checking {
            return;
        }
        set_state.set(run_guard_check(&TokenStore::browser(), &navigate));
    });
    state
}
