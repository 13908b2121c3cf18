//! Login form: validation, submission, and session start.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login is the only place a session begins. The form writes the
//! returned access token to the token store, which notifies every mounted
//! session observer, then replaces the current history entry with `/users`.
//!
//! ERROR HANDLING
//! ==============
//! Field problems are caught before any request is made and shown inline.
//! Request failures arrive already normalized and are shown verbatim in the
//! banner; the form never rewrites the server's wording.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::banner::ErrorBanner;
use crate::components::field::FormField;
use crate::net::api::AuthService;
use crate::net::error::Operation;
use crate::net::gateway::HttpTransport;
use crate::net::types::LoginRequest;
use crate::state::token::TokenStore;
use crate::util::auth::replace_options;
use crate::util::validate::{Field, FieldErrors, validate_login};

/// Where a fresh session lands.
pub const AFTER_LOGIN_PATH: &str = "/users";

/// Result of one login submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Validation failed; no request was made.
    Invalid(FieldErrors),
    /// Token stored and navigation issued.
    SignedIn,
    /// Banner message for a failed request.
    Rejected(String),
}

/// Validate, call the login endpoint, and start the session on success.
pub async fn submit_login<T, F>(service: &AuthService<T>, store: &TokenStore, form: &LoginRequest, navigate: &F) -> LoginOutcome
where
    T: HttpTransport,
    F: Fn(&str, NavigateOptions),
{
    let errors = validate_login(form);
    if !errors.is_empty() {
        return LoginOutcome::Invalid(errors);
    }

    let result = service
        .login(form)
        .await
        .and_then(|envelope| envelope.into_data(Operation::Login));
    match result {
        Ok(data) => {
            store.set_token(&data.access_token);
            navigate(AFTER_LOGIN_PATH, replace_options());
            LoginOutcome::SignedIn
        }
        Err(err) => LoginOutcome::Rejected(err.banner_message().unwrap_or_else(|| err.to_string())),
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let edited = move |field: Field| {
        Callback::new(move |()| {
            errors.update(|e| e.clear(field));
            banner.set(None);
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let found = validate_login(&form);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        busy.set(true);
        banner.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let store = TokenStore::browser();
                let service = AuthService::browser();
                match submit_login(&service, &store, &form, &navigate).await {
                    LoginOutcome::Invalid(found) => errors.set(found),
                    LoginOutcome::SignedIn => {}
                    LoginOutcome::Rejected(message) => banner.set(Some(message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, form);
    };

    view! {
        <form class="auth-form" novalidate=true on:submit=on_submit>
            <h2 class="auth-form__title">"Sign in to your account"</h2>
            <FormField
                label="Email"
                name="email"
                input_type="email"
                autocomplete="email"
                value=email
                error=move || errors.get().email
                on_edit=edited(Field::Email)
            />
            <FormField
                label="Password"
                name="password"
                input_type="password"
                autocomplete="current-password"
                value=password
                error=move || errors.get().password
                on_edit=edited(Field::Password)
            />
            <ErrorBanner message=banner/>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}
