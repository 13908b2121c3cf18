//! Registration form with a success dialog.
//!
//! Registration never starts a session: a successful response resets the form
//! and opens a confirmation dialog. Validation and banner behavior match the
//! login form.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use crate::components::banner::ErrorBanner;
use crate::components::field::FormField;
use crate::net::api::AuthService;
use crate::net::error::Operation;
use crate::net::gateway::HttpTransport;
use crate::net::types::{RegisterRequest, User};
use crate::util::validate::{Field, FieldErrors, validate_register};

pub const SUCCESS_MESSAGE: &str = "User registered successfully!";

/// Result of one registration submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Invalid(FieldErrors),
    /// The API accepted the account; `data` is optional on this response.
    Registered(Option<User>),
    Rejected(String),
}

/// Validate and call the register endpoint. `success: true` alone counts as
/// registered.
pub async fn submit_register<T: HttpTransport>(service: &AuthService<T>, form: &RegisterRequest) -> RegisterOutcome {
    let errors = validate_register(form);
    if !errors.is_empty() {
        return RegisterOutcome::Invalid(errors);
    }

    let result = service
        .register(form)
        .await
        .and_then(|envelope| {
            if envelope.success {
                Ok(envelope.data)
            } else {
                envelope.into_data(Operation::Register).map(Some)
            }
        });
    match result {
        Ok(user) => RegisterOutcome::Registered(user),
        Err(err) => RegisterOutcome::Rejected(err.banner_message().unwrap_or_else(|| err.to_string())),
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let show_success = RwSignal::new(false);

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
        let form = RegisterRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        let found = validate_register(&form);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        busy.set(true);
        banner.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let service = AuthService::browser();
            match submit_register(&service, &form).await {
                RegisterOutcome::Invalid(found) => errors.set(found),
                RegisterOutcome::Registered(_) => {
                    for field in [first_name, last_name, email, password] {
                        field.set(String::new());
                    }
                    show_success.set(true);
                }
                RegisterOutcome::Rejected(message) => banner.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    view! {
        <form class="auth-form" novalidate=true on:submit=on_submit>
            <h2 class="auth-form__title">"Create New Account"</h2>
            <div class="auth-form__row">
                <FormField
                    label="First Name"
                    name="firstName"
                    autocomplete="given-name"
                    value=first_name
                    error=move || errors.get().first_name
                    on_edit=edited(Field::FirstName)
                />
                <FormField
                    label="Last Name"
                    name="lastName"
                    autocomplete="family-name"
                    value=last_name
                    error=move || errors.get().last_name
                    on_edit=edited(Field::LastName)
                />
            </div>
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
                autocomplete="new-password"
                value=password
                error=move || errors.get().password
                on_edit=edited(Field::Password)
            />
            <ErrorBanner message=banner/>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Registering..." } else { "Register" }}
            </button>
        </form>
        <Show when=move || show_success.get()>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog" aria-modal="true" aria-labelledby="register-success-title">
                    <h3 id="register-success-title" class="dialog__title">"Success"</h3>
                    <p class="dialog__body">{SUCCESS_MESSAGE}</p>
                    <button class="dialog__close" type="button" on:click=move |_| show_success.set(false)>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
