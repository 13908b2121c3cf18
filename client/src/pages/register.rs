//! Registration page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::register_form::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <A href="/" attr:class="auth-page__back">"← Back to Home"</A>
            <header class="auth-page__header">
                <h1>"Register New User"</h1>
                <p>"Create a new account by filling out the form below"</p>
            </header>
            <RegisterForm/>
        </div>
    }
}
