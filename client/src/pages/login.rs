//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::login_form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <A href="/" attr:class="auth-page__back">"← Back to Home"</A>
            <header class="auth-page__header">
                <h1>"Welcome Back"</h1>
                <p>"Please sign in with your email and password to continue"</p>
            </header>
            <LoginForm/>
            <p class="auth-page__switch">
                "No account yet? "
                <A href="/register">"Register"</A>
            </p>
        </div>
    }
}
