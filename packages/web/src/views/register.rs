//! Registration page view with name/email/password form.

use dioxus::prelude::*;

use api::{ApiError, Registration};
use ui::use_session;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the library
    let state = (session.state)();
    if !state.loading && state.is_authenticated() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/library");
            }
        }
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let result = session
                .register(Registration {
                    full_name: n,
                    email: e,
                    password: p,
                })
                .await;
            match result {
                Ok(()) => {
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/library");
                        }
                    }
                }
                Err(ApiError::AuthFailure(message)) => {
                    loading.set(false);
                    error.set(Some(message));
                }
                Err(err) => {
                    tracing::error!("registration request failed: {err}");
                    loading.set(false);
                    error.set(Some("Could not reach the server. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-page__title", "Create Account" }
            p { class: "auth-page__subtitle", "Sign up for Shelfmark" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "auth-form__error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-page__switch",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
