//! Login page view with email/password form.

use dioxus::prelude::*;

use api::{ApiError, Credentials};
use ui::use_session;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
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

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            let result = session
                .login(Credentials {
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
                    tracing::error!("login request failed: {err}");
                    loading.set(false);
                    error.set(Some("Could not reach the server. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-page__title", "Shelfmark" }
            p { class: "auth-page__subtitle", "Sign in to your account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "auth-form__error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-page__switch",
                "New to Shelfmark? "
                a { href: "/register", "Create an account" }
            }
        }
    }
}
