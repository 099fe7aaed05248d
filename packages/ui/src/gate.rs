//! Admission control for protected views.

use dioxus::prelude::*;

use crate::session::use_session;

/// Gate that withholds protected content until the session is known.
///
/// - **Unknown** (still initializing): a neutral spinner, no view logic runs.
/// - **Unauthenticated**: deterministic redirect to the login entry point;
///   no protected data fetch is issued.
/// - **Authenticated**: renders `children`.
#[component]
pub fn SessionGate(children: Element) -> Element {
    let session = use_session();
    let state = (session.state)();

    if state.loading {
        return rsx! {
            div {
                class: "gate-loading",
                div { class: "spinner" }
            }
        };
    }

    if !state.is_authenticated() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
