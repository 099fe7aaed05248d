//! Top navigation bar.

use dioxus::prelude::*;

use crate::icons::FaBookOpen;
use crate::session::{use_session, LogoutButton};
use crate::Icon;

/// Application chrome: brand, the caller's navigation links, current user
/// and logout. Link rendering is left to `children` so this crate stays
/// independent of any router's route type.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let state = (session.state)();

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar__brand",
                Icon { icon: FaBookOpen, width: 20, height: 20 }
                span { "Shelfmark" }
            }
            nav {
                class: "navbar__links",
                {children}
            }
            div {
                class: "navbar__session",
                if let Some(user) = state.user {
                    span { class: "navbar__user", "{user.full_name}" }
                }
                LogoutButton { class: "navbar__logout" }
            }
        }
    }
}
