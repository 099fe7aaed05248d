use dioxus::prelude::*;

use ui::{Navbar, SessionGate, SessionProvider};
use views::{BookClubDetail, BookClubs, BookDetail, Books, Library, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/library")]
        Library {},
        #[route("/books")]
        Books {},
        #[route("/book/:id")]
        BookDetail { id: i64 },
        #[route("/book-clubs")]
        BookClubs {},
        #[route("/book-club/:id")]
        BookClubDetail { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Chrome around every protected view: navigation plus the session gate.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__link", to: Route::Library {}, "Library" }
            Link { class: "navbar__link", to: Route::Books {}, "Books" }
            Link { class: "navbar__link", to: Route::BookClubs {}, "Book Clubs" }
        }
        SessionGate {
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/library`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Library {});
    rsx! {}
}
