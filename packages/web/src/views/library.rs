//! The user's personal library.
//!
//! The library is the one collection the service can list directly, so no
//! probing happens here. Removal merges optimistically: the book disappears
//! from the snapshot as soon as the server acknowledges the delete.

use dioxus::prelude::*;

use store::remove_by_id;
use ui::icons::{FaBook, FaTrash};
use ui::{use_session, Banner, BannerKind, Icon};

use crate::Route;

#[component]
pub fn Library() -> Element {
    let session = use_session();
    let mut books = use_signal(Vec::<api::Book>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let _loader = use_resource(move || {
        let client = session.client();
        async move {
            match client.get_user_library().await {
                Ok(library) => books.set(library),
                Err(err) => {
                    tracing::error!("library fetch failed: {err}");
                    error.set(Some(
                        "Failed to load your library. Please try again.".to_string(),
                    ));
                }
            }
            loading.set(false);
        }
    });

    let handle_remove = move |book_id: i64| {
        let client = session.client();
        spawn(async move {
            match client.remove_book_from_library(book_id).await {
                Ok(()) => {
                    let mut snapshot = books();
                    remove_by_id(&mut snapshot, book_id);
                    books.set(snapshot);
                }
                Err(err) => {
                    tracing::error!("library removal failed: {err}");
                    error.set(Some(
                        "Failed to remove book from library. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "gate-loading", div { class: "spinner" } }
        };
    }

    rsx! {
        div {
            class: "page-header",
            div {
                class: "page-header__title",
                Icon { icon: FaBook, width: 24, height: 24 }
                h1 { "My Library" }
            }
        }

        if let Some(message) = error() {
            Banner {
                kind: BannerKind::Error,
                message,
                on_dismiss: move |_| error.set(None),
            }
        }

        if books().is_empty() {
            div {
                class: "empty-state",
                Icon { icon: FaBook, width: 40, height: 40 }
                h3 { "Your library is empty" }
                p { "Start adding books to build your collection" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::Books {});
                    },
                    "Explore Books"
                }
            }
        } else {
            div {
                class: "card-grid",
                for book in books() {
                    div {
                        key: "{book.id}",
                        class: "card",
                        h3 { "{book.title}" }
                        p { class: "card__byline", "by {book.author}" }
                        p { class: "card__description", "{book.description}" }
                        div {
                            class: "card__actions",
                            span { class: "card__meta", "{book.total_pages} pages" }
                            div {
                                button {
                                    class: "secondary",
                                    onclick: move |_| {
                                        nav.push(Route::BookDetail { id: book.id });
                                    },
                                    "View Details"
                                }
                                button {
                                    class: "danger-icon",
                                    aria_label: "Remove from library",
                                    onclick: move |_| handle_remove(book.id),
                                    Icon { icon: FaTrash, width: 16, height: 16 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
