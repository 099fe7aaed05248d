//! Browse, create and delete book clubs.
//!
//! Like books, the club list is synthesized by probing: the view shows
//! whatever the probe range can see. Creates append to the snapshot;
//! deletes remove the matching member without re-materializing.

use dioxus::prelude::*;

use api::NewBookClub;
use store::{append_created, remove_by_id};
use ui::icons::{FaComments, FaPlus, FaTrash, FaUsers};
use ui::{dismiss_after, use_session, Banner, BannerKind, Icon};

use crate::Route;

#[component]
pub fn BookClubs() -> Element {
    let session = use_session();
    let mut clubs = use_signal(Vec::<api::BookClub>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut form_visible = use_signal(|| false);

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut book_title = use_signal(String::new);

    let nav = use_navigator();

    // Materialize the club list on mount
    let _loader = use_resource(move || {
        let client = session.client();
        async move {
            clubs.set(client.list_book_clubs().await);
            loading.set(false);
        }
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let client = session.client();
        spawn(async move {
            let payload = NewBookClub {
                name: name().trim().to_string(),
                description: description().trim().to_string(),
                book_title: book_title().trim().to_string(),
            };
            if payload.name.is_empty() {
                error.set(Some("Club name is required".to_string()));
                return;
            }

            match client.create_book_club(&payload).await {
                Ok(created) => {
                    let mut snapshot = clubs();
                    append_created(&mut snapshot, created);
                    clubs.set(snapshot);

                    name.set(String::new());
                    description.set(String::new());
                    book_title.set(String::new());
                    form_visible.set(false);
                    dismiss_after(success, "Book club created successfully!".to_string());
                }
                Err(err) => {
                    tracing::error!("create book club failed: {err}");
                    error.set(Some(
                        "Failed to create book club. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    let handle_delete = move |club_id: i64| {
        let client = session.client();
        spawn(async move {
            match client.delete_book_club(club_id).await {
                Ok(()) => {
                    let mut snapshot = clubs();
                    remove_by_id(&mut snapshot, club_id);
                    clubs.set(snapshot);
                    dismiss_after(success, "Book club deleted successfully!".to_string());
                }
                Err(err) => {
                    tracing::error!("delete book club failed: {err}");
                    error.set(Some(
                        "Failed to delete book club. Please try again.".to_string(),
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
                Icon { icon: FaUsers, width: 24, height: 24 }
                h1 { "Book Clubs" }
            }
            button {
                class: "primary",
                onclick: move |_| {
                    let visible = form_visible();
                    form_visible.set(!visible);
                },
                if form_visible() {
                    "Cancel"
                } else {
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Create Club" }
                }
            }
        }

        if let Some(message) = success() {
            Banner {
                kind: BannerKind::Success,
                message,
                on_dismiss: move |_| success.set(None),
            }
        }

        if let Some(message) = error() {
            Banner {
                kind: BannerKind::Error,
                message,
                on_dismiss: move |_| error.set(None),
            }
        }

        if form_visible() {
            form {
                class: "card form",
                onsubmit: handle_create,
                h2 { "Create New Book Club" }
                label { "Name"
                    input {
                        r#type: "text",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label { "Description"
                    textarea {
                        rows: 3,
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                label { "Book Title"
                    input {
                        r#type: "text",
                        value: book_title(),
                        oninput: move |evt| book_title.set(evt.value()),
                    }
                }
                button { class: "primary", r#type: "submit", "Create Club" }
            }
        }

        if clubs().is_empty() {
            div {
                class: "empty-state",
                Icon { icon: FaUsers, width: 40, height: 40 }
                h3 { "No book clubs yet" }
                p { "Create the first club and invite fellow readers" }
                button {
                    class: "primary",
                    onclick: move |_| form_visible.set(true),
                    "Create a Club"
                }
            }
        } else {
            div {
                class: "card-grid",
                for club in clubs() {
                    div {
                        key: "{club.id}",
                        class: "card",
                        h3 { "{club.name}" }
                        p {
                            class: "card__byline",
                            Icon { icon: FaComments, width: 14, height: 14 }
                            span { "Currently reading: {club.book_title}" }
                        }
                        p { class: "card__description", "{club.description}" }
                        div {
                            class: "card__actions",
                            button {
                                class: "secondary",
                                onclick: move |_| {
                                    nav.push(Route::BookClubDetail { id: club.id });
                                },
                                "View Discussions"
                            }
                            button {
                                class: "danger-icon",
                                aria_label: "Delete club",
                                onclick: move |_| handle_delete(club.id),
                                Icon { icon: FaTrash, width: 16, height: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}
