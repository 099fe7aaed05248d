//! Browse and add books.
//!
//! The book list is synthesized by the gateway's probing materializer (the
//! service has no list-all endpoint), so it shows every book the probe
//! range can see, ascending by id. A newly added book is appended to the
//! in-memory list straight from the create response.

use dioxus::prelude::*;

use api::NewBook;
use store::append_created;
use ui::icons::{FaBookOpen, FaMagnifyingGlass, FaPlus};
use ui::{dismiss_after, use_session, Banner, BannerKind, Icon};

use crate::Route;

#[component]
pub fn Books() -> Element {
    let session = use_session();
    let mut books = use_signal(Vec::<api::Book>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut search_term = use_signal(String::new);
    let mut form_visible = use_signal(|| false);

    let mut title = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut total_pages = use_signal(String::new);

    let nav = use_navigator();

    // Materialize the book list on mount
    let _loader = use_resource(move || {
        let client = session.client();
        async move {
            books.set(client.list_books().await);
            loading.set(false);
        }
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let client = session.client();
        spawn(async move {
            let pages = total_pages().trim().parse::<i64>().unwrap_or(0);
            let payload = NewBook {
                title: title().trim().to_string(),
                author: author().trim().to_string(),
                description: description().trim().to_string(),
                total_pages: pages,
            };
            if payload.title.is_empty() || payload.author.is_empty() {
                error.set(Some("Title and author are required".to_string()));
                return;
            }

            match client.add_book(&payload).await {
                Ok(created) => {
                    let mut snapshot = books();
                    append_created(&mut snapshot, created);
                    books.set(snapshot);

                    title.set(String::new());
                    author.set(String::new());
                    description.set(String::new());
                    total_pages.set(String::new());
                    form_visible.set(false);
                    dismiss_after(success, "Book added successfully!".to_string());
                }
                Err(err) => {
                    tracing::error!("add book failed: {err}");
                    error.set(Some("Failed to add book. Please try again.".to_string()));
                }
            }
        });
    };

    // Filter books based on search term
    let filtered: Vec<api::Book> = {
        let term = search_term().to_lowercase();
        books()
            .into_iter()
            .filter(|book| {
                term.is_empty()
                    || book.title.to_lowercase().contains(&term)
                    || book.author.to_lowercase().contains(&term)
            })
            .collect()
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
                Icon { icon: FaBookOpen, width: 24, height: 24 }
                h1 { "Books" }
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
                    span { "Add Book" }
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

        div {
            class: "search-bar",
            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            input {
                r#type: "text",
                placeholder: "Search for books or authors...",
                value: search_term(),
                oninput: move |evt| search_term.set(evt.value()),
            }
        }

        if form_visible() {
            form {
                class: "card form",
                onsubmit: handle_create,
                h2 { "Add New Book" }
                label { "Title"
                    input {
                        r#type: "text",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                label { "Author"
                    input {
                        r#type: "text",
                        value: author(),
                        oninput: move |evt| author.set(evt.value()),
                    }
                }
                label { "Description"
                    textarea {
                        rows: 3,
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                label { "Total Pages"
                    input {
                        r#type: "number",
                        min: 1,
                        value: total_pages(),
                        oninput: move |evt| total_pages.set(evt.value()),
                    }
                }
                button { class: "primary", r#type: "submit", "Add Book" }
            }
        }

        if filtered.is_empty() {
            div {
                class: "empty-state",
                Icon { icon: FaBookOpen, width: 40, height: 40 }
                h3 { "No books found" }
                p { "Add your first book to get started" }
                button {
                    class: "primary",
                    onclick: move |_| form_visible.set(true),
                    "Add Your First Book"
                }
            }
        } else {
            div {
                class: "card-grid",
                for book in filtered {
                    div {
                        key: "{book.id}",
                        class: "card card--clickable",
                        onclick: move |_| {
                            nav.push(Route::BookDetail { id: book.id });
                        },
                        h3 { "{book.title}" }
                        p { class: "card__byline", "by {book.author}" }
                        p { class: "card__description", "{book.description}" }
                        span { class: "card__meta", "{book.total_pages} pages" }
                    }
                }
            }
        }
    }
}
