//! Single-book view: details, reading progress, add-to-library.

use dioxus::prelude::*;

use ui::icons::{FaBookOpen, FaClock, FaPlus};
use ui::{dismiss_after, use_session, Banner, BannerKind, Icon};

use crate::Route;

#[component]
pub fn BookDetail(id: i64) -> Element {
    let session = use_session();
    // Track the route param in a signal so the loader re-runs on change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut book = use_signal(|| Option::<api::Book>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut pages_read = use_signal(String::new);
    let mut reading_goal = use_signal(String::new);
    let nav = use_navigator();

    let _loader = use_resource(move || {
        let client = session.client();
        let id = id_signal();
        async move {
            loading.set(true);
            match client.get_book(id).await {
                Ok(found) => {
                    book.set(Some(found));

                    // No recorded progress yet is an expected outcome
                    match client.get_reading_progress(id).await {
                        Ok(Some(progress)) => {
                            pages_read.set(progress.pages_read.to_string());
                            reading_goal.set(progress.reading_goal.to_string());
                        }
                        Ok(None) => {}
                        Err(err) => {
                            tracing::info!("no reading progress for book {id}: {err}");
                        }
                    }
                }
                Err(err) => {
                    tracing::error!("book fetch failed: {err}");
                    error.set(Some(
                        "Failed to load book details. Please try again.".to_string(),
                    ));
                }
            }
            loading.set(false);
        }
    });

    let handle_update_progress = move |evt: FormEvent| {
        evt.prevent_default();
        let client = session.client();
        spawn(async move {
            let pages = pages_read().trim().parse::<i64>().unwrap_or(0);
            let goal = reading_goal().trim().parse::<i64>().unwrap_or(0);
            match client.update_reading_progress(id, pages, goal).await {
                Ok(()) => {
                    dismiss_after(success, "Reading progress updated successfully!".to_string());
                }
                Err(err) => {
                    tracing::error!("progress update failed: {err}");
                    error.set(Some(
                        "Failed to update reading progress. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    let handle_add_to_library = move |_| {
        let client = session.client();
        spawn(async move {
            match client.add_book_to_library(id).await {
                Ok(()) => {
                    dismiss_after(success, "Book added to your library!".to_string());
                }
                Err(err) => {
                    tracing::error!("add to library failed: {err}");
                    error.set(Some(
                        "Failed to add book to your library. Please try again.".to_string(),
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

    let Some(book) = book() else {
        return rsx! {
            div {
                class: "empty-state",
                h3 { "Book not found" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::Books {});
                    },
                    "Back to Books"
                }
            }
        };
    };

    let pages = pages_read().trim().parse::<i64>().unwrap_or(0);
    let percentage = if book.total_pages > 0 {
        ((pages * 100) / book.total_pages).clamp(0, 100)
    } else {
        0
    };

    rsx! {
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
            class: "card detail",
            div {
                class: "detail__header",
                div {
                    h1 { "{book.title}" }
                    p { class: "detail__byline", "by {book.author}" }
                }
                button {
                    class: "primary",
                    onclick: handle_add_to_library,
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add to Library" }
                }
            }

            section {
                h2 { "Description" }
                p { "{book.description}" }
            }

            div {
                class: "detail__columns",
                section {
                    class: "panel",
                    h2 {
                        Icon { icon: FaBookOpen, width: 18, height: 18 }
                        span { "Book Details" }
                    }
                    p { "Total Pages: {book.total_pages}" }
                }

                section {
                    class: "panel",
                    h2 {
                        Icon { icon: FaClock, width: 18, height: 18 }
                        span { "Reading Progress" }
                    }
                    div {
                        class: "progress",
                        div {
                            class: "progress__labels",
                            span { "Progress: {percentage}%" }
                            span { "{pages} / {book.total_pages} pages" }
                        }
                        div {
                            class: "progress__track",
                            div {
                                class: "progress__fill",
                                style: "width: {percentage}%",
                            }
                        }
                    }

                    form {
                        onsubmit: handle_update_progress,
                        label { "Pages Read"
                            input {
                                r#type: "number",
                                min: 0,
                                max: book.total_pages,
                                value: pages_read(),
                                oninput: move |evt| pages_read.set(evt.value()),
                            }
                        }
                        label { "Daily Reading Goal (pages)"
                            input {
                                r#type: "number",
                                min: 0,
                                value: reading_goal(),
                                oninput: move |evt| reading_goal.set(evt.value()),
                            }
                        }
                        button { class: "primary", r#type: "submit", "Update Progress" }
                    }
                }
            }
        }
    }
}
