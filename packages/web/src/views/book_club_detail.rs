//! One book club: details plus its discussion thread.
//!
//! The service cannot list a club's posts, so the whole discussion-post
//! probe range is materialized and filtered down to this club. A new post
//! is appended optimistically from the create response, carrying the
//! current user's name for display; deletes remove the matching post from
//! the snapshot.

use dioxus::prelude::*;

use api::NewDiscussionPost;
use store::{append_created, remove_by_id};
use ui::icons::{FaBookOpen, FaComments, FaPaperPlane, FaTrash, FaUsers};
use ui::{dismiss_after, now_iso8601, use_session, Banner, BannerKind, Icon};

use crate::Route;

#[component]
pub fn BookClubDetail(id: i64) -> Element {
    let session = use_session();
    // Track the route param in a signal so the loader re-runs on change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut club = use_signal(|| Option::<api::BookClub>::None);
    let mut discussions = use_signal(Vec::<api::DiscussionPost>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut new_post = use_signal(String::new);
    let nav = use_navigator();

    let _loader = use_resource(move || {
        let client = session.client();
        let id = id_signal();
        async move {
            loading.set(true);
            match client.get_book_club(id).await {
                Ok(found) => {
                    club.set(Some(found));
                    discussions.set(client.list_discussion_posts(id).await);
                }
                Err(err) => {
                    tracing::error!("book club fetch failed: {err}");
                    error.set(Some(
                        "Failed to load book club details. Please try again.".to_string(),
                    ));
                }
            }
            loading.set(false);
        }
    });

    let handle_create_post = move |evt: FormEvent| {
        evt.prevent_default();
        let client = session.client();
        spawn(async move {
            let content = new_post().trim().to_string();
            if content.is_empty() {
                return;
            }
            let Some(current_club) = club() else {
                return;
            };
            let user = (session.state)().user;

            let payload = NewDiscussionPost {
                book_club_id: id,
                user_id: user.as_ref().map(|u| u.id).unwrap_or(1),
                book_title: current_club.book_title,
                content,
                posted_at: now_iso8601(),
            };

            match client.create_discussion_post(&payload).await {
                Ok(mut created) => {
                    // The create response has no author join; show the
                    // poster's own name immediately
                    if created.user_name.is_none() {
                        created.user_name = user.map(|u| u.full_name);
                    }
                    let mut snapshot = discussions();
                    append_created(&mut snapshot, created);
                    discussions.set(snapshot);

                    new_post.set(String::new());
                    dismiss_after(success, "Post created successfully!".to_string());
                }
                Err(err) => {
                    tracing::error!("create post failed: {err}");
                    error.set(Some("Failed to create post. Please try again.".to_string()));
                }
            }
        });
    };

    let handle_delete_post = move |post_id: i64| {
        let client = session.client();
        spawn(async move {
            match client.delete_discussion_post(post_id).await {
                Ok(()) => {
                    let mut snapshot = discussions();
                    remove_by_id(&mut snapshot, post_id);
                    discussions.set(snapshot);
                    dismiss_after(success, "Post deleted successfully!".to_string());
                }
                Err(err) => {
                    tracing::error!("delete post failed: {err}");
                    error.set(Some("Failed to delete post. Please try again.".to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "gate-loading", div { class: "spinner" } }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            Banner {
                kind: BannerKind::Error,
                message,
                on_dismiss: move |_| error.set(None),
            }
            button {
                class: "primary",
                onclick: move |_| {
                    nav.push(Route::BookClubs {});
                },
                "Back to Book Clubs"
            }
        };
    }

    let Some(club) = club() else {
        return rsx! {
            div {
                class: "empty-state",
                h3 { "Book club not found" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::BookClubs {});
                    },
                    "Back to Book Clubs"
                }
            }
        };
    };

    rsx! {
        button {
            class: "link-back",
            onclick: move |_| {
                nav.push(Route::BookClubs {});
            },
            "\u{2190} Back to Book Clubs"
        }

        if let Some(message) = success() {
            Banner {
                kind: BannerKind::Success,
                message,
                on_dismiss: move |_| success.set(None),
            }
        }

        div {
            class: "card detail",
            h1 {
                Icon { icon: FaUsers, width: 22, height: 22 }
                span { "{club.name}" }
            }
            p {
                class: "detail__byline",
                Icon { icon: FaBookOpen, width: 16, height: 16 }
                span { "Currently reading: {club.book_title}" }
            }
            p { "{club.description}" }
        }

        div {
            class: "card detail",
            h2 {
                Icon { icon: FaComments, width: 20, height: 20 }
                span { "Discussions" }
            }

            form {
                class: "post-form",
                onsubmit: handle_create_post,
                label { "Add to the discussion"
                    textarea {
                        rows: 3,
                        placeholder: "Share your thoughts...",
                        value: new_post(),
                        oninput: move |evt| new_post.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: new_post().trim().is_empty(),
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    span { "Post" }
                }
            }

            if discussions().is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaComments, width: 32, height: 32 }
                    h3 { "No discussions yet" }
                    p { "Be the first to start a discussion!" }
                }
            } else {
                div {
                    class: "post-list",
                    for post in discussions() {
                        div {
                            key: "{post.id}",
                            class: "post",
                            div {
                                class: "post__header",
                                div {
                                    span {
                                        class: "post__author",
                                        {post.user_name.clone().unwrap_or_else(|| "Anonymous".to_string())}
                                    }
                                    span {
                                        class: "post__date",
                                        {post.posted_at.split('T').next().unwrap_or("").to_string()}
                                    }
                                }
                                button {
                                    class: "danger-icon",
                                    aria_label: "Delete post",
                                    onclick: move |_| handle_delete_post(post.id),
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                }
                            }
                            p { "{post.content}" }
                        }
                    }
                }
            }
        }
    }
}
