//! # API crate — typed gateway to the remote book-tracking service
//!
//! This crate is the client's only door to the network. It defines one
//! async method per logical remote operation, the wire models those
//! operations exchange, and the error taxonomy every view recovers from.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: request functions with transparent bearer-token attachment, plus synthesized list operations over the id-probing materializer |
//! | [`config`] | [`ApiConfig`]: base address of the remote API |
//! | [`error`] | [`ApiError`]: `AuthFailure` / `RequestFailed` / `Transport` |
//! | [`models`] | Wire models (`Book`, `BookClub`, `DiscussionPost`, `ReadingProgress`) and request payloads |
//!
//! The remote API has no listing endpoints; `list_books`,
//! `list_book_clubs` and `list_discussion_posts` reconstruct collections by
//! probing a bounded id range (see [`store::collection`]).

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AuthResponse, Book, BookClub, Credentials, DiscussionPost, NewBook, NewBookClub,
    NewDiscussionPost, ReadingProgress, ReadingProgressEnvelope, Registration,
};

pub use store::{Session, UserProfile};
