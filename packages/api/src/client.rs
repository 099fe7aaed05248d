//! # ApiClient — request functions with credential attachment
//!
//! One method per logical remote operation. Every outgoing request attaches
//! the current session's bearer token when one exists; absence of a token
//! simply omits the header. Non-2xx responses surface as
//! [`ApiError::RequestFailed`]; this layer never retries.
//!
//! The service has no listing endpoints, so [`list_books`],
//! [`list_book_clubs`] and [`list_discussion_posts`] synthesize collections
//! by probing a bounded id range through
//! [`store::collection::materialize`]. Probe misses are swallowed there;
//! a list call itself cannot fail.
//!
//! [`list_books`]: ApiClient::list_books
//! [`list_book_clubs`]: ApiClient::list_book_clubs
//! [`list_discussion_posts`]: ApiClient::list_discussion_posts

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use store::collection::materialize;
use store::{SessionStore, SessionStorage};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, Book, BookClub, Credentials, DiscussionPost, NewBook, NewBookClub,
    NewDiscussionPost, ReadingProgress, ReadingProgressEnvelope, Registration,
};

/// Highest book id the materializer probes.
pub const BOOK_PROBE_BOUND: i64 = 20;
/// Highest book-club id the materializer probes.
pub const BOOK_CLUB_PROBE_BOUND: i64 = 10;
/// Highest discussion-post id the materializer probes.
pub const DISCUSSION_PROBE_BOUND: i64 = 20;

/// Typed HTTP gateway to the remote API.
///
/// Cheap to clone; clones share the session store, so a login observed by
/// one handle is attached by all of them.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    session: SessionStore<S>,
}

impl<S: SessionStorage> ApiClient<S> {
    pub fn new(config: ApiConfig, session: SessionStore<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    /// The session store this client attaches credentials from.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("remote call rejected with status {status}");
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(response.json().await?)
    }

    /// Like [`send`](Self::send) for endpoints whose response body is empty
    /// or irrelevant.
    async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("remote call rejected with status {status}");
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(())
    }

    fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.request(Method::POST, path).json(body)
    }

    // --- Authentication ---------------------------------------------------

    /// Exchange credentials for a session. Rejections surface as
    /// [`ApiError::AuthFailure`].
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.send(self.post_json("/login", credentials))
            .await
            .map_err(ApiError::into_auth)
    }

    /// Register a new account. Rejections surface as
    /// [`ApiError::AuthFailure`].
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.send(self.post_json("/register", registration))
            .await
            .map_err(ApiError::into_auth)
    }

    // --- Books ------------------------------------------------------------

    pub async fn get_book(&self, id: i64) -> Result<Book, ApiError> {
        self.send(self.request(Method::GET, &format!("/api/Book/{id}")))
            .await
    }

    pub async fn add_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        self.send(self.post_json("/api/Book", book)).await
    }

    /// All books the probe range can see, ascending by id.
    pub async fn list_books(&self) -> Vec<Book> {
        materialize(BOOK_PROBE_BOUND, |id| self.get_book(id)).await
    }

    // --- User library -----------------------------------------------------

    pub async fn get_user_library(&self) -> Result<Vec<Book>, ApiError> {
        self.send(self.request(Method::GET, "/api/UserLibrary/library"))
            .await
    }

    pub async fn add_book_to_library(&self, book_id: i64) -> Result<(), ApiError> {
        self.send_unit(self.request(
            Method::POST,
            &format!("/api/UserLibrary/Add/Book?bookId={book_id}"),
        ))
        .await
    }

    pub async fn remove_book_from_library(&self, book_id: i64) -> Result<(), ApiError> {
        self.send_unit(self.request(
            Method::DELETE,
            &format!("/api/UserLibrary/delete/Book?bookId={book_id}"),
        ))
        .await
    }

    // --- Book clubs -------------------------------------------------------

    pub async fn get_book_club(&self, id: i64) -> Result<BookClub, ApiError> {
        self.send(self.request(Method::GET, &format!("/api/BookClub/{id}")))
            .await
    }

    pub async fn create_book_club(&self, club: &NewBookClub) -> Result<BookClub, ApiError> {
        self.send(self.post_json("/api/Bookclub", club)).await
    }

    pub async fn delete_book_club(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, &format!("/api/BookClub/{id}")))
            .await
    }

    /// All book clubs the probe range can see, ascending by id.
    pub async fn list_book_clubs(&self) -> Vec<BookClub> {
        materialize(BOOK_CLUB_PROBE_BOUND, |id| self.get_book_club(id)).await
    }

    // --- Discussion posts -------------------------------------------------

    pub async fn get_discussion_post(&self, id: i64) -> Result<DiscussionPost, ApiError> {
        self.send(self.request(Method::GET, &format!("/api/DiscussionPost/{id}")))
            .await
    }

    pub async fn create_discussion_post(
        &self,
        post: &NewDiscussionPost,
    ) -> Result<DiscussionPost, ApiError> {
        self.send(self.post_json("/api/DiscussionPost", post)).await
    }

    pub async fn delete_discussion_post(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, &format!("/api/DiscussionPost/{id}")))
            .await
    }

    /// All discussion posts for one club, ascending by id.
    ///
    /// Posts are materialized across the whole probe range and then
    /// filtered by club, since the service cannot scope the probe itself.
    pub async fn list_discussion_posts(&self, book_club_id: i64) -> Vec<DiscussionPost> {
        let posts = materialize(DISCUSSION_PROBE_BOUND, |id| self.get_discussion_post(id)).await;
        posts_for_club(posts, book_club_id)
    }

    // --- Reading progress -------------------------------------------------

    /// Reading progress for one book, or `None` when nothing has been
    /// recorded yet (the endpoint nests its record in an envelope).
    pub async fn get_reading_progress(
        &self,
        book_id: i64,
    ) -> Result<Option<ReadingProgress>, ApiError> {
        let envelope: ReadingProgressEnvelope = self
            .send(self.request(
                Method::GET,
                &format!("/api/Reading/progress/book?bookId={book_id}"),
            ))
            .await?;
        Ok(envelope.pages_read)
    }

    pub async fn update_reading_progress(
        &self,
        book_id: i64,
        pages_read: i64,
        reading_goal: i64,
    ) -> Result<(), ApiError> {
        self.send_unit(self.request(
            Method::POST,
            &format!(
                "/api/Reading/progress?bookId={book_id}&pagesRead={pages_read}&readingGoal={reading_goal}"
            ),
        ))
        .await
    }
}

/// Retain only the posts belonging to `book_club_id`, keeping order.
fn posts_for_club(posts: Vec<DiscussionPost>, book_club_id: i64) -> Vec<DiscussionPost> {
    posts
        .into_iter()
        .filter(|post| post.book_club_id == book_club_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{append_created, remove_by_id, MemoryStorage};

    fn client() -> ApiClient<MemoryStorage> {
        ApiClient::new(ApiConfig::default(), SessionStore::new(MemoryStorage::new()))
    }

    fn post(id: i64, book_club_id: i64, content: &str) -> DiscussionPost {
        DiscussionPost {
            id,
            book_club_id,
            user_id: 1,
            user_name: Some("Reader".to_string()),
            content: content.to_string(),
            posted_at: "2025-06-01T12:00:00Z".to_string(),
        }
    }

    fn club(id: i64) -> BookClub {
        BookClub {
            id,
            name: format!("club-{id}"),
            description: String::new(),
            book_title: "Dune".to_string(),
        }
    }

    #[test]
    fn probe_bounds_match_the_service_ranges() {
        assert_eq!(BOOK_PROBE_BOUND, 20);
        assert_eq!(BOOK_CLUB_PROBE_BOUND, 10);
        assert_eq!(DISCUSSION_PROBE_BOUND, 20);
    }

    #[test]
    fn clones_share_the_session_store() {
        use store::{Session, UserProfile};

        let client = client();
        let twin = client.clone();

        client.session().establish(Session::new(
            UserProfile {
                id: 1,
                full_name: "A".into(),
                email: "a@example.com".into(),
            },
            "tok".into(),
        ));

        assert_eq!(twin.session().token().as_deref(), Some("tok"));
    }

    #[test]
    fn club_filter_retains_only_matching_posts() {
        let posts = vec![post(1, 7, "a"), post(2, 3, "b"), post(4, 7, "c")];
        let filtered = posts_for_club(posts, 7);
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn created_post_merges_after_the_snapshot() {
        let mut snapshot = vec![post(1, 7, "first"), post(4, 7, "second")];
        append_created(&mut snapshot, post(12, 7, "hi"));

        assert_eq!(snapshot.len(), 3);
        let tail = snapshot.last().unwrap();
        assert_eq!(tail.book_club_id, 7);
        assert_eq!(tail.content, "hi");
    }

    #[test]
    fn deleted_club_merge_keeps_relative_order() {
        let mut snapshot = vec![club(1), club(2), club(3), club(4)];
        assert!(remove_by_id(&mut snapshot, 3));
        let ids: Vec<i64> = snapshot.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }
}
