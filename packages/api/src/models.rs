//! # Wire models
//!
//! The records and payloads exchanged with the remote API, all serialized
//! with camelCase field names to match the service. Collection members
//! (`Book`, `BookClub`, `DiscussionPost`) implement [`Identified`] so the
//! optimistic merge helpers in [`store::collection`] can address them by
//! server-assigned id.

use serde::{Deserialize, Serialize};

use store::collection::Identified;
use store::{Session, UserProfile};

/// A book known to the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub total_pages: i64,
}

/// Payload for adding a book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub total_pages: i64,
}

/// A book club.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookClub {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Title of the book the club is currently reading.
    pub book_title: String,
}

/// Payload for creating a book club.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookClub {
    pub name: String,
    pub description: String,
    pub book_title: String,
}

/// A discussion post inside a book club.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionPost {
    pub id: i64,
    /// The club this post belongs to (foreign key).
    pub book_club_id: i64,
    pub user_id: i64,
    /// Author display name; may be absent on records the server returns
    /// without a join, so the client fills it on optimistic appends.
    #[serde(default)]
    pub user_name: Option<String>,
    pub content: String,
    /// ISO-8601 timestamp, stamped by the client at creation.
    pub posted_at: String,
}

/// Payload for creating a discussion post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiscussionPost {
    pub book_club_id: i64,
    pub user_id: i64,
    pub book_title: String,
    pub content: String,
    pub posted_at: String,
}

/// Per-user reading progress for one book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgress {
    /// Absent on some server responses; defaults to 0.
    #[serde(default)]
    pub book_id: i64,
    pub pages_read: i64,
    pub reading_goal: i64,
}

/// Envelope the progress endpoint wraps its record in. The service nests
/// the record under a `pagesRead` key; an empty envelope means no progress
/// has been recorded yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgressEnvelope {
    #[serde(default)]
    pub pages_read: Option<ReadingProgress>,
}

/// Login payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// The authentication exchange's response: profile fields plus token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub token: String,
}

impl AuthResponse {
    /// Fold the response into a [`Session`] for the session store.
    pub fn into_session(self) -> Session {
        Session::new(
            UserProfile {
                id: self.id,
                full_name: self.full_name,
                email: self.email,
            },
            self.token,
        )
    }
}

impl Identified for Book {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for BookClub {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for DiscussionPost {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_decodes_camel_case_wire_format() {
        let json = r#"{
            "id": 3,
            "title": "Dune",
            "author": "Frank Herbert",
            "description": "Sand.",
            "totalPages": 412
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, 3);
        assert_eq!(book.total_pages, 412);
    }

    #[test]
    fn discussion_post_tolerates_missing_user_name() {
        let json = r#"{
            "id": 9,
            "bookClubId": 7,
            "userId": 2,
            "content": "hi",
            "postedAt": "2025-06-01T12:00:00Z"
        }"#;
        let post: DiscussionPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.book_club_id, 7);
        assert!(post.user_name.is_none());
    }

    #[test]
    fn progress_envelope_unwraps_nested_record() {
        let json = r#"{"pagesRead": {"pagesRead": 120, "readingGoal": 30}}"#;
        let envelope: ReadingProgressEnvelope = serde_json::from_str(json).unwrap();
        let progress = envelope.pages_read.unwrap();
        assert_eq!(progress.pages_read, 120);
        assert_eq!(progress.reading_goal, 30);
        assert_eq!(progress.book_id, 0);

        let empty: ReadingProgressEnvelope = serde_json::from_str("{}").unwrap();
        assert!(empty.pages_read.is_none());
    }

    #[test]
    fn auth_response_becomes_a_session() {
        let response = AuthResponse {
            id: 4,
            full_name: "Mary Shelley".to_string(),
            email: "mary@example.com".to_string(),
            token: "tok".to_string(),
        };
        let session = response.into_session();
        assert_eq!(session.user.id, 4);
        assert_eq!(session.token, "tok");
    }

    #[test]
    fn new_book_serializes_camel_case() {
        let payload = NewBook {
            title: "T".into(),
            author: "A".into(),
            description: "D".into(),
            total_pages: 100,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("totalPages").is_some());
        assert!(json.get("total_pages").is_none());
    }
}
