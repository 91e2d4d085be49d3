//! # Read Models
//!
//! Rows handed back by the repository contracts, and the nested thread
//! view assembled from them. Identifiers are plain prefixed strings
//! (`thread-…`, `comment-…`, `reply-…`); no UUID format is assumed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// ISO-8601, millisecond precision, UTC (`2021-08-08T07:19:09.775Z`).
pub fn iso_millis(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_iso_millis<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_millis(date))
}

/// Thread header joined with its owner's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRow {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date: DateTime<Utc>,
    pub username: String,
}

/// One comment of a thread, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRow {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub is_delete: bool,
}

/// One reply under any comment of a thread, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRow {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comment_id: String,
    pub is_delete: bool,
}

/// The full thread view: header fields plus nested comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    #[serde(flatten)]
    pub thread: ThreadRow,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    pub id: String,
    /// See [`iso_millis`].
    pub date: String,
    pub username: String,
    pub content: String,
    pub replies: Vec<ReplyDetail>,
}

/// A reply nested under its comment; the parent id is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyDetail {
    pub id: String,
    pub date: String,
    pub username: String,
    pub content: String,
}
