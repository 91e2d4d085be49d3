//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be wired into the
//! binary. A backend that lacks one of them simply does not compile.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{CreateComment, CreateReply, CreateThread, CreatedComment, CreatedReply, CreatedThread};
use crate::error::Result;
use crate::models::{CommentRow, ReplyRow, ThreadRow};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Stores a new thread under a freshly generated `thread-` id.
    async fn create_thread(&self, thread: CreateThread) -> Result<CreatedThread>;

    /// Thread header joined with the owner's username.
    /// Fails with `NotFound` if the thread does not exist.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRow>;

    /// Fails with `NotFound` if the thread does not exist.
    async fn verify_available_thread_by_id(&self, thread_id: &str) -> Result<()>;
}

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: CreateComment) -> Result<CreatedComment>;

    /// Fails with `NotFound` if the comment does not exist.
    async fn verify_available_comment_by_id(&self, comment_id: &str) -> Result<()>;

    /// Fails with `Authorization` unless `owner` wrote the comment.
    async fn verify_comment_by_owner(&self, comment_id: &str, owner: &str) -> Result<()>;

    /// All comments of a thread, oldest first, deleted ones included.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRow>>;

    /// Marks the comment deleted. Idempotent on existing rows;
    /// fails with `NotFound` if no row matched.
    async fn soft_delete_comment_by_id(&self, comment_id: &str) -> Result<()>;
}

/// Persistence contract for replies, one level below comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn create_reply(&self, reply: CreateReply) -> Result<CreatedReply>;

    async fn verify_available_reply_by_id(&self, reply_id: &str) -> Result<()>;

    async fn verify_reply_by_owner(&self, reply_id: &str, owner: &str) -> Result<()>;

    /// Every reply under every comment of the thread, oldest first.
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> Result<Vec<ReplyRow>>;

    async fn soft_delete_reply_by_id(&self, reply_id: &str) -> Result<()>;
}

/// Produces the unique suffix appended after a resource prefix.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Default generator: UUID v7 in simple (hyphen-free) form, so ids stay
/// time-ordered.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }
}
