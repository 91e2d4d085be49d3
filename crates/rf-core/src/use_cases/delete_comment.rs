//! # Delete Comment
//!
//! Soft deletion guarded by existence, then ownership.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::DeleteComment;
use crate::error::Result;
use crate::traits::{CommentRepository, ThreadRepository};

pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    /// Existence failures win over ownership failures, and both stop the
    /// soft delete from running.
    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let delete = DeleteComment::new(payload)?;

        self.thread_repository
            .verify_available_thread_by_id(delete.thread_id())
            .await?;
        self.comment_repository
            .verify_available_comment_by_id(delete.comment_id())
            .await?;
        self.comment_repository
            .verify_comment_by_owner(delete.comment_id(), delete.owner())
            .await?;

        log::debug!("soft deleting {}", delete.comment_id());
        self.comment_repository
            .soft_delete_comment_by_id(delete.comment_id())
            .await
    }
}
