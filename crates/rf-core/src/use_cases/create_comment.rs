//! # Create Comment
//!
//! Checks the parent thread exists before validating and persisting the comment.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::{reference_id, CreateComment, CreatedComment};
use crate::error::Result;
use crate::traits::{CommentRepository, ThreadRepository};

pub struct CreateCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl CreateCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    /// A missing thread is reported before the payload is validated.
    pub async fn execute(&self, payload: &Value) -> Result<CreatedComment> {
        self.thread_repository
            .verify_available_thread_by_id(reference_id(payload, "threadId"))
            .await?;

        let create_comment = CreateComment::new(payload)?;
        log::debug!("adding comment to {}", create_comment.thread_id());
        self.comment_repository.create_comment(create_comment).await
    }
}
