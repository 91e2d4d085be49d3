//! # Create Reply
//!
//! Checks the thread, then the comment, before validating and persisting the reply.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::{reference_id, CreateReply, CreatedReply};
use crate::error::Result;
use crate::traits::{CommentRepository, ReplyRepository, ThreadRepository};

pub struct CreateReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl CreateReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            reply_repository,
            comment_repository,
            thread_repository,
        }
    }

    /// Verifies thread, then comment, then validates and writes.
    pub async fn execute(&self, payload: &Value) -> Result<CreatedReply> {
        self.thread_repository
            .verify_available_thread_by_id(reference_id(payload, "threadId"))
            .await?;
        self.comment_repository
            .verify_available_comment_by_id(reference_id(payload, "commentId"))
            .await?;

        let create_reply = CreateReply::new(payload)?;
        log::debug!("adding reply to {}", create_reply.comment_id());
        self.reply_repository.create_reply(create_reply).await
    }
}
