//! # Delete Reply
//!
//! Soft deletion of a reply: thread, comment and reply must exist and the caller must own the reply.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::DeleteReply;
use crate::error::Result;
use crate::traits::{CommentRepository, ReplyRepository, ThreadRepository};

pub struct DeleteReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteReplyUseCase {
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

    /// thread → comment → reply existence, then reply ownership, then delete.
    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let delete = DeleteReply::new(payload)?;

        self.thread_repository
            .verify_available_thread_by_id(delete.thread_id())
            .await?;
        self.comment_repository
            .verify_available_comment_by_id(delete.comment_id())
            .await?;
        self.reply_repository
            .verify_available_reply_by_id(delete.reply_id())
            .await?;
        self.reply_repository
            .verify_reply_by_owner(delete.reply_id(), delete.owner())
            .await?;

        log::debug!("soft deleting {}", delete.reply_id());
        self.reply_repository
            .soft_delete_reply_by_id(delete.reply_id())
            .await
    }
}
