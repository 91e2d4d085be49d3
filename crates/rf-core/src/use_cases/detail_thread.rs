//! # Thread Detail
//!
//! Assembles a thread with its comments and their replies, masking deleted content.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{iso_millis, CommentDetail, CommentRow, ReplyDetail, ReplyRow, ThreadDetail};
use crate::traits::{CommentRepository, ReplyRepository, ThreadRepository};

/// Shown instead of the content of a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";
/// Shown instead of the content of a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

pub struct DetailThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DetailThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail> {
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self.comment_repository.get_comments_by_thread_id(thread_id).await?;
        let replies = self.reply_repository.get_replies_by_thread_id(thread_id).await?;

        log::debug!(
            "thread {} has {} comments and {} replies",
            thread_id,
            comments.len(),
            replies.len()
        );

        Ok(ThreadDetail {
            thread,
            comments: nest_replies(comments, replies),
        })
    }
}

/// Groups replies under their comment in one pass over each list.
/// Relative reply order is preserved; replies pointing at a comment that
/// is not in `comments` are dropped.
fn nest_replies(comments: Vec<CommentRow>, replies: Vec<ReplyRow>) -> Vec<CommentDetail> {
    let mut by_comment: HashMap<String, Vec<ReplyDetail>> = HashMap::new();
    for reply in replies {
        let content = if reply.is_delete {
            DELETED_REPLY_CONTENT.to_string()
        } else {
            reply.content
        };
        by_comment.entry(reply.comment_id).or_default().push(ReplyDetail {
            id: reply.id,
            date: iso_millis(&reply.date),
            username: reply.username,
            content,
        });
    }

    comments
        .into_iter()
        .map(|comment| {
            let replies = by_comment.remove(&comment.id).unwrap_or_default();
            let content = if comment.is_delete {
                DELETED_COMMENT_CONTENT.to_string()
            } else {
                comment.content
            };
            CommentDetail {
                id: comment.id,
                date: iso_millis(&comment.date),
                username: comment.username,
                content,
                replies,
            }
        })
        .collect()
}
