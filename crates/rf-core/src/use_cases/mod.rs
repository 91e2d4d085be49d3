//! # Use Cases
//!
//! One orchestrator per business operation. Each receives its
//! repositories at construction and exposes a single `execute`.
//! No failure is recovered locally; every error propagates as-is.

mod create_comment;
mod create_reply;
mod create_thread;
mod delete_comment;
mod delete_reply;
mod detail_thread;

pub use create_comment::CreateCommentUseCase;
pub use create_reply::CreateReplyUseCase;
pub use create_thread::CreateThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use detail_thread::{DetailThreadUseCase, DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT};
