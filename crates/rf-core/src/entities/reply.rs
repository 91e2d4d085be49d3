//! # Reply entities
//!
//! Create/created/delete payloads one level below comments.

use super::required_strings;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Validated input for a new reply. The row references only its comment;
/// the thread is checked by the use case, not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReply {
    comment_id: String,
    content: String,
    owner: String,
}

impl CreateReply {
    pub const ENTITY: &'static str = "CREATE_REPLY";

    pub fn new(payload: &Value) -> Result<Self> {
        let [comment_id, content, owner] =
            required_strings(Self::ENTITY, payload, ["commentId", "content", "owner"])?;
        Ok(Self { comment_id, content, owner })
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedReply {
    id: String,
    content: String,
    owner: String,
}

impl CreatedReply {
    pub const ENTITY: &'static str = "CREATED_REPLY";

    pub fn new(payload: &Value) -> Result<Self> {
        let [id, content, owner] = required_strings(Self::ENTITY, payload, ["id", "content", "owner"])?;
        Ok(Self { id, content, owner })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Validated request to soft-delete a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    thread_id: String,
    comment_id: String,
    reply_id: String,
    owner: String,
}

impl DeleteReply {
    pub const ENTITY: &'static str = "DELETE_REPLY";

    pub fn new(payload: &Value) -> Result<Self> {
        let [thread_id, comment_id, reply_id, owner] =
            required_strings(Self::ENTITY, payload, ["threadId", "commentId", "replyId", "owner"])?;
        Ok(Self {
            thread_id,
            comment_id,
            reply_id,
            owner,
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn reply_id(&self) -> &str {
        &self.reply_id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}
