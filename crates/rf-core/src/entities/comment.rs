//! # Comment entities

use super::required_strings;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Validated input for a new comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateComment {
    thread_id: String,
    content: String,
    owner: String,
}

impl CreateComment {
    pub const ENTITY: &'static str = "CREATE_COMMENT";

    pub fn new(payload: &Value) -> Result<Self> {
        let [thread_id, content, owner] =
            required_strings(Self::ENTITY, payload, ["threadId", "content", "owner"])?;
        Ok(Self { thread_id, content, owner })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedComment {
    id: String,
    content: String,
    owner: String,
}

impl CreatedComment {
    pub const ENTITY: &'static str = "CREATED_COMMENT";

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

/// Validated request to soft-delete a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    thread_id: String,
    comment_id: String,
    owner: String,
}

impl DeleteComment {
    pub const ENTITY: &'static str = "DELETE_COMMENT";

    pub fn new(payload: &Value) -> Result<Self> {
        let [thread_id, comment_id, owner] =
            required_strings(Self::ENTITY, payload, ["threadId", "commentId", "owner"])?;
        Ok(Self { thread_id, comment_id, owner })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}
