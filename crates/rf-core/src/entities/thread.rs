//! # Thread entities
//!
//! Payload for a new thread and the summary echoed back once it is stored.

use super::required_strings;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Validated input for a new thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateThread {
    title: String,
    body: String,
    owner: String,
}

impl CreateThread {
    pub const ENTITY: &'static str = "CREATE_THREAD";

    pub fn new(payload: &Value) -> Result<Self> {
        let [title, body, owner] = required_strings(Self::ENTITY, payload, ["title", "body", "owner"])?;
        Ok(Self { title, body, owner })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// What the caller gets back after a thread is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedThread {
    id: String,
    title: String,
    owner: String,
}

impl CreatedThread {
    pub const ENTITY: &'static str = "CREATED_THREAD";

    pub fn new(payload: &Value) -> Result<Self> {
        let [id, title, owner] = required_strings(Self::ENTITY, payload, ["id", "title", "owner"])?;
        Ok(Self { id, title, owner })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}
