//! # Create Thread
//!
//! Validates a new thread payload and persists it; threads have no parent to check.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::{CreateThread, CreatedThread};
use crate::error::Result;
use crate::traits::ThreadRepository;

pub struct CreateThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl CreateThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    /// Threads have no parent, so there is nothing to verify first.
    pub async fn execute(&self, payload: &Value) -> Result<CreatedThread> {
        let create_thread = CreateThread::new(payload)?;
        log::debug!("creating thread for {}", create_thread.owner());
        self.thread_repository.create_thread(create_thread).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::traits::MockThreadRepository;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn orchestrates_create_thread() {
        let payload = json!({
            "title": "Example Title",
            "body": "Example Body",
            "owner": "user-123",
        });
        let expected = CreatedThread::new(&json!({
            "id": "thread-123",
            "title": "Example Title",
            "owner": "user-123",
        }))
        .unwrap();

        let mut threads = MockThreadRepository::new();
        let returned = expected.clone();
        threads
            .expect_create_thread()
            .with(eq(CreateThread::new(&payload).unwrap()))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let use_case = CreateThreadUseCase::new(Arc::new(threads));
        let created = use_case.execute(&payload).await.unwrap();

        assert_eq!(created, expected);
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_repository() {
        let mut threads = MockThreadRepository::new();
        threads.expect_create_thread().never();

        let use_case = CreateThreadUseCase::new(Arc::new(threads));
        let err = use_case.execute(&json!({ "title": "t", "owner": "user-123" })).await.unwrap_err();

        assert_eq!(err, AppError::missing_property(CreateThread::ENTITY));
    }
}
