//! # SqliteCommentRepo
//!
//! Comments of a thread, soft-deleted in place.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rf_core::entities::{CreateComment, CreatedComment};
use rf_core::error::{AppError, Result};
use rf_core::models::CommentRow;
use rf_core::traits::{CommentRepository, IdGenerator};
use serde_json::json;
use sqlx::{sqlite::SqlitePool, Row};

use crate::db_err;

pub struct SqliteCommentRepo {
    pool: SqlitePool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqliteCommentRepo {
    pub fn new(pool: SqlitePool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

fn comment_not_found() -> AppError {
    AppError::NotFound("comment not found".to_string())
}

#[async_trait]
impl CommentRepository for SqliteCommentRepo {
    async fn create_comment(&self, comment: CreateComment) -> Result<CreatedComment> {
        let id = format!("comment-{}", self.id_generator.generate());

        let row = sqlx::query(
            "INSERT INTO comments (id, content, user_id, thread_id, date) VALUES (?, ?, ?, ?, ?)
             RETURNING id, content, user_id",
        )
        .bind(&id)
        .bind(comment.content())
        .bind(comment.owner())
        .bind(comment.thread_id())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        CreatedComment::new(&json!({
            "id": row.try_get::<String, _>("id").map_err(db_err)?,
            "content": row.try_get::<String, _>("content").map_err(db_err)?,
            "owner": row.try_get::<String, _>("user_id").map_err(db_err)?,
        }))
    }

    async fn verify_available_comment_by_id(&self, comment_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM comments WHERE id = ?")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .map(|_| ())
            .ok_or_else(comment_not_found)
    }

    async fn verify_comment_by_owner(&self, comment_id: &str, owner: &str) -> Result<()> {
        let owned = sqlx::query("SELECT id FROM comments WHERE id = ? AND user_id = ?")
            .bind(comment_id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match owned {
            Some(_) => Ok(()),
            None => {
                log::warn!("{owner} tried to modify comment {comment_id}");
                Err(AppError::Authorization("you are not the owner of this comment".to_string()))
            }
        }
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRow>> {
        let rows = sqlx::query(
            "SELECT comments.id, comments.content, comments.date, users.username, comments.is_delete
             FROM comments
             INNER JOIN users ON comments.user_id = users.id
             WHERE comments.thread_id = ?
             ORDER BY comments.date ASC, comments.rowid ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter()
            .map(|row| -> Result<_> {
                Ok(CommentRow {
                    id: row.try_get("id").map_err(db_err)?,
                    content: row.try_get("content").map_err(db_err)?,
                    date: row.try_get("date").map_err(db_err)?,
                    username: row.try_get("username").map_err(db_err)?,
                    is_delete: row.try_get("is_delete").map_err(db_err)?,
                })
            })
            .collect()
    }

    /// SQLite counts matched rows, so re-deleting an existing comment
    /// still reports one affected row.
    async fn soft_delete_comment_by_id(&self, comment_id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{add_comment, add_thread, add_user, fixed_id, memory_pool};

    async fn seeded() -> SqlitePool {
        let pool = memory_pool().await;
        add_user(&pool, "user-123", "dicoding").await;
        add_thread(&pool, "thread-123", "user-123").await;
        pool
    }

    #[tokio::test]
    async fn create_comment_returns_created_comment() {
        let pool = seeded().await;
        let repo = SqliteCommentRepo::new(pool, fixed_id("123"));
        let create = CreateComment::new(&json!({
            "threadId": "thread-123",
            "content": "Example Comment",
            "owner": "user-123",
        }))
        .unwrap();

        let created = repo.create_comment(create).await.unwrap();

        assert_eq!(
            created,
            CreatedComment::new(&json!({ "id": "comment-123", "content": "Example Comment", "owner": "user-123" }))
                .unwrap()
        );
        repo.verify_available_comment_by_id("comment-123").await.unwrap();
    }

    #[tokio::test]
    async fn verify_missing_comment_is_not_found() {
        let repo = SqliteCommentRepo::new(seeded().await, fixed_id("000"));

        let err = repo.verify_available_comment_by_id("comment-000").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn verify_owner_rejects_other_users() {
        let pool = seeded().await;
        add_comment(&pool, "comment-123", "thread-123", "user-123").await;
        let repo = SqliteCommentRepo::new(pool, fixed_id("000"));

        repo.verify_comment_by_owner("comment-123", "user-123").await.unwrap();
        let err = repo.verify_comment_by_owner("comment-123", "user-456").await.unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[tokio::test]
    async fn comments_come_back_oldest_first_with_username() {
        let pool = seeded().await;
        add_comment(&pool, "comment-1", "thread-123", "user-123").await;
        add_comment(&pool, "comment-2", "thread-123", "user-123").await;
        let repo = SqliteCommentRepo::new(pool, fixed_id("000"));

        let comments = repo.get_comments_by_thread_id("thread-123").await.unwrap();

        let ids: Vec<_> = comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["comment-1", "comment-2"]);
        assert_eq!(comments[0].username, "dicoding");
        assert!(!comments[0].is_delete);
        assert!(repo.get_comments_by_thread_id("thread-999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn soft_delete_is_idempotent() {
        let pool = seeded().await;
        add_comment(&pool, "comment-123", "thread-123", "user-123").await;
        let repo = SqliteCommentRepo::new(pool, fixed_id("000"));

        repo.soft_delete_comment_by_id("comment-123").await.unwrap();
        repo.soft_delete_comment_by_id("comment-123").await.unwrap();

        let comments = repo.get_comments_by_thread_id("thread-123").await.unwrap();
        assert!(comments[0].is_delete);
        assert_eq!(comments[0].content, "Example Comment");
    }

    #[tokio::test]
    async fn soft_delete_missing_comment_is_not_found() {
        let repo = SqliteCommentRepo::new(seeded().await, fixed_id("000"));

        for _ in 0..2 {
            let err = repo.soft_delete_comment_by_id("comment-000").await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }
}
