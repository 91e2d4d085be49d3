//! # SqliteReplyRepo

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rf_core::entities::{CreateReply, CreatedReply};
use rf_core::error::{AppError, Result};
use rf_core::models::ReplyRow;
use rf_core::traits::{IdGenerator, ReplyRepository};
use serde_json::json;
use sqlx::{sqlite::SqlitePool, Row};

use crate::db_err;

pub struct SqliteReplyRepo {
    pool: SqlitePool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqliteReplyRepo {
    pub fn new(pool: SqlitePool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

fn reply_not_found() -> AppError {
    AppError::NotFound("reply not found".to_string())
}

#[async_trait]
impl ReplyRepository for SqliteReplyRepo {
    async fn create_reply(&self, reply: CreateReply) -> Result<CreatedReply> {
        let id = format!("reply-{}", self.id_generator.generate());

        let row = sqlx::query(
            "INSERT INTO replies (id, content, user_id, comment_id, date) VALUES (?, ?, ?, ?, ?)
             RETURNING id, content, user_id",
        )
        .bind(&id)
        .bind(reply.content())
        .bind(reply.owner())
        .bind(reply.comment_id())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        CreatedReply::new(&json!({
            "id": row.try_get::<String, _>("id").map_err(db_err)?,
            "content": row.try_get::<String, _>("content").map_err(db_err)?,
            "owner": row.try_get::<String, _>("user_id").map_err(db_err)?,
        }))
    }

    async fn verify_available_reply_by_id(&self, reply_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM replies WHERE id = ?")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .map(|_| ())
            .ok_or_else(reply_not_found)
    }

    async fn verify_reply_by_owner(&self, reply_id: &str, owner: &str) -> Result<()> {
        let owned = sqlx::query("SELECT id FROM replies WHERE id = ? AND user_id = ?")
            .bind(reply_id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match owned {
            Some(_) => Ok(()),
            None => {
                log::warn!("{owner} tried to modify reply {reply_id}");
                Err(AppError::Authorization("you are not the owner of this reply".to_string()))
            }
        }
    }

    /// Replies reference only their comment, so thread scope comes from
    /// joining through `comments`.
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> Result<Vec<ReplyRow>> {
        let rows = sqlx::query(
            "SELECT replies.id, replies.content, replies.date, users.username,
                    replies.comment_id, replies.is_delete
             FROM replies
             INNER JOIN comments ON replies.comment_id = comments.id
             INNER JOIN users ON replies.user_id = users.id
             WHERE comments.thread_id = ?
             ORDER BY replies.date ASC, replies.rowid ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter()
            .map(|row| -> Result<_> {
                Ok(ReplyRow {
                    id: row.try_get("id").map_err(db_err)?,
                    content: row.try_get("content").map_err(db_err)?,
                    date: row.try_get("date").map_err(db_err)?,
                    username: row.try_get("username").map_err(db_err)?,
                    comment_id: row.try_get("comment_id").map_err(db_err)?,
                    is_delete: row.try_get("is_delete").map_err(db_err)?,
                })
            })
            .collect()
    }

    async fn soft_delete_reply_by_id(&self, reply_id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE replies SET is_delete = TRUE WHERE id = ?")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found());
        }
        Ok(())
    }
}
