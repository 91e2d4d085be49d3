//! # SqliteThreadRepo
//!
//! Threads joined with their owner's username.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rf_core::entities::{CreateThread, CreatedThread};
use rf_core::error::{AppError, Result};
use rf_core::models::ThreadRow;
use rf_core::traits::{IdGenerator, ThreadRepository};
use serde_json::json;
use sqlx::{sqlite::SqlitePool, Row};

use crate::db_err;

pub struct SqliteThreadRepo {
    pool: SqlitePool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqliteThreadRepo {
    pub fn new(pool: SqlitePool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

fn thread_not_found() -> AppError {
    AppError::NotFound("thread not found".to_string())
}

#[async_trait]
impl ThreadRepository for SqliteThreadRepo {
    async fn create_thread(&self, thread: CreateThread) -> Result<CreatedThread> {
        let id = format!("thread-{}", self.id_generator.generate());

        let row = sqlx::query(
            "INSERT INTO threads (id, owner, title, body, date) VALUES (?, ?, ?, ?, ?) RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(thread.owner())
        .bind(thread.title())
        .bind(thread.body())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        CreatedThread::new(&json!({
            "id": row.try_get::<String, _>("id").map_err(db_err)?,
            "title": row.try_get::<String, _>("title").map_err(db_err)?,
            "owner": row.try_get::<String, _>("owner").map_err(db_err)?,
        }))
    }

    /// Joins the owner's username onto the thread header.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRow> {
        let row = sqlx::query(
            "SELECT threads.id, threads.title, threads.body, threads.date, users.username
             FROM threads
             INNER JOIN users ON threads.owner = users.id
             WHERE threads.id = ?",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        .ok_or_else(thread_not_found)?;

        Ok(ThreadRow {
            id: row.try_get("id").map_err(db_err)?,
            title: row.try_get("title").map_err(db_err)?,
            body: row.try_get("body").map_err(db_err)?,
            date: row.try_get("date").map_err(db_err)?,
            username: row.try_get("username").map_err(db_err)?,
        })
    }

    async fn verify_available_thread_by_id(&self, thread_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM threads WHERE id = ?")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .map(|_| ())
            .ok_or_else(thread_not_found)
    }
}
