//! # rf-db-sqlite Implementation
//!
//! This crate implements the data mapping between the SQLite relational
//! model and the `rf-core` repository contracts. One pool is shared by the
//! three repositories; the schema ships as embedded migrations.

mod comment;
mod reply;
mod thread;

pub use comment::SqliteCommentRepo;
pub use reply::SqliteReplyRepo;
pub use thread::SqliteThreadRepo;

use std::str::FromStr;
use std::time::Duration;

use rf_core::error::{AppError, Result};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens (creating if needed) the database at `url` and applies pending
/// migrations.
///
/// # Developer Note
/// An in-memory database lives and dies with its connection, so
/// `sqlite::memory:` URLs get a single connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(db_err)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = url.contains(":memory:");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await.map_err(db_err)?;
    MIGRATOR.run(&pool).await.map_err(|e| {
        log::error!("migration failed: {e}");
        AppError::Internal(e.to_string())
    })?;

    log::info!("SQLite ready at {url}");
    Ok(pool)
}

/// Maps an infrastructure failure into the core taxonomy.
pub(crate) fn db_err(e: sqlx::Error) -> AppError {
    log::error!("database error: {e}");
    AppError::Internal(e.to_string())
}
