//! # Rusty-Forum Binary
//!
//! The entry point that assembles the application based on compile-time features.

mod config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use rf_api::auth::TokenVerifier;
use rf_api::handlers::AppState;
use rf_api::middleware::{cors_policy, standard_middleware};
use rf_core::error::AppError;
use secrecy::ExposeSecret;

use crate::config::Settings;

// Feature-gated imports: This is the "Compiled-to-Order" magic
#[cfg(feature = "db-sqlite")]
use std::sync::Arc;
#[cfg(feature = "db-sqlite")]
use rf_core::traits::UuidIdGenerator;
#[cfg(feature = "db-sqlite")]
use rf_db_sqlite::{SqliteCommentRepo, SqliteReplyRepo, SqliteThreadRepo};

/// Builds the repositories for the configured database URL and hands
/// them to every use case.
async fn build_state(settings: &Settings) -> Result<AppState, AppError> {
    let url = settings.database.url.as_str();

    #[cfg(feature = "db-sqlite")]
    if url.starts_with("sqlite:") {
        let pool = rf_db_sqlite::connect(url, settings.database.max_connections).await?;
        let ids = Arc::new(UuidIdGenerator);
        return Ok(AppState::new(
            Arc::new(SqliteThreadRepo::new(pool.clone(), ids.clone())),
            Arc::new(SqliteCommentRepo::new(pool.clone(), ids.clone())),
            Arc::new(SqliteReplyRepo::new(pool, ids)),
        ));
    }

    log::error!("no compiled storage backend handles {url}");
    Err(AppError::NotImplemented("THREAD_REPOSITORY"))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::load().context("loading settings")?;

    // 1. Initialize Storage + Use Cases
    let state = web::Data::new(build_state(&settings).await.context("wiring repositories")?);

    // 2. Initialize Token Verification
    let verifier = web::Data::new(TokenVerifier::new(
        settings.auth.access_token_key.expose_secret().as_bytes(),
        settings.auth.access_token_age,
    ));

    let bind = (settings.server.host.clone(), settings.server.port);
    log::info!("🚀 Rusty-Forum starting on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(standard_middleware())
            .wrap(cors_policy())
            .app_data(state.clone())
            .app_data(verifier.clone())
            .configure(rf_api::configure_routes)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
