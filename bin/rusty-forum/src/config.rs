//! Layered settings: built-in defaults, then an optional `rusty-forum.toml`,
//! then `FORUM__*` environment variables (e.g. `FORUM__SERVER__PORT=8080`).

use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    /// HS256 key shared with the service that issues access tokens.
    pub access_token_key: SecretString,
    /// Lifetime in seconds of tokens that carry `iat` but no `exp`.
    pub access_token_age: u64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::with_name("rusty-forum").required(false)))
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite:rusty_forum.db")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.access_token_age", 3000)?
            .add_source(Environment::with_prefix("FORUM").separator("__"))
            .build()?
            .try_deserialize()
    }
}
