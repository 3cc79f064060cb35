//! Environment-backed configuration

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_JWT_SECRET: &str = "dev-jwt-secret-change-me";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60 * 8;

/// Server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// SQLite database path; tasks and users stay in memory when unset
    pub database_path: Option<PathBuf>,
    pub jwt_secret: String,
    pub token_ttl_seconds: i64,
    /// Static shared secret for the x-api-key check; disabled when unset
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("TAREAS_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let database_path = std::env::var("TAREAS_DB_PATH")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);
        let jwt_secret = std::env::var("TAREAS_JWT_SECRET")
            .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let token_ttl_seconds = std::env::var("TAREAS_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);
        let api_key = std::env::var("TAREAS_API_KEY")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            port,
            database_path,
            jwt_secret,
            token_ttl_seconds,
            api_key,
        }
    }
}
