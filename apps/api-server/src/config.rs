//! Application configuration loaded from environment variables.

use std::env;

use actix_web::http::Uri;
use anyhow::{Context, bail};
use quill_infra::DatabaseConfig;

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    /// Each entry is a `scheme://host[:port]` origin.
    List(Vec<String>),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
    pub cors_allowed_origins: CorsOrigins,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://posts.db?mode=rwc".to_string()),
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(5),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
        };

        let cors_allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw).context("invalid CORS_ALLOWED_ORIGINS")?,
            Err(_) => CorsOrigins::Any,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(3001),
            database,
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            cors_allowed_origins,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Format: `http://localhost:5173,https://blog.example.com`
///
/// An empty list or a `*` entry allows any origin.
fn parse_origins(raw: &str) -> anyhow::Result<CorsOrigins> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            let uri: Uri = origin
                .parse()
                .with_context(|| format!("malformed origin {origin:?}"))?;
            if uri.scheme().is_none() || uri.host().is_none() {
                bail!("origin {origin:?} must be scheme://host[:port]");
            }
            Ok(origin.to_string())
        })
        .collect::<anyhow::Result<Vec<String>>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" http://localhost:5173, ,https://blog.example.com,").unwrap(),
            CorsOrigins::List(vec![
                "http://localhost:5173".to_string(),
                "https://blog.example.com".to_string(),
            ])
        );
        assert_eq!(parse_origins("").unwrap(), CorsOrigins::Any);
    }

    #[test]
    fn test_wildcard_origin_allows_any() {
        assert_eq!(parse_origins("*").unwrap(), CorsOrigins::Any);
        assert_eq!(
            parse_origins("http://localhost:5173,*").unwrap(),
            CorsOrigins::Any
        );
    }

    #[test]
    fn test_malformed_origin_is_rejected() {
        for raw in ["not a url", "localhost:5173", "/posts", "http://ok.example,bad origin"] {
            let err = parse_origins(raw).unwrap_err();
            assert!(err.to_string().contains("origin"), "{raw}: {err}");
        }
    }
}
