//! Server configuration from the environment

use anyhow::{Context, ensure};
use auth::AuthConfig;
use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Everything `main` needs to boot
#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let port = match env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        Ok(Self {
            database_url,
            max_connections,
            port,
            frontend_origins,
            auth: auth_config()?,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn auth_config() -> anyhow::Result<AuthConfig> {
    let password_pepper = env::var("AUTH_PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    let config = match env::var("AUTH_TOKEN_SECRET") {
        Ok(secret_b64) => {
            let token_secret = platform::crypto::from_base64(&secret_b64)
                .context("AUTH_TOKEN_SECRET must be base64")?;
            ensure!(
                token_secret.len() >= 32,
                "AUTH_TOKEN_SECRET must decode to at least 32 bytes"
            );
            AuthConfig {
                token_secret,
                ..AuthConfig::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("AUTH_TOKEN_SECRET must be set in production"),
    };

    Ok(AuthConfig {
        password_pepper,
        ..config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(DEFAULT_FRONTEND_ORIGINS),
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_origins("").is_empty());
    }
}
