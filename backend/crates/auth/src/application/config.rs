//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC-signing bearer tokens (at least 32 bytes)
    pub token_secret: Vec<u8>,
    /// Bearer token lifetime (30 days)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl: Duration::from_secs(30 * 24 * 3600), // 30 days
            password_pepper: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    ///
    /// Tokens issued under a random secret do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
