//! Bearer Token Service
//!
//! Stateless tokens in compact JWS form (`header.payload.signature`,
//! base64url without padding) signed with HMAC-SHA256. The only claim
//! carried is the user id; nothing is stored server-side.

use std::sync::Arc;

use chrono::Utc;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

const ALGORITHM: &str = "HS256";

#[derive(Debug, Serialize, Deserialize)]
struct TokenHeader {
    alg: String,
    typ: String,
}

/// Claims carried by a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub id: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

impl TokenClaims {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}

/// Issues and verifies bearer tokens
#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for `user_id` valid for the configured TTL
    pub fn issue(&self, user_id: UserId) -> AuthResult<String> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    pub fn issue_at(&self, user_id: UserId, now: i64) -> AuthResult<String> {
        let header = TokenHeader {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
        };
        let claims = TokenClaims {
            id: user_id.get(),
            iat: now,
            exp: now + self.config.token_ttl_secs(),
        };

        let header = serde_json::to_vec(&header).map_err(|e| AuthError::Internal(e.to_string()))?;
        let claims = serde_json::to_vec(&claims).map_err(|e| AuthError::Internal(e.to_string()))?;

        let signing_input = format!("{}.{}", to_base64url(&header), to_base64url(&claims));
        let signature = hmac_sha256(&self.config.token_secret, signing_input.as_bytes());

        Ok(format!("{}.{}", signing_input, to_base64url(&signature)))
    }

    /// Verify a token and return its claims
    ///
    /// ## Errors
    /// `AuthError::InvalidToken` for any malformed, tampered or expired token
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> AuthResult<TokenClaims> {
        let mut parts = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::InvalidToken);
        };

        // Signature first; nothing else is trusted until it checks out
        let signature = from_base64url(signature).map_err(|_| AuthError::InvalidToken)?;
        let signing_input = &token[..header.len() + 1 + payload.len()];
        if !verify_hmac_sha256(&self.config.token_secret, signing_input.as_bytes(), &signature) {
            return Err(AuthError::InvalidToken);
        }

        let header: TokenHeader = decode_segment(header)?;
        if header.alg != ALGORITHM {
            return Err(AuthError::InvalidToken);
        }

        let claims: TokenClaims = decode_segment(payload)?;
        if claims.exp <= now {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}

fn decode_segment<T: serde::de::DeserializeOwned>(segment: &str) -> AuthResult<T> {
    let bytes = from_base64url(segment).map_err(|_| AuthError::InvalidToken)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidToken)
}
