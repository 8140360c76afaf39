//! Signed session-token adapter.
//!
//! Implements the `SessionValidator` port for HS256 JWTs. A token is accepted
//! when:
//!
//! 1. Its signature verifies against the configured secret
//! 2. Its `exp` claim, if present, is in the future
//! 3. Its `userId` claim is a positive integer
//! 4. The session store still knows the token (signing out revokes it)
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use event_booking::adapters::auth::JwtSessionValidator;
//! use event_booking::adapters::postgres::PostgresSessionStore;
//!
//! let store = Arc::new(PostgresSessionStore::new(pool));
//! let validator = JwtSessionValidator::new(&config.auth.jwt_secret, store);
//! let user = validator.validate("eyJ...").await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionStore, SessionValidator};

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// The user the session was issued to.
    pub user_id: i64,

    /// Expiry timestamp (Unix epoch seconds). Tokens without one never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Validates HS256 session tokens against the session store.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Arc<dyn SessionStore>,
}

impl JwtSessionValidator {
    pub fn new(secret: &SecretString, sessions: Arc<dyn SessionStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional; it is still checked when present.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token signature mismatch");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::try_from_i64(claims.user_id).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.user_id);
            AuthError::InvalidToken
        })?;

        let active = self.sessions.is_active(token).await.map_err(|e| {
            tracing::error!("Session lookup failed: {}", e);
            AuthError::service_unavailable(e.message)
        })?;

        if !active {
            tracing::debug!(user_id = %user_id, "Token has no live session");
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser::new(user_id))
    }
}
