//! PostgreSQL implementation of SessionStore.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::ports::SessionStore;

/// Looks tokens up in the `"Session"` table.
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn is_active(&self, token: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM "Session" WHERE token = $1)"#)
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to look up session", e))
    }
}
