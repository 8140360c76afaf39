//! Session store port.
//!
//! A signed token alone is not enough to authenticate: the token must also
//! be registered as a live session (sign-out deletes it).

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Lookup of issued session tokens.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns `true` if `token` belongs to a live session.
    async fn is_active(&self, token: &str) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
