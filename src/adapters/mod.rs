//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session token validation (signed JWT, mock)
//! - `http` - axum routes, handlers and middleware
//! - `memory` - In-memory persistence for tests
//! - `postgres` - PostgreSQL persistence via sqlx

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
