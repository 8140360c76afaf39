//! HTTP adapters - REST API implementations.
//!
//! - `booking` - Booking endpoints
//! - `health` - Liveness probe
//! - `middleware` - Bearer-token authentication

pub mod booking;
pub mod health;
pub mod middleware;

use axum::Router;

pub use booking::{booking_router, BookingAppState};
pub use health::health_router;
pub use middleware::{auth_middleware, AuthState};

/// Assembles the API: authenticated booking routes plus the open health probe.
///
/// Cross-cutting layers (tracing, timeout, CORS) are added by the caller.
pub fn api_router(state: BookingAppState, auth: AuthState) -> Router {
    let bookings = booking_router()
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state);

    Router::new().merge(health_router()).merge(bookings)
}
