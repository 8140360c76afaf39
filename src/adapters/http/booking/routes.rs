//! Axum router configuration for booking endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{get_booking, insert_booking, update_booking, BookingAppState};

/// Create the booking API router.
///
/// # Routes (all require authentication)
/// - `GET /booking` - Get the caller's booking with its room
/// - `POST /booking` - Book a room
/// - `PUT /booking/:bookingId` - Move the caller's booking to another room
pub fn booking_router() -> Router<BookingAppState> {
    Router::new()
        .route("/booking", get(get_booking).post(insert_booking))
        .route("/booking/:bookingId", put(update_booking))
}
