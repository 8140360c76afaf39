//! HTTP adapter for booking endpoints.
//!
//! - `GET /booking` - Get the caller's booking with its room
//! - `POST /booking` - Book a room
//! - `PUT /booking/:bookingId` - Move the caller's booking to another room

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{BookingApiError, BookingAppState};
pub use routes::booking_router;
