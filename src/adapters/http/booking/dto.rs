//! HTTP DTOs for booking endpoints.
//!
//! Field names are camelCase on the wire. The booking view embeds its room
//! under a capitalised `Room` key.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingWithRoom, Room};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /booking` and `PUT /booking/:bookingId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Target room. Range is checked when converting to `RoomId`.
    pub room_id: i64,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Returned by insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.as_i32(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.as_i32(),
            created_at: room.created_at.to_rfc3339(),
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

/// The caller's booking with its room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "Room")]
    pub room: RoomResponse,
}

impl From<BookingWithRoom> for BookingResponse {
    fn from(view: BookingWithRoom) -> Self {
        let booking = view.booking;
        Self {
            id: booking.id.as_i32(),
            user_id: booking.user_id.as_i32(),
            room_id: booking.room_id.as_i32(),
            created_at: booking.created_at.to_rfc3339(),
            updated_at: booking.updated_at.to_rfc3339(),
            room: RoomResponse::from(view.room),
        }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
