//! Booking records and their room-embedding view.

use crate::domain::foundation::{BookingId, RoomId, Timestamp, UserId};

use super::Room;

/// Association of a user to a room for the event duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Booking {
    /// Whether this booking belongs to the given user.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// A booking with its room embedded, as returned to the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWithRoom {
    pub booking: Booking,
    pub room: Room,
}
