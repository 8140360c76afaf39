//! Room reader port.

use crate::domain::booking::RoomWithBookings;
use crate::domain::foundation::{DomainError, RoomId};
use async_trait::async_trait;

/// Reader port for hotel rooms and their occupancy.
#[async_trait]
pub trait RoomReader: Send + Sync {
    /// Load a room together with every booking currently assigned to it.
    ///
    /// Returns `None` if the room does not exist. No lock or reservation is
    /// taken: the occupancy is a snapshot at read time.
    async fn find_with_bookings(
        &self,
        room_id: &RoomId,
    ) -> Result<Option<RoomWithBookings>, DomainError>;
}
