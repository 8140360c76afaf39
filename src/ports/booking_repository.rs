//! Booking repository port.
//!
//! Defines the contract for reading and writing bookings.
//!
//! # Design
//!
//! - **Lookup by owner**: each user is expected to hold at most one booking;
//!   this is a workflow convention, not a storage constraint.
//! - **Lookup by id and owner**: the ownership check before a room change.
//! - **Room reassignment**: the only mutation after creation.
//!
//! # Example
//!
//! ```ignore
//! async fn move_user(
//!     repo: &dyn BookingRepository,
//!     user_id: &UserId,
//!     room_id: &RoomId,
//! ) -> Result<Option<Booking>, DomainError> {
//!     let Some(current) = repo.find_by_user(user_id).await? else {
//!         return Ok(None);
//!     };
//!     repo.update_room(&current.booking.id, room_id, user_id).await
//! }
//! ```

use crate::domain::booking::{Booking, BookingWithRoom};
use crate::domain::foundation::{BookingId, DomainError, RoomId, UserId};
use async_trait::async_trait;

/// Repository port for bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find the booking held by a user, with its room embedded.
    ///
    /// Returns `None` if the user holds no booking. Should more than one
    /// exist, the oldest (lowest id) is returned.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError>;

    /// Find a booking by id, only if it belongs to `user_id`.
    ///
    /// Returns `None` when the booking does not exist or has another owner.
    async fn find_by_id_and_user(
        &self,
        booking_id: &BookingId,
        user_id: &UserId,
    ) -> Result<Option<Booking>, DomainError>;

    /// Create a booking linking a user to a room.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (including a dangling room id)
    async fn create(&self, user_id: &UserId, room_id: &RoomId) -> Result<Booking, DomainError>;

    /// Reassign an existing booking to another room, reaffirming its owner.
    ///
    /// Returns `None` if no booking with `booking_id` exists.
    async fn update_room(
        &self,
        booking_id: &BookingId,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> Result<Option<Booking>, DomainError>;
}
