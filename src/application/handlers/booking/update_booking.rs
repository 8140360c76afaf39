//! UpdateBookingHandler - Command handler for moving a booking to another room.

use std::sync::Arc;

use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, RoomId, UserId};
use crate::ports::BookingRepository;

use super::BookingGuard;

/// Command to move an existing booking to a different room.
#[derive(Debug, Clone)]
pub struct UpdateBookingCommand {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
}

/// Result of a successful room change. The id never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookingResult {
    pub booking_id: BookingId,
}

/// Handler for reassigning a booking's room.
///
/// The capacity check runs against the target room even when the user
/// already occupies it.
pub struct UpdateBookingHandler {
    guard: BookingGuard,
    bookings: Arc<dyn BookingRepository>,
}

impl UpdateBookingHandler {
    pub fn new(guard: BookingGuard, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { guard, bookings }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        cmd: UpdateBookingCommand,
    ) -> Result<UpdateBookingResult, BookingError> {
        tracing::debug!(
            booking_id = %cmd.booking_id,
            user_id = %cmd.user_id,
            room_id = %cmd.room_id,
            "changing booking room"
        );

        // 1. Ticket must grant a hotel room
        self.guard.verify_ticket_and_enrollment(&cmd.user_id).await?;

        // 2. Target room must have a free slot
        self.guard.verify_room_vacancy(&cmd.room_id).await?;

        // 3. User must hold this exact booking
        let Some(current) = self
            .bookings
            .find_by_id_and_user(&cmd.booking_id, &cmd.user_id)
            .await?
        else {
            return Err(self.ownership_error(&cmd).await);
        };

        // 4. Reassign
        let updated = self
            .bookings
            .update_room(&cmd.booking_id, &cmd.room_id, &cmd.user_id)
            .await?
            .ok_or_else(|| BookingError::booking_not_found(cmd.user_id))?;

        tracing::info!(
            booking_id = %updated.id,
            from_room = %current.room_id,
            to_room = %updated.room_id,
            "booking room changed"
        );

        Ok(UpdateBookingResult {
            booking_id: updated.id,
        })
    }

    /// Tells a user without any booking apart from one naming a booking
    /// they do not hold.
    async fn ownership_error(&self, cmd: &UpdateBookingCommand) -> BookingError {
        match self.bookings.find_by_user(&cmd.user_id).await {
            Err(e) => e.into(),
            Ok(None) => {
                tracing::warn!(user_id = %cmd.user_id, "update requested without a booking");
                BookingError::no_active_booking(cmd.user_id)
            }
            Ok(Some(_)) => {
                tracing::warn!(
                    user_id = %cmd.user_id,
                    requested = %cmd.booking_id,
                    "update targets a booking the user does not hold"
                );
                BookingError::booking_not_owned(cmd.booking_id, cmd.user_id)
            }
        }
    }
}
