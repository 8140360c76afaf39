//! InsertBookingHandler - Command handler for reserving a room.

use std::sync::Arc;

use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, RoomId, UserId};
use crate::ports::BookingRepository;

use super::BookingGuard;

/// Command to book a room for a user.
#[derive(Debug, Clone)]
pub struct InsertBookingCommand {
    pub user_id: UserId,
    pub room_id: RoomId,
}

/// Result of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertBookingResult {
    pub booking_id: BookingId,
}

/// Handler for creating bookings.
///
/// A user already holding a booking is not rejected here.
pub struct InsertBookingHandler {
    guard: BookingGuard,
    bookings: Arc<dyn BookingRepository>,
}

impl InsertBookingHandler {
    pub fn new(guard: BookingGuard, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { guard, bookings }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        cmd: InsertBookingCommand,
    ) -> Result<InsertBookingResult, BookingError> {
        tracing::debug!(user_id = %cmd.user_id, room_id = %cmd.room_id, "booking room");

        // 1. Ticket must grant a hotel room
        self.guard.verify_ticket_and_enrollment(&cmd.user_id).await?;

        // 2. Room must have a free slot
        self.guard.verify_room_vacancy(&cmd.room_id).await?;

        // 3. Create
        let booking = self.bookings.create(&cmd.user_id, &cmd.room_id).await?;

        tracing::info!(
            booking_id = %booking.id,
            user_id = %cmd.user_id,
            room_id = %cmd.room_id,
            "booking created"
        );

        Ok(InsertBookingResult {
            booking_id: booking.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::booking::test_fixtures::{guard_over, room, user, MockBookingWorld};
    use crate::domain::booking::TicketStatus;

    fn handler(world: &Arc<MockBookingWorld>) -> InsertBookingHandler {
        InsertBookingHandler::new(guard_over(world), world.clone())
    }

    fn command(user_id: i32, room_id: i32) -> InsertBookingCommand {
        InsertBookingCommand {
            user_id: user(user_id),
            room_id: room(room_id),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn eligible_user_books_empty_room() {
        let world = Arc::new(MockBookingWorld::new().with_eligible_user(1).with_room(3, 2));

        let result = handler(&world).handle(command(1, 3)).await.unwrap();

        let stored = world.bookings();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, result.booking_id);
        assert_eq!(stored[0].user_id, user(1));
        assert_eq!(stored[0].room_id, room(3));
    }

    #[tokio::test]
    async fn last_free_slot_can_be_taken() {
        let world = Arc::new(
            MockBookingWorld::new()
                .with_eligible_user(1)
                .with_room(3, 2)
                .with_booking(9, 3),
        );

        let result = handler(&world).handle(command(1, 3)).await;

        assert!(result.is_ok());
        assert_eq!(world.bookings().len(), 2);
    }

    #[tokio::test]
    async fn user_with_existing_booking_can_book_again() {
        let world = Arc::new(
            MockBookingWorld::new()
                .with_eligible_user(1)
                .with_room(3, 2)
                .with_room(4, 2)
                .with_booking(1, 3),
        );

        let result = handler(&world).handle(command(1, 4)).await;

        assert!(result.is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn full_room_is_forbidden() {
        let world = Arc::new(
            MockBookingWorld::new()
                .with_eligible_user(1)
                .with_room(3, 2)
                .with_booking(8, 3)
                .with_booking(9, 3),
        );

        let err = handler(&world).handle(command(1, 3)).await.unwrap_err();

        assert_eq!(err, BookingError::room_full(room(3)));
        assert_eq!(world.bookings().len(), 2);
    }

    #[tokio::test]
    async fn reserved_ticket_is_forbidden() {
        let world = Arc::new(
            MockBookingWorld::new()
                .with_ticket(1, TicketStatus::Reserved, false, true)
                .with_room(3, 2),
        );

        let err = handler(&world).handle(command(1, 3)).await.unwrap_err();

        assert!(err.is_forbidden());
        assert!(world.bookings().is_empty());
    }

    #[tokio::test]
    async fn missing_room_is_not_found() {
        let world = Arc::new(MockBookingWorld::new().with_eligible_user(1));

        let err = handler(&world).handle(command(1, 3)).await.unwrap_err();

        assert_eq!(err, BookingError::room_not_found(room(3)));
    }

    #[tokio::test]
    async fn eligibility_is_checked_before_the_room() {
        let world = Arc::new(MockBookingWorld::new());

        let err = handler(&world).handle(command(1, 3)).await.unwrap_err();

        assert!(matches!(err, BookingError::EnrollmentNotFound(_)));
    }

    #[tokio::test]
    async fn write_failure_propagates() {
        let world = Arc::new(
            MockBookingWorld::new()
                .with_eligible_user(1)
                .with_room(3, 2)
                .failing_writes(),
        );

        let err = handler(&world).handle(command(1, 3)).await.unwrap_err();

        assert!(matches!(err, BookingError::Infrastructure(_)));
    }
}
