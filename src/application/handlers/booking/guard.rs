//! Eligibility and room-capacity checks shared by the booking handlers.

use std::sync::Arc;

use crate::domain::booking::{BookingError, RoomWithBookings, Ticket};
use crate::domain::foundation::{RoomId, UserId};
use crate::ports::{EnrollmentReader, RoomReader, TicketReader};

/// Verifies that a user may hold a room and that a room can take one more
/// guest.
///
/// Both checks are plain reads. Nothing is locked between a check and the
/// write that follows it.
#[derive(Clone)]
pub struct BookingGuard {
    enrollments: Arc<dyn EnrollmentReader>,
    tickets: Arc<dyn TicketReader>,
    rooms: Arc<dyn RoomReader>,
}

impl BookingGuard {
    pub fn new(
        enrollments: Arc<dyn EnrollmentReader>,
        tickets: Arc<dyn TicketReader>,
        rooms: Arc<dyn RoomReader>,
    ) -> Self {
        Self {
            enrollments,
            tickets,
            rooms,
        }
    }

    /// Loads the user's ticket and requires it to grant a hotel room.
    ///
    /// # Errors
    ///
    /// - `EnrollmentNotFound` / `TicketNotFound` when a lookup comes back empty
    /// - `TicketNotEligible` when the ticket is unpaid, remote, or excludes lodging
    /// - `Infrastructure` when a reader fails
    pub async fn verify_ticket_and_enrollment(
        &self,
        user_id: &UserId,
    ) -> Result<Ticket, BookingError> {
        let enrollment = self
            .enrollments
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| BookingError::enrollment_not_found(*user_id))?;

        let ticket = self
            .tickets
            .find_by_enrollment(&enrollment.id)
            .await?
            .ok_or_else(|| BookingError::ticket_not_found(*user_id))?;

        if let Err(reason) = ticket.hotel_eligibility() {
            tracing::warn!(user_id = %user_id, ticket_id = %ticket.id, %reason, "ticket not eligible for hotel booking");
            return Err(BookingError::ticket_not_eligible(*user_id, reason));
        }

        Ok(ticket)
    }

    /// Loads the room with its bookings and requires a free slot.
    pub async fn verify_room_vacancy(
        &self,
        room_id: &RoomId,
    ) -> Result<RoomWithBookings, BookingError> {
        let room = self
            .rooms
            .find_with_bookings(room_id)
            .await?
            .ok_or_else(|| BookingError::room_not_found(*room_id))?;

        if !room.has_vacancy() {
            tracing::warn!(
                room_id = %room_id,
                capacity = room.room.capacity,
                occupancy = room.occupancy(),
                "room is fully booked"
            );
            return Err(BookingError::room_full(*room_id));
        }

        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::booking::test_fixtures::{guard_over, room, user, MockBookingWorld};
    use crate::domain::booking::{Ineligibility, TicketStatus};

    // ════════════════════════════════════════════════════════════════════════════
    // Ticket and Enrollment
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn eligible_user_gets_their_ticket() {
        let world = Arc::new(MockBookingWorld::new().with_eligible_user(1));
        let guard = guard_over(&world);

        let ticket = guard.verify_ticket_and_enrollment(&user(1)).await.unwrap();

        assert_eq!(ticket.status, TicketStatus::Paid);
    }

    #[tokio::test]
    async fn user_without_enrollment_is_not_found() {
        let world = Arc::new(MockBookingWorld::new());
        let guard = guard_over(&world);

        let result = guard.verify_ticket_and_enrollment(&user(1)).await;

        assert!(matches!(result, Err(BookingError::EnrollmentNotFound(_))));
    }

    #[tokio::test]
    async fn enrollment_without_ticket_is_not_found() {
        let world = Arc::new(MockBookingWorld::new().with_enrollment(1));
        let guard = guard_over(&world);

        let result = guard.verify_ticket_and_enrollment(&user(1)).await;

        assert!(matches!(result, Err(BookingError::TicketNotFound(_))));
    }

    #[tokio::test]
    async fn reserved_ticket_is_forbidden() {
        let world = Arc::new(MockBookingWorld::new().with_ticket(1, TicketStatus::Reserved, false, true));
        let guard = guard_over(&world);

        let result = guard.verify_ticket_and_enrollment(&user(1)).await;

        assert_eq!(
            result.unwrap_err(),
            BookingError::ticket_not_eligible(user(1), Ineligibility::NotPaid(TicketStatus::Reserved))
        );
    }

    #[tokio::test]
    async fn remote_ticket_is_forbidden() {
        let world = Arc::new(MockBookingWorld::new().with_ticket(1, TicketStatus::Paid, true, true));
        let guard = guard_over(&world);

        let err = guard.verify_ticket_and_enrollment(&user(1)).await.unwrap_err();

        assert!(err.is_forbidden());
    }

    #[tokio::test]
    async fn ticket_without_hotel_is_forbidden() {
        let world = Arc::new(MockBookingWorld::new().with_ticket(1, TicketStatus::Paid, false, false));
        let guard = guard_over(&world);

        let err = guard.verify_ticket_and_enrollment(&user(1)).await.unwrap_err();

        assert!(matches!(
            err,
            BookingError::TicketNotEligible { reason: Ineligibility::HotelNotIncluded, .. }
        ));
    }

    #[tokio::test]
    async fn reader_failure_is_infrastructure() {
        let world = Arc::new(MockBookingWorld::failing_reads());
        let guard = guard_over(&world);

        let result = guard.verify_ticket_and_enrollment(&user(1)).await;

        assert!(matches!(result, Err(BookingError::Infrastructure(_))));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Room Vacancy
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn room_with_space_passes() {
        let world = Arc::new(MockBookingWorld::new().with_room(1, 2).with_booking(9, 1));
        let guard = guard_over(&world);

        let loaded = guard.verify_room_vacancy(&room(1)).await.unwrap();

        assert_eq!(loaded.occupancy(), 1);
    }

    #[tokio::test]
    async fn missing_room_is_not_found() {
        let world = Arc::new(MockBookingWorld::new());
        let guard = guard_over(&world);

        let result = guard.verify_room_vacancy(&room(7)).await;

        assert_eq!(result.unwrap_err(), BookingError::room_not_found(room(7)));
    }

    #[tokio::test]
    async fn full_room_is_forbidden() {
        let world = Arc::new(
            MockBookingWorld::new()
                .with_room(1, 2)
                .with_booking(8, 1)
                .with_booking(9, 1),
        );
        let guard = guard_over(&world);

        let result = guard.verify_room_vacancy(&room(1)).await;

        assert_eq!(result.unwrap_err(), BookingError::room_full(room(1)));
    }
}
