//! GetBookingHandler - Query handler for the caller's own booking.

use std::sync::Arc;

use crate::domain::booking::{BookingError, BookingWithRoom};
use crate::domain::foundation::UserId;
use crate::ports::BookingRepository;

use super::BookingGuard;

/// Query to get a user's booking.
#[derive(Debug, Clone)]
pub struct GetBookingQuery {
    pub user_id: UserId,
}

/// Result of a successful booking query.
pub type GetBookingResult = BookingWithRoom;

/// Handler for retrieving the booking a user holds.
///
/// The user must hold a hotel-eligible ticket before their booking is shown.
pub struct GetBookingHandler {
    guard: BookingGuard,
    bookings: Arc<dyn BookingRepository>,
}

impl GetBookingHandler {
    pub fn new(guard: BookingGuard, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { guard, bookings }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, query: GetBookingQuery) -> Result<GetBookingResult, BookingError> {
        tracing::debug!(user_id = %query.user_id, "loading booking");

        self.guard.verify_ticket_and_enrollment(&query.user_id).await?;

        self.bookings
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| BookingError::booking_not_found(query.user_id))
    }
}
