//! Booking-specific error types.
//!
//! Errors raised by the booking workflow. Every variant belongs to exactly
//! one kind of the booking error taxonomy.
//!
//! # HTTP Status Mapping
//!
//! | Error | Kind | HTTP Status |
//! |-------|------|-------------|
//! | EnrollmentNotFound | NotFound | 404 |
//! | TicketNotFound | NotFound | 404 |
//! | RoomNotFound | NotFound | 404 |
//! | BookingNotFound | NotFound | 404 |
//! | TicketNotEligible | Forbidden | 403 |
//! | RoomFull | Forbidden | 403 |
//! | NoActiveBooking | Forbidden | 403 |
//! | BookingNotOwned | Forbidden | 403 |
//! | ValidationFailed | BadRequest | 400 |
//! | Infrastructure | - | 500 |

use crate::domain::foundation::{BookingId, DomainError, ErrorCode, RoomId, UserId, ValidationError};

use super::Ineligibility;

/// Booking-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The user has no enrollment.
    EnrollmentNotFound(UserId),

    /// The user's enrollment has no ticket.
    TicketNotFound(UserId),

    /// The requested room does not exist.
    RoomNotFound(RoomId),

    /// The user has no booking to show.
    BookingNotFound(UserId),

    /// The user's ticket does not grant a hotel room.
    TicketNotEligible {
        user_id: UserId,
        reason: Ineligibility,
    },

    /// The room has as many bookings as its capacity.
    RoomFull(RoomId),

    /// An update was requested by a user holding no booking.
    NoActiveBooking(UserId),

    /// An update targeted a booking other than the one the user holds.
    BookingNotOwned {
        booking_id: BookingId,
        user_id: UserId,
    },

    /// Input failed validation.
    ValidationFailed {
        field: String,
        message: String,
    },

    /// Infrastructure error.
    Infrastructure(String),
}

impl BookingError {
    pub fn enrollment_not_found(user_id: UserId) -> Self {
        BookingError::EnrollmentNotFound(user_id)
    }

    pub fn ticket_not_found(user_id: UserId) -> Self {
        BookingError::TicketNotFound(user_id)
    }

    pub fn room_not_found(room_id: RoomId) -> Self {
        BookingError::RoomNotFound(room_id)
    }

    pub fn booking_not_found(user_id: UserId) -> Self {
        BookingError::BookingNotFound(user_id)
    }

    pub fn ticket_not_eligible(user_id: UserId, reason: Ineligibility) -> Self {
        BookingError::TicketNotEligible { user_id, reason }
    }

    pub fn room_full(room_id: RoomId) -> Self {
        BookingError::RoomFull(room_id)
    }

    pub fn no_active_booking(user_id: UserId) -> Self {
        BookingError::NoActiveBooking(user_id)
    }

    pub fn booking_not_owned(booking_id: BookingId, user_id: UserId) -> Self {
        BookingError::BookingNotOwned { booking_id, user_id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BookingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::EnrollmentNotFound(_) => ErrorCode::EnrollmentNotFound,
            BookingError::TicketNotFound(_) => ErrorCode::TicketNotFound,
            BookingError::RoomNotFound(_) => ErrorCode::RoomNotFound,
            BookingError::BookingNotFound(_) => ErrorCode::BookingNotFound,
            BookingError::TicketNotEligible { .. } => ErrorCode::TicketNotEligible,
            BookingError::RoomFull(_) => ErrorCode::RoomFull,
            BookingError::NoActiveBooking(_) => ErrorCode::NoActiveBooking,
            BookingError::BookingNotOwned { .. } => ErrorCode::Forbidden,
            BookingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BookingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            BookingError::EnrollmentNotFound(user_id) => {
                format!("No enrollment found for user {}", user_id)
            }
            BookingError::TicketNotFound(user_id) => {
                format!("No ticket found for user {}", user_id)
            }
            BookingError::RoomNotFound(room_id) => format!("Room {} not found", room_id),
            BookingError::BookingNotFound(user_id) => {
                format!("No booking found for user {}", user_id)
            }
            BookingError::TicketNotEligible { reason, .. } => {
                format!("Ticket does not allow hotel booking: {}", reason)
            }
            BookingError::RoomFull(room_id) => format!("Room {} is fully booked", room_id),
            BookingError::NoActiveBooking(user_id) => {
                format!("User {} has no booking to update", user_id)
            }
            BookingError::BookingNotOwned { booking_id, .. } => {
                format!("Booking {} does not belong to the current user", booking_id)
            }
            BookingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            BookingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Missing enrollment, ticket, room or booking.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BookingError::EnrollmentNotFound(_)
                | BookingError::TicketNotFound(_)
                | BookingError::RoomNotFound(_)
                | BookingError::BookingNotFound(_)
        )
    }

    /// Ineligible ticket, full room, or no owned booking to update.
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            BookingError::TicketNotEligible { .. }
                | BookingError::RoomFull(_)
                | BookingError::NoActiveBooking(_)
                | BookingError::BookingNotOwned { .. }
        )
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => BookingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => BookingError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<BookingError> for DomainError {
    fn from(err: BookingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::TicketStatus;

    fn user() -> UserId {
        UserId::new(5).unwrap()
    }

    fn room() -> RoomId {
        RoomId::new(3).unwrap()
    }

    #[test]
    fn lookup_failures_are_not_found() {
        assert!(BookingError::enrollment_not_found(user()).is_not_found());
        assert!(BookingError::ticket_not_found(user()).is_not_found());
        assert!(BookingError::room_not_found(room()).is_not_found());
        assert!(BookingError::booking_not_found(user()).is_not_found());
    }

    #[test]
    fn rule_violations_are_forbidden() {
        assert!(BookingError::ticket_not_eligible(user(), Ineligibility::Remote).is_forbidden());
        assert!(BookingError::room_full(room()).is_forbidden());
        assert!(BookingError::no_active_booking(user()).is_forbidden());
        assert!(
            BookingError::booking_not_owned(BookingId::new(1).unwrap(), user()).is_forbidden()
        );
    }

    #[test]
    fn kinds_are_disjoint() {
        let errors = [
            BookingError::enrollment_not_found(user()),
            BookingError::room_full(room()),
            BookingError::validation("roomId", "must be positive"),
            BookingError::infrastructure("db down"),
        ];
        for err in errors {
            assert!(!(err.is_not_found() && err.is_forbidden()), "{err:?}");
        }
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(BookingError::room_full(room()).code(), ErrorCode::RoomFull);
        assert_eq!(
            BookingError::ticket_not_eligible(user(), Ineligibility::NotPaid(TicketStatus::Reserved))
                .code(),
            ErrorCode::TicketNotEligible
        );
        assert_eq!(BookingError::infrastructure("x").code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn messages_include_identifiers() {
        assert!(BookingError::room_not_found(room()).message().contains('3'));
        let msg = BookingError::ticket_not_eligible(
            user(),
            Ineligibility::NotPaid(TicketStatus::Reserved),
        )
        .message();
        assert!(msg.contains("RESERVED"));
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: BookingError = DomainError::new(ErrorCode::DatabaseError, "timeout").into();
        assert!(matches!(err, BookingError::Infrastructure(ref m) if m.contains("timeout")));
    }

    #[test]
    fn validation_domain_errors_keep_their_field() {
        let err: BookingError = DomainError::validation("roomId", "must be positive").into();
        assert!(matches!(
            err,
            BookingError::ValidationFailed { ref field, .. } if field == "roomId"
        ));
    }
}
