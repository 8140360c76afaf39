//! Strongly-typed identifier value objects.
//!
//! Every record in the booking domain is keyed by a positive `SERIAL`
//! integer. Each entity gets its own newtype so a `RoomId` can never be
//! passed where a `BookingId` is expected.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates an id, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::out_of_range($field, 1, i32::MAX, value));
                }
                Ok(Self(value))
            }

            /// Creates an id from a wide integer (e.g. a JSON number).
            pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
                let narrowed = i32::try_from(value).map_err(|_| {
                    ValidationError::invalid_format($field, format!("{} does not fit in 32 bits", value))
                })?;
                Self::new(narrowed)
            }

            /// Returns the raw integer value.
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s.trim().parse().map_err(|_| {
                    ValidationError::invalid_format($field, format!("'{}' is not an integer", s))
                })?;
                Self::try_from_i64(value)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValidationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

numeric_id!(
    /// Identifier of an application user, as issued by the session layer.
    UserId,
    "userId"
);

numeric_id!(
    /// Identifier of an event enrollment.
    EnrollmentId,
    "enrollmentId"
);

numeric_id!(
    /// Identifier of a purchased ticket.
    TicketId,
    "ticketId"
);

numeric_id!(
    /// Identifier of a ticket type (its capability set).
    TicketTypeId,
    "ticketTypeId"
);

numeric_id!(
    /// Identifier of a hotel.
    HotelId,
    "hotelId"
);

numeric_id!(
    /// Identifier of a hotel room.
    RoomId,
    "roomId"
);

numeric_id!(
    /// Identifier of a room booking.
    BookingId,
    "bookingId"
);
