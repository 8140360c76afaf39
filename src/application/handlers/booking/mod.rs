//! Booking handlers.
//!
//! ## Commands
//! - Booking a room for an eligible user
//! - Moving a user's booking to another room
//!
//! ## Queries
//! - Get the caller's booking with its room
//!
//! Every handler first runs [`BookingGuard::verify_ticket_and_enrollment`];
//! the commands then run [`BookingGuard::verify_room_vacancy`] on the target
//! room before writing.

mod get_booking;
mod guard;
mod insert_booking;
mod update_booking;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use guard::BookingGuard;

// Commands
pub use insert_booking::{InsertBookingCommand, InsertBookingHandler, InsertBookingResult};
pub use update_booking::{UpdateBookingCommand, UpdateBookingHandler, UpdateBookingResult};

// Queries
pub use get_booking::{GetBookingHandler, GetBookingQuery, GetBookingResult};
