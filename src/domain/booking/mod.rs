//! Booking domain - enrollments, tickets, rooms and bookings.
//!
//! Holds the records the booking workflow reasons about and the two
//! business rules it enforces:
//!
//! - a ticket qualifies for a room only when it is paid, in-person and
//!   hotel-inclusive ([`Ticket::hotel_eligibility`]);
//! - a room is bookable only while its occupancy is below its capacity
//!   ([`RoomWithBookings::has_vacancy`]).

mod enrollment;
mod errors;
mod reservation;
mod room;
mod ticket;

pub use enrollment::{Address, Enrollment};
pub use errors::BookingError;
pub use reservation::{Booking, BookingWithRoom};
pub use room::{Room, RoomWithBookings};
pub use ticket::{Ineligibility, Ticket, TicketStatus, TicketType};
