//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the booking workflow and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `EnrollmentReader` - user -> enrollment lookup
//! - `TicketReader` - enrollment -> ticket lookup
//! - `RoomReader` - room with its current bookings
//! - `BookingRepository` - booking lookup, creation and room reassignment
//!
//! ## Session Ports
//!
//! - `SessionValidator` - bearer token -> authenticated user
//! - `SessionStore` - live-session registry backing token validation

mod booking_repository;
mod enrollment_reader;
mod room_reader;
mod session_store;
mod session_validator;
mod ticket_reader;

pub use booking_repository::BookingRepository;
pub use enrollment_reader::EnrollmentReader;
pub use room_reader::RoomReader;
pub use session_store::SessionStore;
pub use session_validator::SessionValidator;
pub use ticket_reader::TicketReader;
