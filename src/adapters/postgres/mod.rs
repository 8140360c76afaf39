//! PostgreSQL adapters - Database implementations for the persistence ports.
//!
//! - `PostgresEnrollmentReader` - enrollment with its address
//! - `PostgresTicketReader` - ticket with its type
//! - `PostgresRoomReader` - room with its current bookings
//! - `PostgresBookingRepository` - booking lookup, insert and room change
//! - `PostgresSessionStore` - live session lookup
//!
//! Tables and columns follow the camelCase naming of the shared event
//! schema, so every identifier is quoted. `TIMESTAMP` columns hold UTC.

mod booking_repository;
mod enrollment_reader;
mod room_reader;
mod rows;
mod session_store;
mod ticket_reader;

pub use booking_repository::PostgresBookingRepository;
pub use enrollment_reader::PostgresEnrollmentReader;
pub use room_reader::PostgresRoomReader;
pub use session_store::PostgresSessionStore;
pub use ticket_reader::PostgresTicketReader;
