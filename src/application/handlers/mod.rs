//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod booking;

pub use booking::{
    BookingGuard, GetBookingHandler, GetBookingQuery, GetBookingResult, InsertBookingCommand,
    InsertBookingHandler, InsertBookingResult, UpdateBookingCommand, UpdateBookingHandler,
    UpdateBookingResult,
};
