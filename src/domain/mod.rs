//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `booking` - Enrollments, tickets, rooms, bookings and their rules

pub mod booking;
pub mod foundation;
