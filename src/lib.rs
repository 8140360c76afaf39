//! Event Booking - hotel room reservations for event attendees
//!
//! An authenticated attendee holding a paid, in-person, hotel-inclusive
//! ticket can view, create and move a room booking. Rooms accept bookings
//! only while below capacity.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
