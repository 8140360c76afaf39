//! Tickets and their hotel eligibility rule.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{EnrollmentId, Timestamp, TicketId, TicketTypeId, ValidationError};

/// Payment status of a ticket.
///
/// Only `Paid` grants a room. Statuses this service does not act on are
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketStatus {
    /// Ticket set aside for the enrollment, payment still outstanding.
    Reserved,

    /// Ticket fully paid.
    Paid,

    /// Any other stored status.
    Other(String),
}

impl TicketStatus {
    /// Storage/wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
            TicketStatus::Other(status) => status,
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, TicketStatus::Paid)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ValidationError::empty_field("status")),
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Ok(TicketStatus::Other(other.to_string())),
        }
    }
}

/// Capability set of a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A purchased admission, loaded together with its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Why a ticket cannot be used to book a hotel room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ineligibility {
    /// Ticket has not been paid.
    NotPaid(TicketStatus),
    /// Remote attendance does not come with lodging.
    Remote,
    /// Ticket type excludes the hotel.
    HotelNotIncluded,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ineligibility::NotPaid(status) => write!(f, "ticket is {}, not PAID", status),
            Ineligibility::Remote => f.write_str("ticket is for remote attendance"),
            Ineligibility::HotelNotIncluded => f.write_str("ticket does not include hotel"),
        }
    }
}

impl Ticket {
    /// Checks the booking eligibility invariant:
    /// `status == PAID && !is_remote && includes_hotel`.
    pub fn hotel_eligibility(&self) -> Result<(), Ineligibility> {
        if !self.status.is_paid() {
            return Err(Ineligibility::NotPaid(self.status.clone()));
        }
        if self.ticket_type.is_remote {
            return Err(Ineligibility::Remote);
        }
        if !self.ticket_type.includes_hotel {
            return Err(Ineligibility::HotelNotIncluded);
        }
        Ok(())
    }
}
