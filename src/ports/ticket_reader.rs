//! Ticket reader port.
//!
//! Second link of the eligibility chain: enrollment -> ticket.

use crate::domain::booking::Ticket;
use crate::domain::foundation::{DomainError, EnrollmentId};
use async_trait::async_trait;

/// Reader port for purchased tickets.
#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Find the ticket bought for an enrollment, with its ticket type.
    ///
    /// Returns `None` if no ticket exists for the enrollment.
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn TicketReader) {}
    }
}
