//! Enrollment reader port.
//!
//! First link of the eligibility chain: user -> enrollment.

use crate::domain::booking::Enrollment;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Reader port for event enrollments.
#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find the enrollment owned by a user, with its address.
    ///
    /// Returns `None` if the user never enrolled.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError>;
}
