//! Event enrollment records.

use crate::domain::foundation::{EnrollmentId, Timestamp, UserId};

/// Postal address attached to an enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}

/// A user's registration for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: Timestamp,
    pub phone: String,
    pub address: Option<Address>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
