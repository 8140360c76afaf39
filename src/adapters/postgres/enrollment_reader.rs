//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use super::rows::{invalid_column, utc};
use crate::domain::booking::{Address, Enrollment};
use crate::domain::foundation::{DomainError, EnrollmentId, UserId};
use crate::ports::EnrollmentReader;

/// Reads enrollments together with their address.
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Enrollment joined with its (optional) address.
#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
    name: String,
    cpf: String,
    birthday: NaiveDateTime,
    phone: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    address_id: Option<i32>,
    cep: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    number: Option<String>,
    neighborhood: Option<String>,
    address_detail: Option<String>,
}

impl TryFrom<EnrollmentRow> for Enrollment {
    type Error = DomainError;

    fn try_from(row: EnrollmentRow) -> Result<Self, Self::Error> {
        let address = row.address_id.map(|id| Address {
            id,
            cep: row.cep.unwrap_or_default(),
            street: row.street.unwrap_or_default(),
            city: row.city.unwrap_or_default(),
            state: row.state.unwrap_or_default(),
            number: row.number.unwrap_or_default(),
            neighborhood: row.neighborhood.unwrap_or_default(),
            address_detail: row.address_detail,
        });

        Ok(Enrollment {
            id: EnrollmentId::new(row.id).map_err(invalid_column("Enrollment.id"))?,
            user_id: UserId::new(row.user_id).map_err(invalid_column("Enrollment.userId"))?,
            name: row.name,
            cpf: row.cpf,
            birthday: utc(row.birthday),
            phone: row.phone,
            address,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        })
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT
                e.id, e."userId" AS user_id, e.name, e.cpf, e.birthday, e.phone,
                e."createdAt" AS created_at, e."updatedAt" AS updated_at,
                a.id AS address_id, a.cep, a.street, a.city, a.state, a.number,
                a.neighborhood, a."addressDetail" AS address_detail
            FROM "Enrollment" e
            LEFT JOIN "Address" a ON a."enrollmentId" = e.id
            WHERE e."userId" = $1
            ORDER BY a.id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch enrollment", e))?;

        row.map(Enrollment::try_from).transpose()
    }
}
