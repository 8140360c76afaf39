//! PostgreSQL implementation of TicketReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use super::rows::{invalid_column, utc};
use crate::domain::booking::{Ticket, TicketStatus, TicketType};
use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, TicketId, TicketTypeId};
use crate::ports::TicketReader;

/// Reads tickets together with their type.
pub struct PostgresTicketReader {
    pool: PgPool,
}

impl PostgresTicketReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    type_id: i32,
    type_name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
    type_created_at: NaiveDateTime,
    type_updated_at: NaiveDateTime,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let status: TicketStatus = row.status.parse().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid Ticket.status: {}", e))
        })?;

        Ok(Ticket {
            id: TicketId::new(row.id).map_err(invalid_column("Ticket.id"))?,
            enrollment_id: EnrollmentId::new(row.enrollment_id)
                .map_err(invalid_column("Ticket.enrollmentId"))?,
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(row.type_id).map_err(invalid_column("TicketType.id"))?,
                name: row.type_name,
                price: row.price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
                created_at: utc(row.type_created_at),
                updated_at: utc(row.type_updated_at),
            },
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        })
    }
}

#[async_trait]
impl TicketReader for PostgresTicketReader {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        // status is a Postgres enum; read it as text
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT
                t.id, t."enrollmentId" AS enrollment_id, t.status::text AS status,
                t."createdAt" AS created_at, t."updatedAt" AS updated_at,
                tt.id AS type_id, tt.name AS type_name, tt.price,
                tt."isRemote" AS is_remote, tt."includesHotel" AS includes_hotel,
                tt."createdAt" AS type_created_at, tt."updatedAt" AS type_updated_at
            FROM "Ticket" t
            JOIN "TicketType" tt ON tt.id = t."ticketTypeId"
            WHERE t."enrollmentId" = $1
            ORDER BY t.id
            LIMIT 1
            "#,
        )
        .bind(enrollment_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch ticket", e))?;

        row.map(Ticket::try_from).transpose()
    }
}
