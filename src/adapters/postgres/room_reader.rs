//! PostgreSQL implementation of RoomReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{BookingRow, RoomRow};
use crate::domain::booking::{Booking, Room, RoomWithBookings};
use crate::domain::foundation::{DomainError, RoomId};
use crate::ports::RoomReader;

/// Reads a room and the bookings occupying it.
///
/// The two reads are not wrapped in a transaction.
pub struct PostgresRoomReader {
    pool: PgPool,
}

impl PostgresRoomReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomReader for PostgresRoomReader {
    async fn find_with_bookings(
        &self,
        room_id: &RoomId,
    ) -> Result<Option<RoomWithBookings>, DomainError> {
        let room_row: Option<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, capacity, "hotelId", "createdAt", "updatedAt"
            FROM "Room"
            WHERE id = $1
            "#,
        )
        .bind(room_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch room", e))?;

        let Some(room_row) = room_row else {
            return Ok(None);
        };

        let booking_rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, "userId", "roomId", "createdAt", "updatedAt"
            FROM "Booking"
            WHERE "roomId" = $1
            ORDER BY id
            "#,
        )
        .bind(room_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch room bookings", e))?;

        let bookings = booking_rows
            .into_iter()
            .map(Booking::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(RoomWithBookings {
            room: Room::try_from(room_row)?,
            bookings,
        }))
    }
}
